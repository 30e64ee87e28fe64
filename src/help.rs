// Copyright 2015 Axel Rasmussen
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::argument::Argument;
use crate::error::*;
use crate::parser::Parser;
use std::io::Write;

/// Writes program-level help to the given sink: the usage string, the help
/// string, and the formatted listing of registered arguments. The library
/// never picks an output stream itself; callers pass whatever sink they want
/// this text on.
pub fn print_program_help<W: Write>(f: &mut W, parser: &Parser) -> Result<()> {
    if !parser.get_usage().is_empty() {
        f.write_fmt(format_args!("{}\n", parser.get_usage()))?;
    }
    if !parser.get_help().is_empty() {
        f.write_fmt(format_args!("{}\n", parser.get_help()))?;
    }
    f.write_fmt(format_args!("{}", parser))?;
    Ok(())
}

/// Writes help for one specific argument to the given sink, followed by
/// program-level help.
pub fn print_argument_help<W: Write>(f: &mut W, parser: &Parser, argument: &Argument) -> Result<()> {
    f.write_fmt(format_args!("{}\n", argument.get_help()))?;
    print_program_help(f, parser)
}
