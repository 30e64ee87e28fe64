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

#![deny(
    anonymous_parameters,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces
)]
#![warn(bare_trait_objects, unreachable_pub, unused_qualifications)]

//! simpleargs is a small library for parsing command-line arguments. Callers
//! declare the arguments their program accepts - keyword arguments with short
//! and long names, or positional arguments with a bare name - along with
//! value arity, requiredness, defaults, and help text, and then hand the raw
//! argument vector to a [`Parser`]. The parser normalizes the vector
//! (expanding `name=value` assignments and concatenated short flags like
//! "-abc"), matches tokens against the declared arguments, validates the
//! result, and resolves help requests. It deals purely in strings and raises
//! structured errors; exit codes, output streams, and type coercion belong to
//! the calling application.

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

/// argument defines the Argument record describing a single declared
/// command-line argument, along with its parse-time state.
pub mod argument;
/// error defines the error type shared by registration and parsing.
pub mod error;
/// help renders program and per-argument help text to caller-provided sinks.
pub mod help;
/// parser implements the parsing engine: tokenization, matching, and
/// validation.
pub mod parser;
/// registry maps argument names to registered Argument records.
pub mod registry;

#[cfg(test)]
mod tests;

// Re-export the most commonly used symbols, to allow using this library with
// just one "use".

pub use crate::argument::{Argument, ArgumentKind};
pub use crate::error::{Error, Result};
pub use crate::parser::Parser;
pub use crate::registry::Registry;
