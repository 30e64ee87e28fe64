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
use crate::help;
use crate::registry::Registry;
use std::fmt;
use std::io::Write;

/// HelpRequest records which kind of help the user asked for on the command
/// line: help for the program as a whole, or help for one specific argument.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum HelpRequest {
    Program,
    Argument(usize),
}

/// Parser is responsible for parsing the command-line arguments passed to the
/// application. Arguments are registered with [`Parser::add`] before parsing;
/// [`Parser::parse`] then rewrites the raw argument vector into a normalized
/// token stream (expanding `=`-assignments and concatenated short flags),
/// matches tokens against the registered arguments, and validates presence
/// and value cardinality. After a successful parse the populated Arguments
/// are available through [`Parser::argument`].
///
/// A Parser is intended to parse one argument vector, once. A failed parse
/// leaves the registered arguments partially populated; do not call parse
/// again on the same Parser afterwards.
pub struct Parser {
    registry: Registry,
    usage: String,
    help: String,
    help_enabled: bool,
    help_request: Option<HelpRequest>,
}

impl Parser {
    /// Constructs a new Parser with no registered arguments, empty usage and
    /// help strings, and automatic help interception enabled.
    pub fn new() -> Parser {
        Parser {
            registry: Registry::new(),
            usage: String::new(),
            help: String::new(),
            help_enabled: true,
            help_request: None,
        }
    }

    /// Sets the program usage string, printed as the first line of program
    /// help.
    pub fn set_usage(&mut self, usage: &str) -> &mut Parser {
        self.usage = usage.to_owned();
        self
    }

    /// Sets the program help string, printed after the usage string.
    pub fn set_help(&mut self, help: &str) -> &mut Parser {
        self.help = help.to_owned();
        self
    }

    /// Disables the automatic help short-circuit for this Parser. Help tokens
    /// are still detected and recorded (see
    /// [`Parser::is_program_help_requested`] and
    /// [`Parser::is_argument_help_requested`]), but parsing proceeds through
    /// validation as if they were not there.
    pub fn disable_help(&mut self) -> &mut Parser {
        self.help_enabled = false;
        self
    }

    /// Registers the given Argument. Returns an error if any of its names is
    /// invalid or collides with a previously registered argument.
    pub fn add(&mut self, argument: Argument) -> Result<()> {
        self.registry.add(argument)
    }

    /// Returns the registered Argument with the given short, long, or
    /// positional name (leading hyphens are ignored), or the absent sentinel
    /// if there is no such argument.
    pub fn argument(&self, name: &str) -> &Argument {
        self.registry.lookup(name)
    }

    /// Returns an Iterator over the registered Arguments, in registration
    /// order.
    pub fn arguments(&self) -> impl Iterator<Item = &Argument> {
        self.registry.iter()
    }

    /// Returns the program usage string.
    pub fn get_usage(&self) -> &str {
        self.usage.as_str()
    }

    /// Returns the program help string.
    pub fn get_help(&self) -> &str {
        self.help.as_str()
    }

    /// Returns true if the user requested program-level help.
    pub fn is_program_help_requested(&self) -> bool {
        match self.help_request {
            Some(HelpRequest::Program) => true,
            _ => false,
        }
    }

    /// Returns true if the user requested help for one specific argument.
    pub fn is_argument_help_requested(&self) -> bool {
        match self.help_request {
            Some(HelpRequest::Argument(_)) => true,
            _ => false,
        }
    }

    /// Returns the Argument the user requested help for, or the absent
    /// sentinel if no argument-scoped help was requested.
    pub fn help_requested_argument(&self) -> &Argument {
        match self.help_request {
            Some(HelpRequest::Argument(index)) => self.registry.argument(index),
            _ => self.registry.absent(),
        }
    }

    /// Parses the given raw argument vector against the registered arguments.
    ///
    /// The vector is first normalized: `name=value` assignments are split
    /// into two tokens, and concatenated short flags (e.g. "-abc") are
    /// expanded into their constituents. Help tokens ("-h" / "--help") are
    /// detected during normalization; unless help is disabled, observing one
    /// short-circuits parsing successfully, and the caller should consult
    /// [`Parser::is_program_help_requested`] and friends. Otherwise the
    /// normalized stream is validated: presence is marked, required arguments
    /// are checked, values are harvested (detecting unrecognized tokens), and
    /// required values are checked.
    ///
    /// Errors abort parsing immediately; arguments already marked present or
    /// given values stay that way.
    pub fn parse(&mut self, args: &[String]) -> Result<()> {
        let (tokens, help_request) = self.tokenize(args);

        if let Some(request) = help_request {
            self.help_request = Some(request);
            if let HelpRequest::Argument(index) = request {
                self.registry.argument_mut(index).set_help_requested();
            }
            if self.help_enabled {
                return Ok(());
            }
        }

        self.mark_present(&tokens);
        self.check_required_arguments()?;
        self.harvest_values(&tokens)?;
        self.check_required_values()
    }

    /// Writes the requested help text to the given sink: the argument's help
    /// followed by program help if argument-scoped help was requested, or
    /// program help alone if program-level help was requested. Returns true
    /// if anything was written.
    pub fn print_help<W: Write>(&self, f: &mut W) -> Result<bool> {
        match self.help_request {
            Some(HelpRequest::Argument(index)) => {
                help::print_argument_help(f, self, self.registry.argument(index))?;
                Ok(true)
            }
            Some(HelpRequest::Program) => {
                help::print_program_help(f, self)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Rewrites the raw argument vector into a normalized token stream, built
    /// as a brand-new sequence in one forward pass. Each raw token is, in
    /// priority order: emitted as-is if it is exactly a registered name;
    /// consumed as a help marker; split in two if it is a `name=value`
    /// assignment; expanded if it is a concatenation of short names; or
    /// emitted unchanged (a free value, or an unrecognized argument caught
    /// later during value harvesting).
    ///
    /// Help attribution uses the normalized stream: a help marker belongs to
    /// the most recently emitted token if that token is a recognized argument
    /// name, and to the program otherwise. The first request observed wins.
    fn tokenize(&self, args: &[String]) -> (Vec<String>, Option<HelpRequest>) {
        let mut tokens: Vec<String> = vec![];
        let mut help_request: Option<HelpRequest> = None;

        for raw in args {
            if self.registry.is_known(raw) {
                tokens.push(raw.clone());
            } else if raw == "-h" || raw == "--help" {
                let request = match tokens.last().and_then(|t| self.registry.find(t)) {
                    Some(index) => HelpRequest::Argument(index),
                    None => HelpRequest::Program,
                };
                debug!("observed help token '{}': {:?}", raw, request);
                help_request = help_request.or(Some(request));
            } else if let Some((name, value)) = self.split_assignment(raw) {
                tokens.push(name);
                tokens.push(value);
            } else if let Some(expanded) = self.expand_concatenated(raw) {
                tokens.extend(expanded);
            } else {
                tokens.push(raw.clone());
            }
        }

        (tokens, help_request)
    }

    /// Splits a `name=value` token into its name and value, if the name is a
    /// registered argument and the value is nonempty. Values containing a
    /// further '=' are not treated as assignments.
    fn split_assignment(&self, token: &str) -> Option<(String, String)> {
        let equals = token.find('=')?;
        let (name, value) = (&token[..equals], &token[equals + 1..]);
        if value.is_empty() || value.contains('=') || !self.registry.is_known(name) {
            return None;
        }
        debug!("split assignment '{}' into '{}' '{}'", token, name, value);
        Some((name.to_owned(), value.to_owned()))
    }

    /// Attempts to expand a token like "-abc" into the short-name tokens it
    /// concatenates ("-a", "-b", "-c"), greedily matching the shortest known
    /// short name at each position. A trailing `=value` suffix is allowed and
    /// becomes a final bare value token. Returns None if the token is not a
    /// concatenation candidate or some part of it matches no short name, in
    /// which case the caller emits the token unchanged.
    fn expand_concatenated(&self, token: &str) -> Option<Vec<String>> {
        if !token.starts_with('-') || token.starts_with("--") || token.chars().count() <= 2 {
            return None;
        }

        let (body, assigned) = match token[1..].split_once('=') {
            Some((body, value)) => (body, Some(value)),
            None => (&token[1..], None),
        };

        let mut expanded: Vec<String> = vec![];
        let mut rest = body;
        while !rest.is_empty() {
            let end = match self.shortest_short_name_prefix(rest) {
                Some(end) => end,
                None => return None,
            };
            expanded.push(format!("-{}", &rest[..end]));
            rest = &rest[end..];
        }

        if let Some(value) = assigned {
            if !value.is_empty() {
                expanded.push(value.to_owned());
            }
        }

        debug!("expanded '{}' into {:?}", token, expanded);
        Some(expanded)
    }

    /// Returns the byte length of the shortest prefix of the given string
    /// which is a registered short name, or None if no prefix matches.
    fn shortest_short_name_prefix(&self, body: &str) -> Option<usize> {
        let mut end = 0;
        for c in body.chars() {
            end += c.len_utf8();
            if self.registry.is_short_name(&body[..end]) {
                return Some(end);
            }
        }
        None
    }

    /// Pass 1: marks every argument matched by a token as present. Tokens
    /// matching nothing are ignored here; they surface during value
    /// harvesting.
    fn mark_present(&mut self, tokens: &[String]) {
        for token in tokens {
            if let Some(index) = self.registry.find(token) {
                self.registry.argument_mut(index).set_present();
            }
        }
    }

    /// Pass 2: fails if any required argument never appeared.
    fn check_required_arguments(&self) -> Result<()> {
        for argument in self.registry.iter() {
            if argument.is_required() && !argument.is_present() {
                return Err(Error::MissingRequiredArgument(
                    argument.get_name().to_owned(),
                ));
            }
        }
        Ok(())
    }

    /// Pass 3: walks the normalized stream collecting values. A token which
    /// matches no argument is an error here. An argument which accepts values
    /// consumes the run of following tokens which are not themselves argument
    /// names; an argument which doesn't must be followed by an argument name
    /// or the end of the stream. Afterwards, any argument still without
    /// values falls back to its default, if one is configured.
    fn harvest_values(&mut self, tokens: &[String]) -> Result<()> {
        let mut i = 0;
        while i < tokens.len() {
            let token = &tokens[i];
            let index = match self.registry.find(token) {
                Some(index) => index,
                None => return Err(Error::UnknownArgument(token.clone())),
            };

            if self.registry.argument(index).accepts_value() {
                while i + 1 < tokens.len() && !self.registry.is_known(&tokens[i + 1]) {
                    let argument = self.registry.argument_mut(index);
                    if argument.is_single_valued() && !argument.values().is_empty() {
                        return Err(Error::TooManyValues(token.clone()));
                    }
                    argument.push_value(&tokens[i + 1]);
                    i += 1;
                }
            } else if i + 1 < tokens.len() && !self.registry.is_known(&tokens[i + 1]) {
                return Err(Error::ValueNotAllowed {
                    name: token.clone(),
                    value: tokens[i + 1].clone(),
                });
            }

            i += 1;
        }

        for argument in self.registry.iter_mut() {
            if argument.values().is_empty() {
                if let Some(default) = argument.get_default_value().map(|dv| dv.to_owned()) {
                    debug!(
                        "argument '{}' was given no value, using default '{}'",
                        argument.get_name(),
                        default
                    );
                    argument.push_value(&default);
                }
            }
        }
        Ok(())
    }

    /// Pass 4: fails if any present argument which requires a value ended up
    /// without one, or (symmetrically) if an argument which accepts no value
    /// somehow ended up with one.
    fn check_required_values(&self) -> Result<()> {
        for argument in self.registry.iter() {
            if argument.is_present()
                && argument.is_value_required()
                && argument.values().is_empty()
            {
                return Err(Error::MissingArgumentValue(argument.get_name().to_owned()));
            }
            if !argument.accepts_value() && !argument.values().is_empty() {
                return Err(Error::ValueNotAllowed {
                    name: argument.get_name().to_owned(),
                    value: argument.values()[0].clone(),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for Parser {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.registry.iter().any(|a| a.is_keyword()) {
            writeln!(f, "Keyword Arguments:")?;
            for argument in self.registry.iter().filter(|a| a.is_keyword()) {
                writeln!(f, "{}", argument)?;
            }
        }
        if self.registry.iter().any(|a| a.is_positional()) {
            writeln!(f, "Positional Arguments:")?;
            for argument in self.registry.iter().filter(|a| a.is_positional()) {
                writeln!(f, "{}", argument)?;
            }
        }
        Ok(())
    }
}
