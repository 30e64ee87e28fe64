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

use std::fmt;

/// The help text an Argument carries before the caller provides one.
pub const DEFAULT_HELP: &str = "No help available for argument.";

/// ArgumentKind denotes how an argument is identified on the command line.
/// Parsing logic treats both kinds uniformly via name lookup; only display
/// formatting dispatches on the kind.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ArgumentKind {
    /// A keyword argument, referenced by a hyphen-prefixed short or long name
    /// (e.g. "-i" or "--input"). Names are stored without their hyphens.
    Keyword {
        /// The short name (e.g. "i"), usually but not necessarily a single
        /// character.
        short_name: String,
        /// The long name (e.g. "input").
        long_name: String,
    },
    /// A positional argument, referenced by its bare name with no hyphen
    /// prefix.
    Positional {
        /// The name of the argument.
        name: String,
    },
}

/// An Argument describes a single declared command-line argument, in such a
/// way that the parser can correctly identify it in the set of arguments given
/// on the command line. After a successful parse it also carries the state the
/// parser populated: whether the argument was present, whether help was
/// requested for it, and any values it was given.
///
/// Arguments are constructed with [`Argument::keyword`] or
/// [`Argument::positional`], configured via the fluent methods, and then
/// handed to a Parser for registration.
#[derive(Clone, Debug)]
pub struct Argument {
    kind: ArgumentKind,
    description: String,
    help: String,
    required: bool,
    accepts_value: bool,
    value_required: bool,
    single_valued: bool,
    default_value: Option<String>,

    // State populated by the parser. Never mutated through the public API.
    present: bool,
    help_requested: bool,
    values: Vec<String>,
}

impl Argument {
    fn new(kind: ArgumentKind, description: &str) -> Argument {
        Argument {
            kind,
            description: description.to_owned(),
            help: DEFAULT_HELP.to_owned(),
            required: false,
            accepts_value: false,
            value_required: false,
            single_valued: false,
            default_value: None,
            present: false,
            help_requested: false,
            values: vec![],
        }
    }

    /// Constructs an Argument describing a keyword argument, identified on the
    /// command line by either its short or long name (e.g. "-i" / "--input").
    /// The names are given without hyphens.
    pub fn keyword(short_name: &str, long_name: &str, description: &str) -> Argument {
        Argument::new(
            ArgumentKind::Keyword {
                short_name: short_name.to_owned(),
                long_name: long_name.to_owned(),
            },
            description,
        )
    }

    /// Constructs an Argument describing a positional argument, identified on
    /// the command line by its bare name.
    pub fn positional(name: &str, description: &str) -> Argument {
        Argument::new(
            ArgumentKind::Positional {
                name: name.to_owned(),
            },
            description,
        )
    }

    /// Constructs the sentinel returned by lookups which match no registered
    /// argument. It has an empty name and an empty value list, and since the
    /// parser only ever mutates arguments it owns, its state never changes.
    pub(crate) fn absent() -> Argument {
        Argument::new(
            ArgumentKind::Positional {
                name: String::new(),
            },
            "",
        )
    }

    /// Marks the argument as required: it must appear on the command line, or
    /// parsing fails.
    pub fn required(mut self) -> Argument {
        self.required = true;
        self
    }

    /// Marks the argument as accepting a value from the command line.
    pub fn has_value(mut self) -> Argument {
        self.accepts_value = true;
        self
    }

    /// Marks the argument as requiring a value: if it appears on the command
    /// line it must be given a value (or have a default), or parsing fails.
    /// Implies has_value().
    pub fn requires_value(mut self) -> Argument {
        self.accepts_value = true;
        self.value_required = true;
        self
    }

    /// Marks the argument as accepting at most one value.
    pub fn single_value(mut self) -> Argument {
        self.single_valued = true;
        self
    }

    /// Sets the value this argument falls back to when it is given none on the
    /// command line. Implies requires_value().
    pub fn default_value(mut self, default_value: &str) -> Argument {
        self.accepts_value = true;
        self.value_required = true;
        self.default_value = Some(default_value.to_owned());
        self
    }

    /// Sets the help text shown when the user requests help for this argument.
    pub fn help(mut self, help: &str) -> Argument {
        self.help = help.to_owned();
        self
    }

    /// Returns this argument's kind.
    pub fn kind(&self) -> &ArgumentKind {
        &self.kind
    }

    /// Returns this argument's primary name: the long name for a keyword
    /// argument, or the bare name for a positional argument.
    pub fn get_name(&self) -> &str {
        match self.kind {
            ArgumentKind::Keyword { ref long_name, .. } => long_name.as_str(),
            ArgumentKind::Positional { ref name } => name.as_str(),
        }
    }

    /// Returns this argument's short name, if it is a keyword argument.
    pub fn get_short_name(&self) -> Option<&str> {
        match self.kind {
            ArgumentKind::Keyword { ref short_name, .. } => Some(short_name.as_str()),
            ArgumentKind::Positional { .. } => None,
        }
    }

    /// Returns the human-readable description of this argument.
    pub fn get_description(&self) -> &str {
        self.description.as_str()
    }

    /// Returns the help text for this argument.
    pub fn get_help(&self) -> &str {
        self.help.as_str()
    }

    /// Returns this argument's default value, if it has one.
    pub fn get_default_value(&self) -> Option<&str> {
        self.default_value.as_ref().map(|dv| dv.as_str())
    }

    /// Returns true if this Argument describes a keyword argument.
    pub fn is_keyword(&self) -> bool {
        match self.kind {
            ArgumentKind::Keyword { .. } => true,
            _ => false,
        }
    }

    /// Returns true if this Argument describes a positional argument. This is
    /// equivalent to !is_keyword().
    pub fn is_positional(&self) -> bool {
        !self.is_keyword()
    }

    /// Returns true if this Argument is the sentinel returned when a lookup
    /// matched no registered argument. Registration rejects empty names, so
    /// only the sentinel has one.
    pub fn is_absent(&self) -> bool {
        self.get_name().is_empty()
    }

    /// Returns true if this argument must appear on the command line.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Returns true if this argument accepts a value.
    pub fn accepts_value(&self) -> bool {
        self.accepts_value
    }

    /// Returns true if this argument must have a value when it appears on the
    /// command line.
    pub fn is_value_required(&self) -> bool {
        self.value_required
    }

    /// Returns true if this argument accepts at most one value.
    pub fn is_single_valued(&self) -> bool {
        self.single_valued
    }

    /// Returns true if the parser found this argument on the command line.
    pub fn is_present(&self) -> bool {
        self.present
    }

    /// Returns true if the user requested help for this argument (a help token
    /// immediately followed this argument's name on the command line).
    pub fn is_help_requested(&self) -> bool {
        self.help_requested
    }

    /// Returns the values the parser collected for this argument, in the order
    /// they appeared on the command line.
    pub fn values(&self) -> &[String] {
        self.values.as_slice()
    }

    /// Returns the first collected value, or an empty string if the argument
    /// has no values.
    pub fn get_value(&self) -> &str {
        self.values.first().map(|v| v.as_str()).unwrap_or("")
    }

    pub(crate) fn set_present(&mut self) {
        self.present = true;
    }

    pub(crate) fn set_help_requested(&mut self) {
        self.help_requested = true;
    }

    pub(crate) fn push_value(&mut self, value: &str) {
        self.values.push(value.to_owned());
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let value_marker = match self.accepts_value {
            true => "<value>",
            false => "",
        };
        let default = match self.default_value {
            Some(ref dv) => format!("Default: {}", dv),
            None => String::new(),
        };
        match self.kind {
            ArgumentKind::Keyword {
                ref short_name,
                ref long_name,
            } => write!(
                f,
                "{:<4} {:<14} {:<8} {:<19} {:<30}",
                format!("-{}", short_name),
                format!("--{}", long_name),
                value_marker,
                default,
                self.description
            ),
            ArgumentKind::Positional { ref name } => write!(
                f,
                "{:<18} {:<9} {:<19} {:<30}",
                name, value_marker, default, self.description
            ),
        }
    }
}
