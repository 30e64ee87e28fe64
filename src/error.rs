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

use thiserror::Error;

// When a stray value follows an argument which doesn't take one, it is
// ambiguous whether the user meant an unrecognized flag or a misplaced value.
// Mention both readings if the stray value looks like a flag.
fn value_not_allowed_message(name: &str, value: &str) -> String {
    let message = format!(
        "argument '{}' may not have a value, but was given '{}'",
        name, value
    );
    match value.starts_with('-') {
        false => message,
        true => format!("unrecognized argument '{}', or {}", value, message),
    }
}

/// Error represents the various errors which can come up while registering
/// arguments or parsing command-line arguments against them.
#[derive(Debug, Error)]
pub enum Error {
    /// A registered argument's short, long, or positional name collides with
    /// the name of a previously registered argument.
    #[error("argument '{0}' duplicates the name of an existing argument")]
    DuplicateName(String),
    /// An argument was registered with a name which is empty or contains
    /// characters other than letters, numbers, or hyphens.
    #[error("argument names must contain only letters, numbers, or hyphens: '{0}'")]
    InvalidName(String),
    /// An I/O error, encountered when writing help text to a caller-provided
    /// output sink.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// An argument which requires a value appeared on the command line, but no
    /// value was given and the argument has no default.
    #[error("argument '{0}' requires a value")]
    MissingArgumentValue(String),
    /// A required argument never appeared on the command line.
    #[error("argument '{0}' is required but was not specified")]
    MissingRequiredArgument(String),
    /// A single-valued argument was given more than one value.
    #[error("argument '{0}' is allowed to only have one value")]
    TooManyValues(String),
    /// A command-line token looked like an argument reference, but matched no
    /// registered argument.
    #[error("unrecognized argument '{0}'")]
    UnknownArgument(String),
    /// An argument which does not take a value was given one anyway.
    #[error("{}", value_not_allowed_message(.name, .value))]
    ValueNotAllowed {
        /// The name of the argument, as it was written on the command line.
        name: String,
        /// The stray value which followed it.
        value: String,
    },
}

/// A Result type which uses simpleargs' internal Error type.
pub type Result<T> = std::result::Result<T, Error>;
