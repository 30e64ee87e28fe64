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

use crate::argument::{Argument, ArgumentKind};
use crate::error::*;
use regex::Regex;
use std::collections::HashMap;

fn validate_name(name: &str) -> Result<()> {
    lazy_static! {
        static ref NAME_PATTERN: Regex = Regex::new(r"^[a-zA-Z0-9-]+$").unwrap();
    }

    match NAME_PATTERN.is_match(name) {
        true => Ok(()),
        false => Err(Error::InvalidName(name.to_owned())),
    }
}

/// Strips exactly 0, 1, or 2 leading hyphens from a command-line token. A
/// "--" prefix counts as both; any further hyphen is part of the name.
fn strip_hyphens(token: &str) -> &str {
    if let Some(stripped) = token.strip_prefix("--") {
        stripped
    } else if let Some(stripped) = token.strip_prefix('-') {
        stripped
    } else {
        token
    }
}

/// A Registry owns the full set of Arguments registered with one parser, and
/// resolves command-line tokens to them by short, long, or positional name.
/// It is built up before parsing begins and its membership never changes
/// afterwards.
#[derive(Clone, Debug)]
pub struct Registry {
    arguments: Vec<Argument>,
    by_name: HashMap<String, usize>,
    by_short_name: HashMap<String, usize>,
    absent: Argument,
}

impl Registry {
    /// Constructs a new, empty Registry.
    pub(crate) fn new() -> Registry {
        Registry {
            arguments: vec![],
            by_name: HashMap::new(),
            by_short_name: HashMap::new(),
            absent: Argument::absent(),
        }
    }

    /// Registers the given Argument. Each of its identity strings must be
    /// nonempty, contain only letters, numbers, or hyphens, and be distinct
    /// from every name (short, long, or positional) already registered.
    pub(crate) fn add(&mut self, argument: Argument) -> Result<()> {
        let (name, short_name) = match argument.kind() {
            ArgumentKind::Keyword {
                short_name,
                long_name,
            } => (long_name.clone(), Some(short_name.clone())),
            ArgumentKind::Positional { name } => (name.clone(), None),
        };

        validate_name(&name)?;
        self.check_duplicate(&name)?;
        if let Some(sn) = short_name.as_ref() {
            validate_name(sn)?;
            self.check_duplicate(sn)?;
        }

        let index = self.arguments.len();
        self.by_name.insert(name, index);
        if let Some(sn) = short_name {
            self.by_short_name.insert(sn, index);
        }
        self.arguments.push(argument);
        Ok(())
    }

    fn check_duplicate(&self, name: &str) -> Result<()> {
        match self.by_name.contains_key(name) || self.by_short_name.contains_key(name) {
            true => Err(Error::DuplicateName(name.to_owned())),
            false => Ok(()),
        }
    }

    /// Resolves the given command-line token to the index of a registered
    /// Argument, after stripping its leading hyphens. Long and positional
    /// names take precedence over short names.
    pub(crate) fn find(&self, token: &str) -> Option<usize> {
        let name = strip_hyphens(token);
        self.by_name
            .get(name)
            .or_else(|| self.by_short_name.get(name))
            .copied()
    }

    /// Resolves the given command-line token to a registered Argument, or to
    /// the absent sentinel if no argument matches. The sentinel has an empty
    /// name and an empty value list, so callers can chain accessors without
    /// first testing for a match; use [`Argument::is_absent`] to test.
    pub fn lookup(&self, token: &str) -> &Argument {
        match self.find(token) {
            Some(index) => &self.arguments[index],
            None => &self.absent,
        }
    }

    /// Returns true if the given token resolves to a registered Argument.
    pub fn is_known(&self, token: &str) -> bool {
        self.find(token).is_some()
    }

    /// Returns true if the given bare name (no hyphens) is a registered short
    /// name. Concatenation expansion matches short names only.
    pub(crate) fn is_short_name(&self, name: &str) -> bool {
        self.by_short_name.contains_key(name)
    }

    pub(crate) fn argument(&self, index: usize) -> &Argument {
        &self.arguments[index]
    }

    pub(crate) fn argument_mut(&mut self, index: usize) -> &mut Argument {
        &mut self.arguments[index]
    }

    pub(crate) fn absent(&self) -> &Argument {
        &self.absent
    }

    /// Returns an Iterator over the registered Arguments, in registration
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = &Argument> {
        self.arguments.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Argument> {
        self.arguments.iter_mut()
    }
}
