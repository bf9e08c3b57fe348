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

use crate::error::*;
use crate::parser::ParserBuilder;
use crate::posix::PosixToken;
use crate::synopsis::Synopsis;
use crate::validate;
use std::collections::HashMap;
use std::fmt;
use std::iter::FromIterator;
use std::str::FromStr;

/// The caller-provided callback invoked by `Args::process` for a particular
/// option. It receives the option's value, if it has one.
pub type ArgCallback<'a, T> = Box<dyn FnMut(Option<&T>) -> Result<()> + 'a>;

/// Arg is a single parsed argument. It is always exactly one of: an option
/// without a value (name only), an option with a value (name and value), or
/// an operand (value only).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Arg<T> {
    name: Option<String>,
    value: Option<T>,
}

impl<T> Arg<T> {
    /// Constructs an Arg for an option, with or without a value.
    pub fn option(name: &str, value: Option<T>) -> Self {
        Arg {
            name: Some(name.to_owned()),
            value: value,
        }
    }

    /// Constructs an Arg for an option which has no value.
    pub fn flag(name: &str) -> Self {
        Arg::option(name, None)
    }

    /// Constructs an Arg for an operand.
    pub fn operand(value: T) -> Self {
        Arg {
            name: None,
            value: Some(value),
        }
    }

    /// The name of this option, or None if this is an operand.
    pub fn name(&self) -> Option<&str> {
        self.name.as_ref().map(|n| n.as_str())
    }

    /// The value of this argument, if any.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Returns true if this argument is an option (with or without a value).
    pub fn is_option(&self) -> bool {
        self.name.is_some()
    }

    /// Returns true if this argument is an operand.
    pub fn is_operand(&self) -> bool {
        self.name.is_none()
    }

    /// Returns true if this is an option with the given name.
    pub fn has_name(&self, name: &str) -> bool {
        self.name() == Some(name)
    }

    /// Transform this argument's value (if any), keeping its name.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Arg<U> {
        Arg {
            name: self.name,
            value: self.value.map(f),
        }
    }

    /// Transform this argument's value (if any) with a function which might
    /// fail, keeping its name.
    pub fn try_map<U, F: FnOnce(T) -> Result<U>>(self, f: F) -> Result<Arg<U>> {
        Ok(Arg {
            name: self.name,
            value: match self.value {
                None => None,
                Some(v) => Some(f(v)?),
            },
        })
    }
}

impl<T: fmt::Display> fmt::Display for Arg<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (&self.name, &self.value) {
            (Some(name), Some(value)) => write!(f, "-{} {}", name, value),
            (Some(name), None) => write!(f, "-{}", name),
            (None, Some(value)) => write!(f, "{}", value),
            (None, None) => Ok(()),
        }
    }
}

/// Args is the ordered sequence of arguments parsed from an argument line.
/// The order is parse order. Args are never modified in place; every
/// transformation produces a new Args.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Args<T> {
    args: Vec<Arg<T>>,
}

impl Args<String> {
    /// Parse the given argument vector. If a synopsis template is given, it is
    /// used both to split option groups and to validate the result.
    pub fn parse<S: AsRef<str>>(argv: &[S], synopsis: Option<&str>) -> Result<Args<String>> {
        let mut builder = ParserBuilder::new();
        if let Some(synopsis) = synopsis {
            builder = builder.set_synopsis(synopsis);
        }
        builder.build()?.parse(argv)
    }

    /// Parse and validate the given argument vector using an already-parsed
    /// Synopsis.
    pub fn parse_with<S: AsRef<str>>(argv: &[S], synopsis: &Synopsis) -> Result<Args<String>> {
        ParserBuilder::new()
            .set_parsed_synopsis(synopsis.clone())
            .build()?
            .parse(argv)
    }

    /// Parse the given argument vector without any synopsis. Every character
    /// of an option group is an option, and an argument following a group is
    /// the value of its last option.
    pub fn parse_simple<S: AsRef<str>>(argv: &[S]) -> Result<Args<String>> {
        Args::parse(argv, None)
    }

    /// Fold an expanded token stream (one option per OptionGroup) into Args.
    /// An OptionValue becomes the value of the option right before it.
    pub fn from_tokens(tokens: Vec<PosixToken>) -> Result<Args<String>> {
        let mut args: Vec<Arg<String>> = Vec::with_capacity(tokens.len());
        for token in tokens {
            match token {
                PosixToken::OptionGroup(name) => args.push(Arg::flag(name.as_str())),
                PosixToken::OptionValue(value) => match args.last_mut() {
                    Some(last) if last.is_option() && last.value.is_none() => {
                        last.value = Some(value);
                    }
                    _ => {
                        return Err(Error::TokenSyntax(format!(
                            "value '{}' does not follow an option",
                            value
                        )));
                    }
                },
                PosixToken::Operand(value) => args.push(Arg::operand(value)),
            }
        }
        Ok(Args { args: args })
    }

    /// Convert every value into the given type, using its FromStr impl.
    pub fn parse_values<U>(self) -> Result<Args<U>>
    where
        U: FromStr,
        <U as FromStr>::Err: fmt::Display,
    {
        self.try_map(|value| {
            value.parse::<U>().map_err(|e| Error::Conversion {
                reason: e.to_string(),
                value: value,
            })
        })
    }
}

impl<T> Args<T> {
    /// Constructs Args holding exactly the given argument.
    pub fn singleton(arg: Arg<T>) -> Self {
        Args { args: vec![arg] }
    }

    /// Returns the number of arguments.
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Returns true if there are no arguments at all.
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Iterate over the arguments, in parse order.
    pub fn iter(&self) -> ::std::slice::Iter<'_, Arg<T>> {
        self.args.iter()
    }

    /// Consume these Args, returning the underlying arguments.
    pub fn into_vec(self) -> Vec<Arg<T>> {
        self.args
    }

    /// The values of every operand, in order.
    pub fn operands(&self) -> Vec<&T> {
        self.args
            .iter()
            .filter(|a| a.is_operand())
            .filter_map(|a| a.value())
            .collect()
    }

    /// Returns every option, mapped from its name to its value (if any). It is
    /// an error for more than one option to have the same name.
    pub fn options(&self) -> Result<HashMap<&str, Option<&T>>> {
        let mut options = HashMap::new();
        for arg in &self.args {
            if let Some(name) = arg.name() {
                if options.insert(name, arg.value()).is_some() {
                    return Err(Error::AmbiguousName(name.to_owned()));
                }
            }
        }
        Ok(options)
    }

    /// Returns the number of times the named option appears.
    pub fn count(&self, name: &str) -> usize {
        self.args.iter().filter(|a| a.has_name(name)).count()
    }

    /// Returns true if the named option appears at least once.
    pub fn is_defined(&self, name: &str) -> bool {
        self.args.iter().any(|a| a.has_name(name))
    }

    /// Look up the single option with the given name. It is an error for the
    /// name to appear more than once.
    pub fn get(&self, name: &str) -> Result<Option<&Arg<T>>> {
        let mut matches = self.args.iter().filter(|a| a.has_name(name));
        match (matches.next(), matches.next()) {
            (_, Some(_)) => Err(Error::AmbiguousName(name.to_owned())),
            (found, None) => Ok(found),
        }
    }

    /// Returns the value of the named option. This is None both if the option
    /// doesn't appear at all and if it appears without a value.
    pub fn value_of(&self, name: &str) -> Result<Option<&T>> {
        Ok(self.get(name)?.and_then(|a| a.value()))
    }

    /// Returns the value of the named option, which must have been given.
    pub fn require_value(&self, name: &str) -> Result<&T> {
        match self.value_of(name)? {
            None => Err(Error::MissingValue(name.to_owned())),
            Some(v) => Ok(v),
        }
    }

    /// Map the synopsis' operand names onto the operands which were actually
    /// given, in order. Operands beyond those the synopsis declares (or names
    /// with no corresponding operand) are left out.
    pub fn operands_by_name<'s>(&self, synopsis: &'s Synopsis) -> HashMap<&'s str, &T> {
        synopsis
            .operands()
            .into_iter()
            .zip(self.operands().into_iter())
            .collect()
    }

    /// Check these Args against the given Synopsis.
    pub fn validate(&self, synopsis: &Synopsis) -> Result<()>
    where
        T: fmt::Display,
    {
        validate::validate(self, synopsis)
    }

    /// Produce new Args by transforming every value.
    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> Args<U> {
        Args {
            args: self.args.into_iter().map(|a| a.map(&mut f)).collect(),
        }
    }

    /// Produce new Args by transforming every value with a function which
    /// might fail. The first failure is returned.
    pub fn try_map<U, F: FnMut(T) -> Result<U>>(self, mut f: F) -> Result<Args<U>> {
        let args: Result<Vec<Arg<U>>> = self
            .args
            .into_iter()
            .map(|a| a.try_map(&mut f))
            .collect();
        Ok(Args { args: args? })
    }

    /// Call the callback registered for each option's name, in parse order,
    /// with that option's value. Returns the arguments which weren't handed to
    /// any callback: operands, and options with no registered callback.
    pub fn process<'a>(
        self,
        callbacks: &mut HashMap<String, ArgCallback<'a, T>>,
    ) -> Result<Args<T>> {
        let mut remaining = vec![];
        for arg in self.args {
            let callback = match arg.name() {
                None => None,
                Some(name) => callbacks.get_mut(name),
            };
            match callback {
                Some(callback) => callback.as_mut()(arg.value())?,
                None => remaining.push(arg),
            }
        }
        Ok(Args { args: remaining })
    }
}

impl<T: fmt::Display> fmt::Display for Args<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rendered: Vec<String> = self.args.iter().map(|a| a.to_string()).collect();
        f.write_str(rendered.join(" ").as_str())
    }
}

impl<T> From<Vec<Arg<T>>> for Args<T> {
    fn from(args: Vec<Arg<T>>) -> Self {
        Args { args: args }
    }
}

impl<T> FromIterator<Arg<T>> for Args<T> {
    fn from_iter<I: IntoIterator<Item = Arg<T>>>(iter: I) -> Self {
        Args {
            args: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Args<T> {
    type Item = Arg<T>;
    type IntoIter = ::std::vec::IntoIter<Arg<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.args.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Args<T> {
    type Item = &'a Arg<T>;
    type IntoIter = ::std::slice::Iter<'a, Arg<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.args.iter()
    }
}
