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
use crate::posix::PosixToken;
use crate::synopsis::Synopsis;

/// Step is the outcome of feeding one more character of an option group to a
/// GroupExpander.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Step {
    /// The character was a standalone option; there may be more to come.
    Continue,
    /// The character was an option which claimed a value, either the rest of
    /// the group or the trailing argument. The group is finished.
    Claimed,
    /// There were no characters left in the group.
    Exhausted,
}

/// GroupExpander is the state machine which splits a single option group
/// (e.g. "xfREADME.md" from "-xfREADME.md") into individual options, using a
/// Synopsis to decide where options stop and a fused value begins.
pub struct GroupExpander<'a> {
    synopsis: &'a Synopsis,
    group: &'a str,
    /// Byte offset of the next unconsumed character of the group.
    position: usize,
    /// The argument which followed the group, if it hasn't been claimed yet.
    trailing: Option<&'a str>,
    tokens: Vec<PosixToken>,
}

impl<'a> GroupExpander<'a> {
    /// Construct a new GroupExpander for the given group (without its leading
    /// "-") and the argument which followed it on the command line, if any.
    pub fn new(synopsis: &'a Synopsis, group: &'a str, trailing: Option<&'a str>) -> Self {
        GroupExpander {
            synopsis: synopsis,
            group: group,
            position: 0,
            trailing: trailing,
            tokens: vec![],
        }
    }

    /// The part of the group which hasn't been consumed yet.
    pub fn remaining(&self) -> &'a str {
        &self.group[self.position..]
    }

    /// Claim the rest of the group as the current option's value, or, if the
    /// group is used up, the trailing argument instead.
    fn claim_value(&mut self) -> Option<String> {
        let rest = self.remaining();
        self.position = self.group.len();
        if rest.is_empty() {
            self.trailing.take().map(|t| t.to_owned())
        } else {
            Some(rest.to_owned())
        }
    }

    /// Consume the next character of the group.
    pub fn step(&mut self) -> Result<Step> {
        let c = match self.remaining().chars().next() {
            None => return Ok(Step::Exhausted),
            Some(c) => c,
        };
        self.position += c.len_utf8();

        let element = match self.synopsis.find_option(c) {
            None => return Err(Error::UnknownOption(c)),
            Some(e) => e,
        };
        self.tokens.push(PosixToken::OptionGroup(c.to_string()));

        if element.takes_optional_value() {
            if let Some(value) = self.claim_value() {
                trace!("option '{}' claimed optional value '{}'", c, value);
                self.tokens.push(PosixToken::OptionValue(value));
            }
            return Ok(Step::Claimed);
        }

        if element.takes_mandatory_value() {
            return match self.claim_value() {
                None => Err(Error::MissingValue(c.to_string())),
                Some(value) => {
                    trace!("option '{}' claimed value '{}'", c, value);
                    self.tokens.push(PosixToken::OptionValue(value));
                    Ok(Step::Claimed)
                }
            };
        }

        Ok(Step::Continue)
    }

    /// Run the state machine to completion. The second element of the result
    /// is the trailing argument, if no option claimed it; it is really an
    /// operand.
    pub fn finish(mut self) -> Result<(Vec<PosixToken>, Option<String>)> {
        loop {
            match self.step()? {
                Step::Continue => continue,
                Step::Claimed | Step::Exhausted => break,
            }
        }

        // Claiming a value always uses up the group.
        debug_assert!(self.remaining().is_empty());
        Ok((self.tokens, self.trailing.map(|t| t.to_owned())))
    }
}

/// Expand a single option group (without its leading "-") into one
/// OptionGroup token per option, each possibly followed by an OptionValue.
///
/// Without a Synopsis, every character is an option, and the trailing
/// argument (if any) is the value of the last one. With a Synopsis, options
/// which take a value claim the rest of the group (or the trailing argument),
/// and a trailing argument nobody claimed comes back as an Operand.
pub fn expand(
    group: &str,
    trailing: Option<&str>,
    synopsis: Option<&Synopsis>,
) -> Result<Vec<PosixToken>> {
    let synopsis = match synopsis {
        None => {
            let mut tokens: Vec<PosixToken> = group
                .chars()
                .map(|c| PosixToken::OptionGroup(c.to_string()))
                .collect();
            if let Some(trailing) = trailing {
                tokens.push(PosixToken::OptionValue(trailing.to_owned()));
            }
            return Ok(tokens);
        }
        Some(s) => s,
    };

    let (mut tokens, unclaimed) = GroupExpander::new(synopsis, group, trailing).finish()?;
    if let Some(operand) = unclaimed {
        trace!(
            "'{}' is not a value of '-{}', treating it as an operand",
            operand,
            group
        );
        tokens.push(PosixToken::Operand(operand));
    }
    debug!("expanded option group '-{}' into {:?}", group, tokens);
    Ok(tokens)
}

/// Expand every option group in the given token stream (as produced by the
/// tokenizer). OptionGroups in the result each hold a single option.
///
/// Once an argument turns out to be an operand, option processing is over:
/// anything after it is an operand too, even if it looks like an option.
pub fn expand_all(
    tokens: Vec<PosixToken>,
    synopsis: Option<&Synopsis>,
) -> Result<Vec<PosixToken>> {
    let mut expanded = Vec::with_capacity(tokens.len());
    let mut finished_options = false;
    let mut tokens = tokens.into_iter().peekable();

    while let Some(token) = tokens.next() {
        if finished_options {
            expanded.push(PosixToken::Operand(token.to_string()));
            continue;
        }

        match token {
            PosixToken::OptionGroup(group) => {
                let trailing = match tokens.peek() {
                    Some(PosixToken::OptionValue(_)) => match tokens.next() {
                        Some(PosixToken::OptionValue(v)) => Some(v),
                        _ => None,
                    },
                    _ => None,
                };
                let trailing = trailing.as_ref().map(|t| t.as_str());
                for t in expand(group.as_str(), trailing, synopsis)? {
                    if let PosixToken::Operand(_) = t {
                        finished_options = true;
                    }
                    expanded.push(t);
                }
            }
            PosixToken::OptionValue(v) => {
                return Err(Error::TokenSyntax(format!(
                    "value '{}' does not follow an option group",
                    v
                )));
            }
            PosixToken::Operand(o) => {
                finished_options = true;
                expanded.push(PosixToken::Operand(o));
            }
        }
    }

    Ok(expanded)
}
