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

use crate::posix::PosixToken;

/// The argument which, if end-of-options handling is enabled, ends option
/// processing. It is dropped, and every argument after it is an operand.
pub const END_OF_OPTIONS: &'static str = "--";

/// Returns the option group contained in the given argument, without its
/// leading "-", or None if the argument is not an option group. A group is a
/// "-" followed by a letter or digit; everything after the "-" belongs to it,
/// since only the expander can tell options from a fused value.
pub fn option_group(arg: &str) -> Option<&str> {
    if !arg.starts_with('-') {
        return None;
    }
    let group = &arg[1..];
    match group.chars().next() {
        Some(c) if c.is_ascii_alphanumeric() => Some(group),
        _ => None,
    }
}

/// Split the given argument vector into PosixTokens, with a lone "--" ending
/// option processing. See tokenize_with.
pub fn tokenize<S: AsRef<str>>(argv: &[S]) -> Vec<PosixToken> {
    tokenize_with(argv, true)
}

/// Split the given argument vector into PosixTokens, strictly left to right.
///
/// This uses only lexical cues: an argument immediately following an option
/// group is provisionally labelled as that group's OptionValue, and the first
/// argument which is neither an option group nor such a value ends option
/// processing, so it and everything after it are Operands.
///
/// If `end_of_options` is false, "--" gets no special treatment.
pub fn tokenize_with<S: AsRef<str>>(argv: &[S], end_of_options: bool) -> Vec<PosixToken> {
    let mut tokens = Vec::with_capacity(argv.len());
    let mut finished_options = false;
    let mut after_group = false;

    for arg in argv.iter().map(|a| a.as_ref()) {
        if finished_options {
            tokens.push(PosixToken::Operand(arg.to_owned()));
            continue;
        }

        if end_of_options && arg == END_OF_OPTIONS {
            trace!("'{}' ends option processing", END_OF_OPTIONS);
            finished_options = true;
            continue;
        }

        if let Some(group) = option_group(arg) {
            tokens.push(PosixToken::OptionGroup(group.to_owned()));
            after_group = true;
        } else if after_group {
            tokens.push(PosixToken::OptionValue(arg.to_owned()));
            after_group = false;
        } else {
            tokens.push(PosixToken::Operand(arg.to_owned()));
            finished_options = true;
        }
    }

    tokens
}
