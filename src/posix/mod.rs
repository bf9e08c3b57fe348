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

/// expander splits option groups into individual options, deciding where
/// fused values begin.
pub mod expander;
/// tokenizer splits a raw argument vector into PosixTokens.
pub mod tokenizer;

use std::fmt;

/// PosixToken is a single lexical unit of a POSIX argument line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PosixToken {
    /// One or more single-character options, concatenated after a single "-".
    /// The "-" itself is not retained. After expansion, every OptionGroup
    /// holds exactly one option.
    OptionGroup(String),
    /// Free text immediately following an option group. Until the group is
    /// expanded, it isn't known whether this is really an option value or the
    /// first operand.
    OptionValue(String),
    /// Free text which is not associated with any option.
    Operand(String),
}

impl fmt::Display for PosixToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PosixToken::OptionGroup(chars) => write!(f, "-{}", chars),
            PosixToken::OptionValue(text) => write!(f, "{}", text),
            PosixToken::Operand(text) => write!(f, "{}", text),
        }
    }
}
