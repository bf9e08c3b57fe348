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

//! posix_args parses POSIX-style argument lines (grouped single-character
//! options, fused option values, trailing operands), optionally checking them
//! against a compact synopsis such as `-x[f[ filename]] [operand]`.

#[macro_use]
extern crate failure;
#[cfg(feature = "lazy_static")]
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

/// args defines the parsed argument sequence handed to client code, along with
/// the views and transformations built on top of it.
pub mod args;
/// error defines the single error type every operation in this crate returns.
pub mod error;
/// logging provides a Logger implementation for command-line programs built
/// on top of this crate.
#[cfg(feature = "logging")]
pub mod logging;
/// parser ties the grammars together into a configurable end-to-end parser.
pub mod parser;
/// posix contains the argument-line tokenizer and the option group expander.
pub mod posix;
/// synopsis defines the synopsis data model and the grammar which parses it.
pub mod synopsis;
/// testing provides utilities which are useful for unit testing code which
/// uses this crate.
#[cfg(feature = "testing")]
pub mod testing;
/// validate checks parsed arguments against a synopsis.
pub mod validate;

// Tests use the logging and testing utilities, so only build them when every
// feature is enabled.
#[cfg(all(feature = "logging", feature = "testing"))]
#[cfg(test)]
mod tests;

pub use crate::args::{Arg, Args};
pub use crate::error::{Error, Result};
pub use crate::parser::{Parser, ParserBuilder};
pub use crate::synopsis::{Element, Synopsis};
