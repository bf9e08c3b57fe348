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

use failure::Fail;

/// Error is a structure which denotes all of the possible kinds of errors this
/// crate can produce. None of them are transient; the caller has to fix its
/// input (or its synopsis) and try again.
#[derive(Fail, Debug)]
pub enum Error {
    /// More than one parsed argument claims the same option name, in a
    /// context where the name must identify a single argument.
    #[fail(display = "ambiguous option name '{}'", _0)]
    AmbiguousName(String),
    /// A caller-provided callback returned an error while processing an
    /// option.
    #[fail(display = "callback failed: {}", _0)]
    Callback(::failure::Error),
    /// A textual value could not be converted into the requested type.
    #[fail(display = "invalid value '{}': {}", value, reason)]
    Conversion {
        /// The value which failed to convert.
        value: String,
        /// Why conversion failed, as reported by the target type.
        reason: String,
    },
    /// An error encountered while trying to interact with environment
    /// variables.
    #[fail(display = "{}", _0)]
    EnvVar(#[cause] ::std::env::VarError),
    /// Errors akin to EINVAL - essentially, an argument passed into a function
    /// was invalid in some way.
    #[fail(display = "invalid argument: {}", _0)]
    InvalidArgument(String),
    /// A parsed option has no counterpart in the synopsis it was validated
    /// against.
    #[fail(display = "invalid option '{}'", _0)]
    InvalidOption(String),
    /// An option which requires a value was given (or asked for) without one.
    #[fail(display = "missing value for option '{}'", _0)]
    MissingValue(String),
    /// An error encountered in either parsing or applying a regular expression.
    #[fail(display = "{}", _0)]
    Regex(#[cause] ::regex::Error),
    /// An error encountered when attempting to set the global Logger
    /// implementation.
    #[fail(display = "{}", _0)]
    SetLogger(#[cause] ::log::SetLoggerError),
    /// A synopsis template did not match the synopsis grammar.
    #[fail(display = "invalid synopsis at offset {}: {}", position, message)]
    SynopsisSyntax {
        /// The character offset in the template where matching failed.
        position: usize,
        /// A description of what the grammar expected.
        message: String,
    },
    /// The low-level token stream was malformed.
    #[fail(display = "malformed argument token: {}", _0)]
    TokenSyntax(String),
    /// A character in an option group has no entry in the synopsis.
    #[fail(display = "unknown option '-{}'", _0)]
    UnknownOption(char),
    /// The parsed arguments do not have the mandatory / optional structure
    /// the synopsis requires.
    #[fail(display = "arguments '{}' do not match synopsis '{}'", args, synopsis)]
    Validation {
        /// The parsed arguments, rendered back into argument-line form.
        args: String,
        /// The synopsis the arguments were validated against.
        synopsis: String,
    },
}

impl From<::std::env::VarError> for Error {
    fn from(e: ::std::env::VarError) -> Self {
        Error::EnvVar(e)
    }
}

impl From<::regex::Error> for Error {
    fn from(e: ::regex::Error) -> Self {
        Error::Regex(e)
    }
}

impl From<::log::SetLoggerError> for Error {
    fn from(e: ::log::SetLoggerError) -> Self {
        Error::SetLogger(e)
    }
}

// If we ? a generic failure::Error (e.g. from inside a callback), treat it as
// a callback failure.
impl From<::failure::Error> for Error {
    fn from(e: ::failure::Error) -> Self {
        Error::Callback(e)
    }
}

/// A Result type which uses this crate's Error type.
pub type Result<T> = ::std::result::Result<T, Error>;
