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

use crate::args::Args;
use crate::error::*;
use crate::posix::{expander, tokenizer};
use crate::synopsis::Synopsis;

/// Where a ParserBuilder's synopsis comes from: a template which still has to
/// be parsed, or a Synopsis the caller already has.
enum SynopsisSource {
    Template(String),
    Parsed(Synopsis),
}

/// ParserBuilder provides a builder-style interface to construct a Parser.
pub struct ParserBuilder {
    synopsis: Option<SynopsisSource>,
    validate: Option<bool>,
    end_of_options: Option<bool>,
}

impl ParserBuilder {
    /// Construct a new ParserBuilder, which by default parses without any
    /// synopsis.
    pub fn new() -> Self {
        ParserBuilder {
            synopsis: None,
            validate: None,
            end_of_options: None,
        }
    }

    /// Set the synopsis template arguments should be parsed (and validated)
    /// with. The template is parsed when the Parser is built.
    pub fn set_synopsis(mut self, template: &str) -> Self {
        self.synopsis = Some(SynopsisSource::Template(template.to_owned()));
        self
    }

    /// Like set_synopsis, but for a Synopsis which has already been parsed.
    pub fn set_parsed_synopsis(mut self, synopsis: Synopsis) -> Self {
        self.synopsis = Some(SynopsisSource::Parsed(synopsis));
        self
    }

    /// Set whether or not parsed arguments are validated against the synopsis.
    /// This defaults to true, and has no effect if there is no synopsis.
    pub fn set_validate(mut self, validate: bool) -> Self {
        self.validate = Some(validate);
        self
    }

    /// Set whether or not a lone "--" ends option processing. This defaults to
    /// true; if disabled, "--" is treated like any other argument.
    pub fn set_end_of_options(mut self, end_of_options: bool) -> Self {
        self.end_of_options = Some(end_of_options);
        self
    }

    /// Build a Parser from this builder's current state. This fails if the
    /// synopsis template is not valid.
    pub fn build(self) -> Result<Parser> {
        let synopsis = match self.synopsis {
            None => None,
            Some(SynopsisSource::Template(template)) => Some(Synopsis::parse(&template)?),
            Some(SynopsisSource::Parsed(synopsis)) => Some(synopsis),
        };

        Ok(Parser {
            synopsis: synopsis,
            validate: self.validate.unwrap_or(true),
            end_of_options: self.end_of_options.unwrap_or(true),
        })
    }
}

impl Default for ParserBuilder {
    fn default() -> Self {
        ParserBuilder::new()
    }
}

/// Parser turns argument vectors into Args. It holds no mutable state, so a
/// single Parser can be shared and used to parse any number of argument
/// vectors.
#[derive(Clone, Debug)]
pub struct Parser {
    synopsis: Option<Synopsis>,
    validate: bool,
    end_of_options: bool,
}

impl Parser {
    /// The synopsis this Parser was configured with, if any.
    pub fn synopsis(&self) -> Option<&Synopsis> {
        self.synopsis.as_ref()
    }

    /// Parse the given argument vector (not including the program name).
    pub fn parse<S: AsRef<str>>(&self, argv: &[S]) -> Result<Args<String>> {
        let tokens = tokenizer::tokenize_with(argv, self.end_of_options);
        let tokens = expander::expand_all(tokens, self.synopsis.as_ref())?;
        let args = Args::from_tokens(tokens)?;

        if let Some(synopsis) = self.synopsis.as_ref() {
            if self.validate {
                args.validate(synopsis)?;
            }
        }

        Ok(args)
    }
}
