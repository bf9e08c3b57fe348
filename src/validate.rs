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
use crate::synopsis::{Element, Synopsis};
use std::fmt;

fn validation_error<T: fmt::Display>(args: &Args<T>, synopsis: &Synopsis) -> Error {
    Error::Validation {
        args: args.to_string(),
        synopsis: synopsis.to_string(),
    }
}

/// Check that the given Args conform to the given Synopsis: every option must
/// be one the synopsis declares, and the options the synopsis does not mark
/// optional must each be given exactly once.
///
/// Option order doesn't matter, so both sides are sorted by name and then
/// compared pairwise. Operands are not checked at all; in particular, how
/// many operands were given is not compared against the synopsis.
pub fn validate<T: fmt::Display>(args: &Args<T>, synopsis: &Synopsis) -> Result<()> {
    let (mandatory, _) = synopsis.mandatory_and_optional_elements();
    let mut expected: Vec<&Element> = mandatory.into_iter().filter(|e| e.is_option()).collect();

    let mut given: Vec<&str> = vec![];
    for name in args.iter().filter_map(|a| a.name()) {
        let element = match synopsis.find_named_option(name) {
            None => return Err(Error::InvalidOption(name.to_owned())),
            Some(e) => e,
        };
        if !element.is_optional() {
            given.push(name);
        }
    }

    if expected.len() != given.len() {
        debug!(
            "expected {} mandatory options, got {}",
            expected.len(),
            given.len()
        );
        return Err(validation_error(args, synopsis));
    }

    expected.sort_by(|a, b| a.key().cmp(b.key()));
    given.sort();
    for (e, g) in expected.iter().zip(given.iter()) {
        if e.key() != *g {
            debug!("expected mandatory option '{}', got '{}'", e.key(), g);
            return Err(validation_error(args, synopsis));
        }
    }

    Ok(())
}
