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

//! The synopsis grammar, informally:
//!
//! ```text
//! synopsis        := "-" "[" flag+ "]" | "-" flagGroup | operandList
//! flagGroup       := (optionalElement | flagWithOrWithoutValue)* operands
//! flagWithOrWithoutValue := flag (optionalValue | value)?
//! optionalElement := "[" flagWithOrWithoutValue "]"
//! optionalValue   := "[" value "]"
//! flag            := [a-z0-9]
//! value           := whitespace+ [^\[\]\s]+ | [A-Z] [^\[\]\s]*
//! operands        := (whitespace+ operand)* (whitespace+ "[" operand "]")*
//! operand         := [^-\[\]\s]+
//! ```
//!
//! Whitespace is never skipped implicitly: a space in front of a value is what
//! distinguishes a value which is a separate word from one fused onto its flag.

use crate::error::*;
use crate::synopsis::{Element, Synopsis};

/// Failure records where, and why, one grammar rule failed to match. When
/// several alternatives fail, the one which got furthest is the most useful to
/// report.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Failure {
    position: usize,
    expected: &'static str,
}

impl Failure {
    fn furthest(self, other: Failure) -> Failure {
        if other.position > self.position {
            other
        } else {
            self
        }
    }
}

impl From<Failure> for Error {
    fn from(f: Failure) -> Self {
        Error::SynopsisSyntax {
            position: f.position,
            message: format!("expected {}", f.expected),
        }
    }
}

/// Cursor is an immutable position within the template being parsed. Every
/// rule takes a Cursor by value and, on success, returns the Cursor just past
/// whatever it matched, so backtracking is just reusing an older Cursor.
#[derive(Clone, Copy, Debug)]
struct Cursor<'a> {
    input: &'a str,
    position: usize,
}

type Parsed<'a, T> = ::std::result::Result<(T, Cursor<'a>), Failure>;

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Cursor {
            input: input,
            position: 0,
        }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn at_end(&self) -> bool {
        self.position == self.input.len()
    }

    fn failure(&self, expected: &'static str) -> Failure {
        Failure {
            position: self.position,
            expected: expected,
        }
    }

    fn fail<T>(&self, expected: &'static str) -> Parsed<'a, T> {
        Err(self.failure(expected))
    }

    fn expect(self, c: char, expected: &'static str) -> Parsed<'a, ()> {
        match self.peek() {
            Some(p) if p == c => Ok((
                (),
                Cursor {
                    input: self.input,
                    position: self.position + c.len_utf8(),
                },
            )),
            _ => self.fail(expected),
        }
    }

    /// Match the longest (possibly empty) prefix whose characters all satisfy
    /// the given predicate.
    fn take_while<F: Fn(char) -> bool>(self, predicate: F) -> (&'a str, Cursor<'a>) {
        let len = self
            .rest()
            .find(|c: char| !predicate(c))
            .unwrap_or_else(|| self.rest().len());
        (
            &self.rest()[..len],
            Cursor {
                input: self.input,
                position: self.position + len,
            },
        )
    }

    /// Like take_while, but at least one character must match.
    fn take_while1<F: Fn(char) -> bool>(
        self,
        predicate: F,
        expected: &'static str,
    ) -> Parsed<'a, &'a str> {
        match self.take_while(predicate) {
            ("", _) => self.fail(expected),
            (s, next) => Ok((s, next)),
        }
    }
}

fn is_flag_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}

fn is_value_char(c: char) -> bool {
    c != '[' && c != ']' && !c.is_whitespace()
}

fn is_operand_char(c: char) -> bool {
    c != '-' && is_value_char(c)
}

fn whitespace(c: Cursor) -> Parsed<()> {
    c.take_while1(char::is_whitespace, "whitespace")
        .map(|(_, next)| ((), next))
}

fn flag(c: Cursor) -> Parsed<String> {
    match c.peek() {
        Some(f) if is_flag_char(f) => Ok((f.to_string(), c.expect(f, "flag")?.1)),
        _ => c.fail("a lowercase letter or digit flag"),
    }
}

/// A value is either a separate word (any first character, preceded by
/// whitespace), or fused directly onto its flag, in which case it must start
/// with an uppercase letter so it can't be confused with another flag.
fn value(c: Cursor) -> Parsed<Element> {
    let separate = whitespace(c).and_then(|(_, next)| next.take_while1(is_value_char, "a value"));
    let failure = match separate {
        Ok((token, next)) => return Ok((Element::Value(token.to_owned()), next)),
        Err(f) => f,
    };

    match c.peek() {
        Some(first) if first.is_ascii_uppercase() => {
            let (token, next) = c.take_while(is_value_char);
            Ok((Element::Value(token.to_owned()), next))
        }
        _ => Err(failure.furthest(c.failure("a value"))),
    }
}

fn optional_value(c: Cursor) -> Parsed<Element> {
    let (_, c) = c.expect('[', "'['")?;
    let (v, c) = value(c)?;
    let (_, c) = c.expect(']', "']'")?;
    Ok((Element::OptionalElement(Box::new(v)), c))
}

fn flag_with_or_without_value(c: Cursor) -> Parsed<Element> {
    let (name, c) = flag(c)?;
    match optional_value(c).or_else(|_| value(c)) {
        Ok((v, next)) => Ok((Element::FlagWithValue(name, Box::new(v)), next)),
        Err(_) => Ok((Element::Flag(name), c)),
    }
}

fn optional_element(c: Cursor) -> Parsed<Element> {
    let (_, c) = c.expect('[', "'['")?;
    let (e, c) = flag_with_or_without_value(c)?;
    let (_, c) = c.expect(']', "']'")?;
    Ok((Element::OptionalElement(Box::new(e)), c))
}

fn operand_name(c: Cursor) -> Parsed<String> {
    c.take_while1(is_operand_char, "an operand name")
        .map(|(name, next)| (name.to_owned(), next))
}

fn operand(c: Cursor) -> Parsed<Element> {
    operand_name(c).map(|(name, next)| (Element::Operand(name), next))
}

fn optional_operand(c: Cursor) -> Parsed<Element> {
    let (_, c) = c.expect('[', "'['")?;
    let (name, c) = operand_name(c)?;
    let (_, c) = c.expect(']', "']'")?;
    Ok((
        Element::OptionalElement(Box::new(Element::Operand(name))),
        c,
    ))
}

/// Parse a run of operands: mandatory ones first, then optional ones. Each
/// operand is preceded by whitespace, except that the very first one needn't
/// be if `leading_separator` is false.
fn operands<'a>(
    mut c: Cursor<'a>,
    leading_separator: bool,
) -> (Vec<Element>, Cursor<'a>, Failure) {
    let mut elements = vec![];
    let mut seen_optional = false;
    let mut last_failure = c.failure("end of synopsis");

    loop {
        let start = if elements.is_empty() && !leading_separator {
            Ok(((), c))
        } else {
            whitespace(c)
        };
        let attempt = start.and_then(|(_, after_ws)| {
            let opt = optional_operand(after_ws);
            if seen_optional {
                opt
            } else {
                opt.or_else(|f| operand(after_ws).map_err(|g| f.furthest(g)))
            }
        });

        match attempt {
            Ok((element, next)) => {
                seen_optional = element.is_optional();
                elements.push(element);
                c = next;
            }
            Err(f) => {
                last_failure = last_failure.furthest(f);
                return (elements, c, last_failure);
            }
        }
    }
}

fn flag_group(mut c: Cursor) -> (Vec<Element>, Cursor, Failure) {
    let mut elements = vec![];
    let last_failure = loop {
        let attempt = optional_element(c)
            .or_else(|f| flag_with_or_without_value(c).map_err(|g| f.furthest(g)));
        match attempt {
            Ok((element, next)) => {
                elements.push(element);
                c = next;
            }
            Err(f) => break f,
        }
    };

    let (operands, c, operand_failure) = operands(c, true);
    elements.extend(operands);
    (elements, c, last_failure.furthest(operand_failure))
}

/// The fast path for synopses consisting of nothing but optional flags, like
/// "-[xvf]".
fn optional_flags_only(c: Cursor) -> Parsed<Vec<Element>> {
    let (_, c) = c.expect('-', "'-'")?;
    let (_, c) = c.expect('[', "'['")?;
    let (names, c) = c.take_while1(is_flag_char, "a lowercase letter or digit flag")?;
    let (_, c) = c.expect(']', "']'")?;
    if !c.at_end() {
        return c.fail("end of synopsis");
    }
    let elements: Vec<Element> = names
        .chars()
        .map(|f| Element::OptionalElement(Box::new(Element::Flag(f.to_string()))))
        .collect();
    Ok((elements, c))
}

/// Parse the given synopsis template. The whole template must match; there
/// are no partial results.
pub fn parse(template: &str) -> Result<Synopsis> {
    let start = Cursor::new(template);
    if let Ok((elements, _)) = optional_flags_only(start) {
        debug!("parsed optional-flags-only synopsis '{}'", template);
        return Ok(Synopsis::new(elements));
    }

    let (elements, end, failure) = match start.expect('-', "'-'") {
        Ok((_, c)) => flag_group(c),
        Err(_) => operands(start, false),
    };

    if !end.at_end() {
        return Err(failure.furthest(end.failure("end of synopsis")).into());
    }
    if elements.is_empty() {
        return Err(Error::SynopsisSyntax {
            position: 0,
            message: "a synopsis needs at least one option or operand".to_owned(),
        });
    }

    debug!(
        "parsed synopsis '{}' into {} elements",
        template,
        elements.len()
    );
    Ok(Synopsis::new(elements))
}
