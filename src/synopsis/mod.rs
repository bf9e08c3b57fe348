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

/// grammar implements the recursive-descent parser for synopsis templates.
pub mod grammar;

use crate::error::*;
use std::fmt;
use std::str::FromStr;

/// Element is a single node of a parsed synopsis.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Element {
    /// A single-character option which takes no value.
    Flag(String),
    /// A value placeholder. This only ever appears nested inside a
    /// FlagWithValue (possibly wrapped in an OptionalElement).
    Value(String),
    /// An option which takes a value. The nested element is either a Value
    /// (the value is mandatory whenever the option is present) or an
    /// OptionalElement wrapping a Value.
    FlagWithValue(String, Box<Element>),
    /// Marks the wrapped element as not required on the command line.
    OptionalElement(Box<Element>),
    /// A named positional slot.
    Operand(String),
}

impl Element {
    /// The string elements are compared by: the name of flags and operands,
    /// or the token of a value. Optional wrappers are transparent.
    pub fn key(&self) -> &str {
        match self {
            Element::Flag(name) => name,
            Element::Value(token) => token,
            Element::FlagWithValue(name, _) => name,
            Element::OptionalElement(element) => element.key(),
            Element::Operand(name) => name,
        }
    }

    /// Returns the element with any OptionalElement wrapper removed.
    pub fn unwrap_optional(&self) -> &Element {
        match self {
            Element::OptionalElement(element) => element.unwrap_optional(),
            e => e,
        }
    }

    /// Returns true if this element is wrapped in an OptionalElement.
    pub fn is_optional(&self) -> bool {
        match self {
            Element::OptionalElement(_) => true,
            _ => false,
        }
    }

    /// Returns true if this element (ignoring optionality) describes an
    /// option, as opposed to an operand or a bare value.
    pub fn is_option(&self) -> bool {
        match self.unwrap_optional() {
            Element::Flag(_) | Element::FlagWithValue(_, _) => true,
            _ => false,
        }
    }

    /// Returns true if this element (ignoring optionality) describes an
    /// operand.
    pub fn is_operand(&self) -> bool {
        match self.unwrap_optional() {
            Element::Operand(_) => true,
            _ => false,
        }
    }

    /// Returns true if this element is an option which takes a value that may
    /// be omitted, and which may be fused onto the option with no separator.
    pub fn takes_optional_value(&self) -> bool {
        match self.unwrap_optional() {
            Element::FlagWithValue(_, value) => value.is_optional(),
            _ => false,
        }
    }

    /// Returns true if this element is an option whose value must be present
    /// whenever the option itself is.
    pub fn takes_mandatory_value(&self) -> bool {
        match self.unwrap_optional() {
            Element::FlagWithValue(_, value) => !value.is_optional(),
            _ => false,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Element::Flag(name) => write!(f, "{}", name),
            // A leading space is always a legal separator, whatever the
            // value's first character is.
            Element::Value(token) => write!(f, " {}", token),
            Element::FlagWithValue(name, value) => write!(f, "{}{}", name, value),
            Element::OptionalElement(element) => match element.as_ref() {
                Element::Operand(name) => write!(f, " [{}]", name),
                e => write!(f, "[{}]", e),
            },
            Element::Operand(name) => write!(f, " {}", name),
        }
    }
}

/// Synopsis is a parsed synopsis template. Elements are kept in declaration
/// order, which is not necessarily the order they appear on a command line.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Synopsis {
    elements: Vec<Element>,
}

impl Synopsis {
    /// Construct a Synopsis directly from the given elements.
    pub fn new(elements: Vec<Element>) -> Self {
        Synopsis { elements: elements }
    }

    /// Parse a synopsis template. This is equivalent to `template.parse()`.
    pub fn parse(template: &str) -> Result<Synopsis> {
        grammar::parse(template)
    }

    /// The elements of this synopsis, in declaration order.
    pub fn elements(&self) -> &[Element] {
        self.elements.as_slice()
    }

    /// Returns the number of elements in this synopsis.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if this synopsis has no elements at all.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Partition this synopsis' elements into (mandatory, optional), keeping
    /// their relative order.
    pub fn mandatory_and_optional_elements(&self) -> (Vec<&Element>, Vec<&Element>) {
        self.elements.iter().partition(|e| !e.is_optional())
    }

    /// The names of every operand (optional or not), in declaration order.
    pub fn operands(&self) -> Vec<&str> {
        self.elements
            .iter()
            .filter(|e| e.is_operand())
            .map(|e| e.key())
            .collect()
    }

    /// Locate the option with the given single-character name. The returned
    /// element may be wrapped in an OptionalElement.
    pub fn find_option(&self, name: char) -> Option<&Element> {
        self.elements
            .iter()
            .filter(|e| e.is_option())
            .find(|e| e.key().chars().eq(Some(name)))
    }

    /// Locate the option with the given name. This is a convenience for
    /// looking up names which came from parsed arguments.
    pub fn find_named_option(&self, name: &str) -> Option<&Element> {
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.find_option(c),
            _ => None,
        }
    }
}

impl fmt::Display for Synopsis {
    /// Renders this synopsis back into canonical template form. Parsing the
    /// result yields an equal Synopsis.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let has_options = self.elements.iter().any(|e| e.is_option());
        if has_options {
            f.write_str("-")?;
            for element in &self.elements {
                write!(f, "{}", element)?;
            }
            return Ok(());
        }

        // An operand-only synopsis has no leading dash, so there is nothing
        // to separate the first operand from.
        let rendered: String = self.elements.iter().map(|e| e.to_string()).collect();
        f.write_str(rendered.trim_start())
    }
}

impl FromStr for Synopsis {
    type Err = Error;

    fn from_str(s: &str) -> Result<Synopsis> {
        grammar::parse(s)
    }
}
