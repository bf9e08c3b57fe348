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

#[cfg(test)]
mod grammar;

use crate::synopsis::*;

fn flag(name: &str) -> Element {
    Element::Flag(name.to_owned())
}

fn optional(element: Element) -> Element {
    Element::OptionalElement(Box::new(element))
}

fn with_value(name: &str, value: &str) -> Element {
    Element::FlagWithValue(name.to_owned(), Box::new(Element::Value(value.to_owned())))
}

#[test]
fn test_element_predicates() {
    crate::testing::init_test_logger();

    let mandatory = with_value("f", "filename");
    assert!(mandatory.is_option());
    assert!(!mandatory.is_operand());
    assert!(!mandatory.is_optional());
    assert!(mandatory.takes_mandatory_value());
    assert!(!mandatory.takes_optional_value());

    let optional_value = optional(Element::FlagWithValue(
        "f".to_owned(),
        Box::new(optional(Element::Value("filename".to_owned()))),
    ));
    assert!(optional_value.is_option());
    assert!(optional_value.is_optional());
    assert!(optional_value.takes_optional_value());
    assert!(!optional_value.takes_mandatory_value());
    assert_eq!("f", optional_value.key());

    let operand = optional(Element::Operand("file".to_owned()));
    assert!(operand.is_operand());
    assert!(!operand.is_option());
    assert_eq!(&Element::Operand("file".to_owned()), operand.unwrap_optional());
}

#[test]
fn test_element_display() {
    crate::testing::init_test_logger();

    assert_eq!("x", flag("x").to_string());
    assert_eq!("[x]", optional(flag("x")).to_string());
    assert_eq!("f filename", with_value("f", "filename").to_string());
    assert_eq!(" file", Element::Operand("file".to_owned()).to_string());
    assert_eq!(
        " [file]",
        optional(Element::Operand("file".to_owned())).to_string()
    );
}

#[test]
fn test_mandatory_and_optional_elements() {
    crate::testing::init_test_logger();

    let synopsis = Synopsis::new(vec![
        flag("x"),
        optional(flag("v")),
        with_value("f", "filename"),
        optional(Element::Operand("extra".to_owned())),
    ]);
    let (mandatory, optional_elements) = synopsis.mandatory_and_optional_elements();
    assert_eq!(vec![&flag("x"), &with_value("f", "filename")], mandatory);
    assert_eq!(2, optional_elements.len());
    assert_eq!("v", optional_elements[0].key());
    assert_eq!("extra", optional_elements[1].key());
}

#[test]
fn test_find_option() {
    crate::testing::init_test_logger();

    let synopsis = Synopsis::new(vec![
        flag("x"),
        optional(with_value("f", "filename")),
        Element::Operand("f".to_owned()),
    ]);
    assert_eq!(Some(&flag("x")), synopsis.find_option('x'));
    assert_eq!("f", synopsis.find_option('f').unwrap().key());
    assert!(synopsis.find_option('f').unwrap().is_option());
    assert!(synopsis.find_option('y').is_none());

    assert_eq!(Some(&flag("x")), synopsis.find_named_option("x"));
    assert!(synopsis.find_named_option("xf").is_none());
    assert!(synopsis.find_named_option("").is_none());
}

#[test]
fn test_operands() {
    crate::testing::init_test_logger();

    let synopsis = Synopsis::new(vec![
        flag("x"),
        Element::Operand("source".to_owned()),
        optional(Element::Operand("dest".to_owned())),
    ]);
    assert_eq!(vec!["source", "dest"], synopsis.operands());
    assert_eq!(3, synopsis.len());
    assert!(!synopsis.is_empty());
    assert!(Synopsis::default().is_empty());
}
