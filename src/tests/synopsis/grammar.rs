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

use crate::error::Error;
use crate::synopsis::grammar::parse;
use crate::synopsis::*;

fn flag(name: &str) -> Element {
    Element::Flag(name.to_owned())
}

fn value(token: &str) -> Element {
    Element::Value(token.to_owned())
}

fn operand(name: &str) -> Element {
    Element::Operand(name.to_owned())
}

fn optional(element: Element) -> Element {
    Element::OptionalElement(Box::new(element))
}

fn with_value(name: &str, v: Element) -> Element {
    Element::FlagWithValue(name.to_owned(), Box::new(v))
}

fn assert_parses_to(template: &str, expected: Vec<Element>) {
    let synopsis = parse(template).unwrap();
    assert_eq!(expected.as_slice(), synopsis.elements());
}

fn assert_syntax_error_at(template: &str, expected_position: usize) {
    match parse(template) {
        Err(Error::SynopsisSyntax { position, .. }) => assert_eq!(expected_position, position),
        r => panic!("expected a synopsis syntax error, got {:?}", r),
    }
}

#[test]
fn test_flag_and_separate_value() {
    crate::testing::init_test_logger();
    assert_parses_to(
        "-xf filename",
        vec![flag("x"), with_value("f", value("filename"))],
    );
}

#[test]
fn test_nested_optional_value() {
    crate::testing::init_test_logger();
    assert_parses_to(
        "-x[f[ filename]]",
        vec![
            flag("x"),
            optional(with_value("f", optional(value("filename")))),
        ],
    );
}

#[test]
fn test_fused_value() {
    crate::testing::init_test_logger();
    assert_parses_to("-fFILE", vec![with_value("f", value("FILE"))]);
    assert_parses_to(
        "-x[fFILE]",
        vec![flag("x"), optional(with_value("f", value("FILE")))],
    );
}

#[test]
fn test_optional_flags_only() {
    crate::testing::init_test_logger();
    assert_parses_to(
        "-[xvf]",
        vec![optional(flag("x")), optional(flag("v")), optional(flag("f"))],
    );
}

#[test]
fn test_flags_and_operands() {
    crate::testing::init_test_logger();
    assert_parses_to(
        "-x[v]f filename source [dest]",
        vec![
            flag("x"),
            optional(flag("v")),
            with_value("f", value("filename")),
            operand("source"),
            optional(operand("dest")),
        ],
    );
    assert_parses_to("-[x] source", vec![optional(flag("x")), operand("source")]);
}

#[test]
fn test_operands_only() {
    crate::testing::init_test_logger();
    assert_parses_to(
        "source dest [extra]",
        vec![operand("source"), operand("dest"), optional(operand("extra"))],
    );
    assert_parses_to("1 2 3", vec![operand("1"), operand("2"), operand("3")]);
}

#[test]
fn test_digit_flags() {
    crate::testing::init_test_logger();
    assert_parses_to("-1[2]", vec![flag("1"), optional(flag("2"))]);
}

#[test]
fn test_invalid_synopses() {
    crate::testing::init_test_logger();

    assert_syntax_error_at("", 0);
    assert_syntax_error_at("-", 0);
    assert_syntax_error_at("-X", 1);
    assert_syntax_error_at("-x[f", 4);
    assert_syntax_error_at("-[]", 2);
    // Trailing whitespace isn't a separator for anything.
    assert!(parse("-x ").is_err());
    // Optional operands can't precede mandatory ones.
    assert!(parse("[a] b").is_err());
    assert!(parse("-xf filename [a] b").is_err());
}

#[test]
fn test_display_round_trip() {
    crate::testing::init_test_logger();

    for template in &[
        "-xf filename",
        "-x[f[ filename]]",
        "-fFILE",
        "-[xf]",
        "-x[v]f filename source [dest]",
        "source dest [extra]",
        "-f[Name]",
        "-f filename[x] src",
        "- src",
    ] {
        let synopsis = parse(template).unwrap();
        let rendered = synopsis.to_string();
        assert_eq!(synopsis, parse(rendered.as_str()).unwrap(), "{}", rendered);
    }

    assert_eq!("-xf filename", parse("-xf filename").unwrap().to_string());
    assert_eq!("-x[f[ filename]]", parse("-x[f[ filename]]").unwrap().to_string());
    assert_eq!("source [dest]", parse("source [dest]").unwrap().to_string());
    assert_eq!("-f[ Name]", parse("-f[Name]").unwrap().to_string());
    assert_eq!("-f filename[x] src", parse("-f filename[x] src").unwrap().to_string());
    assert_eq!("src", parse("- src").unwrap().to_string());
}

#[test]
fn test_from_str() {
    crate::testing::init_test_logger();

    let synopsis: Synopsis = "-xf filename".parse().unwrap();
    assert_eq!(Synopsis::parse("-xf filename").unwrap(), synopsis);
    assert!("-X".parse::<Synopsis>().is_err());
}
