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
use crate::posix::expander::*;
use crate::posix::PosixToken;
use crate::synopsis::Synopsis;

fn group(s: &str) -> PosixToken {
    PosixToken::OptionGroup(s.to_owned())
}

fn value(s: &str) -> PosixToken {
    PosixToken::OptionValue(s.to_owned())
}

fn operand(s: &str) -> PosixToken {
    PosixToken::Operand(s.to_owned())
}

fn synopsis(template: &str) -> Synopsis {
    Synopsis::parse(template).unwrap()
}

#[test]
fn test_separate_optional_value() {
    crate::testing::init_test_logger();
    let s = synopsis("-x[f[ filename]]");
    assert_eq!(
        vec![group("x"), group("f"), value("argFilename")],
        expand("xf", Some("argFilename"), Some(&s)).unwrap()
    );
}

#[test]
fn test_fused_optional_value() {
    crate::testing::init_test_logger();
    let s = synopsis("-x[f[ filename]]");
    assert_eq!(
        vec![group("x"), group("f"), value("argFilename")],
        expand("xfargFilename", None, Some(&s)).unwrap()
    );
    // The rest of the group wins; the trailing argument is an operand.
    assert_eq!(
        vec![group("x"), group("f"), value("argFilename"), operand("other")],
        expand("xfargFilename", Some("other"), Some(&s)).unwrap()
    );
}

#[test]
fn test_optional_value_omitted() {
    crate::testing::init_test_logger();
    let s = synopsis("-x[f[ filename]]");
    assert_eq!(
        vec![group("x"), group("f")],
        expand("xf", None, Some(&s)).unwrap()
    );
}

#[test]
fn test_flag_leaves_trailing_operand() {
    crate::testing::init_test_logger();
    let s = synopsis("-x[f[ filename]]");
    assert_eq!(
        vec![group("x"), operand("positional")],
        expand("x", Some("positional"), Some(&s)).unwrap()
    );
}

#[test]
fn test_value_option_claims_rest_of_group() {
    crate::testing::init_test_logger();
    let s = synopsis("-x[f[ filename]]");
    // Once "f" claims a value, "x" is part of that value, not an option.
    assert_eq!(
        vec![group("f"), value("x")],
        expand("fx", None, Some(&s)).unwrap()
    );
}

#[test]
fn test_mandatory_value() {
    crate::testing::init_test_logger();
    let s = synopsis("-xf filename");

    assert_eq!(
        vec![group("x"), group("f"), value("README.md")],
        expand("xf", Some("README.md"), Some(&s)).unwrap()
    );
    assert_eq!(
        vec![group("x"), group("f"), value("README.md"), operand("other")],
        expand("xfREADME.md", Some("other"), Some(&s)).unwrap()
    );

    match expand("xf", None, Some(&s)) {
        Err(Error::MissingValue(name)) => assert_eq!("f", name),
        r => panic!("expected a missing value error, got {:?}", r),
    }
}

#[test]
fn test_unknown_option() {
    crate::testing::init_test_logger();
    let s = synopsis("-f filename");
    match expand("xf", Some("filename"), Some(&s)) {
        Err(Error::UnknownOption(c)) => assert_eq!('x', c),
        r => panic!("expected an unknown option error, got {:?}", r),
    }
}

#[test]
fn test_expand_without_synopsis() {
    crate::testing::init_test_logger();

    assert_eq!(
        vec![group("x"), group("f"), value("filename")],
        expand("xf", Some("filename"), None).unwrap()
    );
    assert_eq!(
        vec![group("x"), group("y"), group("z")],
        expand("xyz", None, None).unwrap()
    );
}

#[test]
fn test_group_expander_steps() {
    crate::testing::init_test_logger();
    let s = synopsis("-x[v]f filename");

    let mut expander = GroupExpander::new(&s, "vxfREADME.md", None);
    assert_eq!(Step::Continue, expander.step().unwrap());
    assert_eq!("xfREADME.md", expander.remaining());
    assert_eq!(Step::Continue, expander.step().unwrap());
    assert_eq!(Step::Claimed, expander.step().unwrap());
    assert_eq!("", expander.remaining());
    assert_eq!(Step::Exhausted, expander.step().unwrap());

    let (tokens, unclaimed) = expander.finish().unwrap();
    assert_eq!(
        vec![group("v"), group("x"), group("f"), value("README.md")],
        tokens
    );
    assert!(unclaimed.is_none());
}

#[test]
fn test_expand_all() {
    crate::testing::init_test_logger();
    let s = synopsis("-x[f filename]");

    assert_eq!(
        vec![group("x"), group("f"), value("file"), operand("positional")],
        expand_all(
            vec![group("x"), group("f"), value("file"), operand("positional")],
            Some(&s)
        )
        .unwrap()
    );

    // "foo" isn't a value of "-x", so it ends option processing.
    assert_eq!(
        vec![group("x"), operand("foo"), operand("-f"), operand("bar")],
        expand_all(
            vec![group("x"), value("foo"), group("f"), value("bar")],
            Some(&s)
        )
        .unwrap()
    );
}

#[test]
fn test_expand_all_stray_value() {
    crate::testing::init_test_logger();
    match expand_all(vec![value("stray")], None) {
        Err(Error::TokenSyntax(_)) => {}
        r => panic!("expected a token syntax error, got {:?}", r),
    }
}
