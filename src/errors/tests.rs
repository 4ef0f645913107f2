//! Unit tests for error handling.
//!
//! This module contains tests for error types, stage classification and
//! error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip, Stage};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter {
            character: "@".to_string(),
        },
        Position(10, Rc::new("test.pas".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.pas".to_string()));
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "Semicolon".to_string(),
            found: "end".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_lexical_stage() {
    let unterminated = Error::new(
        ErrorImpl::UnterminatedComment,
        Position(0, Rc::new("test.pas".to_string())),
    );
    let invalid = Error::new(
        ErrorImpl::InvalidIdentifier {
            identifier: "_".to_string(),
        },
        Position(0, Rc::new("test.pas".to_string())),
    );

    assert_eq!(unterminated.stage(), Stage::Lexical);
    assert_eq!(invalid.stage(), Stage::Lexical);
}

#[test]
fn test_parse_stage() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "Dot".to_string(),
            found: "begin".to_string(),
        },
        Position(0, Rc::new("test.pas".to_string())),
    );

    assert_eq!(error.stage(), Stage::Parse);
    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

#[test]
fn test_semantic_stage() {
    let duplicate = Error::new(
        ErrorImpl::DuplicateDeclaration {
            variable: "x".to_string(),
        },
        Position(0, Rc::new("test.pas".to_string())),
    );
    let undeclared = Error::new(
        ErrorImpl::UndeclaredVariable {
            variable: "y".to_string(),
        },
        Position(0, Rc::new("test.pas".to_string())),
    );
    let mismatch = Error::new(
        ErrorImpl::TypeMismatch {
            left: "INTEGER".to_string(),
            right: "REAL".to_string(),
        },
        Position(0, Rc::new("test.pas".to_string())),
    );

    assert_eq!(duplicate.stage(), Stage::Semantic);
    assert_eq!(undeclared.stage(), Stage::Semantic);
    assert_eq!(mismatch.stage(), Stage::Semantic);
}

#[test]
fn test_runtime_stage() {
    let undefined = Error::new(
        ErrorImpl::UndefinedVariable {
            variable: "x".to_string(),
        },
        Position(0, Rc::new("test.pas".to_string())),
    );
    let division = Error::new(
        ErrorImpl::DivisionByZero,
        Position(0, Rc::new("test.pas".to_string())),
    );

    let overflow = Error::new(
        ErrorImpl::ArithmeticOverflow,
        Position(0, Rc::new("test.pas".to_string())),
    );

    assert_eq!(undefined.stage(), Stage::Runtime);
    assert_eq!(undefined.get_error_name(), "UndefinedVariable");
    assert_eq!(division.stage(), Stage::Runtime);
    assert_eq!(overflow.stage(), Stage::Runtime);
    assert_eq!(overflow.get_error_name(), "ArithmeticOverflow");
}

#[test]
fn test_stage_display() {
    assert_eq!(Stage::Lexical.to_string(), "lexical");
    assert_eq!(Stage::Parse.to_string(), "parse");
    assert_eq!(Stage::Semantic.to_string(), "semantic");
    assert_eq!(Stage::Runtime.to_string(), "runtime");
}

#[test]
fn test_error_display_message() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "Semicolon".to_string(),
            found: "end".to_string(),
        },
        Position(0, Rc::new("test.pas".to_string())),
    );

    assert_eq!(
        error.to_string(),
        "unexpected token: expected Semicolon, found \"end\""
    );
}

#[test]
fn test_error_tip() {
    let error = Error::new(
        ErrorImpl::UndeclaredVariable {
            variable: "foo".to_string(),
        },
        Position(0, Rc::new("test.pas".to_string())),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("foo")),
        ErrorTip::None => panic!("expected a suggestion"),
    }
}
