//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::lexer::tokenize;
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(10, Rc::new("test.house".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.house".to_string()));
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "#".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(*error.get_position().1, "test.house");
}

#[test]
fn test_unrecognised_token_tip() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "\0".to_string(),
        },
        Position::null(),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Unrecognised character `\\0`"),
        ErrorTip::None => panic!("expected a suggestion"),
    }
}

#[test]
fn test_lexeme_truncated_error() {
    let error = Error::new(
        ErrorImpl::LexemeTruncated {
            lexeme: "abcdefghijklmn".to_string(),
            length: 20,
            kept: 14,
        },
        Position(0, Rc::new("test.house".to_string())),
    );

    assert_eq!(error.get_error_name(), "LexemeTruncated");
    assert_eq!(
        error.get_tip().to_string(),
        "`abcdefghijklmn...` is 20 bytes long, only the first 14 are kept"
    );
    assert_eq!(
        error.to_string(),
        "lexeme truncated: \"abcdefghijklmn\" (20 bytes, 14 kept) at byte 0 of test.house"
    );
}

#[test]
fn test_error_from_tokens() {
    let tokens = tokenize("x ? supercalifragilistic".to_string(), Some("t.house".to_string()));

    assert!(Error::from_token(&tokens[0]).is_none());

    let unknown = Error::from_token(&tokens[1]).unwrap();
    assert_eq!(
        *unknown.get_error(),
        ErrorImpl::UnrecognisedToken {
            token: "?".to_string()
        }
    );
    assert_eq!(unknown.get_position().0, 2);

    let truncated = Error::from_token(&tokens[2]).unwrap();
    assert_eq!(
        *truncated.get_error(),
        ErrorImpl::LexemeTruncated {
            lexeme: "supercalifragi".to_string(),
            length: 20,
            kept: 14,
        }
    );

    assert!(Error::from_token(&tokens[3]).is_none());
}

#[test]
fn test_tip_display() {
    assert_eq!(ErrorTip::None.to_string(), "");
    assert_eq!(ErrorTip::Suggestion("check this".to_string()).to_string(), "check this");
}
