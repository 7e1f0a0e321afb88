//! Unit tests for error construction and formatting.

use super::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::lexer::tokenize;
use crate::lexer::tokens::TokenCategory;
use crate::Position;

#[test]
fn test_illegal_character_message() {
    let error = ErrorImpl::IllegalCharacter {
        character: "@".to_string(),
    };

    assert_eq!(error.to_string(), "illegal character: \"@\"");
}

#[test]
fn test_read_source_message() {
    let error = ErrorImpl::ReadSource {
        path: "missing.lang".to_string(),
        message: "No such file or directory".to_string(),
    };

    assert_eq!(
        error.to_string(),
        "failed to read source file \"missing.lang\": No such file or directory"
    );
}

#[test]
fn test_error_name_and_position() {
    let error = Error::new(
        ErrorImpl::IllegalCharacter {
            character: "@".to_string(),
        },
        Position { line: 3, column: 7 },
    );

    assert_eq!(error.get_error_name(), "IllegalCharacter");
    assert_eq!(error.get_position(), Position { line: 3, column: 7 });

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains('@')),
        ErrorTip::None => panic!("expected a suggestion"),
    }
}

#[test]
fn test_from_illegal_token() {
    let tokens = tokenize("var x = @".to_string());
    let illegal = tokens
        .iter()
        .find(|t| t.category == TokenCategory::Illegal)
        .unwrap();

    let error = Error::from_illegal_token(illegal).unwrap();
    assert_eq!(error.get_error_name(), "IllegalCharacter");
    assert_eq!(error.get_position(), Position { line: 1, column: 9 });
}

#[test]
fn test_from_illegal_token_rejects_other_categories() {
    let tokens = tokenize("x".to_string());

    assert_eq!(tokens[0].category, TokenCategory::Identifier);
    assert!(Error::from_illegal_token(&tokens[0]).is_none());
}
