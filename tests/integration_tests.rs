//! Integration tests for end-to-end scanning.
//!
//! These tests drive whole programs through the public API: the lazy
//! `Tokenizer` iterator, the `tokenize` convenience wrapper, and the
//! error bridge used by consumers that treat illegal characters as
//! fatal.

use lexer::{
    errors::errors::Error,
    lexer::{
        lexer::{tokenize, Tokenizer},
        tokens::TokenCategory,
    },
};

#[test]
fn test_scan_simple_program() {
    let source = "var x = 42;".to_string();
    let tokens = tokenize(source);

    assert_eq!(tokens.len(), 6); // var, x, =, 42, ;, EOF
    assert_eq!(tokens[0].category, TokenCategory::While); // keyword table entry for `var`
    assert_eq!(tokens[1].category, TokenCategory::Identifier);
    assert_eq!(tokens[1].lexeme.as_deref(), Some("x"));
    assert_eq!(tokens[2].category, TokenCategory::Assign);
    assert_eq!(tokens[3].category, TokenCategory::Integer);
    assert_eq!(tokens[3].lexeme.as_deref(), Some("42"));
    assert_eq!(tokens[4].category, TokenCategory::Semicolon);
    assert_eq!(tokens[5].category, TokenCategory::EOF);
}

#[test]
fn test_scan_control_flow_program() {
    let source = r#"
if x {
    x = x + 1;
} else {
    x = x - 1;
}
"#
    .to_string();
    let tokens = tokenize(source);
    let categories: Vec<TokenCategory> = tokens.iter().map(|t| t.category).collect();

    assert_eq!(
        categories,
        vec![
            TokenCategory::Then, // `if`
            TokenCategory::Identifier,
            TokenCategory::BracketOpen,
            TokenCategory::Identifier,
            TokenCategory::Assign,
            TokenCategory::Identifier,
            TokenCategory::Plus,
            TokenCategory::Integer,
            TokenCategory::Semicolon,
            TokenCategory::ParenClose, // `}` shares the `)` rule
            TokenCategory::Call,       // `else`
            TokenCategory::BracketOpen,
            TokenCategory::Identifier,
            TokenCategory::Assign,
            TokenCategory::Identifier,
            TokenCategory::Minus,
            TokenCategory::Integer,
            TokenCategory::Semicolon,
            TokenCategory::ParenClose,
            TokenCategory::EOF,
        ]
    );
}

#[test]
fn test_scan_literals_and_comments() {
    let source = r#"
// radix forms
var mask = 0b101 | 0o17 | 0x1A;
/* block
   comment */
var s = "text";
var flag = #f;
"#
    .to_string();
    let tokens = tokenize(source);

    let literals: Vec<TokenCategory> = tokens
        .iter()
        .filter(|t| {
            matches!(
                t.category,
                TokenCategory::BinaryInteger
                    | TokenCategory::OctalInteger
                    | TokenCategory::HexInteger
                    | TokenCategory::String
                    | TokenCategory::False
            )
        })
        .map(|t| t.category)
        .collect();

    assert_eq!(
        literals,
        vec![
            TokenCategory::BinaryInteger,
            TokenCategory::OctalInteger,
            TokenCategory::HexInteger,
            TokenCategory::String,
            TokenCategory::False,
        ]
    );

    let illegal = tokens
        .iter()
        .any(|t| t.category == TokenCategory::Illegal);
    assert!(!illegal);
}

#[test]
fn test_consumer_can_pull_lazily_until_eof() {
    let mut tokenizer = Tokenizer::new("a b c".to_string());
    let mut pulled = 0;

    loop {
        let token = tokenizer.next().unwrap();
        pulled += 1;

        if token.category == TokenCategory::EOF {
            break;
        }
    }

    assert_eq!(pulled, 4);
    assert!(tokenizer.next().is_none());
}

#[test]
fn test_illegal_character_is_reported_not_fatal() {
    let source = "var x = @;".to_string();
    let tokens = tokenize(source);

    // The scan runs to completion; `@` is an ordinary token.
    assert_eq!(tokens.last().unwrap().category, TokenCategory::EOF);

    let illegal = tokens
        .iter()
        .find(|t| t.category == TokenCategory::Illegal)
        .unwrap();
    assert_eq!(illegal.lexeme.as_deref(), Some("@"));

    // Consumers that treat it as fatal can turn it into an error.
    let error = Error::from_illegal_token(illegal).unwrap();
    assert_eq!(error.get_error_name(), "IllegalCharacter");
    assert_eq!(error.get_position().line, 1);
    assert_eq!(error.get_position().column, 9);
}

#[test]
fn test_positions_track_multiline_program() {
    let source = "var a\nvar bb\n  var c".to_string();
    let tokens = tokenize(source);

    assert_eq!(tokens[0].position.line, 1);
    assert_eq!(tokens[0].position.column, 1);
    assert_eq!(tokens[1].position.column, 5);
    assert_eq!(tokens[2].position.line, 2);
    assert_eq!(tokens[2].position.column, 1);
    assert_eq!(tokens[3].position.column, 5);
    assert_eq!(tokens[4].position.line, 3);
    assert_eq!(tokens[4].position.column, 3);
    assert_eq!(tokens[5].position.column, 7);

    let eof = tokens.last().unwrap();
    assert_eq!(eof.category, TokenCategory::EOF);
    assert_eq!(eof.position.line, 3);
    assert_eq!(eof.position.column, 8);
}

#[test]
fn test_scan_empty_source() {
    let tokens = tokenize("".to_string());

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].category, TokenCategory::EOF);
}
