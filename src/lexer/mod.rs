//! Lexical analysis module.
//!
//! This module contains the tokenizer that converts source text into a
//! stream of classified tokens for parsing. It handles:
//!
//! - Priority-ordered regex rule matching (first match wins, not
//!   longest match)
//! - Recognition of keywords, identifiers, literals, and operators
//! - Line/column position tracking
//! - Comments and whitespace handling
//! - Illegal characters, surfaced as ordinary tokens rather than errors

pub mod lexer;
pub mod tokens;
