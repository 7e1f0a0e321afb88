use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::{Token, TokenCategory};
use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    /// Builds an error from an illegal-character token, for consumers
    /// that choose to treat one as fatal. Returns `None` for any other
    /// token category.
    pub fn from_illegal_token(token: &Token) -> Option<Self> {
        if token.category != TokenCategory::Illegal {
            return None;
        }

        Some(Error::new(
            ErrorImpl::IllegalCharacter {
                character: token.lexeme.clone().unwrap_or_default(),
            },
            token.position,
        ))
    }

    pub fn get_position(&self) -> Position {
        self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => "IllegalCharacter",
            ErrorImpl::ReadSource { .. } => "ReadSource",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { character } => ErrorTip::Suggestion(format!(
                "Character `{}` is not part of the language",
                character
            )),
            ErrorImpl::ReadSource { path, message } => {
                ErrorTip::Suggestion(format!("Could not read `{}`: {}", path, message))
            }
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("illegal character: {character:?}")]
    IllegalCharacter { character: String },
    #[error("failed to read source file {path:?}: {message}")]
    ReadSource { path: String, message: String },
}
