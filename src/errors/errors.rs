use std::fmt::Display;

use thiserror::Error;

use crate::{
    lexer::tokens::{Token, TokenKind},
    Position,
};

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

    /// Builds the diagnostic a token stands for, if any.
    ///
    /// An unknown token is reported as unrecognised even when its lexeme was
    /// also truncated.
    pub fn from_token(token: &Token) -> Option<Self> {
        let error_impl = if token.kind == TokenKind::Unknown {
            ErrorImpl::UnrecognisedToken {
                token: token.lexeme.clone(),
            }
        } else if token.is_truncated() {
            ErrorImpl::LexemeTruncated {
                lexeme: token.lexeme.clone(),
                length: token.source_len(),
                kept: token.lexeme.len(),
            }
        } else {
            return None;
        };

        Some(Error::new(error_impl, token.span.start.clone()))
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::LexemeTruncated { .. } => "LexemeTruncated",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { token } => {
                ErrorTip::Suggestion(format!("Unrecognised character `{}`", token.escape_debug()))
            }
            ErrorImpl::LexemeTruncated {
                lexeme,
                length,
                kept,
            } => ErrorTip::Suggestion(format!(
                "`{}...` is {} bytes long, only the first {} are kept",
                lexeme, length, kept
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at byte {} of {}", self.internal_error, self.position.0, self.position.1)
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

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("lexeme truncated: {lexeme:?} ({length} bytes, {kept} kept)")]
    LexemeTruncated {
        lexeme: String,
        length: usize,
        kept: usize,
    },
}
