use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("lexical error at line {}, column {}: {}", .position.line, .position.column, .internal_error)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
    offset: usize,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position, offset: usize) -> Self {
        Error {
            internal_error: error_impl,
            position,
            offset,
        }
    }

    /// Line and column as counted by the lexer.
    pub fn get_position(&self) -> &Position {
        &self.position
    }

    /// Byte offset of the offending character in the source. Unlike the
    /// line counter, it is not affected by newlines inside block comments.
    pub fn get_offset(&self) -> usize {
        self.offset
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
        }
    }

    /// The character no rule could scan.
    pub fn get_token(&self) -> char {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { token } => *token,
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { token: quote @ ('"' | '\'') } => {
                ErrorTip::Suggestion(format!(
                    "unterminated string literal, no closing `{}` found",
                    quote
                ))
            }
            ErrorImpl::UnrecognisedToken { token: '\r' } => ErrorTip::Suggestion(String::from(
                "carriage returns are not supported, use `\\n` line endings",
            )),
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
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

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unexpected character {token:?}")]
    UnrecognisedToken { token: char },
}
