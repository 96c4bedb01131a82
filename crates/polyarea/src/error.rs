//! Parse diagnostics recorded by `TextReader` on its first failure.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected end of input at byte {offset}: expected {expected}")]
    UnexpectedEnd {
        offset: usize,
        expected: &'static str,
    },

    #[error("expected '{expected}' at byte {offset}, found '{found}'")]
    Delimiter {
        offset: usize,
        expected: char,
        found: char,
    },

    #[error("malformed {kind} at byte {offset}")]
    Scalar { offset: usize, kind: &'static str },

    #[error("unexpected trailing input at byte {offset}")]
    Trailing { offset: usize },
}

impl ParseError {
    /// Byte offset into the reader's input where the failure was detected.
    pub fn offset(&self) -> usize {
        match *self {
            ParseError::UnexpectedEnd { offset, .. }
            | ParseError::Delimiter { offset, .. }
            | ParseError::Scalar { offset, .. }
            | ParseError::Trailing { offset } => offset,
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;
