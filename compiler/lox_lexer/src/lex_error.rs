//! Scanner errors.

use thiserror::Error;

/// What went wrong while scanning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    #[error("Unexpected character.")]
    UnexpectedCharacter,
    #[error("Unterminated string.")]
    UnterminatedString,
    #[error("Unterminated block comment.")]
    UnterminatedBlockComment,
}

/// A scanner error with the line it was found on.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("[line {line}] Error: {kind}")]
pub struct LexError {
    pub line: u32,
    pub kind: LexErrorKind,
}

impl LexError {
    pub fn new(line: u32, kind: LexErrorKind) -> Self {
        LexError { line, kind }
    }
}
