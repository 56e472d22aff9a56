//! Parse error types.

use std::fmt;

use lox_ir::{StringInterner, Token, TokenKind};
use thiserror::Error;

/// Where in the source a syntax error was detected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorLocation {
    AtEnd,
    AtLexeme(String),
}

impl fmt::Display for ErrorLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorLocation::AtEnd => write!(f, " at end"),
            ErrorLocation::AtLexeme(lexeme) => write!(f, " at '{lexeme}'"),
        }
    }
}

/// A syntax error.
///
/// Displays in the interpreter's report format:
/// `[line 3] Error at 'foo': Expect ';' after expression.`
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("[line {line}] Error{location}: {message}")]
pub struct ParseError {
    pub line: u32,
    pub location: ErrorLocation,
    pub message: String,
}

impl ParseError {
    /// Error reported at `token`.
    pub fn at(token: &Token, interner: &StringInterner, message: impl Into<String>) -> Self {
        let location = if token.kind == TokenKind::Eof {
            ErrorLocation::AtEnd
        } else {
            ErrorLocation::AtLexeme(interner.lookup(token.lexeme).to_owned())
        };
        ParseError {
            line: token.line,
            location,
            message: message.into(),
        }
    }
}
