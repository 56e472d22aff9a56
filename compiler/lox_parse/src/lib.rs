//! Recursive descent parser for Lox.
//!
//! Produces a list of [`Stmt`]s from a [`TokenList`]. Syntax errors do not
//! stop the parse: the parser records the error, resynchronizes at the next
//! statement boundary, and keeps going so one run reports every error.

mod cursor;
mod error;
mod grammar;
mod recovery;

pub use cursor::Cursor;
pub use error::{ErrorLocation, ParseError};
pub use recovery::synchronize;

use lox_ir::{Expr, StringInterner, Stmt, Token, TokenKind, TokenList};

/// Maximum number of parameters or call arguments.
pub const MAX_ARGUMENTS: usize = 255;

type ParseResult<T> = Result<T, ParseError>;

/// Statements plus every syntax error found.
///
/// When `errors` is non-empty the statements are incomplete and should not
/// be executed.
#[derive(Clone, Debug, Default)]
pub struct ParseOutput {
    pub statements: Vec<Stmt>,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    /// Errors reported without unwinding, plus those recovered from.
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens, interner),
            errors: Vec::new(),
        }
    }

    /// Parse a whole program.
    pub fn parse_program(mut self) -> ParseOutput {
        let mut statements = Vec::new();
        while !self.cursor.is_at_end() {
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }
        ParseOutput {
            statements,
            errors: self.errors,
        }
    }

    /// Parse a single expression that must span the whole input.
    pub fn parse_single_expression(mut self) -> Result<Expr, Vec<ParseError>> {
        let result = self.expression().and_then(|expr| {
            if self.cursor.is_at_end() {
                Ok(expr)
            } else {
                Err(self.error_at_current("Expect end of expression."))
            }
        });
        match result {
            Ok(expr) if self.errors.is_empty() => Ok(expr),
            Ok(_) => Err(self.errors),
            Err(err) => {
                self.errors.push(err);
                Err(self.errors)
            }
        }
    }

    // Token helpers

    fn check(&self, kind: &TokenKind) -> bool {
        self.cursor.check(kind)
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        self.cursor.eat_any(&[kind]).is_some()
    }

    /// Consume a token of `kind` or fail with `message` at the current token.
    fn expect(&mut self, kind: &TokenKind, message: &str) -> ParseResult<Token> {
        if self.check(kind) {
            Ok(self.cursor.advance())
        } else {
            Err(self.error_at_current(message))
        }
    }

    fn error_at(&self, token: &Token, message: &str) -> ParseError {
        ParseError::at(token, self.cursor.interner(), message)
    }

    fn error_at_current(&self, message: &str) -> ParseError {
        self.error_at(&self.cursor.current(), message)
    }

    /// Record an error that does not disturb the parse.
    fn report(&mut self, error: ParseError) {
        tracing::debug!(%error, "recoverable syntax error");
        self.errors.push(error);
    }
}

/// Parse a token stream into statements.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse(tokens: &TokenList, interner: &StringInterner) -> ParseOutput {
    let output = Parser::new(tokens, interner).parse_program();
    tracing::debug!(
        statements = output.statements.len(),
        errors = output.errors.len(),
        "parsed program"
    );
    output
}

/// Parse a token stream holding one bare expression.
pub fn parse_expression(
    tokens: &TokenList,
    interner: &StringInterner,
) -> Result<Expr, Vec<ParseError>> {
    Parser::new(tokens, interner).parse_single_expression()
}

#[cfg(test)]
mod tests;
