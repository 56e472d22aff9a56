//! Scanner for Lox source text.
//!
//! Converts source text into a [`TokenList`] terminated by `Eof`. Scanning
//! never stops at the first problem: every lexical error in the source is
//! collected into [`LexOutput::errors`] and the offending text is dropped
//! from the token stream.

mod lex_error;
mod raw_token;

use logos::Logos;
use lox_ir::{StringInterner, Token, TokenKind, TokenList};

pub use lex_error::{LexError, LexErrorKind};
use raw_token::RawToken;

/// Tokens plus any errors found while scanning.
#[derive(Clone, Debug, Default)]
pub struct LexOutput {
    pub tokens: TokenList,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Tracks the 1-based line number of byte offsets, which only move forward.
struct LineTracker<'src> {
    source: &'src str,
    offset: usize,
    line: u32,
}

impl<'src> LineTracker<'src> {
    fn new(source: &'src str) -> Self {
        LineTracker {
            source,
            offset: 0,
            line: 1,
        }
    }

    /// Line of the byte at `pos`.
    fn line_at(&mut self, pos: usize) -> u32 {
        if pos > self.offset {
            let skipped = &self.source.as_bytes()[self.offset..pos];
            let newlines = skipped.iter().filter(|&&b| b == b'\n').count();
            self.line = self
                .line
                .saturating_add(u32::try_from(newlines).unwrap_or(u32::MAX));
            self.offset = pos;
        }
        self.line
    }
}

/// Scan `source` into tokens, interning identifiers and string contents.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex(source: &str, interner: &StringInterner) -> LexOutput {
    let mut output = LexOutput::default();
    let mut lines = LineTracker::new(source);
    let mut raw = RawToken::lexer(source);

    while let Some(result) = raw.next() {
        let span = raw.span();
        let slice = raw.slice();
        let line = lines.line_at(span.start);

        let kind = match result {
            Ok(RawToken::BlockComment) => continue,
            Ok(RawToken::UnterminatedBlockComment) => {
                output
                    .errors
                    .push(LexError::new(line, LexErrorKind::UnterminatedBlockComment));
                continue;
            }
            Ok(RawToken::UnterminatedString) => {
                output
                    .errors
                    .push(LexError::new(line, LexErrorKind::UnterminatedString));
                continue;
            }
            Ok(token) => convert(token, slice, interner),
            Err(()) => {
                output
                    .errors
                    .push(LexError::new(line, LexErrorKind::UnexpectedCharacter));
                continue;
            }
        };

        output
            .tokens
            .push(Token::new(kind, interner.intern(slice), line));
    }

    let eof_line = lines.line_at(source.len());
    output
        .tokens
        .push(Token::new(TokenKind::Eof, lox_ir::Name::EMPTY, eof_line));

    tracing::debug!(
        tokens = output.tokens.len(),
        errors = output.errors.len(),
        "scanned source"
    );
    output
}

/// Convert a raw token into a `TokenKind`, classifying keywords.
fn convert(raw: RawToken, slice: &str, interner: &StringInterner) -> TokenKind {
    match raw {
        RawToken::LeftParen => TokenKind::LeftParen,
        RawToken::RightParen => TokenKind::RightParen,
        RawToken::LeftBrace => TokenKind::LeftBrace,
        RawToken::RightBrace => TokenKind::RightBrace,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Star => TokenKind::Star,
        RawToken::Bang => TokenKind::Bang,
        RawToken::BangEqual => TokenKind::BangEqual,
        RawToken::Equal => TokenKind::Equal,
        RawToken::EqualEqual => TokenKind::EqualEqual,
        RawToken::Greater => TokenKind::Greater,
        RawToken::GreaterEqual => TokenKind::GreaterEqual,
        RawToken::Less => TokenKind::Less,
        RawToken::LessEqual => TokenKind::LessEqual,
        RawToken::Number(value) => TokenKind::Number(value),
        RawToken::String => {
            // Strip the quotes; there are no escape sequences
            let content = &slice[1..slice.len() - 1];
            TokenKind::String(interner.intern(content))
        }
        RawToken::Identifier => TokenKind::keyword(slice).unwrap_or(TokenKind::Identifier),
        // Filtered out by `lex` before conversion
        RawToken::BlockComment
        | RawToken::UnterminatedBlockComment
        | RawToken::UnterminatedString => TokenKind::Eof,
    }
}
