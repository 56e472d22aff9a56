//! Panic-mode error recovery.

use lox_ir::TokenKind;

use crate::cursor::Cursor;

/// Skip tokens until a likely statement boundary.
///
/// Stops just after a `;` or just before a token that starts a declaration
/// or statement. The token that caused the error is always consumed so the
/// parser cannot loop on it.
pub fn synchronize(cursor: &mut Cursor<'_>) {
    cursor.advance();
    while !cursor.is_at_end() {
        if cursor.previous().kind == TokenKind::Semicolon {
            return;
        }
        if cursor.current_kind().starts_statement() {
            return;
        }
        cursor.advance();
    }
}
