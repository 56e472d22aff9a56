#![allow(clippy::unwrap_used, clippy::expect_used)]


use lox_ir::{Expr, Literal, LogicalOp, StringInterner, Stmt, UnaryOp};

use crate::{parse, parse_expression, ParseError};

/// Parse `source`, asserting it is free of errors.
pub(super) fn parse_ok(source: &str) -> (Vec<Stmt>, StringInterner) {
    let interner = StringInterner::new();
    let lexed = lox_lexer::lex(source, &interner);
    assert!(lexed.errors.is_empty(), "lex errors: {:?}", lexed.errors);
    let output = parse(&lexed.tokens, &interner);
    assert!(output.errors.is_empty(), "parse errors: {:?}", output.errors);
    (output.statements, interner)
}

/// Parse `source` and return its syntax errors rendered for display.
pub(super) fn parse_errors(source: &str) -> Vec<String> {
    let interner = StringInterner::new();
    let lexed = lox_lexer::lex(source, &interner);
    parse(&lexed.tokens, &interner)
        .errors
        .iter()
        .map(ParseError::to_string)
        .collect()
}

/// Parse a bare expression and render it as an s-expression.
pub(super) fn expr_sexpr(source: &str) -> String {
    let interner = StringInterner::new();
    let lexed = lox_lexer::lex(source, &interner);
    let expr = parse_expression(&lexed.tokens, &interner).expect("expression should parse");
    sexpr(&expr, &interner)
}

/// Render an expression fully parenthesized so precedence is visible.
pub(super) fn sexpr(expr: &Expr, interner: &StringInterner) -> String {
    match expr {
        Expr::Literal(Literal::Nil) => "nil".to_owned(),
        Expr::Literal(Literal::Bool(b)) => b.to_string(),
        Expr::Literal(Literal::Number(n)) => n.to_string(),
        Expr::Literal(Literal::Str(s)) => format!("\"{}\"", interner.lookup(*s)),
        Expr::Grouping(inner) => format!("(group {})", sexpr(inner, interner)),
        Expr::Unary { op, right, .. } => {
            let symbol = match op {
                UnaryOp::Neg => "-",
                UnaryOp::Not => "!",
            };
            format!("({symbol} {})", sexpr(right, interner))
        }
        Expr::Binary {
            left, op, right, ..
        } => format!(
            "({} {} {})",
            op.as_symbol(),
            sexpr(left, interner),
            sexpr(right, interner)
        ),
        Expr::Logical { left, op, right } => {
            let word = match op {
                LogicalOp::And => "and",
                LogicalOp::Or => "or",
            };
            format!(
                "({word} {} {})",
                sexpr(left, interner),
                sexpr(right, interner)
            )
        }
        Expr::Variable { name } => interner.lookup(name.lexeme).to_owned(),
        Expr::Assign { name, value } => format!(
            "(= {} {})",
            interner.lookup(name.lexeme),
            sexpr(value, interner)
        ),
        Expr::Call {
            callee, arguments, ..
        } => {
            let mut out = format!("(call {}", sexpr(callee, interner));
            for arg in arguments {
                out.push(' ');
                out.push_str(&sexpr(arg, interner));
            }
            out.push(')');
            out
        }
        Expr::Get { object, name } => format!(
            "(. {} {})",
            sexpr(object, interner),
            interner.lookup(name.lexeme)
        ),
        Expr::Set {
            object,
            name,
            value,
        } => format!(
            "(.= {} {} {})",
            sexpr(object, interner),
            interner.lookup(name.lexeme),
            sexpr(value, interner)
        ),
        Expr::This { .. } => "this".to_owned(),
        Expr::Super { method, .. } => format!("(super {})", interner.lookup(method.lexeme)),
    }
}
