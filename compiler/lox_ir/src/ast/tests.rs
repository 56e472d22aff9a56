use super::*;
use crate::{Name, TokenKind};
use pretty_assertions::assert_eq;

#[test]
fn binary_op_from_token() {
    assert_eq!(BinaryOp::from_token(TokenKind::Plus), Some(BinaryOp::Add));
    assert_eq!(BinaryOp::from_token(TokenKind::LessEqual), Some(BinaryOp::LtEq));
    assert_eq!(BinaryOp::from_token(TokenKind::Bang), None);
}

#[test]
fn binary_op_symbols() {
    assert_eq!(BinaryOp::NotEq.as_symbol(), "!=");
    assert_eq!(BinaryOp::Div.as_symbol(), "/");
}

#[test]
fn unary_op_from_token() {
    assert_eq!(UnaryOp::from_token(TokenKind::Minus), Some(UnaryOp::Neg));
    assert_eq!(UnaryOp::from_token(TokenKind::Bang), Some(UnaryOp::Not));
    assert_eq!(UnaryOp::from_token(TokenKind::Plus), None);
}

#[test]
fn grouping_wraps_inner_expression() {
    let inner = Expr::literal(Literal::Str(Name::EMPTY));
    let grouped = Expr::grouping(inner.clone());
    assert_eq!(grouped, Expr::Grouping(Box::new(inner)));
}
