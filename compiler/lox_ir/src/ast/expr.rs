//! Expression nodes.

use crate::{Name, Token};

use super::{BinaryOp, LogicalOp, UnaryOp};

/// Literal values embedded in the source.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Literal {
    Nil,
    Bool(bool),
    Number(f64),
    /// Interned string contents, without quotes.
    Str(Name),
}

/// Expression node.
///
/// Operator and identifier nodes keep the source token so a runtime fault can
/// report the offending lexeme and line.
#[derive(Clone, PartialEq, Debug)]
pub enum Expr {
    Literal(Literal),
    Grouping(Box<Expr>),
    Unary {
        op: UnaryOp,
        operator: Token,
        right: Box<Expr>,
    },
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        operator: Token,
        right: Box<Expr>,
    },
    Logical {
        left: Box<Expr>,
        op: LogicalOp,
        right: Box<Expr>,
    },
    Variable {
        name: Token,
    },
    Assign {
        name: Token,
        value: Box<Expr>,
    },
    Call {
        callee: Box<Expr>,
        /// Closing parenthesis, used for call-site faults.
        paren: Token,
        arguments: Vec<Expr>,
    },
    Get {
        object: Box<Expr>,
        name: Token,
    },
    Set {
        object: Box<Expr>,
        name: Token,
        value: Box<Expr>,
    },
    This {
        keyword: Token,
    },
    Super {
        keyword: Token,
        method: Token,
    },
}

impl Expr {
    /// Literal expression helper.
    pub fn literal(value: Literal) -> Self {
        Expr::Literal(value)
    }

    /// Grouping expression helper.
    pub fn grouping(inner: Expr) -> Self {
        Expr::Grouping(Box::new(inner))
    }
}
