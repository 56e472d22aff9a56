//! Statement nodes and declarations.

use std::rc::Rc;

use crate::Token;

use super::Expr;

/// A function or method declaration.
///
/// Held behind `Rc` so every function value created from the declaration
/// shares its body instead of copying it.
#[derive(Clone, PartialEq, Debug)]
pub struct FunctionDecl {
    pub name: Token,
    pub params: Vec<Token>,
    pub body: Vec<Stmt>,
}

/// A class declaration.
#[derive(Clone, PartialEq, Debug)]
pub struct ClassDecl {
    pub name: Token,
    /// Always an `Expr::Variable` when produced by the parser.
    pub superclass: Option<Expr>,
    pub methods: Vec<Rc<FunctionDecl>>,
}

/// Statement node.
#[derive(Clone, PartialEq, Debug)]
pub enum Stmt {
    /// Expression evaluated for its side effects.
    Expression(Expr),
    Print(Expr),
    Var {
        name: Token,
        initializer: Option<Expr>,
    },
    Block(Vec<Stmt>),
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    While {
        condition: Expr,
        body: Box<Stmt>,
    },
    Function(Rc<FunctionDecl>),
    Return {
        keyword: Token,
        value: Option<Expr>,
    },
    Class(ClassDecl),
}
