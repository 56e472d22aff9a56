//! AST node types.
//!
//! Expressions and statements are closed enums; the evaluator dispatches on
//! them with exhaustive `match`, so adding a node kind is a compile error
//! until every consumer handles it.
//!
//! There is no `for` node: the parser lowers `for` loops to a block holding
//! the initializer and a `while` loop.

mod expr;
mod operators;
mod stmt;

pub use expr::{Expr, Literal};
pub use operators::{BinaryOp, LogicalOp, UnaryOp};
pub use stmt::{ClassDecl, FunctionDecl, Stmt};

#[cfg(test)]
mod tests;
