//! Lox IR - names, tokens, and syntax trees.
//!
//! This crate holds the data shared by every phase of the interpreter:
//! - `Name`s for interned identifiers and string literals
//! - `Token`s and `TokenList` for scanner output
//! - AST nodes (`Expr`, `Stmt`, declarations) for parser output
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifier and string text becomes `Name(u32)`
//! - **Closed Node Sets**: expressions and statements are plain enums
//! - **Shared Bodies**: function declarations are reference counted so
//!   closures never copy their bodies

pub mod ast;
mod interner;
mod name;
mod token;

pub use ast::{BinaryOp, ClassDecl, Expr, FunctionDecl, Literal, LogicalOp, Stmt, UnaryOp};
pub use interner::{SharedInterner, StringInterner};
pub use name::Name;
pub use token::{Token, TokenKind, TokenList};
