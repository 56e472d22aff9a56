//! Grammar productions.
//!
//! Each module extends `Parser` with methods for one layer of the grammar:
//!
//! - [`decl`]: class, function, and variable declarations
//! - [`stmt`]: statements, including the `for` desugaring
//! - [`expr`]: the expression precedence chain

mod decl;
mod expr;
mod stmt;
