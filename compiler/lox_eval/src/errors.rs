//! Runtime faults.
//!
//! Every fault carries the lexeme and line of the token that caused it.
//! `EvalErrorKind` is fine grained; [`ErrorCategory`] groups kinds into the
//! fault classes a host reports on.

use lox_ir::{StringInterner, Token};
use thiserror::Error;

/// Fault classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Type,
    UndefinedVariable,
    UninitializedVariable,
    UndefinedProperty,
    Arity,
    NotCallable,
    /// Unrecoverable; the session should end.
    Fatal,
}

/// What went wrong at runtime.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    // Type
    #[error("Operand must be a number.")]
    OperandNotNumber,
    #[error("Operands must be numbers.")]
    OperandsNotNumbers,
    #[error("Operands must be two numbers or two strings.")]
    InvalidAddOperands,
    #[error("Superclass must be a class.")]
    SuperclassNotClass,
    #[error("Only instances have properties.")]
    PropertyOnNonInstance,
    #[error("Only instances have fields.")]
    FieldOnNonInstance,

    // Access
    #[error("Undefined variable '{name}'.")]
    UndefinedVariable { name: String },
    #[error("Uninitialized variable '{name}'.")]
    UninitializedVariable { name: String },
    #[error("Undefined property '{name}'.")]
    UndefinedProperty { name: String },

    // Calls
    #[error("Expected {expected} arguments but got {got}.")]
    Arity { expected: usize, got: usize },
    #[error("Can only call functions and classes.")]
    NotCallable,
    #[error("Stack overflow.")]
    StackOverflow { depth: usize },
}

impl EvalErrorKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::OperandNotNumber
            | Self::OperandsNotNumbers
            | Self::InvalidAddOperands
            | Self::SuperclassNotClass
            | Self::PropertyOnNonInstance
            | Self::FieldOnNonInstance => ErrorCategory::Type,
            Self::UndefinedVariable { .. } => ErrorCategory::UndefinedVariable,
            Self::UninitializedVariable { .. } => ErrorCategory::UninitializedVariable,
            Self::UndefinedProperty { .. } => ErrorCategory::UndefinedProperty,
            Self::Arity { .. } => ErrorCategory::Arity,
            Self::NotCallable => ErrorCategory::NotCallable,
            Self::StackOverflow { .. } => ErrorCategory::Fatal,
        }
    }
}

/// A runtime fault at a source location.
///
/// Displays as the message followed by the line on its own row, the shape
/// the driver prints.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}\n[line {line}]")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Source text of the offending token.
    pub lexeme: String,
    pub line: u32,
}

impl EvalError {
    /// Fault attributed to `token`.
    pub fn at(token: &Token, interner: &StringInterner, kind: EvalErrorKind) -> Self {
        EvalError {
            kind,
            lexeme: interner.lookup(token.lexeme).to_owned(),
            line: token.line,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    /// Whether this fault should end an interactive session.
    pub fn is_fatal(&self) -> bool {
        self.category() == ErrorCategory::Fatal
    }

    /// The message without location.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}
