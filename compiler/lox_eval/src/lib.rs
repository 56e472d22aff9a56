//! Lox Eval - the tree-walking evaluator.
//!
//! # Architecture
//!
//! - `Environment`: chained scope frames shared between blocks and closures
//! - `Interpreter`: statement execution and expression evaluation
//! - `Callable`: the arity/call contract of functions and classes
//! - `FunctionValue`, `ClassValue`, `InstanceValue`: the object model
//! - `evaluate_binary` / `evaluate_unary`: operator semantics
//! - `PrintHandlerImpl`: where `print` output goes
//!
//! Frames, classes, and instances are reference counted. A closure stored in
//! the frame it captures forms a cycle that is never reclaimed; programs are
//! short lived, so this is accepted.

mod callable;
mod class;
mod environment;
pub mod errors;
mod function;
mod instance;
pub mod interpreter;
mod operators;
mod print_handler;
mod value;

pub use callable::Callable;
pub use class::ClassValue;
pub use environment::{AssignError, Environment, LocalScope, LookupError, Scope};
pub use errors::{ErrorCategory, EvalError, EvalErrorKind};
pub use function::FunctionValue;
pub use instance::InstanceValue;
pub use interpreter::{ControlFlow, EvalResult, ExecResult, Interpreter, InterpreterBuilder};
pub use operators::{evaluate_binary, evaluate_unary};
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl, SharedPrintHandler,
    StdoutPrintHandler,
};
pub use value::{DisplayValue, Value};

#[cfg(test)]
mod tests;
