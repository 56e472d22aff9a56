//! The invocation contract shared by functions and classes.

use crate::{EvalError, Interpreter, Value};

/// Something a call expression can invoke.
///
/// The interpreter checks the argument count against [`Callable::arity`]
/// before calling, so implementations may assume `arguments.len()` matches.
pub trait Callable {
    fn arity(&self) -> usize;

    fn call(&self, interpreter: &mut Interpreter<'_>, arguments: Vec<Value>)
        -> Result<Value, EvalError>;
}
