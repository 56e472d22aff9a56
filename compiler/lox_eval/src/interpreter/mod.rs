//! Tree-walking interpreter.
//!
//! # Architecture
//!
//! - `exec.rs`: statements, threading [`ControlFlow`] so `return` unwinds
//!   through blocks and stops at the nearest call
//! - `eval.rs`: expressions, including calls, property access, and `super`
//! - `builder.rs`: [`InterpreterBuilder`] for output and limit configuration
//! - `scope_guard.rs`: RAII switching of the current environment
//!
//! The interpreter owns the global frame and persists across
//! [`Interpreter::interpret`] calls, so a REPL can feed it one line at a
//! time. A fault aborts the current request only; effects of statements
//! that already ran are kept.

mod builder;
mod eval;
mod exec;
mod scope_guard;

pub use builder::InterpreterBuilder;
pub use scope_guard::ScopedInterpreter;

use lox_ir::{Expr, Name, Stmt, StringInterner, Token};
use lox_stack::CallDepth;

use crate::environment::LookupError;
use crate::print_handler::SharedPrintHandler;
use crate::{Environment, EvalError, EvalErrorKind, FunctionValue, InstanceValue, Value};

/// How a statement finished.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlFlow {
    Normal,
    /// A `return` is unwinding toward the nearest call.
    Return(Value),
}

/// Result of executing a statement.
pub type ExecResult = Result<ControlFlow, EvalError>;

/// Result of evaluating an expression.
pub type EvalResult = Result<Value, EvalError>;

/// Names the interpreter binds itself, interned once.
#[derive(Clone, Copy, Debug)]
pub(crate) struct InternedNames {
    pub this: Name,
    pub super_: Name,
    pub init: Name,
}

impl InternedNames {
    fn new(interner: &StringInterner) -> Self {
        InternedNames {
            this: interner.intern("this"),
            super_: interner.intern("super"),
            init: interner.intern("init"),
        }
    }
}

/// Tree-walking interpreter.
pub struct Interpreter<'a> {
    interner: &'a StringInterner,
    globals: Environment,
    /// Frame that statements currently execute in.
    pub(crate) env: Environment,
    print_handler: SharedPrintHandler,
    names: InternedNames,
    call_depth: CallDepth,
}

impl<'a> Interpreter<'a> {
    /// An interpreter printing to stdout with default limits.
    pub fn new(interner: &'a StringInterner) -> Self {
        InterpreterBuilder::new(interner).build()
    }

    /// Execute a program's statements in order.
    ///
    /// Stops at the first fault. A `return` outside any function ends the
    /// request early.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = statements.len()))]
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), EvalError> {
        for stmt in statements {
            if let ControlFlow::Return(_) = self.execute(stmt)? {
                tracing::debug!("top-level return ends the request");
                break;
            }
        }
        Ok(())
    }

    /// Evaluate a single expression in the current environment.
    pub fn evaluate_expression(&mut self, expr: &Expr) -> EvalResult {
        self.evaluate(expr)
    }

    /// Render a value the way `print` does.
    pub fn stringify(&self, value: &Value) -> String {
        value.display(self.interner).to_string()
    }

    #[inline]
    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    pub fn globals(&self) -> &Environment {
        &self.globals
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    pub fn max_call_depth(&self) -> usize {
        self.call_depth.limit()
    }

    /// Bind `method` to `instance`, defining `this` and, for methods of a
    /// subclass, `super`.
    pub(crate) fn bind_method(&self, method: &FunctionValue, instance: InstanceValue) -> FunctionValue {
        method.bind(instance, self.names.this, self.names.super_)
    }

    /// Execute `statements` in `env`, restoring the previous environment on
    /// every exit path.
    pub fn execute_block(&mut self, statements: &[Stmt], env: Environment) -> ExecResult {
        self.with_env_scope(env, |scoped| -> ExecResult {
            for stmt in statements {
                if let flow @ ControlFlow::Return(_) = scoped.execute(stmt)? {
                    return Ok(flow);
                }
            }
            Ok(ControlFlow::Normal)
        })
    }

    /// Fault attributed to `token`.
    pub(crate) fn error(&self, token: &Token, kind: EvalErrorKind) -> EvalError {
        EvalError::at(token, self.interner, kind)
    }

    fn lexeme(&self, token: &Token) -> String {
        self.interner.lookup(token.lexeme).to_owned()
    }

    /// Turn an environment read failure into a fault naming `token`.
    pub(crate) fn lookup_error(&self, token: &Token, error: LookupError) -> EvalError {
        let name = self.lexeme(token);
        let kind = match error {
            LookupError::Undefined => EvalErrorKind::UndefinedVariable { name },
            LookupError::Uninitialized => EvalErrorKind::UninitializedVariable { name },
        };
        self.error(token, kind)
    }
}
