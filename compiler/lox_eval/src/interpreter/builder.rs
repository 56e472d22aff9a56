//! `InterpreterBuilder` for configuring an [`Interpreter`].

use lox_ir::StringInterner;
use lox_stack::{CallDepth, DEFAULT_MAX_CALL_DEPTH};

use super::{InternedNames, Interpreter};
use crate::{stdout_handler, Environment, SharedPrintHandler};

/// Builder for [`Interpreter`].
///
/// Defaults: output to stdout, a fresh global frame, and a call depth limit
/// of [`DEFAULT_MAX_CALL_DEPTH`].
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    globals: Option<Environment>,
    print_handler: Option<SharedPrintHandler>,
    max_call_depth: usize,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        InterpreterBuilder {
            interner,
            globals: None,
            print_handler: None,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
        }
    }

    /// Where `print` output goes.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Nested calls allowed before the fatal stack overflow fault.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    /// Start from an existing global frame instead of an empty one.
    #[must_use]
    pub fn globals(mut self, globals: Environment) -> Self {
        self.globals = Some(globals);
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        let globals = self.globals.unwrap_or_else(Environment::global);
        Interpreter {
            interner: self.interner,
            env: globals.clone(),
            globals,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            names: InternedNames::new(self.interner),
            call_depth: CallDepth::new(self.max_call_depth),
        }
    }
}
