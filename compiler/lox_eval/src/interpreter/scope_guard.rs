//! RAII switching of the interpreter's current environment.
//!
//! [`ScopedInterpreter`] installs a new environment and puts the previous
//! one back when dropped. Blocks and calls go through it, so the caller's
//! environment is restored whether the body finishes, returns, or faults.

use std::ops::{Deref, DerefMut};

use super::Interpreter;
use crate::Environment;

/// Guard holding the interpreter with a temporarily installed environment.
///
/// Derefs to [`Interpreter`].
pub struct ScopedInterpreter<'guard, 'interp> {
    interpreter: &'guard mut Interpreter<'interp>,
    previous: Option<Environment>,
}

impl Drop for ScopedInterpreter<'_, '_> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            self.interpreter.env = previous;
        }
    }
}

impl<'interp> Deref for ScopedInterpreter<'_, 'interp> {
    type Target = Interpreter<'interp>;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl<'a> Interpreter<'a> {
    /// Make `env` current until the returned guard drops.
    pub fn scoped(&mut self, env: Environment) -> ScopedInterpreter<'_, 'a> {
        let previous = std::mem::replace(&mut self.env, env);
        ScopedInterpreter {
            interpreter: self,
            previous: Some(previous),
        }
    }

    /// Run `f` with `env` current.
    pub fn with_env_scope<T, F>(&mut self, env: Environment, f: F) -> T
    where
        F: FnOnce(&mut ScopedInterpreter<'_, 'a>) -> T,
    {
        let mut scoped = self.scoped(env);
        f(&mut scoped)
    }
}
