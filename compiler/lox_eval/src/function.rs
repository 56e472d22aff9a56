//! User-defined functions and methods.

use std::fmt;
use std::rc::Rc;

use lox_ir::{FunctionDecl, Name};

use crate::callable::Callable;
use crate::interpreter::ControlFlow;
use crate::{ClassValue, Environment, EvalError, InstanceValue, Interpreter, Value};

struct FunctionData {
    decl: Rc<FunctionDecl>,
    /// Frame active where the function was declared.
    closure: Environment,
    /// Superclass of the class that owns this method, bound as `super`.
    superclass: Option<ClassValue>,
}

/// A function value: a declaration paired with the frame it closes over.
///
/// Each evaluation of a declaration creates a distinct value.
#[derive(Clone)]
pub struct FunctionValue(Rc<FunctionData>);

impl FunctionValue {
    pub fn new(decl: Rc<FunctionDecl>, closure: Environment) -> Self {
        FunctionValue(Rc::new(FunctionData {
            decl,
            closure,
            superclass: None,
        }))
    }

    /// A method of a class whose superclass is `superclass`.
    pub fn method(
        decl: Rc<FunctionDecl>,
        closure: Environment,
        superclass: Option<ClassValue>,
    ) -> Self {
        FunctionValue(Rc::new(FunctionData {
            decl,
            closure,
            superclass,
        }))
    }

    pub fn name(&self) -> Name {
        self.0.decl.name.lexeme
    }

    pub fn decl(&self) -> &Rc<FunctionDecl> {
        &self.0.decl
    }

    pub fn closure(&self) -> &Environment {
        &self.0.closure
    }

    /// Bind this method to `instance`.
    ///
    /// Returns a new function whose closure is a fresh frame defining
    /// `this`, and `super` when the owning class has a superclass. Every
    /// call creates a distinct value.
    pub fn bind(&self, instance: InstanceValue, this: Name, super_name: Name) -> FunctionValue {
        let env = self.0.closure.child();
        env.define(this, Value::Instance(instance));
        if let Some(superclass) = &self.0.superclass {
            env.define(super_name, Value::Class(superclass.clone()));
        }
        FunctionValue(Rc::new(FunctionData {
            decl: Rc::clone(&self.0.decl),
            closure: env,
            superclass: self.0.superclass.clone(),
        }))
    }

    pub fn ptr_eq(&self, other: &FunctionValue) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Callable for FunctionValue {
    fn arity(&self) -> usize {
        self.0.decl.params.len()
    }

    #[tracing::instrument(level = "debug", skip_all, fields(name = self.name().raw()))]
    fn call(
        &self,
        interpreter: &mut Interpreter<'_>,
        arguments: Vec<Value>,
    ) -> Result<Value, EvalError> {
        // Parameters live in a fresh frame over the closure, never over the
        // caller's frame.
        let env = self.0.closure.child();
        for (param, argument) in self.0.decl.params.iter().zip(arguments) {
            env.define(param.lexeme, argument);
        }

        match interpreter.execute_block(&self.0.decl.body, env)? {
            ControlFlow::Return(value) => Ok(value),
            ControlFlow::Normal => Ok(Value::Nil),
        }
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("name", &self.name())
            .field("arity", &self.arity())
            .finish_non_exhaustive()
    }
}
