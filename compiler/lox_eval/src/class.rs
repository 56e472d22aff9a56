//! Classes and method resolution.

use std::fmt;
use std::rc::Rc;

use lox_ir::Name;
use rustc_hash::FxHashMap;

use crate::callable::Callable;
use crate::{EvalError, FunctionValue, InstanceValue, Interpreter, Value};

struct ClassData {
    name: Name,
    superclass: Option<ClassValue>,
    methods: FxHashMap<Name, FunctionValue>,
    /// `init` as found by method resolution at class creation. Method
    /// tables never change afterwards, so this stays accurate.
    initializer: Option<FunctionValue>,
}

/// A class value. Calling it constructs an instance.
#[derive(Clone)]
pub struct ClassValue(Rc<ClassData>);

impl ClassValue {
    pub fn new(
        name: Name,
        superclass: Option<ClassValue>,
        methods: FxHashMap<Name, FunctionValue>,
        init: Name,
    ) -> Self {
        let initializer = methods
            .get(&init)
            .cloned()
            .or_else(|| superclass.as_ref().and_then(|s| s.find_method(init)));
        ClassValue(Rc::new(ClassData {
            name,
            superclass,
            methods,
            initializer,
        }))
    }

    pub fn name(&self) -> Name {
        self.0.name
    }

    pub fn superclass(&self) -> Option<&ClassValue> {
        self.0.superclass.as_ref()
    }

    /// Find `name` in this class's own methods, then up the superclass
    /// chain. Absence is not an error here; callers choose the fault.
    pub fn find_method(&self, name: Name) -> Option<FunctionValue> {
        let mut class = Some(self);
        while let Some(current) = class {
            if let Some(method) = current.0.methods.get(&name) {
                return Some(method.clone());
            }
            class = current.0.superclass.as_ref();
        }
        None
    }

    pub fn initializer(&self) -> Option<&FunctionValue> {
        self.0.initializer.as_ref()
    }

    pub fn ptr_eq(&self, other: &ClassValue) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Callable for ClassValue {
    fn arity(&self) -> usize {
        self.initializer().map_or(0, |init| init.arity())
    }

    /// Allocate an instance and run `init` on it, if there is one. The
    /// result is always the new instance; whatever `init` returns is
    /// dropped.
    #[tracing::instrument(level = "debug", skip_all, fields(class = self.name().raw()))]
    fn call(
        &self,
        interpreter: &mut Interpreter<'_>,
        arguments: Vec<Value>,
    ) -> Result<Value, EvalError> {
        let instance = InstanceValue::new(self.clone());
        if let Some(initializer) = self.initializer() {
            let bound = interpreter.bind_method(initializer, instance.clone());
            bound.call(interpreter, arguments)?;
        }
        Ok(Value::Instance(instance))
    }
}

impl fmt::Debug for ClassValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut methods: Vec<Name> = self.0.methods.keys().copied().collect();
        methods.sort_unstable();
        f.debug_struct("ClassValue")
            .field("name", &self.0.name)
            .field("superclass", &self.0.superclass.as_ref().map(ClassValue::name))
            .field("methods", &methods)
            .finish()
    }
}
