//! Class instances.

use std::fmt;

use lox_ir::Name;
use rustc_hash::FxHashMap;

use crate::{ClassValue, LocalScope, Value};

struct InstanceData {
    class: ClassValue,
    fields: FxHashMap<Name, Value>,
}

/// Handle to an instance. Clones share the same field table.
#[derive(Clone)]
pub struct InstanceValue(LocalScope<InstanceData>);

impl InstanceValue {
    /// A new instance with no fields.
    pub fn new(class: ClassValue) -> Self {
        InstanceValue(LocalScope::new(InstanceData {
            class,
            fields: FxHashMap::default(),
        }))
    }

    pub fn class(&self) -> ClassValue {
        self.0.borrow().class.clone()
    }

    pub fn get_field(&self, name: Name) -> Option<Value> {
        self.0.borrow().fields.get(&name).cloned()
    }

    /// Write a field, creating it when absent.
    pub fn set_field(&self, name: Name, value: Value) {
        self.0.borrow_mut().fields.insert(name, value);
    }

    pub fn field_count(&self) -> usize {
        self.0.borrow().fields.len()
    }

    pub fn ptr_eq(&self, other: &InstanceValue) -> bool {
        self.0.ptr_eq(&other.0)
    }
}

impl fmt::Debug for InstanceValue {
    // Fields may refer back to this instance, so they are not shown.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.0.borrow();
        f.debug_struct("InstanceValue")
            .field("class", &data.class.name())
            .field("fields", &data.fields.len())
            .finish()
    }
}
