//! Lexical environments.
//!
//! An environment is a chain of scope frames. Each frame maps names to
//! bindings and links to at most one enclosing frame; the chain ends at the
//! global frame. Frames are shared: a block's frame is referenced by the
//! running block and by every closure created inside it, and lives as long
//! as the last of them.
//!
//! Lookups walk the chain iteratively, so a long chain never deepens the
//! native stack.

use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use lox_ir::Name;
use rustc_hash::FxHashMap;

use crate::Value;

/// Why a read failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LookupError {
    /// No frame in the chain binds the name.
    Undefined,
    /// The nearest binding was declared without a value and never assigned.
    Uninitialized,
}

/// Why a write failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignError {
    /// No frame in the chain binds the name. Assignment never declares.
    Undefined,
}

/// Single-threaded shared cell.
///
/// All frame and instance allocations go through [`LocalScope::new`].
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    /// Whether both handles refer to the same allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A slot in a frame.
///
/// `var a;` declares without a value. Reading such a slot is a fault, which
/// keeps it distinct from a slot holding `nil`.
#[derive(Clone, Debug)]
enum Binding {
    Declared,
    Initialized(Value),
}

/// One scope frame.
#[derive(Default)]
pub struct Scope {
    bindings: FxHashMap<Name, Binding>,
    parent: Option<Environment>,
}

impl Drop for Scope {
    // Release uniquely owned ancestors in a loop; the default drop would
    // recurse once per frame.
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(env) = next {
            next = match Rc::try_unwrap(env.0 .0) {
                Ok(cell) => cell.into_inner().parent.take(),
                Err(_) => None,
            };
        }
    }
}

/// Handle to a scope frame and, through it, the frame's whole chain.
///
/// Cloning the handle shares the frame.
#[derive(Clone)]
pub struct Environment(LocalScope<Scope>);

impl Environment {
    /// A fresh root frame.
    pub fn global() -> Self {
        Environment(LocalScope::new(Scope::default()))
    }

    /// A fresh frame enclosed by `self`.
    #[must_use]
    pub fn child(&self) -> Self {
        Environment(LocalScope::new(Scope {
            bindings: FxHashMap::default(),
            parent: Some(self.clone()),
        }))
    }

    /// The enclosing frame, if any.
    pub fn enclosing(&self) -> Option<Environment> {
        self.0.borrow().parent.clone()
    }

    /// Bind `name` in this frame, overwriting any existing binding here.
    pub fn define(&self, name: Name, value: Value) {
        tracing::trace!(name = name.raw(), "define");
        self.0
            .borrow_mut()
            .bindings
            .insert(name, Binding::Initialized(value));
    }

    /// Bind `name` in this frame without a value.
    pub fn declare(&self, name: Name) {
        tracing::trace!(name = name.raw(), "declare");
        self.0.borrow_mut().bindings.insert(name, Binding::Declared);
    }

    /// Read `name` from the nearest frame that binds it.
    pub fn get(&self, name: Name) -> Result<Value, LookupError> {
        let mut frame = self.clone();
        loop {
            let parent = {
                let scope = frame.0.borrow();
                match scope.bindings.get(&name) {
                    Some(binding) => return read(binding),
                    None => scope.parent.clone(),
                }
            };
            frame = parent.ok_or(LookupError::Undefined)?;
        }
    }

    /// Overwrite `name` in the nearest frame that binds it.
    pub fn assign(&self, name: Name, value: Value) -> Result<(), AssignError> {
        let mut frame = self.clone();
        loop {
            let parent = {
                let mut scope = frame.0.borrow_mut();
                if let Some(binding) = scope.bindings.get_mut(&name) {
                    *binding = Binding::Initialized(value);
                    return Ok(());
                }
                scope.parent.clone()
            };
            frame = parent.ok_or(AssignError::Undefined)?;
        }
    }

    /// The frame exactly `distance` links up the chain.
    pub fn ancestor(&self, distance: usize) -> Option<Environment> {
        let mut frame = self.clone();
        for _ in 0..distance {
            frame = frame.enclosing()?;
        }
        Some(frame)
    }

    /// Read `name` from the frame `distance` links up, without searching.
    pub fn get_at(&self, distance: usize, name: Name) -> Result<Value, LookupError> {
        let frame = self.ancestor(distance).ok_or(LookupError::Undefined)?;
        let scope = frame.0.borrow();
        scope
            .bindings
            .get(&name)
            .ok_or(LookupError::Undefined)
            .and_then(read)
    }

    /// Write `name` in the frame `distance` links up, without searching.
    pub fn assign_at(&self, distance: usize, name: Name, value: Value) -> Result<(), AssignError> {
        let frame = self.ancestor(distance).ok_or(AssignError::Undefined)?;
        let mut scope = frame.0.borrow_mut();
        match scope.bindings.get_mut(&name) {
            Some(binding) => {
                *binding = Binding::Initialized(value);
                Ok(())
            }
            None => Err(AssignError::Undefined),
        }
    }

    /// Whether `name` is bound in this frame itself.
    pub fn contains_local(&self, name: Name) -> bool {
        self.0.borrow().bindings.contains_key(&name)
    }

    /// Number of frames from here to the root, inclusive.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut frame = self.enclosing();
        while let Some(parent) = frame {
            depth += 1;
            frame = parent.enclosing();
        }
        depth
    }

    pub fn ptr_eq(&self, other: &Environment) -> bool {
        self.0.ptr_eq(&other.0)
    }
}

fn read(binding: &Binding) -> Result<Value, LookupError> {
    match binding {
        Binding::Initialized(value) => Ok(value.clone()),
        Binding::Declared => Err(LookupError::Uninitialized),
    }
}

impl fmt::Debug for Environment {
    // Frames can hold closures that capture the frame itself, so only names
    // are shown.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = self.0.borrow();
        let mut names: Vec<u32> = scope.bindings.keys().map(|n| n.raw()).collect();
        names.sort_unstable();
        f.debug_struct("Environment")
            .field("names", &names)
            .field("depth", &self.depth())
            .finish()
    }
}

#[cfg(test)]
mod tests;
