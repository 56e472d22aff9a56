//! Runtime values.

use std::fmt;
use std::rc::Rc;

use lox_ir::StringInterner;

use crate::callable::Callable;
use crate::{ClassValue, FunctionValue, InstanceValue};

/// A Lox value.
///
/// Strings are immutable and shared. Functions, classes, and instances are
/// handles: cloning a value never copies the object it refers to.
#[derive(Clone, Debug)]
pub enum Value {
    Nil,
    Bool(bool),
    Number(f64),
    Str(Rc<str>),
    Function(FunctionValue),
    Class(ClassValue),
    Instance(InstanceValue),
}

impl Value {
    pub fn string(s: impl Into<Rc<str>>) -> Self {
        Value::Str(s.into())
    }

    /// `nil` and `false` are falsy; everything else is truthy.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }

    /// The callable behind this value, if it has one.
    pub fn as_callable(&self) -> Option<&dyn Callable> {
        match self {
            Value::Function(function) => Some(function),
            Value::Class(class) => Some(class),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Function(_) => "function",
            Value::Class(_) => "class",
            Value::Instance(_) => "instance",
        }
    }

    /// Render the value the way `print` does.
    pub fn display<'a>(&'a self, interner: &'a StringInterner) -> DisplayValue<'a> {
        DisplayValue {
            value: self,
            interner,
        }
    }
}

/// Equality never faults. Values of different kinds are unequal; numbers
/// follow IEEE comparison; strings compare by content; functions, classes,
/// and instances compare by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            (Value::Class(a), Value::Class(b)) => a.ptr_eq(b),
            (Value::Instance(a), Value::Instance(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

/// [`Value`] paired with the interner needed to spell names.
pub struct DisplayValue<'a> {
    value: &'a Value,
    interner: &'a StringInterner,
}

impl fmt::Display for DisplayValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Value::Nil => f.write_str("nil"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => format_number(*n, f),
            Value::Str(s) => f.write_str(s),
            Value::Function(function) => {
                write!(f, "<fn {}>", self.interner.lookup(function.name()))
            }
            Value::Class(class) => f.write_str(self.interner.lookup(class.name())),
            Value::Instance(instance) => {
                write!(f, "{} instance", self.interner.lookup(instance.class().name()))
            }
        }
    }
}

/// Integral values print without a fractional part.
///
/// Very large and very small magnitudes print in positional notation
/// (`1000000000000000000000`, `0.0000001`), never in exponent form.
fn format_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else {
        write!(f, "{n}")
    }
}

#[cfg(test)]
mod tests;
