//! Expression evaluation.

use lox_ir::{Expr, Literal, LogicalOp, Token};
use lox_stack::ensure_sufficient_stack;

use super::{EvalResult, Interpreter};
use crate::environment::AssignError;
use crate::operators::{evaluate_binary, evaluate_unary};
use crate::{EvalError, EvalErrorKind, InstanceValue, Value};

impl Interpreter<'_> {
    pub(crate) fn evaluate(&mut self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.evaluate_inner(expr))
    }

    fn evaluate_inner(&mut self, expr: &Expr) -> EvalResult {
        match expr {
            Expr::Literal(literal) => Ok(self.literal(*literal)),
            Expr::Grouping(inner) => self.evaluate(inner),
            Expr::Unary {
                op,
                operator,
                right,
            } => {
                let operand = self.evaluate(right)?;
                evaluate_unary(*op, &operand).map_err(|kind| self.error(operator, kind))
            }
            Expr::Binary {
                left,
                op,
                operator,
                right,
            } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                evaluate_binary(*op, &left, &right).map_err(|kind| self.error(operator, kind))
            }
            Expr::Logical { left, op, right } => {
                let left = self.evaluate(left)?;
                let short_circuit = match op {
                    LogicalOp::Or => left.is_truthy(),
                    LogicalOp::And => !left.is_truthy(),
                };
                if short_circuit {
                    Ok(left)
                } else {
                    self.evaluate(right)
                }
            }
            Expr::Variable { name } => self.lookup_variable(name),
            Expr::Assign { name, value } => {
                let value = self.evaluate(value)?;
                self.env
                    .assign(name.lexeme, value.clone())
                    .map_err(|AssignError::Undefined| {
                        self.error(
                            name,
                            EvalErrorKind::UndefinedVariable {
                                name: self.lexeme(name),
                            },
                        )
                    })?;
                Ok(value)
            }
            Expr::Call {
                callee,
                paren,
                arguments,
            } => self.call(callee, paren, arguments),
            Expr::Get { object, name } => match self.evaluate(object)? {
                Value::Instance(instance) => self.get_property(&instance, name),
                _ => Err(self.error(name, EvalErrorKind::PropertyOnNonInstance)),
            },
            Expr::Set {
                object,
                name,
                value,
            } => {
                let Value::Instance(instance) = self.evaluate(object)? else {
                    return Err(self.error(name, EvalErrorKind::FieldOnNonInstance));
                };
                let value = self.evaluate(value)?;
                instance.set_field(name.lexeme, value.clone());
                Ok(value)
            }
            Expr::This { keyword } => self.lookup_variable(keyword),
            Expr::Super { keyword, method } => self.super_method(keyword, method),
        }
    }

    fn literal(&self, literal: Literal) -> Value {
        match literal {
            Literal::Nil => Value::Nil,
            Literal::Bool(b) => Value::Bool(b),
            Literal::Number(n) => Value::Number(n),
            Literal::Str(name) => Value::string(self.interner().lookup(name)),
        }
    }

    fn lookup_variable(&self, name: &Token) -> EvalResult {
        self.env
            .get(name.lexeme)
            .map_err(|error| self.lookup_error(name, error))
    }

    /// Evaluate callee and arguments left to right, check callability and
    /// arity, then invoke under the call depth limit.
    fn call(&mut self, callee: &Expr, paren: &Token, arguments: &[Expr]) -> EvalResult {
        let callee = self.evaluate(callee)?;
        let mut values = Vec::with_capacity(arguments.len());
        for argument in arguments {
            values.push(self.evaluate(argument)?);
        }

        let Some(callable) = callee.as_callable() else {
            return Err(self.error(paren, EvalErrorKind::NotCallable));
        };
        let expected = callable.arity();
        if values.len() != expected {
            return Err(self.error(
                paren,
                EvalErrorKind::Arity {
                    expected,
                    got: values.len(),
                },
            ));
        }

        if let Err(exceeded) = self.call_depth.enter() {
            tracing::debug!(limit = exceeded.limit, "call depth exceeded");
            return Err(self.error(
                paren,
                EvalErrorKind::StackOverflow {
                    depth: exceeded.limit,
                },
            ));
        }
        let result = callable.call(self, values);
        self.call_depth.exit();
        result
    }

    /// Fields shadow methods. A method is bound to the instance on every
    /// access.
    fn get_property(&self, instance: &InstanceValue, name: &Token) -> EvalResult {
        if let Some(value) = instance.get_field(name.lexeme) {
            return Ok(value);
        }
        match instance.class().find_method(name.lexeme) {
            Some(method) => Ok(Value::Function(
                self.bind_method(&method, instance.clone()),
            )),
            None => Err(self.undefined_property(name)),
        }
    }

    /// `super.method`: search starts at the superclass bound when the
    /// enclosing method was bound, and the result is bound to `this`.
    fn super_method(&self, keyword: &Token, method: &Token) -> EvalResult {
        let superclass = match self.lookup_variable(keyword)? {
            Value::Class(class) => class,
            _ => return Err(self.error(keyword, EvalErrorKind::SuperclassNotClass)),
        };
        let receiver = self
            .env
            .get(self.names.this)
            .map_err(|error| self.lookup_error(keyword, error))?;
        let Value::Instance(instance) = receiver else {
            return Err(self.error(keyword, EvalErrorKind::PropertyOnNonInstance));
        };

        match superclass.find_method(method.lexeme) {
            Some(found) => Ok(Value::Function(self.bind_method(&found, instance))),
            None => Err(self.undefined_property(method)),
        }
    }

    fn undefined_property(&self, name: &Token) -> EvalError {
        self.error(
            name,
            EvalErrorKind::UndefinedProperty {
                name: self.lexeme(name),
            },
        )
    }
}
