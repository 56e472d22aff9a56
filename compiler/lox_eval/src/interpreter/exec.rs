//! Statement execution.

use std::rc::Rc;

use lox_ir::{ClassDecl, Expr, Stmt};
use lox_stack::ensure_sufficient_stack;
use rustc_hash::FxHashMap;

use super::{ControlFlow, ExecResult, Interpreter};
use crate::{ClassValue, EvalErrorKind, FunctionValue, Value};

impl Interpreter<'_> {
    /// Execute one statement in the current environment.
    #[tracing::instrument(level = "trace", skip_all)]
    pub(crate) fn execute(&mut self, stmt: &Stmt) -> ExecResult {
        ensure_sufficient_stack(|| self.execute_inner(stmt))
    }

    fn execute_inner(&mut self, stmt: &Stmt) -> ExecResult {
        match stmt {
            Stmt::Expression(expr) => {
                self.evaluate(expr)?;
            }
            Stmt::Print(expr) => {
                let value = self.evaluate(expr)?;
                let line = self.stringify(&value);
                self.print_handler().println(&line);
            }
            Stmt::Var { name, initializer } => match initializer {
                Some(initializer) => {
                    let value = self.evaluate(initializer)?;
                    self.env.define(name.lexeme, value);
                }
                None => self.env.declare(name.lexeme),
            },
            Stmt::Block(statements) => {
                let env = self.env.child();
                return self.execute_block(statements, env);
            }
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate(condition)?.is_truthy() {
                    return self.execute(then_branch);
                }
                if let Some(else_branch) = else_branch {
                    return self.execute(else_branch);
                }
            }
            Stmt::While { condition, body } => {
                while self.evaluate(condition)?.is_truthy() {
                    if let flow @ ControlFlow::Return(_) = self.execute(body)? {
                        return Ok(flow);
                    }
                }
            }
            Stmt::Function(decl) => {
                // The closure is the frame the name is defined in, so the
                // function can call itself.
                let function = FunctionValue::new(Rc::clone(decl), self.env.clone());
                self.env.define(decl.name.lexeme, Value::Function(function));
            }
            Stmt::Return { value, .. } => {
                let value = match value {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                return Ok(ControlFlow::Return(value));
            }
            Stmt::Class(decl) => self.declare_class(decl)?,
        }
        Ok(ControlFlow::Normal)
    }

    fn declare_class(&mut self, decl: &ClassDecl) -> Result<(), crate::EvalError> {
        let superclass = match &decl.superclass {
            Some(expr) => match self.evaluate(expr)? {
                Value::Class(class) => Some(class),
                _ => {
                    let token = match expr {
                        Expr::Variable { name } => name,
                        _ => &decl.name,
                    };
                    return Err(self.error(token, EvalErrorKind::SuperclassNotClass));
                }
            },
            None => None,
        };

        let methods: FxHashMap<_, _> = decl
            .methods
            .iter()
            .map(|method| {
                let function =
                    FunctionValue::method(Rc::clone(method), self.env.clone(), superclass.clone());
                (method.name.lexeme, function)
            })
            .collect();

        tracing::debug!(
            class = decl.name.lexeme.raw(),
            methods = methods.len(),
            inherits = superclass.is_some(),
            "declare class"
        );
        let class = ClassValue::new(decl.name.lexeme, superclass, methods, self.names.init);
        self.env.define(decl.name.lexeme, Value::Class(class));
        Ok(())
    }
}
