//! Declarations.
//!
//! ```text
//! declaration → classDecl | funDecl | varDecl | statement
//! classDecl   → "class" IDENT ( "<" IDENT )? "{" function* "}"
//! funDecl     → "fun" function
//! function    → IDENT "(" parameters? ")" block
//! varDecl     → "var" IDENT ( "=" expression )? ";"
//! ```

use std::fmt;
use std::rc::Rc;

use lox_ir::{ClassDecl, Expr, FunctionDecl, Stmt, TokenKind};

use crate::recovery::synchronize;
use crate::{ParseResult, Parser, MAX_ARGUMENTS};

#[derive(Clone, Copy)]
enum FunctionKind {
    Function,
    Method,
}

impl fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FunctionKind::Function => "function",
            FunctionKind::Method => "method",
        })
    }
}

impl Parser<'_> {
    /// Parse one declaration, recovering from any syntax error inside it.
    ///
    /// Returns `None` when the declaration was abandoned.
    pub(crate) fn declaration(&mut self) -> Option<Stmt> {
        let result = if self.eat(TokenKind::Class) {
            self.class_declaration()
        } else if self.eat(TokenKind::Fun) {
            self.function(FunctionKind::Function).map(Stmt::Function)
        } else if self.eat(TokenKind::Var) {
            self.var_declaration()
        } else {
            self.statement()
        };

        match result {
            Ok(stmt) => Some(stmt),
            Err(error) => {
                tracing::debug!(%error, "synchronizing after syntax error");
                self.errors.push(error);
                synchronize(&mut self.cursor);
                None
            }
        }
    }

    fn class_declaration(&mut self) -> ParseResult<Stmt> {
        let name = self.expect(&TokenKind::Identifier, "Expect class name.")?;

        let superclass = if self.eat(TokenKind::Less) {
            let name = self.expect(&TokenKind::Identifier, "Expect superclass name.")?;
            Some(Expr::Variable { name })
        } else {
            None
        };

        self.expect(&TokenKind::LeftBrace, "Expect '{' before class body.")?;
        let mut methods = Vec::new();
        while !self.check(&TokenKind::RightBrace) && !self.cursor.is_at_end() {
            methods.push(self.function(FunctionKind::Method)?);
        }
        self.expect(&TokenKind::RightBrace, "Expect '}' after class body.")?;

        Ok(Stmt::Class(ClassDecl {
            name,
            superclass,
            methods,
        }))
    }

    fn function(&mut self, kind: FunctionKind) -> ParseResult<Rc<FunctionDecl>> {
        let name = self.expect(&TokenKind::Identifier, &format!("Expect {kind} name."))?;
        self.expect(
            &TokenKind::LeftParen,
            &format!("Expect '(' after {kind} name."),
        )?;

        let mut params = Vec::new();
        if !self.check(&TokenKind::RightParen) {
            loop {
                if params.len() >= MAX_ARGUMENTS {
                    let error = self.error_at_current("Can't have more than 255 parameters.");
                    self.report(error);
                }
                params.push(self.expect(&TokenKind::Identifier, "Expect parameter name.")?);
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(&TokenKind::RightParen, "Expect ')' after parameters.")?;

        self.expect(
            &TokenKind::LeftBrace,
            &format!("Expect '{{' before {kind} body."),
        )?;
        let body = self.block()?;

        Ok(Rc::new(FunctionDecl { name, params, body }))
    }

    pub(crate) fn var_declaration(&mut self) -> ParseResult<Stmt> {
        let name = self.expect(&TokenKind::Identifier, "Expect variable name.")?;
        let initializer = if self.eat(TokenKind::Equal) {
            Some(self.expression()?)
        } else {
            None
        };
        self.expect(
            &TokenKind::Semicolon,
            "Expect ';' after variable declaration.",
        )?;
        Ok(Stmt::Var { name, initializer })
    }
}
