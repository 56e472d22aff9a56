//! Expression parsing.
//!
//! Precedence climbs from assignment (lowest) to primary (highest):
//!
//! ```text
//! expression → assignment
//! assignment → ( call "." )? IDENT "=" assignment | logic_or
//! logic_or   → logic_and ( "or" logic_and )*
//! logic_and  → equality ( "and" equality )*
//! equality   → comparison ( ( "!=" | "==" ) comparison )*
//! comparison → term ( ( ">" | ">=" | "<" | "<=" ) term )*
//! term       → factor ( ( "-" | "+" ) factor )*
//! factor     → unary ( ( "/" | "*" ) unary )*
//! unary      → ( "!" | "-" ) unary | call
//! call       → primary ( "(" arguments? ")" | "." IDENT )*
//! primary    → "true" | "false" | "nil" | "this" | NUMBER | STRING
//!            | IDENT | "(" expression ")" | "super" "." IDENT
//! ```

use lox_ir::{BinaryOp, Expr, Literal, LogicalOp, TokenKind, UnaryOp};
use lox_stack::ensure_sufficient_stack;

use crate::{ParseResult, Parser, MAX_ARGUMENTS};

impl Parser<'_> {
    pub(crate) fn expression(&mut self) -> ParseResult<Expr> {
        ensure_sufficient_stack(|| self.assignment())
    }

    fn assignment(&mut self) -> ParseResult<Expr> {
        let expr = self.logic_or()?;

        if self.eat(TokenKind::Equal) {
            let equals = self.cursor.previous();
            let value = Box::new(self.assignment()?);

            return Ok(match expr {
                Expr::Variable { name } => Expr::Assign { name, value },
                Expr::Get { object, name } => Expr::Set {
                    object,
                    name,
                    value,
                },
                other => {
                    // Reported, but the parser is not confused
                    let error = self.error_at(&equals, "Invalid assignment target.");
                    self.report(error);
                    other
                }
            });
        }

        Ok(expr)
    }

    fn logic_or(&mut self) -> ParseResult<Expr> {
        let mut left = self.logic_and()?;
        while self.eat(TokenKind::Or) {
            let right = self.logic_and()?;
            left = Expr::Logical {
                left: Box::new(left),
                op: LogicalOp::Or,
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn logic_and(&mut self) -> ParseResult<Expr> {
        let mut left = self.equality()?;
        while self.eat(TokenKind::And) {
            let right = self.equality()?;
            left = Expr::Logical {
                left: Box::new(left),
                op: LogicalOp::And,
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn equality(&mut self) -> ParseResult<Expr> {
        self.binary_level(
            &[TokenKind::BangEqual, TokenKind::EqualEqual],
            Self::comparison,
        )
    }

    fn comparison(&mut self) -> ParseResult<Expr> {
        self.binary_level(
            &[
                TokenKind::Greater,
                TokenKind::GreaterEqual,
                TokenKind::Less,
                TokenKind::LessEqual,
            ],
            Self::term,
        )
    }

    fn term(&mut self) -> ParseResult<Expr> {
        self.binary_level(&[TokenKind::Minus, TokenKind::Plus], Self::factor)
    }

    fn factor(&mut self) -> ParseResult<Expr> {
        self.binary_level(&[TokenKind::Slash, TokenKind::Star], Self::unary)
    }

    /// One left-associative binary precedence level.
    fn binary_level(
        &mut self,
        operators: &[TokenKind],
        mut operand: impl FnMut(&mut Self) -> ParseResult<Expr>,
    ) -> ParseResult<Expr> {
        let mut left = operand(self)?;
        while let Some(operator) = self.cursor.eat_any(operators) {
            let right = operand(self)?;
            let Some(op) = BinaryOp::from_token(operator.kind) else {
                return Err(self.error_at(&operator, "Expect binary operator."));
            };
            left = Expr::Binary {
                left: Box::new(left),
                op,
                operator,
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn unary(&mut self) -> ParseResult<Expr> {
        if let Some(operator) = self.cursor.eat_any(&[TokenKind::Bang, TokenKind::Minus]) {
            let right = ensure_sufficient_stack(|| self.unary())?;
            let Some(op) = UnaryOp::from_token(operator.kind) else {
                return Err(self.error_at(&operator, "Expect unary operator."));
            };
            return Ok(Expr::Unary {
                op,
                operator,
                right: Box::new(right),
            });
        }
        self.call()
    }

    fn call(&mut self) -> ParseResult<Expr> {
        let mut expr = self.primary()?;
        loop {
            if self.eat(TokenKind::LeftParen) {
                expr = self.finish_call(expr)?;
            } else if self.eat(TokenKind::Dot) {
                let name =
                    self.expect(&TokenKind::Identifier, "Expect property name after '.'.")?;
                expr = Expr::Get {
                    object: Box::new(expr),
                    name,
                };
            } else {
                break;
            }
        }
        Ok(expr)
    }

    fn finish_call(&mut self, callee: Expr) -> ParseResult<Expr> {
        let mut arguments = Vec::new();
        if !self.check(&TokenKind::RightParen) {
            loop {
                if arguments.len() >= MAX_ARGUMENTS {
                    let error = self.error_at_current("Can't have more than 255 arguments.");
                    self.report(error);
                }
                arguments.push(self.expression()?);
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        let paren = self.expect(&TokenKind::RightParen, "Expect ')' after arguments.")?;

        Ok(Expr::Call {
            callee: Box::new(callee),
            paren,
            arguments,
        })
    }

    fn primary(&mut self) -> ParseResult<Expr> {
        let token = self.cursor.current();
        let expr = match token.kind {
            TokenKind::False => Expr::Literal(Literal::Bool(false)),
            TokenKind::True => Expr::Literal(Literal::Bool(true)),
            TokenKind::Nil => Expr::Literal(Literal::Nil),
            TokenKind::Number(value) => Expr::Literal(Literal::Number(value)),
            TokenKind::String(content) => Expr::Literal(Literal::Str(content)),
            TokenKind::This => Expr::This { keyword: token },
            TokenKind::Identifier => Expr::Variable { name: token },
            TokenKind::Super => {
                self.cursor.advance();
                self.expect(&TokenKind::Dot, "Expect '.' after 'super'.")?;
                let method =
                    self.expect(&TokenKind::Identifier, "Expect superclass method name.")?;
                return Ok(Expr::Super {
                    keyword: token,
                    method,
                });
            }
            TokenKind::LeftParen => {
                self.cursor.advance();
                let inner = self.expression()?;
                self.expect(&TokenKind::RightParen, "Expect ')' after expression.")?;
                return Ok(Expr::grouping(inner));
            }
            _ => return Err(self.error_at_current("Expect expression.")),
        };
        self.cursor.advance();
        Ok(expr)
    }
}
