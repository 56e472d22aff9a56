//! Unary and binary operators.
//!
//! Operands are already evaluated; these functions only apply the operator.
//! Errors carry no location. The interpreter attaches the operator token.

use lox_ir::{BinaryOp, UnaryOp};

use crate::{EvalErrorKind, Value};

pub fn evaluate_unary(op: UnaryOp, operand: &Value) -> Result<Value, EvalErrorKind> {
    match op {
        UnaryOp::Not => Ok(Value::Bool(!operand.is_truthy())),
        UnaryOp::Neg => match operand {
            Value::Number(n) => Ok(Value::Number(-n)),
            _ => Err(EvalErrorKind::OperandNotNumber),
        },
    }
}

/// Apply a binary operator. `+` adds numbers or concatenates strings and
/// never coerces; the other arithmetic and ordering operators need two
/// numbers; equality accepts anything.
pub fn evaluate_binary(op: BinaryOp, left: &Value, right: &Value) -> Result<Value, EvalErrorKind> {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(left == right)),
        BinaryOp::NotEq => Ok(Value::Bool(left != right)),
        BinaryOp::Add => add(left, right),
        BinaryOp::Sub => numbers(left, right).map(|(a, b)| Value::Number(a - b)),
        BinaryOp::Mul => numbers(left, right).map(|(a, b)| Value::Number(a * b)),
        // IEEE semantics: division by zero yields an infinity or NaN
        BinaryOp::Div => numbers(left, right).map(|(a, b)| Value::Number(a / b)),
        BinaryOp::Lt => numbers(left, right).map(|(a, b)| Value::Bool(a < b)),
        BinaryOp::LtEq => numbers(left, right).map(|(a, b)| Value::Bool(a <= b)),
        BinaryOp::Gt => numbers(left, right).map(|(a, b)| Value::Bool(a > b)),
        BinaryOp::GtEq => numbers(left, right).map(|(a, b)| Value::Bool(a >= b)),
    }
}

fn add(left: &Value, right: &Value) -> Result<Value, EvalErrorKind> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::Str(a), Value::Str(b)) => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::string(joined))
        }
        _ => Err(EvalErrorKind::InvalidAddOperands),
    }
}

#[inline]
fn numbers(left: &Value, right: &Value) -> Result<(f64, f64), EvalErrorKind> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => Err(EvalErrorKind::OperandsNotNumbers),
    }
}
