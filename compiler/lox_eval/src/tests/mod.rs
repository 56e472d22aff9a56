#![allow(clippy::unwrap_used, clippy::expect_used)]

mod statements;

use lox_ir::StringInterner;

use crate::{buffer_handler, ErrorCategory, EvalError, InterpreterBuilder};

/// Outcome of running a program: everything printed, plus the fault that
/// stopped it, if any.
pub(super) struct Run {
    pub output: String,
    pub error: Option<EvalError>,
}

/// Scan, parse, and interpret `source` with captured output.
pub(super) fn run(source: &str) -> Run {
    run_with_depth(source, lox_stack::DEFAULT_MAX_CALL_DEPTH)
}

pub(super) fn run_with_depth(source: &str, max_call_depth: usize) -> Run {
    let interner = StringInterner::new();
    let lexed = lox_lexer::lex(source, &interner);
    assert!(lexed.errors.is_empty(), "lex errors: {:?}", lexed.errors);
    let parsed = lox_parse::parse(&lexed.tokens, &interner);
    assert!(parsed.errors.is_empty(), "parse errors: {:?}", parsed.errors);

    let handler = buffer_handler();
    let mut interpreter = InterpreterBuilder::new(&interner)
        .print_handler(handler.clone())
        .max_call_depth(max_call_depth)
        .build();
    let error = interpreter.interpret(&parsed.statements).err();
    Run {
        output: handler.output(),
        error,
    }
}

/// Output of a program expected to run without faults.
pub(super) fn eval_ok(source: &str) -> String {
    let run = run(source);
    if let Some(error) = run.error {
        panic!("unexpected runtime error: {error}");
    }
    run.output
}

/// The fault a program is expected to raise.
pub(super) fn eval_err(source: &str) -> EvalError {
    run(source).error.expect("expected a runtime error")
}

pub(super) fn category(source: &str) -> ErrorCategory {
    eval_err(source).category()
}
