//! Interactive prompt behavior.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use lox_eval::buffer_handler;
use lox_ir::StringInterner;
use loxc::{run_prompt, Config, Session, EXIT_RUNTIME_ERROR};
use pretty_assertions::assert_eq;

struct Transcript {
    /// Prompts and echoed values.
    output: String,
    /// `print` output.
    printed: String,
    errors: String,
    exit: Option<i32>,
}

fn prompt(input: &str, config: Config) -> Transcript {
    let interner = StringInterner::new();
    let handler = buffer_handler();
    let mut session = Session::with_print_handler(&interner, config, handler.clone());
    let mut output = Vec::new();
    let mut errors = Vec::new();
    let exit = run_prompt(&mut session, input.as_bytes(), &mut output, &mut errors).unwrap();
    Transcript {
        output: String::from_utf8(output).unwrap(),
        printed: handler.output(),
        errors: String::from_utf8(errors).unwrap(),
        exit,
    }
}

#[test]
fn bare_expressions_are_echoed() {
    let transcript = prompt("1 + 2\n\"a\" + \"b\"\n", Config::default());
    assert_eq!(transcript.output, "> 3\n> ab\n> \n");
    assert_eq!(transcript.exit, None);
}

#[test]
fn definitions_persist_between_lines() {
    let transcript = prompt(
        "var a = 10;\nfun twice(x) { return x * 2; }\nprint twice(a);\ntwice(a) + 1\n",
        Config::default(),
    );
    assert_eq!(transcript.printed, "20\n");
    assert!(transcript.output.contains("21\n"), "{}", transcript.output);
    assert_eq!(transcript.errors, "");
}

#[test]
fn faults_are_reported_and_the_session_continues() {
    let transcript = prompt("print missing;\nvar ok = 1;\nprint ok;\n", Config::default());
    assert_eq!(transcript.errors, "Undefined variable 'missing'.\n[line 1]\n");
    assert_eq!(transcript.printed, "1\n");
    assert_eq!(transcript.exit, None);
}

#[test]
fn syntax_errors_do_not_end_the_session() {
    let transcript = prompt("var = ;\nprint 5;\n", Config::default());
    assert!(transcript.errors.starts_with("[line 1] Error at '='"), "{}", transcript.errors);
    assert_eq!(transcript.printed, "5\n");
}

#[test]
fn stack_overflow_ends_the_session() {
    let config = Config { max_call_depth: 64 };
    let transcript = prompt("fun f() { f(); }\nf();\nprint \"unreached\";\n", config);
    assert_eq!(transcript.errors, "Stack overflow.\n[line 1]\n");
    assert_eq!(transcript.printed, "");
    assert_eq!(transcript.exit, Some(EXIT_RUNTIME_ERROR));
}
