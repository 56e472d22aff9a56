//! A persistent interpreter session.
//!
//! One session holds one global environment. Scripts run through it once;
//! the prompt feeds it one line at a time so definitions carry over.

use std::fmt;

use lox_eval::{EvalError, Interpreter, InterpreterBuilder, SharedPrintHandler};
use lox_ir::StringInterner;
use lox_lexer::LexError;
use lox_parse::ParseError;
use thiserror::Error;

use crate::Config;

/// Exit status for scanner or parser errors.
pub const EXIT_STATIC_ERROR: i32 = 65;
/// Exit status for a runtime fault.
pub const EXIT_RUNTIME_ERROR: i32 = 70;

/// An error found before execution.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StaticError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Why a request did not complete.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RunError {
    /// Nothing ran; the source has scanner or parser errors.
    #[error("{}", StaticErrors(.0))]
    Static(Vec<StaticError>),
    /// Execution stopped at a fault.
    #[error(transparent)]
    Runtime(#[from] EvalError),
}

impl RunError {
    /// Process exit status for this error when running a file.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunError::Static(_) => EXIT_STATIC_ERROR,
            RunError::Runtime(_) => EXIT_RUNTIME_ERROR,
        }
    }

    /// Whether the session cannot continue after this error.
    pub fn is_fatal(&self) -> bool {
        matches!(self, RunError::Runtime(error) if error.is_fatal())
    }
}

/// One error per line.
struct StaticErrors<'a>(&'a [StaticError]);

impl fmt::Display for StaticErrors<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

/// Interpreter plus the interner its names live in.
pub struct Session<'a> {
    interner: &'a StringInterner,
    interpreter: Interpreter<'a>,
}

impl<'a> Session<'a> {
    /// A session printing to stdout.
    pub fn new(interner: &'a StringInterner, config: Config) -> Self {
        Self::with_print_handler(interner, config, lox_eval::stdout_handler())
    }

    pub fn with_print_handler(
        interner: &'a StringInterner,
        config: Config,
        print_handler: SharedPrintHandler,
    ) -> Self {
        let interpreter = InterpreterBuilder::new(interner)
            .print_handler(print_handler)
            .max_call_depth(config.max_call_depth)
            .build();
        Session {
            interner,
            interpreter,
        }
    }

    /// Scan, parse, and run a whole program.
    #[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
    pub fn run_source(&mut self, source: &str) -> Result<(), RunError> {
        let lexed = lox_lexer::lex(source, self.interner);
        let parsed = lox_parse::parse(&lexed.tokens, self.interner);

        let mut errors: Vec<StaticError> = lexed.errors.into_iter().map(StaticError::from).collect();
        errors.extend(parsed.errors.into_iter().map(StaticError::from));
        if !errors.is_empty() {
            return Err(RunError::Static(errors));
        }

        self.interpreter.interpret(&parsed.statements)?;
        Ok(())
    }

    /// Run one line of prompt input.
    ///
    /// A line that is not a valid program but is a valid bare expression is
    /// evaluated and its value returned for echoing.
    pub fn run_line(&mut self, line: &str) -> Result<Option<String>, RunError> {
        let lexed = lox_lexer::lex(line, self.interner);
        if lexed.has_errors() {
            return Err(RunError::Static(
                lexed.errors.into_iter().map(StaticError::from).collect(),
            ));
        }

        let parsed = lox_parse::parse(&lexed.tokens, self.interner);
        if !parsed.has_errors() {
            self.interpreter.interpret(&parsed.statements)?;
            return Ok(None);
        }

        match lox_parse::parse_expression(&lexed.tokens, self.interner) {
            Ok(expr) => {
                let value = self.interpreter.evaluate_expression(&expr)?;
                Ok(Some(self.interpreter.stringify(&value)))
            }
            Err(_) => Err(RunError::Static(
                parsed.errors.into_iter().map(StaticError::from).collect(),
            )),
        }
    }

    pub fn interpreter(&self) -> &Interpreter<'a> {
        &self.interpreter
    }
}
