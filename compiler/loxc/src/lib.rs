//! Lox driver.
//!
//! Ties the scanner, parser, and evaluator together for the `lox` binary:
//! running a script file, running the interactive prompt, reporting errors,
//! and installing logging.

mod config;
mod repl;
mod session;

use std::sync::Once;

pub use config::{parse_args, Command, Config, Options, UsageError};
pub use repl::run_prompt;
pub use session::{RunError, Session, StaticError, EXIT_RUNTIME_ERROR, EXIT_STATIC_ERROR};

/// Exit status for a bad command line.
pub const EXIT_USAGE: i32 = 64;
/// Exit status when the script cannot be read.
pub const EXIT_IO_ERROR: i32 = 74;

static TRACING_INIT: Once = Once::new();

/// Install the log subscriber.
///
/// Does nothing unless `RUST_LOG` is set. With `LOX_LOG_TREE` also set, spans
/// are rendered as an indented tree. Logs go to stderr so they never mix with
/// program output. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }

        let filter = EnvFilter::from_default_env();
        let registry = tracing_subscriber::registry().with(filter);
        if std::env::var_os("LOX_LOG_TREE").is_some() {
            registry
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_indent_lines(true),
                )
                .init();
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}
