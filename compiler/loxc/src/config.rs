//! Command-line options.

use thiserror::Error;

/// What the driver was asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Interactive prompt.
    Repl,
    /// Run a script file.
    Run(String),
    Help,
    Version,
}

/// Interpreter settings chosen on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub max_call_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_call_depth: lox_stack::DEFAULT_MAX_CALL_DEPTH,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub command: Command,
    pub config: Config,
}

/// Bad command line.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("invalid value for --max-depth: '{0}'")]
    InvalidDepth(String),
    #[error("missing file path")]
    MissingPath,
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

/// Parse arguments, excluding the program name.
///
/// Accepted forms: no arguments (prompt), `run <file>`, `<file>`, `help`,
/// `--help`, `--version`, each with an optional `--max-depth=<n>`.
pub fn parse_args(args: &[String]) -> Result<Options, UsageError> {
    let mut config = Config::default();
    let mut positional = Vec::new();
    let mut command = None;

    for arg in args {
        if let Some(depth) = arg.strip_prefix("--max-depth=") {
            config.max_call_depth = depth
                .parse()
                .ok()
                .filter(|&d: &usize| d > 0)
                .ok_or_else(|| UsageError::InvalidDepth(depth.to_owned()))?;
        } else if arg == "--help" || arg == "-h" {
            command = Some(Command::Help);
        } else if arg == "--version" || arg == "-V" {
            command = Some(Command::Version);
        } else if arg.starts_with('-') {
            return Err(UsageError::UnknownOption(arg.clone()));
        } else {
            positional.push(arg.as_str());
        }
    }

    if let Some(command) = command {
        return Ok(Options { command, config });
    }

    let command = match positional.as_slice() {
        [] => Command::Repl,
        ["help"] => Command::Help,
        ["run"] => return Err(UsageError::MissingPath),
        ["run", path] | [path] => Command::Run((*path).to_owned()),
        ["run", _, extra, ..] | [_, extra, ..] => {
            return Err(UsageError::UnexpectedArgument((*extra).to_owned()))
        }
    };
    Ok(Options { command, config })
}
