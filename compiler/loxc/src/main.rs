//! The `lox` command.

use std::io;
use std::process;

use loxc::{
    init_tracing, parse_args, run_prompt, Command, Config, Session, EXIT_IO_ERROR, EXIT_USAGE,
};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(error) => {
            eprintln!("error: {error}");
            print_usage();
            process::exit(EXIT_USAGE);
        }
    };

    match options.command {
        Command::Help => print_usage(),
        Command::Version => println!("lox {}", env!("CARGO_PKG_VERSION")),
        Command::Run(path) => run_file(&path, options.config),
        Command::Repl => repl(options.config),
    }
}

fn run_file(path: &str, config: Config) {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("error: cannot read '{path}': {error}");
            process::exit(EXIT_IO_ERROR);
        }
    };

    let interner = lox_ir::StringInterner::new();
    let mut session = Session::new(&interner, config);
    if let Err(error) = session.run_source(&source) {
        eprintln!("{error}");
        process::exit(error.exit_code());
    }
}

fn repl(config: Config) {
    let interner = lox_ir::StringInterner::new();
    let mut session = Session::new(&interner, config);
    let stdin = io::stdin();
    match run_prompt(&mut session, stdin.lock(), io::stdout(), io::stderr()) {
        Ok(None) => {}
        Ok(Some(code)) => process::exit(code),
        Err(error) => {
            eprintln!("error: {error}");
            process::exit(EXIT_IO_ERROR);
        }
    }
}

fn print_usage() {
    println!("Usage: lox [options] [run] [script]");
    println!();
    println!("With no script, starts an interactive prompt.");
    println!();
    println!("Options:");
    println!("  --max-depth=<n>   Maximum nested calls (default {})", lox_stack::DEFAULT_MAX_CALL_DEPTH);
    println!("  -h, --help        Show this message");
    println!("  -V, --version     Show the version");
    println!();
    println!("Environment:");
    println!("  RUST_LOG          Log filter, e.g. RUST_LOG=lox_eval=debug");
    println!("  LOX_LOG_TREE      Render logs as an indented span tree");
}
