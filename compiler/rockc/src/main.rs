//! Rockstar compiler CLI.
//!
//! Currently ships the lexer front end: `lex` dumps the token stream for
//! a file, `repl` tokenizes lines interactively.

mod commands;

use commands::{is_rock_path, lex_file, run_repl};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: rock lex <file.rock>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "repl" => {
            run_repl();
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Rockstar Compiler {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // A bare .rock path defaults to lexing it.
            if is_rock_path(command) {
                lex_file(command);
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

/// Initialize tracing when `RUST_LOG` is set.
///
/// Enable with `RUST_LOG=rockc=debug`.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        let filter = EnvFilter::from_default_env();
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true))
            .with(filter)
            .init();
    }
}

fn print_usage() {
    println!("Rockstar Compiler");
    println!();
    println!("Usage: rock <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.rock>   Tokenize a file and display the tokens");
    println!("  repl              Tokenize lines interactively");
    println!("  help              Show this help message");
    println!("  version           Show version information");
    println!();
    println!("Examples:");
    println!("  rock lex tommy.rock");
    println!("  rock repl");
}
