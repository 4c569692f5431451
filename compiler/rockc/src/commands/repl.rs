//! Interactive line-at-a-time tokenizer.

use std::io::{self, BufRead, Write};

use rock_lexer::lex;

/// Run the read-lex-print loop until EOF (Ctrl-D).
///
/// Each line is lexed independently; errors do not end the session.
pub fn run_repl() {
    println!("Rockstar lexer repl. Ctrl-D to exit.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        print!("#> ");
        if stdout.flush().is_err() {
            return;
        }

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => {
                // EOF
                println!();
                return;
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("error: {e}");
                return;
            }
        }

        let output = lex(line.trim_end_matches(['\n', '\r']));
        for token in &output.tokens {
            println!("  {token}");
        }
        for error in &output.errors {
            eprintln!("error: {error}");
        }
    }
}
