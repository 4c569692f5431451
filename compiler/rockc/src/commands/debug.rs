//! Debug commands: `lex` for inspecting the token stream.

use rock_lexer::lex;

use super::read_file;

/// Lex a file and display the token stream.
///
/// Exits with status 1 when any lexical error is found.
pub fn lex_file(path: &str) {
    let content = read_file(path);
    tracing::debug!(path, bytes = content.len(), "lexing file");

    let output = lex(&content);
    tracing::debug!(
        tokens = output.tokens.len(),
        errors = output.errors.len(),
        "lexing complete"
    );

    println!("Tokens for '{}' ({} tokens):", path, output.tokens.len());
    for token in &output.tokens {
        println!("  {token}");
    }

    if output.had_errors() {
        eprintln!();
        for error in &output.errors {
            eprintln!("error: {error}");
        }
        std::process::exit(1);
    }
}
