//! Command handlers for the Rockstar CLI.

mod debug;
mod repl;

pub use debug::lex_file;
pub use repl::run_repl;

/// Returns `true` if `path` has a `.rock` extension (any casing).
///
/// Used by the CLI to let a bare file path default to the `lex` command.
pub fn is_rock_path(path: &str) -> bool {
    std::path::Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("rock"))
}

/// Read a source file into memory.
fn try_read_file(path: &str) -> std::io::Result<String> {
    std::fs::read_to_string(path)
}

/// Read a source file, exiting with an error message on failure.
fn read_file(path: &str) -> String {
    match try_read_file(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("error: cannot read '{path}': {e}");
            std::process::exit(1);
        }
    }
}
