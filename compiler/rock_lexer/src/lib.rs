//! Lexer for Rockstar: cooks the raw scanner's output into typed tokens.
//!
//! The raw layer (`rock_lexer_core`) classifies byte spans; this crate
//! resolves keywords and aliases, extracts literal payloads, merges common
//! variables, and reports lexical errors.
//!
//! # Example
//!
//! ```
//! use rock_lexer::{lex, TokenKind};
//!
//! let output = lex("Put 5 into my heart");
//! assert!(!output.had_errors());
//! let kinds: Vec<TokenKind> = output.tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Put,
//!         TokenKind::Number,
//!         TokenKind::Into,
//!         TokenKind::Identifier,
//!         TokenKind::Eof
//!     ]
//! );
//! ```

mod cooker;
mod keywords;
mod lex_error;
mod token;

pub use lex_error::{LexError, LexErrorKind};
pub use token::{Literal, Location, Token, TokenKind};

use cooker::TokenCooker;

/// Everything one lex pass produces: the best-effort token stream plus the
/// errors encountered along the way.
#[derive(Clone, Debug, PartialEq)]
pub struct LexOutput<'src> {
    /// Tokens in source order, ending with exactly one `Eof`.
    pub tokens: Vec<Token<'src>>,
    /// Lexical errors in source order.
    pub errors: Vec<LexError>,
}

impl LexOutput<'_> {
    /// Returns `true` if any lexical error was recorded. Callers check
    /// this before handing the tokens to a parser.
    pub fn had_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Lex a complete source string in one pass.
///
/// Never fails: errors are accumulated in the output and scanning
/// continues past them. The token stream always ends with a zero-length
/// `Eof` token at the source length.
///
/// # Panics
///
/// Panics if `source` exceeds `u32::MAX` bytes.
pub fn lex(source: &str) -> LexOutput<'_> {
    let mut cooker = TokenCooker::new(source);
    let mut tokens = cooker.cook_all();
    let errors = cooker.into_errors();

    let eof_offset = u32::try_from(source.len())
        .unwrap_or_else(|_| panic!("source exceeds {} bytes", u32::MAX));
    tokens.push(Token::new(
        TokenKind::Eof,
        "",
        Literal::None,
        Location::new(eof_offset, 0),
    ));

    LexOutput { tokens, errors }
}
