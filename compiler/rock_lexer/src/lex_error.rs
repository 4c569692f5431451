//! Lexer error types.
//!
//! All lexical errors are local and non-fatal: the cooker records one,
//! then keeps scanning. Callers check `LexOutput::had_errors()` before
//! handing the token stream to a parser.

use std::fmt;

use crate::token::Location;

/// A lexical error with its source location.
#[derive(Clone, Debug, PartialEq)]
pub struct LexError {
    /// Where the error occurred.
    pub location: Location,
    /// What went wrong.
    pub kind: LexErrorKind,
}

/// What kind of lexical error occurred.
#[derive(Clone, Debug, PartialEq)]
pub enum LexErrorKind {
    /// `(...` reaching end of input before the closing `)`.
    UnterminatedComment,
    /// `"...` reaching end of input before the closing `"`.
    UnterminatedString,
    /// A character no dispatch rule accepts.
    UnexpectedCharacter(char),
    /// A determiner not followed by a usable variable name word.
    InvalidCommonVariable(String),
}

impl LexError {
    #[cold]
    pub fn unterminated_comment(location: Location) -> Self {
        Self {
            location,
            kind: LexErrorKind::UnterminatedComment,
        }
    }

    #[cold]
    pub fn unterminated_string(location: Location) -> Self {
        Self {
            location,
            kind: LexErrorKind::UnterminatedString,
        }
    }

    #[cold]
    pub fn unexpected_character(location: Location, ch: char) -> Self {
        Self {
            location,
            kind: LexErrorKind::UnexpectedCharacter(ch),
        }
    }

    #[cold]
    pub fn invalid_common_variable(location: Location, text: impl Into<String>) -> Self {
        Self {
            location,
            kind: LexErrorKind::InvalidCommonVariable(text.into()),
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            LexErrorKind::UnterminatedComment => {
                write!(f, "unterminated comment at {}", self.location)
            }
            LexErrorKind::UnterminatedString => {
                write!(f, "unterminated string at {}", self.location)
            }
            LexErrorKind::UnexpectedCharacter(ch) => {
                write!(f, "unexpected character {ch:?} at {}", self.location)
            }
            LexErrorKind::InvalidCommonVariable(text) => {
                write!(f, "invalid common variable {text:?} at {}", self.location)
            }
        }
    }
}

impl std::error::Error for LexError {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn construction() {
        let loc = Location::new(10, 5);
        let err = LexError::unterminated_string(loc);
        assert_eq!(err.location, loc);
        assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    }

    #[test]
    fn display_rendering() {
        let err = LexError::unexpected_character(Location::new(3, 1), '@');
        assert_eq!(err.to_string(), "unexpected character '@' at 3..4");

        let err = LexError::invalid_common_variable(Location::new(0, 7), "a wrong");
        assert_eq!(err.to_string(), "invalid common variable \"a wrong\" at 0..7");

        let err = LexError::unterminated_comment(Location::new(2, 4));
        assert_eq!(err.to_string(), "unterminated comment at 2..6");
    }

    #[test]
    fn equality() {
        let a = LexError::unterminated_comment(Location::new(0, 1));
        let b = LexError::unterminated_comment(Location::new(0, 1));
        let c = LexError::unterminated_string(Location::new(0, 1));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
