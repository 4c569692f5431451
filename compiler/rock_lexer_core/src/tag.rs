//! Raw token tags produced by the scanner.
//!
//! A `RawToken` is a `(tag, len)` pair with no payload and no position —
//! the cooking layer reconstructs byte offsets by accumulating lengths,
//! which is why every byte of input (trivia included) must be covered by
//! exactly one raw token.

/// Classification of a raw source span.
///
/// Error conditions (unterminated literals, invalid bytes) are encoded as
/// tags rather than `Result::Err` so the scanner stays infallible and the
/// cooking layer decides how to report them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RawTag {
    /// Run of spaces, tabs, and carriage returns. Discarded downstream.
    Whitespace,
    /// A single `\n` that is NOT part of a blank line. Discarded downstream.
    Newline,
    /// `\n\n` or `\n\r\n` — a genuinely blank line, which terminates
    /// control-flow blocks in the grammar and therefore survives as a token.
    BlankLine,

    /// `.`
    Dot,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `,`
    Comma,

    /// `(...)` including both parentheses.
    Comment,
    /// `(...` reaching end of input before the closing `)`.
    UnterminatedComment,
    /// `"..."` including both quotes. No escape processing.
    String,
    /// `"...` reaching end of input before the closing `"`.
    UnterminatedString,
    /// `[0-9]+(\.[0-9]+)?` — the dot is only consumed when a digit follows.
    Number,
    /// Maximal run of ASCII letters and underscores.
    Word,

    /// One full UTF-8 character the dispatcher has no rule for.
    InvalidByte,
    /// End of input. Always `len == 0`.
    Eof,
}

impl RawTag {
    /// Trivia tags are consumed for position tracking but never become tokens.
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, RawTag::Whitespace | RawTag::Newline)
    }
}

/// A raw token: tag plus byte length of the covered span.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}

/// Size assertion: RawToken stays two words or less.
const _: () = assert!(std::mem::size_of::<RawToken>() <= 8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trivia_classification() {
        assert!(RawTag::Whitespace.is_trivia());
        assert!(RawTag::Newline.is_trivia());
        assert!(!RawTag::BlankLine.is_trivia());
        assert!(!RawTag::Word.is_trivia());
        assert!(!RawTag::Eof.is_trivia());
    }
}
