//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and produces
//! [`RawToken`] values with zero heap allocation. It does not resolve
//! keywords or aliases, merge common variables, or parse numeric values —
//! those are deferred to the cooking layer.
//!
//! # Design
//!
//! Main dispatch branches on the current byte. Each arm calls a focused
//! method that advances the cursor and returns `RawToken { tag, len }`.
//! The sentinel byte (`0x00`) naturally dispatches to `eof()`.

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// Pure, allocation-free scanner.
///
/// Produces one token at a time as a `(tag, length)` pair.
/// Error conditions are encoded as `RawTag` variants, not as `Result::Err`.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    #[inline]
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => self.eof(),
            b' ' | b'\t' | b'\r' => self.whitespace(start),
            b'\n' => self.newline(start),
            b'.' => self.single(start, RawTag::Dot),
            b'+' => self.single(start, RawTag::Plus),
            b'-' => self.single(start, RawTag::Minus),
            b'*' => self.single(start, RawTag::Star),
            b',' => self.single(start, RawTag::Comma),
            b'(' => self.comment(start),
            b'"' => self.string(start),
            b'0'..=b'9' => self.number(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.word(start),
            _ => self.invalid_byte(start),
        }
    }

    // ─── EOF ───────────────────────────────────────────────────────────

    fn eof(&mut self) -> RawToken {
        if self.cursor.is_eof() {
            RawToken {
                tag: RawTag::Eof,
                len: 0,
            }
        } else {
            // Interior null byte — not a real EOF. Treat it like any other
            // byte the dispatcher has no rule for.
            let start = self.cursor.pos();
            self.cursor.advance();
            RawToken {
                tag: RawTag::InvalidByte,
                len: self.cursor.pos() - start,
            }
        }
    }

    // ─── Whitespace & Newlines ─────────────────────────────────────────

    #[inline]
    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor
            .eat_while(|b| b == b' ' || b == b'\t' || b == b'\r');
        RawToken {
            tag: RawTag::Whitespace,
            len: self.cursor.pos() - start,
        }
    }

    /// Blank-line rule: a `\n` followed by `\n` (or `\r\n`) is a blank line,
    /// which the grammar uses to terminate control-flow blocks. Any other
    /// `\n` is ordinary trivia.
    fn newline(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '\n'
        if self.cursor.current() == b'\n' {
            self.cursor.advance();
            RawToken {
                tag: RawTag::BlankLine,
                len: self.cursor.pos() - start,
            }
        } else if self.cursor.current() == b'\r' && self.cursor.peek() == b'\n' {
            self.cursor.advance_n(2);
            RawToken {
                tag: RawTag::BlankLine,
                len: self.cursor.pos() - start,
            }
        } else {
            RawToken {
                tag: RawTag::Newline,
                len: self.cursor.pos() - start,
            }
        }
    }

    // ─── Punctuation ───────────────────────────────────────────────────

    /// Single-byte token: advance one byte and emit the given tag.
    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    // ─── Comments ──────────────────────────────────────────────────────

    /// `(...)` — everything through the closing paren, or through EOF when
    /// the comment is unterminated. No nesting, no escapes.
    fn comment(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '('
        let found = self.cursor.eat_until(b')');
        if found == b')' {
            self.cursor.advance(); // consume ')'
            RawToken {
                tag: RawTag::Comment,
                len: self.cursor.pos() - start,
            }
        } else {
            RawToken {
                tag: RawTag::UnterminatedComment,
                len: self.cursor.pos() - start,
            }
        }
    }

    // ─── String Literals ───────────────────────────────────────────────

    /// `"..."` — everything through the closing quote, or through EOF when
    /// the string is unterminated. No escape handling; strings may span
    /// newlines because nothing stops them.
    fn string(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume opening '"'
        let found = self.cursor.eat_until(b'"');
        if found == b'"' {
            self.cursor.advance(); // consume closing '"'
            RawToken {
                tag: RawTag::String,
                len: self.cursor.pos() - start,
            }
        } else {
            RawToken {
                tag: RawTag::UnterminatedString,
                len: self.cursor.pos() - start,
            }
        }
    }

    // ─── Numeric Literals ──────────────────────────────────────────────

    #[inline]
    fn number(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume first digit
        self.cursor.eat_while(|b| b.is_ascii_digit());

        // Only consume the '.' when a digit follows — otherwise it is a
        // sentence-terminating period, not a decimal point.
        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance(); // consume '.'
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }

        RawToken {
            tag: RawTag::Number,
            len: self.cursor.pos() - start,
        }
    }

    // ─── Words ─────────────────────────────────────────────────────────

    /// Maximal run of ASCII letters and underscores. Digits are NOT word
    /// characters in Rockstar, so `foo1` is a word followed by a number.
    #[inline]
    fn word(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume first char (already validated)
        self.cursor.eat_while(is_word_continue);
        RawToken {
            tag: RawTag::Word,
            len: self.cursor.pos() - start,
        }
    }

    // ─── Error tokens ──────────────────────────────────────────────────

    /// One full UTF-8 character the dispatcher has no rule for. Covering
    /// the whole character (not just the lead byte) keeps the downstream
    /// error message printable.
    fn invalid_byte(&mut self, start: u32) -> RawToken {
        self.cursor.advance_char();
        RawToken {
            tag: RawTag::InvalidByte,
            len: self.cursor.pos() - start,
        }
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        if tok.tag == RawTag::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

/// 256-byte lookup table for word continuation bytes.
/// `true` for a-z, A-Z, and underscore — deliberately NOT digits.
/// Table lookup replaces the multi-range `matches!` with a single indexed read.
/// The sentinel byte (0x00) maps to `false`, naturally terminating loops.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_WORD_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(i as u8, b'a'..=b'z' | b'A'..=b'Z' | b'_');
        i += 1;
    }
    table
};

/// Returns `true` if `b` is a valid word continuation byte.
#[inline]
fn is_word_continue(b: u8) -> bool {
    IS_WORD_CONTINUE_TABLE[b as usize]
}

/// Convenience function: tokenize a source string and collect all raw tokens.
///
/// Returns a `Vec<RawToken>` containing all tokens except the final `Eof`.
/// For streaming access, construct a `SourceBuffer` + `RawScanner` directly.
pub fn tokenize(source: &str) -> Vec<RawToken> {
    let buf = crate::SourceBuffer::new(source);
    let mut scanner = RawScanner::new(buf.cursor());
    let mut tokens = Vec::new();
    loop {
        let tok = scanner.next_token();
        if tok.tag == RawTag::Eof {
            break;
        }
        tokens.push(tok);
    }
    tokens
}
