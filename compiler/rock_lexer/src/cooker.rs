//! Token cooking layer.
//!
//! Transforms `(RawTag, len)` pairs from the raw scanner into cooked
//! [`Token`]s: reconstructs byte offsets by accumulating lengths, discards
//! trivia, strips literal delimiters, parses numeric payloads, resolves
//! aliases and keywords, and merges common variables.
//!
//! # Architecture
//!
//! ```text
//! source → RawScanner → (RawTag, len) → TokenCooker → Vec<Token>
//! ```
//!
//! The raw stream is collected up front so the common-variable merge can
//! look ahead over trivia without re-scanning. Errors are accumulated, not
//! returned early: the cooker always produces a best-effort token stream.

use rock_lexer_core::{RawScanner, RawTag, SourceBuffer};

use crate::keywords;
use crate::lex_error::LexError;
use crate::token::{Literal, Location, Token, TokenKind};

/// A raw token with its absolute source position.
#[derive(Clone, Copy, Debug)]
struct SpannedRaw {
    tag: RawTag,
    offset: u32,
    len: u32,
}

/// Cooks the raw token stream into parser-ready tokens.
///
/// One-shot: construct, call [`cook_all`](Self::cook_all), then
/// [`into_errors`](Self::into_errors).
pub(crate) struct TokenCooker<'src> {
    source: &'src str,
    raw: Vec<SpannedRaw>,
    /// Index of the next raw token to cook.
    idx: usize,
    errors: Vec<LexError>,
}

impl<'src> TokenCooker<'src> {
    /// Scan `source` and collect the raw stream for cooking.
    pub(crate) fn new(source: &'src str) -> Self {
        let buf = SourceBuffer::new(source);
        let mut scanner = RawScanner::new(buf.cursor());
        let mut raw = Vec::new();
        let mut offset = 0u32;
        loop {
            let tok = scanner.next_token();
            if tok.tag == RawTag::Eof {
                break;
            }
            raw.push(SpannedRaw {
                tag: tok.tag,
                offset,
                len: tok.len,
            });
            offset += tok.len;
        }
        Self {
            source,
            raw,
            idx: 0,
            errors: Vec::new(),
        }
    }

    /// Consume the cooker, returning accumulated errors.
    pub(crate) fn into_errors(self) -> Vec<LexError> {
        self.errors
    }

    /// Cook the entire raw stream. Does not append the `Eof` token; the
    /// driver does that once, at the source length.
    pub(crate) fn cook_all(&mut self) -> Vec<Token<'src>> {
        let mut tokens = Vec::new();
        while self.idx < self.raw.len() {
            let spanned = self.raw[self.idx];
            self.idx += 1;
            if let Some(token) = self.cook(spanned) {
                tokens.push(token);
            }
        }
        tokens
    }

    /// Cook one raw token. Returns `None` for trivia, filler words, and
    /// error spans that produce no token.
    fn cook(&mut self, spanned: SpannedRaw) -> Option<Token<'src>> {
        let lexeme = self.slice(spanned);
        let location = Location::new(spanned.offset, spanned.len);
        match spanned.tag {
            RawTag::Whitespace | RawTag::Newline => None,

            RawTag::BlankLine => Some(Token::new(
                TokenKind::EmptyLine,
                lexeme,
                Literal::None,
                location,
            )),

            RawTag::Dot => Some(Token::new(TokenKind::Dot, lexeme, Literal::None, location)),
            RawTag::Plus => Some(Token::new(TokenKind::Plus, lexeme, Literal::None, location)),
            RawTag::Minus => Some(Token::new(
                TokenKind::Minus,
                lexeme,
                Literal::None,
                location,
            )),
            RawTag::Star => Some(Token::new(TokenKind::Star, lexeme, Literal::None, location)),
            RawTag::Comma => Some(Token::new(
                TokenKind::Comma,
                lexeme,
                Literal::None,
                location,
            )),

            RawTag::Comment => Some(Token::new(
                TokenKind::Comment,
                lexeme,
                // Interior, without the parentheses.
                Literal::Text(lexeme[1..lexeme.len() - 1].to_string()),
                location,
            )),
            RawTag::UnterminatedComment => {
                self.errors.push(LexError::unterminated_comment(location));
                // Best-effort: emit the token with the partial payload.
                Some(Token::new(
                    TokenKind::Comment,
                    lexeme,
                    Literal::Text(lexeme[1..].to_string()),
                    location,
                ))
            }

            RawTag::String => Some(Token::new(
                TokenKind::String,
                lexeme,
                Literal::Text(lexeme[1..lexeme.len() - 1].to_string()),
                location,
            )),
            RawTag::UnterminatedString => {
                self.errors.push(LexError::unterminated_string(location));
                Some(Token::new(
                    TokenKind::String,
                    lexeme,
                    Literal::Text(lexeme[1..].to_string()),
                    location,
                ))
            }

            RawTag::Number => Some(Token::new(
                TokenKind::Number,
                lexeme,
                // The raw grammar [0-9]+(\.[0-9]+)? always parses as f64.
                Literal::Number(lexeme.parse().unwrap_or_default()),
                location,
            )),

            RawTag::Word => self.cook_word(spanned),

            RawTag::InvalidByte => {
                let ch = lexeme.chars().next().unwrap_or('\u{FFFD}');
                self.errors
                    .push(LexError::unexpected_character(location, ch));
                None
            }

            // Trailing Eof never enters the raw list.
            RawTag::Eof => None,
        }
    }

    /// Resolve a word: alias normalization, keyword lookup, and the
    /// common-variable merge for determiners.
    fn cook_word(&mut self, spanned: SpannedRaw) -> Option<Token<'src>> {
        let lexeme = self.slice(spanned);
        let location = Location::new(spanned.offset, spanned.len);
        let lowered = lexeme.to_ascii_lowercase();

        let canonical = match keywords::resolve_alias(&lowered) {
            // Filler word: no token at all.
            Some("") => return None,
            Some(canonical) => canonical,
            None => lowered.as_str(),
        };

        match keywords::lookup(canonical) {
            None => Some(Token::new(
                TokenKind::Identifier,
                lexeme,
                Literal::Text(lowered),
                location,
            )),
            Some(kind) if kind.is_determiner() => self.merge_common_variable(spanned),
            Some(kind) => Some(Token::new(kind, lexeme, Literal::None, location)),
        }
    }

    /// Common-variable merge: a determiner plus the following non-keyword
    /// word form one identifier (`my heart`, `the night`).
    ///
    /// Looks ahead over trivia for the next raw token. When it is a word
    /// that does not resolve to a keyword, both words are consumed and one
    /// `Identifier` spanning them is emitted. Otherwise an
    /// `InvalidCommonVariable` error is recorded and no token is emitted
    /// for the determiner; a keyword follower is consumed with it, while
    /// a non-word follower is left for the next cooking step.
    fn merge_common_variable(&mut self, determiner: SpannedRaw) -> Option<Token<'src>> {
        let det_text = self.slice(determiner);
        let det_location = Location::new(determiner.offset, determiner.len);

        // Skip trivia without committing.
        let mut probe = self.idx;
        while probe < self.raw.len() && is_merge_trivia(self.raw[probe].tag) {
            probe += 1;
        }

        let Some(&follower) = self.raw.get(probe).filter(|r| r.tag == RawTag::Word) else {
            // Nothing mergeable follows: the determiner alone is not a
            // variable. The follower (if any) cooks normally next round.
            self.errors
                .push(LexError::invalid_common_variable(det_location, det_text));
            return None;
        };

        let word_text = self.slice(follower);
        let lowered = word_text.to_ascii_lowercase();
        let canonical = match keywords::resolve_alias(&lowered) {
            Some("") => lowered.as_str(),
            Some(canonical) => canonical,
            None => lowered.as_str(),
        };

        // Both words are consumed either way.
        self.idx = probe + 1;

        let span_len = follower.offset + follower.len - determiner.offset;
        let span = Location::new(determiner.offset, span_len);
        let span_lexeme = &self.source[determiner.offset as usize..span.end() as usize];

        if keywords::lookup(canonical).is_some() {
            // `a wrong day`: a keyword cannot name a variable.
            self.errors.push(LexError::invalid_common_variable(
                span,
                format!("{det_text} {word_text}"),
            ));
            return None;
        }

        Some(Token::new(
            TokenKind::Identifier,
            span_lexeme,
            // Single space regardless of the source spacing.
            Literal::Text(format!("{det_text} {word_text}")),
            span,
        ))
    }

    fn slice(&self, spanned: SpannedRaw) -> &'src str {
        &self.source[spanned.offset as usize..(spanned.offset + spanned.len) as usize]
    }
}

/// Trivia the merge looks across when searching for the variable name word.
fn is_merge_trivia(tag: RawTag) -> bool {
    tag.is_trivia() || tag == RawTag::BlankLine
}
