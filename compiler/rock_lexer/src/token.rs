//! Token data model: kinds, literal payloads, and source locations.

use std::fmt;

/// Byte range of a token in the original source.
///
/// `offset` is the byte index of the first byte; `length` is the number of
/// bytes covered. Used only for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    pub offset: u32,
    pub length: u32,
}

impl Location {
    pub fn new(offset: u32, length: u32) -> Self {
        Self { offset, length }
    }

    /// Byte index one past the last byte covered.
    pub fn end(self) -> u32 {
        self.offset + self.length
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.offset, self.end())
    }
}

/// Literal payload carried by a token.
///
/// At most one variant other than `None` applies to any token:
/// strings, comments, and identifiers carry `Text`; numbers carry `Number`.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    None,
    Text(String),
    Number(f64),
}

/// Classification of a cooked token.
///
/// Keyword variants are named by their canonical (lowercased) spelling.
/// Aliases never appear here: `nothing` cooks to `Null`, `shout` to `Say`,
/// and so on. See `keywords` for the full surface-form inventory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Punctuation
    Dot,
    Plus,
    Minus,
    Star,
    Comma,

    // Literals
    Comment,
    String,
    Number,
    Identifier,

    /// A genuinely blank line (terminates control-flow blocks).
    EmptyLine,

    // Determiners (participate in common-variable merging)
    A,
    An,
    The,
    My,
    Your,
    Our,

    // Pronouns
    It,
    He,
    She,
    Him,
    Her,
    They,
    Them,
    Ze,
    Hir,
    Zie,
    Zir,
    Xe,
    Xem,
    Ve,
    Ver,

    // Assignment
    Put,
    Into,
    Of,
    In,
    Is,
    Isnt,
    Let,
    Be,
    At,

    // Arrays & strings
    Rock,
    Roll,
    With,
    Without,
    Like,
    Cut,
    Join,
    Cast,

    // Arithmetic
    Build,
    Knock,
    Turn,
    Up,
    Down,
    Around,

    // I/O
    Say,
    Listen,

    // Logic
    And,
    Or,
    Nor,
    Not,

    // Comparison
    As,
    High,
    Higher,
    Low,
    Lower,
    Than,

    // Control flow
    If,
    Else,
    While,
    Break,
    Continue,

    // Functions
    Takes,
    Taking,
    Return,
    Back,

    // Constants
    Mysterious,
    Null,
    True,
    False,
    Empty,

    /// End of input. Always the last token, zero length.
    Eof,
}

impl TokenKind {
    /// Determiners begin a common variable (`my heart`, `the night`).
    #[inline]
    pub fn is_determiner(self) -> bool {
        matches!(
            self,
            TokenKind::A
                | TokenKind::An
                | TokenKind::The
                | TokenKind::My
                | TokenKind::Your
                | TokenKind::Our
        )
    }
}

/// A cooked token.
///
/// `lexeme` borrows the exact source substring covered; `literal` carries
/// the cooked payload where one exists (string/comment content without
/// delimiters, parsed numeric value, normalized identifier text).
#[derive(Clone, Debug, PartialEq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub lexeme: &'src str,
    pub literal: Literal,
    pub location: Location,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, lexeme: &'src str, literal: Literal, location: Location) -> Self {
        Self {
            kind,
            lexeme,
            literal,
            location,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.literal {
            Literal::None => write!(f, "{:?} @ {}", self.kind, self.location),
            Literal::Text(s) => write!(f, "{:?}({s:?}) @ {}", self.kind, self.location),
            Literal::Number(n) => write!(f, "{:?}({n}) @ {}", self.kind, self.location),
        }
    }
}
