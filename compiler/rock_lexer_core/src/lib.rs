//! Low-level tokenizer for the Rockstar language.
//!
//! This crate is the allocation-free bottom half of the lexer. It knows
//! nothing about keywords, aliases, or common variables — it only splits
//! a source buffer into `(RawTag, len)` spans:
//!
//! ```text
//! source → SourceBuffer → Cursor → RawScanner → (RawTag, len)
//! ```
//!
//! Keyword resolution, literal payload extraction, and error reporting
//! happen in the cooking layer (`rock_lexer`).

mod cursor;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::{tokenize, RawScanner};
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken};
