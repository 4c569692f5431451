use crate::{Cursor, SourceBuffer};

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.current(), b'a');
}

#[test]
fn advance_moves_forward() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_n_moves_multiple() {
    let buf = SourceBuffer::new("abcdef");
    let mut cursor = buf.cursor();
    cursor.advance_n(3);
    assert_eq!(cursor.current(), b'd');
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn advance_through_entire_source() {
    let buf = SourceBuffer::new("hi");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.current(), b'h');
    cursor.advance();
    assert_eq!(cursor.current(), b'i');
    cursor.advance();
    assert!(cursor.is_eof());
}

// === Peek ===

#[test]
fn peek_returns_next_byte() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.peek(), b'b');
}

#[test]
fn peek2_returns_two_ahead() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.peek2(), b'c');
}

#[test]
fn peek_near_end_returns_sentinel() {
    let buf = SourceBuffer::new("ab");
    let mut cursor = buf.cursor();
    cursor.advance(); // at 'b'
    assert_eq!(cursor.peek(), 0); // sentinel
}

#[test]
fn peek2_near_end_returns_zero() {
    let buf = SourceBuffer::new("a");
    let cursor = buf.cursor();
    // current='a', peek=sentinel(0), peek2=padding(0)
    assert_eq!(cursor.peek2(), 0);
}

// === EOF Detection ===

#[test]
fn is_eof_at_sentinel() {
    let buf = SourceBuffer::new("x");
    let mut cursor = buf.cursor();
    assert!(!cursor.is_eof());
    cursor.advance(); // past 'x', at sentinel
    assert!(cursor.is_eof());
}

#[test]
fn is_eof_on_empty_source() {
    let buf = SourceBuffer::new("");
    let cursor = buf.cursor();
    assert!(cursor.is_eof());
}

// === eat_while ===

#[test]
fn eat_while_consumes_matching_run() {
    let buf = SourceBuffer::new("aaab");
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b == b'a');
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.current(), b'b');
}

#[test]
fn eat_while_stops_at_sentinel() {
    let buf = SourceBuffer::new("aaa");
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b.is_ascii_alphabetic());
    assert_eq!(cursor.pos(), 3);
    assert!(cursor.is_eof());
}

#[test]
fn eat_while_no_match_is_noop() {
    let buf = SourceBuffer::new("xyz");
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b == b'a');
    assert_eq!(cursor.pos(), 0);
}

// === eat_until ===

#[test]
fn eat_until_stops_at_target() {
    let buf = SourceBuffer::new("hello)world");
    let mut cursor = buf.cursor();
    let found = cursor.eat_until(b')');
    assert_eq!(found, b')');
    assert_eq!(cursor.pos(), 5);
    assert_eq!(cursor.current(), b')');
}

#[test]
fn eat_until_missing_target_stops_at_eof() {
    let buf = SourceBuffer::new("hello");
    let mut cursor = buf.cursor();
    let found = cursor.eat_until(b'"');
    assert_eq!(found, 0);
    assert_eq!(cursor.pos(), 5);
    assert!(cursor.is_eof());
}

#[test]
fn eat_until_target_at_current_position() {
    let buf = SourceBuffer::new(")rest");
    let mut cursor = buf.cursor();
    let found = cursor.eat_until(b')');
    assert_eq!(found, b')');
    assert_eq!(cursor.pos(), 0);
}

// === UTF-8 ===

#[test]
fn utf8_char_width_classifies_lead_bytes() {
    assert_eq!(Cursor::utf8_char_width(b'a'), 1);
    assert_eq!(Cursor::utf8_char_width(0xC3), 2); // e.g. 'é'
    assert_eq!(Cursor::utf8_char_width(0xE2), 3); // e.g. '€'
    assert_eq!(Cursor::utf8_char_width(0xF0), 4); // e.g. emoji
}

#[test]
fn advance_char_skips_multibyte() {
    let buf = SourceBuffer::new("é!");
    let mut cursor = buf.cursor();
    cursor.advance_char(); // 2-byte character
    assert_eq!(cursor.current(), b'!');
}

#[test]
fn advance_char_clamps_to_source_end() {
    // A truncated lead byte at the very end must not advance past EOF.
    let buf = SourceBuffer::new("a");
    let mut cursor = buf.cursor();
    cursor.advance_char();
    assert_eq!(cursor.pos(), buf.len());
    assert!(cursor.is_eof());
}
