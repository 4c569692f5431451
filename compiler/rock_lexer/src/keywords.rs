//! Keyword and alias resolution for the cooking layer.
//!
//! Two-table system, consulted in order on every lowercased word:
//! 1. **Alias table** — surface spellings that normalize to a canonical
//!    keyword spelling (`nothing` → `null`, `shout` → `say`). Two filler
//!    aliases (`oh`, `yeah`) map to the empty string and produce no token.
//! 2. **Keyword table** — canonical spellings resolved to a `TokenKind`.
//!
//! Both tables are constant `match` functions, length-bucketed so that a
//! word whose length falls outside the table's range is rejected without
//! any string comparison. Words that miss both tables are identifiers.
//!
//! Rockstar keywords are case-insensitive; callers must lowercase before
//! lookup (the cooker does this once per word).

use crate::token::TokenKind;

/// Look up a canonical keyword by its lowercased spelling.
///
/// Returns `None` for regular identifiers and for alias spellings —
/// callers run [`resolve_alias`] first.
#[inline]
pub fn lookup(text: &str) -> Option<TokenKind> {
    // All keywords are 1-10 chars.
    if !(1..=10).contains(&text.len()) {
        return None;
    }

    match text.len() {
        1 => match text {
            "a" => Some(TokenKind::A),
            _ => None,
        },
        2 => match text {
            "an" => Some(TokenKind::An),
            "my" => Some(TokenKind::My),
            "it" => Some(TokenKind::It),
            "he" => Some(TokenKind::He),
            "ze" => Some(TokenKind::Ze),
            "xe" => Some(TokenKind::Xe),
            "ve" => Some(TokenKind::Ve),
            "of" => Some(TokenKind::Of),
            "in" => Some(TokenKind::In),
            "is" => Some(TokenKind::Is),
            "be" => Some(TokenKind::Be),
            "at" => Some(TokenKind::At),
            "up" => Some(TokenKind::Up),
            "or" => Some(TokenKind::Or),
            "as" => Some(TokenKind::As),
            "if" => Some(TokenKind::If),
            _ => None,
        },
        3 => match text {
            "the" => Some(TokenKind::The),
            "our" => Some(TokenKind::Our),
            "she" => Some(TokenKind::She),
            "him" => Some(TokenKind::Him),
            "her" => Some(TokenKind::Her),
            "hir" => Some(TokenKind::Hir),
            "zie" => Some(TokenKind::Zie),
            "zir" => Some(TokenKind::Zir),
            "xem" => Some(TokenKind::Xem),
            "ver" => Some(TokenKind::Ver),
            "put" => Some(TokenKind::Put),
            "let" => Some(TokenKind::Let),
            "cut" => Some(TokenKind::Cut),
            "and" => Some(TokenKind::And),
            "nor" => Some(TokenKind::Nor),
            "not" => Some(TokenKind::Not),
            "low" => Some(TokenKind::Low),
            "say" => Some(TokenKind::Say),
            _ => None,
        },
        4 => match text {
            "your" => Some(TokenKind::Your),
            "they" => Some(TokenKind::They),
            "them" => Some(TokenKind::Them),
            "into" => Some(TokenKind::Into),
            "isnt" => Some(TokenKind::Isnt),
            "rock" => Some(TokenKind::Rock),
            "roll" => Some(TokenKind::Roll),
            "with" => Some(TokenKind::With),
            "like" => Some(TokenKind::Like),
            "join" => Some(TokenKind::Join),
            "cast" => Some(TokenKind::Cast),
            "turn" => Some(TokenKind::Turn),
            "down" => Some(TokenKind::Down),
            "high" => Some(TokenKind::High),
            "than" => Some(TokenKind::Than),
            "else" => Some(TokenKind::Else),
            "back" => Some(TokenKind::Back),
            "null" => Some(TokenKind::Null),
            "true" => Some(TokenKind::True),
            _ => None,
        },
        5 => match text {
            "build" => Some(TokenKind::Build),
            "knock" => Some(TokenKind::Knock),
            "lower" => Some(TokenKind::Lower),
            "false" => Some(TokenKind::False),
            "empty" => Some(TokenKind::Empty),
            "while" => Some(TokenKind::While),
            "break" => Some(TokenKind::Break),
            "takes" => Some(TokenKind::Takes),
            _ => None,
        },
        6 => match text {
            "around" => Some(TokenKind::Around),
            "listen" => Some(TokenKind::Listen),
            "higher" => Some(TokenKind::Higher),
            "taking" => Some(TokenKind::Taking),
            "return" => Some(TokenKind::Return),
            _ => None,
        },
        7 => match text {
            "without" => Some(TokenKind::Without),
            _ => None,
        },
        8 => match text {
            "continue" => Some(TokenKind::Continue),
            _ => None,
        },
        10 => match text {
            "mysterious" => Some(TokenKind::Mysterious),
            _ => None,
        },
        _ => None,
    }
}

/// Resolve an alias spelling to its canonical keyword spelling.
///
/// Returns `Some("")` for the filler words `oh` and `yeah`, which the
/// cooker drops entirely. Returns `None` when the word is not an alias.
#[inline]
pub fn resolve_alias(text: &str) -> Option<&'static str> {
    // All aliases are 2-8 chars.
    if !(2..=8).contains(&text.len()) {
        return None;
    }

    match text.len() {
        2 => match text {
            "ok" => Some("true"),
            "no" => Some("false"),
            "oh" => Some(""),
            _ => None,
        },
        3 => match text {
            "yes" => Some("true"),
            "are" => Some("is"),
            "was" => Some("is"),
            "big" => Some("high"),
            _ => None,
        },
        4 => match text {
            "gone" => Some("null"),
            "lies" => Some("false"),
            "were" => Some("is"),
            "aint" => Some("isnt"),
            "give" => Some("return"),
            "send" => Some("return"),
            "weak" => Some("low"),
            "less" => Some("lower"),
            "yeah" => Some(""),
            _ => None,
        },
        5 => match text {
            "right" => Some("true"),
            "wrong" => Some("false"),
            "shout" => Some("say"),
            "wants" => Some("takes"),
            "great" => Some("high"),
            "small" => Some("low"),
            _ => None,
        },
        6 => match text {
            "nobody" => Some("null"),
            "silent" => Some("empty"),
            "scream" => Some("say"),
            "strong" => Some("high"),
            "bigger" => Some("higher"),
            "weaker" => Some("lower"),
            _ => None,
        },
        7 => match text {
            "nothing" => Some("null"),
            "nowhere" => Some("null"),
            "silence" => Some("empty"),
            "whisper" => Some("say"),
            "greater" => Some("higher"),
            "smaller" => Some("lower"),
            _ => None,
        },
        8 => match text {
            "stronger" => Some("higher"),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests;
