use super::{lookup, resolve_alias};
use crate::token::TokenKind;
use pretty_assertions::assert_eq;

// === Keyword Lookup ===

#[test]
fn every_length_bucket_resolves() {
    assert_eq!(lookup("a"), Some(TokenKind::A));
    assert_eq!(lookup("is"), Some(TokenKind::Is));
    assert_eq!(lookup("put"), Some(TokenKind::Put));
    assert_eq!(lookup("into"), Some(TokenKind::Into));
    assert_eq!(lookup("build"), Some(TokenKind::Build));
    assert_eq!(lookup("listen"), Some(TokenKind::Listen));
    assert_eq!(lookup("without"), Some(TokenKind::Without));
    assert_eq!(lookup("continue"), Some(TokenKind::Continue));
    assert_eq!(lookup("mysterious"), Some(TokenKind::Mysterious));
}

#[test]
fn determiners_resolve() {
    assert_eq!(lookup("a"), Some(TokenKind::A));
    assert_eq!(lookup("an"), Some(TokenKind::An));
    assert_eq!(lookup("the"), Some(TokenKind::The));
    assert_eq!(lookup("my"), Some(TokenKind::My));
    assert_eq!(lookup("your"), Some(TokenKind::Your));
    assert_eq!(lookup("our"), Some(TokenKind::Our));
}

#[test]
fn all_pronouns_resolve() {
    for (word, kind) in [
        ("it", TokenKind::It),
        ("he", TokenKind::He),
        ("she", TokenKind::She),
        ("him", TokenKind::Him),
        ("her", TokenKind::Her),
        ("they", TokenKind::They),
        ("them", TokenKind::Them),
        ("ze", TokenKind::Ze),
        ("hir", TokenKind::Hir),
        ("zie", TokenKind::Zie),
        ("zir", TokenKind::Zir),
        ("xe", TokenKind::Xe),
        ("xem", TokenKind::Xem),
        ("ve", TokenKind::Ve),
        ("ver", TokenKind::Ver),
    ] {
        assert_eq!(lookup(word), Some(kind), "pronoun {word:?}");
    }
}

#[test]
fn non_keywords_miss() {
    assert_eq!(lookup("heart"), None);
    assert_eq!(lookup("tommy"), None);
    assert_eq!(lookup(""), None);
    assert_eq!(lookup("x"), None);
    assert_eq!(lookup("supercalifragilistic"), None);
}

#[test]
fn lookup_is_exact_lowercase() {
    // Callers lowercase first; mixed case must miss.
    assert_eq!(lookup("Put"), None);
    assert_eq!(lookup("PUT"), None);
}

#[test]
fn nine_char_bucket_is_empty() {
    assert_eq!(lookup("ninechars"), None);
}

// === Alias Resolution ===

#[test]
fn null_aliases() {
    for word in ["nothing", "nowhere", "nobody", "gone"] {
        assert_eq!(resolve_alias(word), Some("null"), "alias {word:?}");
    }
}

#[test]
fn boolean_aliases() {
    for word in ["right", "yes", "ok"] {
        assert_eq!(resolve_alias(word), Some("true"), "alias {word:?}");
    }
    for word in ["wrong", "no", "lies"] {
        assert_eq!(resolve_alias(word), Some("false"), "alias {word:?}");
    }
}

#[test]
fn empty_string_aliases() {
    assert_eq!(resolve_alias("silence"), Some("empty"));
    assert_eq!(resolve_alias("silent"), Some("empty"));
}

#[test]
fn say_aliases() {
    for word in ["shout", "whisper", "scream"] {
        assert_eq!(resolve_alias(word), Some("say"), "alias {word:?}");
    }
}

#[test]
fn verb_aliases() {
    assert_eq!(resolve_alias("are"), Some("is"));
    assert_eq!(resolve_alias("was"), Some("is"));
    assert_eq!(resolve_alias("were"), Some("is"));
    assert_eq!(resolve_alias("aint"), Some("isnt"));
    assert_eq!(resolve_alias("wants"), Some("takes"));
    assert_eq!(resolve_alias("give"), Some("return"));
    assert_eq!(resolve_alias("send"), Some("return"));
}

#[test]
fn comparison_aliases() {
    for word in ["great", "big", "strong"] {
        assert_eq!(resolve_alias(word), Some("high"), "alias {word:?}");
    }
    for word in ["small", "weak"] {
        assert_eq!(resolve_alias(word), Some("low"), "alias {word:?}");
    }
    for word in ["greater", "bigger", "stronger"] {
        assert_eq!(resolve_alias(word), Some("higher"), "alias {word:?}");
    }
    for word in ["less", "smaller", "weaker"] {
        assert_eq!(resolve_alias(word), Some("lower"), "alias {word:?}");
    }
}

#[test]
fn filler_aliases_map_to_empty() {
    assert_eq!(resolve_alias("oh"), Some(""));
    assert_eq!(resolve_alias("yeah"), Some(""));
}

#[test]
fn non_aliases_miss() {
    assert_eq!(resolve_alias("put"), None);
    assert_eq!(resolve_alias("heart"), None);
    assert_eq!(resolve_alias(""), None);
}

#[test]
fn every_alias_target_is_a_keyword_or_empty() {
    let aliases = [
        "nothing", "nowhere", "nobody", "gone", "right", "yes", "ok", "wrong", "no", "lies",
        "silence", "silent", "shout", "whisper", "scream", "are", "was", "were", "aint", "wants",
        "give", "send", "great", "big", "strong", "small", "weak", "greater", "bigger",
        "stronger", "less", "smaller", "weaker", "oh", "yeah",
    ];
    for alias in aliases {
        let canonical = resolve_alias(alias).unwrap_or_else(|| panic!("{alias:?} must resolve"));
        assert!(
            canonical.is_empty() || lookup(canonical).is_some(),
            "alias {alias:?} resolves to {canonical:?}, which is not a keyword"
        );
    }
}
