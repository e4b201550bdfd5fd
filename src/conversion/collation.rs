//! Locale-style string collation for roll numbers
//!
//! Approximates root-locale ordering without a full collation table:
//!
//! 1. Primary: character class (whitespace < punctuation < symbols < digits < letters),
//!    then letters case-insensitively and everything else by code point.
//! 2. Tertiary: case rank per character, lowercase < titlecase/uncased < uppercase.
//! 3. Code point order, so equal results mean equal strings.
//!
//! Accents are not folded: `é` is its own primary letter and sorts after `z`.

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Whitespace,
    Punctuation,
    Symbol,
    Digit,
    Letter,
}

fn classify(ch: char) -> CharClass {
    if ch.is_whitespace() {
        CharClass::Whitespace
    } else if ch.is_numeric() {
        CharClass::Digit
    } else if ch.is_alphabetic() {
        CharClass::Letter
    } else if is_punctuation(ch) {
        CharClass::Punctuation
    } else {
        CharClass::Symbol
    }
}

/// ASCII punctuation minus the characters collation tables treat as symbols
fn is_punctuation(ch: char) -> bool {
    ch.is_ascii_punctuation()
        && !matches!(ch, '$' | '+' | '<' | '=' | '>' | '^' | '`' | '|' | '~')
}

/// Single-character fold used by the primary pass
fn primary_key(ch: char) -> (CharClass, char) {
    let folded = if ch.is_alphabetic() {
        ch.to_lowercase().next().unwrap_or(ch)
    } else {
        ch
    };
    (classify(ch), folded)
}

fn case_rank(ch: char) -> u8 {
    if ch.is_lowercase() {
        0
    } else if ch.is_uppercase() {
        2
    } else {
        1
    }
}

/// Compare two strings the way a locale-aware `compare` would for plain identifiers.
pub fn collate(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(primary_key)
        .cmp(b.chars().map(primary_key))
        .then_with(|| a.chars().map(case_rank).cmp(b.chars().map(case_rank)))
        .then_with(|| a.cmp(b))
}
