//! Tokenization shared by every analysis stage.
//!
//! Words are maximal runs of word characters, lower-cased, duplicates kept.
//! Sentences are the pieces between runs of `.`, `!` and `?`, trimmed, and kept
//! only when longer than [`MIN_SENTENCE_CHARS`].

use once_cell::sync::Lazy;
use regex::Regex;

/// Sentences must be strictly longer than this many characters.
pub const MIN_SENTENCE_CHARS: usize = 20;

/// Only this many sentences are ever scored.
pub const MAX_SENTENCES: usize = 50;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").unwrap());
static SENTENCE_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());
static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d+\b").unwrap());
static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(19|20)\d{2}\b").unwrap());
static PROPER_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z][a-z]+ [A-Z][a-z]+\b").unwrap());

/// Lower-cased word tokens of `text`, in order.
pub fn words_of(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Trimmed sentences of `text` longer than [`MIN_SENTENCE_CHARS`].
pub fn sentences_of(text: &str) -> Vec<&str> {
    SENTENCE_END
        .split(text)
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
        .collect()
}

/// A standalone run of digits, e.g. `42` in "42 people".
pub fn has_number(text: &str) -> bool {
    NUMBER.is_match(text)
}

/// A four-digit token starting with `19` or `20`.
pub fn has_year(text: &str) -> bool {
    YEAR.is_match(text)
}

/// Two adjacent capitalized words, e.g. "Jane Doe" or "Supreme Court".
pub fn has_proper_name(text: &str) -> bool {
    PROPER_NAME.is_match(text)
}

/// `part / total`, or zero when there is nothing to divide by.
pub fn ratio(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}

/// Round to two decimal places.
///
/// Rounds the exact binary value of `value`, with ties going to the even
/// digit, so `0.125` becomes `0.12` and `0.30499999...` (61 in 20000, as a
/// percentage) becomes `0.3`.
pub fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}
