//! Core claim extraction.
//!
//! Each sentence gets an integer score from factual signals (numbers, years,
//! proper names) minus opinion markers. The best-scoring positive sentences
//! become the article's core claims.

use tracing::trace;

use crate::text::{MAX_SENTENCES, has_number, has_proper_name, has_year, sentences_of};

/// At most this many claims are reported.
pub const MAX_CLAIMS: usize = 4;

/// Size of the shortlist taken from the ranking before filtering.
const SHORTLIST: usize = 5;

const OPINION_MARKERS: &[&str] = &["believe", "think", "feel", "opinion", "view"];

#[derive(Debug)]
struct Candidate<'a> {
    text: &'a str,
    score: i32,
}

fn score_sentence(sentence: &str) -> i32 {
    let mut score = 0;
    if has_number(sentence) {
        score += 2;
    }
    if has_year(sentence) {
        score += 1;
    }
    if has_proper_name(sentence) {
        score += 1;
    }

    let lowered = sentence.to_lowercase();
    let opinions = OPINION_MARKERS
        .iter()
        .filter(|marker| lowered.contains(*marker))
        .count() as i32;

    score - opinions
}

/// Pick up to [`MAX_CLAIMS`] factual-looking sentences from `content`.
///
/// Ties keep article order, so the earlier sentence wins.
pub fn extract_claims(content: &str) -> Vec<String> {
    let mut candidates: Vec<Candidate<'_>> = sentences_of(content)
        .into_iter()
        .take(MAX_SENTENCES)
        .map(|text| Candidate {
            text,
            score: score_sentence(text),
        })
        .collect();

    // Vec::sort_by is stable.
    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    trace!(candidates = ?candidates, "Ranked claim candidates");

    candidates
        .into_iter()
        .take(SHORTLIST)
        .filter(|c| c.score > 0)
        .take(MAX_CLAIMS)
        .map(|c| c.text.to_string())
        .collect()
}
