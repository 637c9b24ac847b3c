//! Language-style profiling.
//!
//! Counts how many words of the body fall into the emotional, hedging and
//! absolute lexicons, turns the counts into percentages of all words and
//! derives one tone label from them.

use std::collections::BTreeSet;

use crate::lexicon::{Lexicon, Lexicons};
use crate::models::{CategoryProfile, LanguageProfile, Tone};
use crate::text::{ratio, round2};

/// Maximum number of example words listed per category.
pub const MAX_EXAMPLES: usize = 5;

/// Tone thresholds, in percent of all words.
const HIGHLY_EMOTIONAL_PCT: f64 = 0.5;
const MODERATELY_EMOTIONAL_PCT: f64 = 0.2;
const HEDGED_PCT: f64 = 1.0;
const ASSERTIVE_PCT: f64 = 0.3;

fn category(lexicon: &Lexicon, words: &[String], distinct: &BTreeSet<&str>) -> CategoryProfile {
    let count = lexicon.count_in(words);
    CategoryProfile {
        percentage: round2(ratio(count, words.len()) * 100.0),
        examples: distinct
            .iter()
            .filter(|w| lexicon.contains(w))
            .take(MAX_EXAMPLES)
            .map(|w| w.to_string())
            .collect(),
    }
}

/// First matching rule wins.
pub fn tone_for(emotional_pct: f64, hedging_pct: f64, absolute_pct: f64) -> Tone {
    if emotional_pct > HIGHLY_EMOTIONAL_PCT {
        Tone::HighlyEmotional
    } else if emotional_pct > MODERATELY_EMOTIONAL_PCT {
        Tone::ModeratelyEmotional
    } else if hedging_pct > HEDGED_PCT {
        Tone::CautiousHedged
    } else if absolute_pct > ASSERTIVE_PCT {
        Tone::Assertive
    } else {
        Tone::Neutral
    }
}

/// Profile the body text `words` (already tokenized).
pub fn profile(lexicons: &Lexicons, words: &[String]) -> LanguageProfile {
    let distinct: BTreeSet<&str> = words.iter().map(String::as_str).collect();

    let emotional_language = category(&lexicons.emotional, words, &distinct);
    let hedging_language = category(&lexicons.hedging, words, &distinct);
    let absolute_statements = category(&lexicons.absolute, words, &distinct);

    LanguageProfile {
        tone: tone_for(
            emotional_language.percentage,
            hedging_language.percentage,
            absolute_statements.percentage,
        ),
        emotional_language,
        hedging_language,
        absolute_statements,
    }
}
