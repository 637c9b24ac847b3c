//! Human-readable strengths and weaknesses.

use crate::lexicon::Lexicons;
use crate::models::{ArticleRecord, LanguageProfile, RedFlag};
use crate::text::ratio;

/// Distinct source phrases needed to call the sourcing a strength.
const MULTIPLE_SOURCES: usize = 3;
/// Hedging share (0..1) above which the language counts as appropriately cautious.
const CAUTIOUS_RATIO: f64 = 0.005;

const HEAVY_EMOTION_PCT: f64 = 0.5;
const FREQUENT_ABSOLUTES_PCT: f64 = 0.3;

/// Positive observations about `record`, in a fixed order.
///
/// # Arguments
///
/// * `lexicons` - Source-indicator and hedging lexicons are read
/// * `record` - The article being summarized
/// * `words` - Tokens of `record.content`
///
/// # Returns
///
/// Author and date attribution, multiple sources and cautious language, each
/// included only when it applies.
pub fn strengths(lexicons: &Lexicons, record: &ArticleRecord, words: &[String]) -> Vec<String> {
    let mut strengths = Vec::new();

    if record.has_author() {
        strengths.push("Clear author attribution".to_string());
    }
    if record.has_publish_date() {
        strengths.push("Publication date provided".to_string());
    }

    let sources = lexicons
        .source_indicators
        .phrases_present_in(&record.content.to_lowercase());
    if sources >= MULTIPLE_SOURCES {
        strengths.push("Multiple sources referenced".to_string());
    }

    if ratio(lexicons.hedging.count_in(words), words.len()) > CAUTIOUS_RATIO {
        strengths.push("Appropriately cautious language used".to_string());
    }

    strengths
}

/// Every red flag description, then language-based observations.
pub fn weaknesses(red_flags: &[RedFlag], profile: &LanguageProfile) -> Vec<String> {
    let mut weaknesses: Vec<String> = red_flags.iter().map(|f| f.description.clone()).collect();

    if profile.emotional_language.percentage > HEAVY_EMOTION_PCT {
        weaknesses.push("Heavy use of emotional language may indicate bias".to_string());
    }
    if profile.absolute_statements.percentage > FREQUENT_ABSOLUTES_PCT {
        weaknesses.push("Frequent absolute statements without qualification".to_string());
    }

    weaknesses
}
