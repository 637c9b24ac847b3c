//! Credibility scoring.
//!
//! Starts from a neutral baseline, subtracts per red flag by severity and for
//! heavy emotional language, adds for attribution and dating, then clamps.

use crate::models::{ArticleRecord, LanguageProfile, RedFlag, Severity};

const BASELINE: f64 = 70.0;
const ATTRIBUTION_BONUS: f64 = 5.0;
const DATE_BONUS: f64 = 5.0;

/// Emotional percentage above which an extra penalty applies.
const EMOTIONAL_PENALTY_PCT: f64 = 1.0;
const EMOTIONAL_PENALTY_CAP: f64 = 20.0;

fn severity_penalty(severity: Severity) -> f64 {
    match severity {
        Severity::High => 15.0,
        Severity::Medium => 8.0,
        Severity::Low => 3.0,
    }
}

/// Score in `0..=100`.
///
/// The running value is truncated toward zero, not rounded, before clamping,
/// while the profile percentages it reads were rounded to two decimals.
pub fn score(profile: &LanguageProfile, red_flags: &[RedFlag], record: &ArticleRecord) -> u8 {
    let mut score = BASELINE;

    for flag in red_flags {
        score -= severity_penalty(flag.severity);
    }

    let emotional_pct = profile.emotional_language.percentage;
    if emotional_pct > EMOTIONAL_PENALTY_PCT {
        score -= EMOTIONAL_PENALTY_CAP.min(emotional_pct * 2.0);
    }

    if record.has_author() {
        score += ATTRIBUTION_BONUS;
    }
    if record.has_publish_date() {
        score += DATE_BONUS;
    }

    score.trunc().clamp(0.0, 100.0) as u8
}
