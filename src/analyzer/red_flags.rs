//! Red flag detection.
//!
//! A fixed battery of independent checks. Each one looks at the record or the
//! body text and contributes at most one [`RedFlag`]. Flags are not
//! deduplicated and keep the order of the checks below.

use crate::lexicon::Lexicons;
use crate::models::{ArticleRecord, RedFlag, Severity};
use crate::text::ratio;

pub const MISSING_ATTRIBUTION: &str = "Missing Attribution";
pub const MISSING_DATE: &str = "Missing Date";
pub const SENSATIONAL_HEADLINE: &str = "Sensational Headline";
pub const LIMITED_SOURCES: &str = "Limited Source Attribution";
pub const EXCESSIVE_EMOTION: &str = "Excessive Emotional Language";

/// Articles longer than this many characters are expected to cite sources.
const SOURCED_CONTENT_CHARS: usize = 1000;
/// Fewer distinct source phrases than this counts as thin sourcing.
const MIN_SOURCE_PHRASES: usize = 2;
/// Share of emotional words (0..1) above which the language is flagged.
const EMOTIONAL_RATIO_LIMIT: f64 = 0.01;

fn missing_attribution(record: &ArticleRecord) -> Option<RedFlag> {
    (!record.has_author()).then(|| {
        RedFlag::new(
            MISSING_ATTRIBUTION,
            "No clear author attribution found",
            Severity::Medium,
        )
    })
}

fn missing_date(record: &ArticleRecord) -> Option<RedFlag> {
    (!record.has_publish_date())
        .then(|| RedFlag::new(MISSING_DATE, "No publication date found", Severity::Medium))
}

fn sensational_headline(lexicons: &Lexicons, title: &str) -> Option<RedFlag> {
    let title = title.to_lowercase();
    title
        .split_whitespace()
        .any(|token| lexicons.emotional.contains(token))
        .then(|| {
            RedFlag::new(
                SENSATIONAL_HEADLINE,
                "Headline contains emotionally charged language",
                Severity::Low,
            )
        })
}

fn limited_sources(lexicons: &Lexicons, content: &str) -> Option<RedFlag> {
    let mentions = lexicons
        .source_indicators
        .phrases_present_in(&content.to_lowercase());
    let long = content.chars().count() > SOURCED_CONTENT_CHARS;

    (mentions < MIN_SOURCE_PHRASES && long).then(|| {
        RedFlag::new(
            LIMITED_SOURCES,
            "Few or no sources cited in the article",
            Severity::High,
        )
    })
}

fn excessive_emotion(lexicons: &Lexicons, words: &[String]) -> Option<RedFlag> {
    let emotional_ratio = ratio(lexicons.emotional.count_in(words), words.len());
    (emotional_ratio > EMOTIONAL_RATIO_LIMIT).then(|| {
        RedFlag::new(
            EXCESSIVE_EMOTION,
            format_emotional_ratio(emotional_ratio),
            Severity::Medium,
        )
    })
}

/// Description for [`EXCESSIVE_EMOTION`], the ratio shown as a percentage with one decimal.
pub fn format_emotional_ratio(ratio: f64) -> String {
    format!("High use of emotional language ({:.1}%)", ratio * 100.0)
}

/// Run every check against `record`; `words` are the tokens of its content.
pub fn detect(lexicons: &Lexicons, record: &ArticleRecord, words: &[String]) -> Vec<RedFlag> {
    [
        missing_attribution(record),
        missing_date(record),
        sensational_headline(lexicons, &record.title),
        limited_sources(lexicons, &record.content),
        excessive_emotion(lexicons, words),
    ]
    .into_iter()
    .flatten()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::words_of;

    fn attributed(content: &str) -> ArticleRecord {
        ArticleRecord {
            content: content.to_string(),
            author: Some("Jane Doe".to_string()),
            publish_date: Some("2024-01-01".to_string()),
            ..Default::default()
        }
    }

    fn run(record: &ArticleRecord) -> Vec<RedFlag> {
        detect(Lexicons::builtin(), record, &words_of(&record.content))
    }

    fn kinds(flags: &[RedFlag]) -> Vec<&str> {
        flags.iter().map(|f| f.kind.as_str()).collect()
    }

    #[test]
    fn test_clean_article_has_no_flags() {
        assert!(run(&attributed("The council met on Tuesday to discuss roads.")).is_empty());
    }

    #[test]
    fn test_missing_author_and_date() {
        let flags = run(&ArticleRecord::default());
        assert_eq!(kinds(&flags), vec![MISSING_ATTRIBUTION, MISSING_DATE]);
        assert!(flags.iter().all(|f| f.severity == Severity::Medium));
    }

    #[test]
    fn test_placeholder_author_is_flagged() {
        let mut record = attributed("Plain text.");
        record.author = Some("Unknown Author".to_string());
        assert_eq!(kinds(&run(&record)), vec![MISSING_ATTRIBUTION]);
    }

    #[test]
    fn test_sensational_headline_uses_whole_tokens() {
        let mut record = attributed("Plain text.");
        record.title = "Shocking Disaster Strikes Region".to_string();
        let flags = run(&record);
        assert_eq!(kinds(&flags), vec![SENSATIONAL_HEADLINE]);
        assert_eq!(flags[0].severity, Severity::Low);

        // punctuation stays attached to the token
        record.title = "Shocking! Disaster Strikes".to_string();
        assert!(run(&record).is_empty());

        record.title = "Shockingly calm budget session".to_string();
        assert!(run(&record).is_empty());
    }

    #[test]
    fn test_limited_sources_needs_long_content() {
        let long = "The committee reviewed the proposal in detail. ".repeat(30);
        assert!(long.len() > 1000);
        let flags = run(&attributed(&long));
        assert_eq!(kinds(&flags), vec![LIMITED_SOURCES]);
        assert_eq!(flags[0].severity, Severity::High);

        let short = "The committee reviewed the proposal in detail. ".repeat(10);
        assert!(run(&attributed(&short)).is_empty());
    }

    #[test]
    fn test_two_source_phrases_clear_limited_sources() {
        let mut long = "The committee reviewed the proposal in detail. ".repeat(30);
        long.push_str("According to the clerk, studies show support.");
        assert!(run(&attributed(&long)).is_empty());

        let mut one = "The committee reviewed the proposal in detail. ".repeat(30);
        one.push_str("According to the clerk, and according to the mayor, it passed.");
        assert_eq!(kinds(&run(&attributed(&one))), vec![LIMITED_SOURCES]);
    }

    #[test]
    fn test_excessive_emotion_embeds_ratio() {
        // 1 emotional word in 40
        let mut text = "word ".repeat(39);
        text.push_str("devastating");
        let flags = run(&attributed(&text));
        assert_eq!(kinds(&flags), vec![EXCESSIVE_EMOTION]);
        assert_eq!(flags[0].description, "High use of emotional language (2.5%)");
    }

    #[test]
    fn test_exactly_one_percent_is_not_excessive() {
        let mut text = "word ".repeat(99);
        text.push_str("dramatic");
        assert!(run(&attributed(&text)).is_empty());
    }

    #[test]
    fn test_empty_content_does_not_divide_by_zero() {
        assert!(run(&attributed("")).is_empty());
    }
}
