//! Data models for article records and the credibility report.
//!
//! This module defines the structures that cross the process boundary:
//! - [`ArticleRecord`]: the article as handed to the analyzer
//! - [`AnalysisResult`]: the credibility report produced for it
//! - [`ScrapedArticle`]: what the extractor pulls out of a web page
//!
//! Wire names are camelCase to stay compatible with existing producers and
//! consumers of these JSON documents.

use serde::{Deserialize, Serialize};

/// Author value the extractor writes when a page has no byline.
pub const PLACEHOLDER_AUTHOR: &str = "Unknown Author";

/// An article as submitted for analysis.
///
/// Every field is optional on the wire. `null`, a missing key and an empty
/// string all mean "absent". Unknown keys are ignored so extractor output can
/// be fed in unchanged.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArticleRecord {
    /// The headline.
    #[serde(deserialize_with = "null_as_empty")]
    pub title: String,
    /// The body text.
    #[serde(deserialize_with = "null_as_empty")]
    pub content: String,
    /// Byline, possibly the [`PLACEHOLDER_AUTHOR`].
    pub author: Option<String>,
    /// Publication date in whatever format the page used.
    pub publish_date: Option<String>,
    /// Host the article was published on.
    pub domain: Option<String>,
}

impl ArticleRecord {
    /// True when the record names a real author.
    pub fn has_author(&self) -> bool {
        matches!(self.author.as_deref(), Some(a) if !a.is_empty() && a != PLACEHOLDER_AUTHOR)
    }

    /// True when a non-empty publication date was given.
    pub fn has_publish_date(&self) -> bool {
        self.publish_date.as_deref().is_some_and(|d| !d.is_empty())
    }

    /// The publishing domain, if one was given.
    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref().filter(|d| !d.is_empty())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Dominant language style of an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    #[serde(rename = "neutral")]
    Neutral,
    #[serde(rename = "highly emotional")]
    HighlyEmotional,
    #[serde(rename = "moderately emotional")]
    ModeratelyEmotional,
    #[serde(rename = "cautious/hedged")]
    CautiousHedged,
    #[serde(rename = "assertive")]
    Assertive,
}

/// How much of the text falls into one lexicon, with a few of the words found.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryProfile {
    /// Share of all words, in percent, rounded to two decimals.
    pub percentage: f64,
    /// Up to five distinct matching words, in ascending order.
    pub examples: Vec<String>,
}

/// Language-style breakdown of an article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageProfile {
    pub tone: Tone,
    pub emotional_language: CategoryProfile,
    pub hedging_language: CategoryProfile,
    pub absolute_statements: CategoryProfile,
}

/// Severity of a [`RedFlag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// One credibility concern found in an article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedFlag {
    /// Short label, e.g. "Missing Date".
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub severity: Severity,
}

impl RedFlag {
    /// Build a flag from one of the fixed type names in
    /// [`red_flags`](crate::analyzer::red_flags).
    pub fn new(kind: &str, description: impl Into<String>, severity: Severity) -> Self {
        Self {
            kind: kind.to_string(),
            description: description.into(),
            severity,
        }
    }
}

/// The full credibility report for one article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// 0 (not credible) to 100.
    pub credibility_score: u8,
    /// Sentences that look like checkable factual statements, at most four.
    pub core_claims: Vec<String>,
    pub language_analysis: LanguageProfile,
    pub red_flags: Vec<RedFlag>,
    /// Questions a reader should ask before trusting the article, at most four.
    pub verification_questions: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

/// An article pulled out of a web page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapedArticle {
    pub url: String,
    pub title: String,
    pub author: String,
    pub publish_date: Option<String>,
    pub content: String,
    pub word_count: usize,
    /// Estimated minutes, at 200 words per minute, never below one.
    pub reading_time: usize,
    pub domain: String,
}

impl From<ScrapedArticle> for ArticleRecord {
    fn from(article: ScrapedArticle) -> Self {
        ArticleRecord {
            title: article.title,
            content: article.content,
            author: Some(article.author),
            publish_date: article.publish_date,
            domain: Some(article.domain),
        }
    }
}
