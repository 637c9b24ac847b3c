//! JSON envelopes written to stdout.
//!
//! Every invocation prints exactly one JSON object:
//!
//! ```text
//! {"success": true,  "analysis": { ...report... }}
//! {"success": true,  "url": ..., "title": ..., "content": ..., ...}
//! {"success": false, "error": "Invalid JSON input"}
//! ```

use serde::Serialize;
use std::io::Write;
use tracing::{error, instrument};

use crate::models::{AnalysisResult, ScrapedArticle};

/// One line of program output.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Envelope<'a> {
    Analysis {
        success: bool,
        analysis: &'a AnalysisResult,
    },
    Article(ArticleEnvelope<'a>),
    Failure {
        success: bool,
        error: String,
    },
}

/// Extractor output: the article fields sit next to `success`.
#[derive(Debug, Serialize)]
pub struct ArticleEnvelope<'a> {
    success: bool,
    #[serde(flatten)]
    article: &'a ScrapedArticle,
}

impl<'a> Envelope<'a> {
    pub fn analysis(analysis: &'a AnalysisResult) -> Self {
        Envelope::Analysis {
            success: true,
            analysis,
        }
    }

    pub fn article(article: &'a ScrapedArticle) -> Self {
        Envelope::Article(ArticleEnvelope {
            success: true,
            article,
        })
    }

    pub fn failure(error: impl ToString) -> Self {
        Envelope::Failure {
            success: false,
            error: error.to_string(),
        }
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

/// Write `envelope` followed by a newline.
///
/// If the envelope cannot be serialized, a failure envelope carrying the
/// serializer's message is written instead.
#[instrument(level = "debug", skip_all)]
pub fn write_envelope<W: Write>(out: &mut W, envelope: &Envelope<'_>, pretty: bool) -> std::io::Result<()> {
    let json = match envelope.to_json(pretty) {
        Ok(json) => json,
        Err(e) => {
            error!(error = %e, "Failed to serialize output envelope");
            Envelope::failure(&e).to_json(pretty)?
        }
    };
    writeln!(out, "{}", json)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::Analyzer;
    use crate::models::ArticleRecord;

    #[test]
    fn test_failure_envelope() {
        let json = Envelope::failure("Invalid JSON input").to_json(false).unwrap();
        assert_eq!(json, r#"{"success":false,"error":"Invalid JSON input"}"#);
    }

    #[test]
    fn test_analysis_envelope() {
        let result = Analyzer::default().analyze_article(&ArticleRecord::default());
        let json = Envelope::analysis(&result).to_json(false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["analysis"]["credibilityScore"], 54);
        assert_eq!(value["analysis"]["redFlags"][0]["type"], "Missing Attribution");
    }

    #[test]
    fn test_article_envelope_is_flat() {
        let article = ScrapedArticle {
            url: "https://example.com/a".to_string(),
            title: "Title".to_string(),
            author: "Sam Lee".to_string(),
            publish_date: Some("2024-05-02".to_string()),
            content: "Body text".to_string(),
            word_count: 2,
            reading_time: 1,
            domain: "example.com".to_string(),
        };
        let json = Envelope::article(&article).to_json(false).unwrap();
        assert!(json.starts_with(r#"{"success":true,"url":"https://example.com/a""#));

        // the extractor's output is accepted as analyzer input
        let record: ArticleRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record.publish_date.as_deref(), Some("2024-05-02"));
        assert_eq!(record.domain(), Some("example.com"));
    }

    #[test]
    fn test_write_envelope_appends_newline() {
        let mut out = Vec::new();
        write_envelope(&mut out, &Envelope::failure("boom"), false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\"success\":false,\"error\":\"boom\"}\n");
    }

    #[test]
    fn test_pretty_output() {
        let json = Envelope::failure("boom").to_json(true).unwrap();
        assert!(json.contains("\n  \"success\": false"));
    }
}
