//! Error types for the command surface and the content extractor.
//!
//! The analysis engine itself cannot fail; everything here happens at the
//! edges: reading the argument, decoding it, loading lexicons, fetching pages.
//! The `Display` text of each variant is exactly what ends up in the
//! `"error"` field of the failure envelope.

/// Failures reported by the `digital_skeptic` command.
#[derive(Debug, thiserror::Error)]
pub enum SkepticError {
    /// No article argument (or too many) was supplied.
    #[error("Article data required")]
    MissingArticle,

    /// The argument is not syntactically valid JSON.
    #[error("Invalid JSON input")]
    InvalidJson,

    /// Valid JSON that does not describe an article record.
    #[error("{0}")]
    Record(#[source] serde_json::Error),

    /// The lexicon override file could not be read or parsed.
    #[error("Invalid lexicon file: {0}")]
    Lexicon(String),

    /// Anything else that went wrong while producing the report.
    #[error("{0}")]
    Internal(String),
}

/// Failures from fetching and parsing an article page.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Parsing error: {0}")]
    Parse(String),
}

impl SkepticError {
    /// Whether the process should exit with a non-zero status after reporting this error.
    pub fn is_usage_error(&self) -> bool {
        matches!(self, SkepticError::MissingArticle | SkepticError::Lexicon(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_messages() {
        assert_eq!(SkepticError::MissingArticle.to_string(), "Article data required");
        assert_eq!(SkepticError::InvalidJson.to_string(), "Invalid JSON input");
        assert_eq!(
            ExtractError::Parse("no body".into()).to_string(),
            "Parsing error: no body"
        );
    }

    #[test]
    fn test_record_error_passes_serde_message_through() {
        let e = serde_json::from_str::<u8>("\"x\"").unwrap_err();
        let msg = e.to_string();
        assert_eq!(SkepticError::Record(e).to_string(), msg);
    }

    #[test]
    fn test_usage_errors() {
        assert!(SkepticError::MissingArticle.is_usage_error());
        assert!(SkepticError::Lexicon("bad".into()).is_usage_error());
        assert!(!SkepticError::InvalidJson.is_usage_error());
        assert!(!SkepticError::Internal("boom".into()).is_usage_error());
    }
}
