//! Command-line interface definitions for Digital Skeptic.
//!
//! The usual call passes one JSON-encoded article record. `--url` switches to
//! the page extractor instead.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the Digital Skeptic analyzer.
///
/// # Examples
///
/// ```sh
/// # Analyze an article record
/// digital_skeptic '{"title": "...", "content": "...", "author": "Jane Doe"}'
///
/// # Extract an article from a page
/// digital_skeptic --url https://example.com/story
///
/// # Extract and analyze in one go, with custom lexicons
/// digital_skeptic --url https://example.com/story --analyze --lexicons lexicons.yaml
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Article record as a JSON object (title, content, author, publishDate, domain)
    #[arg(
        value_name = "ARTICLE_JSON",
        required_unless_present = "url",
        conflicts_with = "url"
    )]
    pub article: Option<String>,

    /// Fetch and extract the article at this URL instead of reading ARTICLE_JSON
    #[arg(long)]
    pub url: Option<String>,

    /// With --url, analyze the extracted article instead of printing it
    #[arg(long, requires = "url")]
    pub analyze: bool,

    /// YAML file overriding the built-in lexicons
    #[arg(long, value_name = "FILE")]
    pub lexicons: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_single_article_argument() {
        let cli = Cli::try_parse_from(["digital_skeptic", r#"{"content": "x"}"#]).unwrap();
        assert_eq!(cli.article.as_deref(), Some(r#"{"content": "x"}"#));
        assert!(cli.url.is_none());
        assert!(!cli.pretty);
    }

    #[test]
    fn test_cli_requires_an_article() {
        assert!(Cli::try_parse_from(["digital_skeptic"]).is_err());
    }

    #[test]
    fn test_cli_rejects_extra_arguments() {
        assert!(Cli::try_parse_from(["digital_skeptic", "{}", "{}"]).is_err());
    }

    #[test]
    fn test_cli_url_mode() {
        let cli = Cli::try_parse_from([
            "digital_skeptic",
            "--url",
            "https://example.com/a",
            "--analyze",
            "--lexicons",
            "lex.yaml",
        ])
        .unwrap();
        assert_eq!(cli.url.as_deref(), Some("https://example.com/a"));
        assert!(cli.analyze);
        assert_eq!(cli.lexicons, Some(PathBuf::from("lex.yaml")));
        assert!(cli.article.is_none());
    }

    #[test]
    fn test_cli_analyze_needs_url() {
        assert!(Cli::try_parse_from(["digital_skeptic", "{}", "--analyze"]).is_err());
    }

    #[test]
    fn test_cli_article_and_url_conflict() {
        assert!(Cli::try_parse_from(["digital_skeptic", "{}", "--url", "https://example.com"]).is_err());
    }
}
