//! # Digital Skeptic
//!
//! Assesses the credibility of a news article from its text alone and prints
//! a structured JSON report: a 0-100 credibility score, the article's core
//! factual claims, a language-style profile, red flags with severities,
//! verification questions, and strengths and weaknesses.
//!
//! ## Usage
//!
//! ```sh
//! digital_skeptic '{"title": "...", "content": "...", "author": "...", "publishDate": "...", "domain": "..."}'
//! digital_skeptic --url https://example.com/story [--analyze]
//! ```
//!
//! ## Architecture
//!
//! 1. **Input**: one JSON article record, or a page fetched by [`scrapers`]
//! 2. **Analysis**: the lexicon-driven pipeline in [`analyzer`]
//! 3. **Output**: a single success or failure envelope on stdout ([`outputs`])
//!
//! The analysis is deterministic and does no I/O. Logs go to stderr and are
//! controlled with `RUST_LOG`.

use clap::Parser;
use clap::error::ErrorKind;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::process::ExitCode;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod analyzer;
mod cli;
mod error;
mod lexicon;
mod models;
mod outputs;
mod scrapers;
mod text;
mod utils;

use analyzer::Analyzer;
use cli::Cli;
use error::SkepticError;
use lexicon::Lexicons;
use models::{AnalysisResult, ArticleRecord};
use outputs::json::{Envelope, write_envelope};
use utils::truncate_for_log;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "analysis failed".to_string()
    }
}

/// Run the analyzer, turning a panic into an [`SkepticError::Internal`].
fn analyze_guarded(
    analyzer: &Analyzer<'_>,
    record: &ArticleRecord,
) -> Result<AnalysisResult, SkepticError> {
    panic::catch_unwind(AssertUnwindSafe(|| analyzer.analyze_article(record))).map_err(|payload| {
        let msg = panic_message(payload.as_ref());
        error!(error = %msg, "Analysis panicked");
        SkepticError::Internal(msg)
    })
}

/// Decode the JSON argument into a record and analyze it.
#[instrument(level = "info", skip_all, fields(input_bytes = input.len()))]
fn analyze_json(analyzer: &Analyzer<'_>, input: &str) -> Result<AnalysisResult, SkepticError> {
    let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
        warn!(error = %e, input = %truncate_for_log(input, 120), "Argument is not valid JSON");
        SkepticError::InvalidJson
    })?;
    let record: ArticleRecord = serde_json::from_value(value).map_err(|e| {
        warn!(error = %e, "JSON does not describe an article record");
        SkepticError::Record(e)
    })?;
    analyze_guarded(analyzer, &record)
}

fn emit(envelope: &Envelope<'_>, pretty: bool) -> ExitCode {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match write_envelope(&mut out, envelope, pretty) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Failed writing to stdout");
            ExitCode::FAILURE
        }
    }
}

/// Print a failure envelope; usage errors also fail the process.
fn report(err: &SkepticError, pretty: bool) -> ExitCode {
    let code = emit(&Envelope::failure(err), pretty);
    if err.is_usage_error() {
        ExitCode::FAILURE
    } else {
        code
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let start_time = std::time::Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            debug!(error = %e, "Rejected command line");
            return report(&SkepticError::MissingArticle, false);
        }
    };
    debug!(?cli, "Parsed CLI arguments");
    let pretty = cli.pretty;

    let lexicons = match &cli.lexicons {
        Some(path) => match Lexicons::load(path) {
            Ok(lexicons) => lexicons,
            Err(e) => {
                error!(error = %e, "Could not load lexicons");
                return report(&e, pretty);
            }
        },
        None => Lexicons::default(),
    };
    let analyzer = Analyzer::new(&lexicons);

    let code = if let Some(url) = &cli.url {
        match scrapers::article::scrape_article(url).await {
            Ok(article) if cli.analyze => {
                let record = ArticleRecord::from(article);
                match analyze_guarded(&analyzer, &record) {
                    Ok(result) => emit(&Envelope::analysis(&result), pretty),
                    Err(e) => report(&e, pretty),
                }
            }
            Ok(article) => emit(&Envelope::article(&article), pretty),
            Err(e) => {
                error!(%url, error = %e, "Article extraction failed");
                emit(&Envelope::failure(&e), pretty)
            }
        }
    } else if let Some(input) = &cli.article {
        match analyze_json(&analyzer, input) {
            Ok(result) => {
                info!(
                    credibility_score = result.credibility_score,
                    red_flags = result.red_flags.len(),
                    "Analysis complete"
                );
                emit(&Envelope::analysis(&result), pretty)
            }
            Err(e) => report(&e, pretty),
        }
    } else {
        report(&SkepticError::MissingArticle, pretty)
    };

    let elapsed = start_time.elapsed();
    debug!(?elapsed, millis = elapsed.as_millis() as u64, "Execution complete");
    code
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(input: &str) -> Result<AnalysisResult, SkepticError> {
        analyze_json(&Analyzer::default(), input)
    }

    #[test]
    fn test_valid_record() {
        let result = analyze(
            r#"{"title": "Budget passes", "content": "The council approved 12 projects in 2024.", "author": "Jane Doe", "publishDate": "2024-01-01"}"#,
        )
        .unwrap();
        assert_eq!(result.credibility_score, 80);
        assert_eq!(result.core_claims, vec!["The council approved 12 projects in 2024"]);
    }

    #[test]
    fn test_malformed_json() {
        let err = analyze("{not json").unwrap_err();
        assert!(matches!(err, SkepticError::InvalidJson));
        assert_eq!(err.to_string(), "Invalid JSON input");
        assert!(!err.is_usage_error());
    }

    #[test]
    fn test_wrong_shape_reports_serde_message() {
        let err = analyze(r#"{"content": 42}"#).unwrap_err();
        assert!(matches!(err, SkepticError::Record(_)));
        assert!(err.to_string().contains("invalid type"));

        assert!(matches!(analyze("[1, 2, 3]").unwrap_err(), SkepticError::Record(_)));
    }

    #[test]
    fn test_empty_object_is_analyzed() {
        let result = analyze("{}").unwrap();
        assert_eq!(result.credibility_score, 54);
    }

    #[test]
    fn test_panic_message() {
        let payload: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_message(payload.as_ref()), "boom");
        let payload: Box<dyn Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_message(payload.as_ref()), "bang");
        let payload: Box<dyn Any + Send> = Box::new(7u8);
        assert_eq!(panic_message(payload.as_ref()), "analysis failed");
    }
}
