//! Content extraction: turning a web page into an article record.
//!
//! The analyzer never fetches anything itself. This module is the optional
//! producer behind `--url`, and its output is valid analyzer input as is.
//!
//! # Common Patterns
//!
//! - `scrape_article(url)`: fetch a page and extract its article
//! - `parse_article(url, html)`: the same extraction on HTML already in hand
//!
//! Each field is looked up through a fallback chain of CSS selectors, the
//! first non-empty match wins.

pub mod article;
