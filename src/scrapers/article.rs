//! Generic article page scraper.
//!
//! Works on arbitrary news pages by trying a list of common CSS selectors for
//! each field and falling back to the next one when a selector finds nothing.
//! Text inside page chrome (`script`, `style`, `nav`, `header`, `footer`,
//! `aside`) is ignored when collecting the body.

use itertools::Itertools;
use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{ElementRef, Html, Node, Selector};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::error::ExtractError;
use crate::models::{PLACEHOLDER_AUTHOR, ScrapedArticle};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const UNKNOWN_TITLE: &str = "Unknown Title";
const NO_CONTENT: &str = "Could not extract article content";

/// A container's text is only trusted when it is longer than this many characters.
const MIN_CONTAINER_CHARS: usize = 200;
const WORDS_PER_MINUTE: usize = 200;

const EXCLUDED_TAGS: &[&str] = &[
    "script",
    "style",
    "nav",
    "header",
    "footer",
    "aside",
    "advertisement",
];

fn selectors(list: &[&str]) -> Vec<Selector> {
    list.iter()
        .map(|s| Selector::parse(s).unwrap())
        .collect()
}

static TITLE: Lazy<Vec<Selector>> = Lazy::new(|| {
    selectors(&[
        "h1",
        r#"[data-testid="headline"]"#,
        ".headline",
        ".article-title",
        "title",
    ])
});

static AUTHOR: Lazy<Vec<Selector>> = Lazy::new(|| {
    selectors(&[
        r#"[rel="author"]"#,
        ".author",
        ".byline",
        r#"[data-testid="author"]"#,
        ".article-author",
    ])
});

static DATE: Lazy<Vec<Selector>> = Lazy::new(|| {
    selectors(&[
        "time[datetime]",
        r#"[data-testid="timestamp"]"#,
        ".publish-date",
        ".article-date",
    ])
});

static CONTAINER: Lazy<Vec<Selector>> = Lazy::new(|| {
    selectors(&[
        "article",
        ".article-content",
        ".post-content",
        ".entry-content",
        r#"[data-testid="article-body"]"#,
        ".story-body",
        "main",
    ])
});

static BLOCK: Lazy<Selector> = Lazy::new(|| Selector::parse("p, h1, h2, h3, h4, h5, h6").unwrap());
static PARAGRAPH: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());

fn is_excluded(node: &Node) -> bool {
    node.as_element()
        .is_some_and(|e| EXCLUDED_TAGS.contains(&e.name()))
}

/// Whether the element sits outside all page chrome.
fn is_visible(element: ElementRef<'_>) -> bool {
    !EXCLUDED_TAGS.contains(&element.value().name())
        && !element.ancestors().any(|a| is_excluded(a.value()))
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Text of `element` minus anything nested in page chrome.
fn visible_text(element: ElementRef<'_>) -> String {
    let root = (*element).id();
    let mut out = String::new();
    for node in element.descendants() {
        if let Some(text) = node.value().as_text() {
            let hidden = node
                .ancestors()
                .take_while(|a| a.id() != root)
                .any(|a| is_excluded(a.value()));
            if !hidden {
                out.push_str(text);
            }
        }
    }
    out.trim().to_string()
}

fn first_text(document: &Html, selectors: &[Selector]) -> Option<String> {
    selectors.iter().find_map(|selector| {
        document
            .select(selector)
            .next()
            .map(element_text)
            .filter(|text| !text.is_empty())
    })
}

fn publish_date(document: &Html) -> Option<String> {
    DATE.iter().find_map(|selector| {
        let element = document.select(selector).next()?;
        match element.value().attr("datetime") {
            Some(datetime) if !datetime.is_empty() => Some(datetime.to_string()),
            _ => Some(element_text(element)).filter(|text| !text.is_empty()),
        }
    })
}

fn join_blocks<'a>(blocks: impl Iterator<Item = ElementRef<'a>>) -> String {
    blocks
        .filter(|b| is_visible(*b))
        .map(visible_text)
        .filter(|text| !text.is_empty())
        .join("\n\n")
}

fn article_body(document: &Html) -> String {
    for selector in CONTAINER.iter() {
        let Some(container) = document.select(selector).find(|e| is_visible(*e)) else {
            continue;
        };
        let has_blocks = container.select(&BLOCK).any(is_visible);
        if !has_blocks {
            continue;
        }
        let text = join_blocks(container.select(&BLOCK));
        if text.chars().count() > MIN_CONTAINER_CHARS {
            debug!(container = ?selector, chars = text.len(), "Matched article container");
            return text;
        }
    }

    let text = join_blocks(document.select(&PARAGRAPH));
    if text.is_empty() {
        warn!("No article text found");
        NO_CONTENT.to_string()
    } else {
        text
    }
}

/// `host[:port]` of `url`.
fn domain_of(url: &Url) -> String {
    match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{}:{}", host, port),
        (Some(host), None) => host.to_string(),
        (None, _) => String::new(),
    }
}

/// Extract an article from already downloaded HTML.
pub fn parse_article(url: &str, html: &str) -> Result<ScrapedArticle, ExtractError> {
    let parsed_url = Url::parse(url).map_err(|e| ExtractError::Parse(e.to_string()))?;
    let document = Html::parse_document(html);

    let content = article_body(&document);
    let word_count = content.split_whitespace().count();

    Ok(ScrapedArticle {
        url: url.to_string(),
        title: first_text(&document, &TITLE).unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
        author: first_text(&document, &AUTHOR).unwrap_or_else(|| PLACEHOLDER_AUTHOR.to_string()),
        publish_date: publish_date(&document),
        word_count,
        reading_time: (word_count / WORDS_PER_MINUTE).max(1),
        domain: domain_of(&parsed_url),
        content,
    })
}

/// Download `url` and extract its article.
#[instrument(level = "info", skip_all, fields(%url))]
pub async fn scrape_article(url: &str) -> Result<ScrapedArticle, ExtractError> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    debug!(bytes = body.len(), "Fetched article page");

    let article = parse_article(url, &body)?;
    info!(
        words = article.word_count,
        domain = %article.domain,
        has_date = article.publish_date.is_some(),
        "Parsed article"
    );
    Ok(article)
}
