//! Verification question generation.

use crate::models::ArticleRecord;
use crate::text::{has_number, has_proper_name};
use crate::utils::take_chars;

/// At most this many questions are returned.
pub const MAX_QUESTIONS: usize = 4;

/// Only the leading claims get claim-specific questions.
const QUESTIONED_CLAIMS: usize = 2;

/// Characters of a claim quoted in its numeric question.
const QUOTE_CHARS: usize = 50;

pub const PRIMARY_SOURCES: &str =
    "What are the primary sources for the main claims in this article?";
pub const INDEPENDENT_STATISTICS: &str =
    "Can the key statistics or data points be verified through independent sources?";
pub const NAMED_ENTITIES: &str =
    "What is the credibility of the people or organizations mentioned?";

/// Generic questions first, then claim-specific ones, then one about the domain.
pub fn questions(claims: &[String], record: &ArticleRecord) -> Vec<String> {
    let mut questions = vec![PRIMARY_SOURCES.to_string(), INDEPENDENT_STATISTICS.to_string()];

    for claim in claims.iter().take(QUESTIONED_CLAIMS) {
        if has_number(claim) {
            questions.push(format!(
                "Can the numerical claims in '{}...' be verified?",
                take_chars(claim, QUOTE_CHARS)
            ));
        } else if has_proper_name(claim) {
            questions.push(NAMED_ENTITIES.to_string());
        }
    }

    if let Some(domain) = record.domain() {
        questions.push(format!("What is the editorial stance and funding of {}?", domain));
    }

    questions.truncate(MAX_QUESTIONS);
    questions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn with_domain(domain: &str) -> ArticleRecord {
        ArticleRecord {
            domain: Some(domain.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_generic_questions_always_present() {
        let q = questions(&[], &ArticleRecord::default());
        assert_eq!(q, vec![PRIMARY_SOURCES, INDEPENDENT_STATISTICS]);
    }

    #[test]
    fn test_numeric_claim_is_quoted_and_cut_at_fifty_chars() {
        let claim = "The agency reported 1200 new cases across seven regions last month";
        let q = questions(&claims(&[claim]), &ArticleRecord::default());
        assert_eq!(
            q[2],
            "Can the numerical claims in 'The agency reported 1200 new cases across seven re...' be verified?"
        );
    }

    #[test]
    fn test_named_claim_gets_entity_question() {
        let q = questions(
            &claims(&["Senator Alvarez opposed the measure on the floor"]),
            &ArticleRecord::default(),
        );
        assert_eq!(q[2], NAMED_ENTITIES);
    }

    #[test]
    fn test_plain_claim_adds_nothing() {
        let q = questions(
            &claims(&["the measure was opposed on the floor today"]),
            &ArticleRecord::default(),
        );
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn test_domain_question_is_last() {
        let q = questions(&[], &with_domain("news.example.com"));
        assert_eq!(
            q[2],
            "What is the editorial stance and funding of news.example.com?"
        );
    }

    #[test]
    fn test_capped_at_four_and_domain_dropped_first() {
        let q = questions(
            &claims(&[
                "Officials counted 12 ballots in the first room",
                "Governor Smith counted the remaining ballots himself",
                "A third claim with 7 numbers that is never asked about",
            ]),
            &with_domain("example.com"),
        );
        assert_eq!(q.len(), MAX_QUESTIONS);
        assert_eq!(q[3], NAMED_ENTITIES);
        assert!(q.iter().all(|s| !s.contains("example.com")));
    }
}
