//! The credibility analysis pipeline.
//!
//! [`Analyzer::analyze_article`] runs the stages in a fixed order:
//!
//! 1. **Tokenizing**: the body is split into lower-cased words once
//! 2. **Claims**: factual-looking sentences are ranked ([`claims`])
//! 3. **Language**: lexicon shares and tone ([`language`])
//! 4. **Red flags**: independent rule checks ([`red_flags`])
//! 5. **Questions**: what a reader should verify ([`questions`])
//! 6. **Score**: flags and language folded into 0..=100 ([`scoring`])
//! 7. **Summary**: strengths and weaknesses ([`summary`])
//!
//! Every stage is a pure function of the record and the shared [`Lexicons`],
//! so one `Analyzer` can serve any number of threads.

pub mod claims;
pub mod language;
pub mod questions;
pub mod red_flags;
pub mod scoring;
pub mod summary;

use tracing::{debug, instrument};

use crate::lexicon::Lexicons;
use crate::models::{AnalysisResult, ArticleRecord};
use crate::text::words_of;

/// Scores articles against a fixed set of lexicons.
#[derive(Debug, Clone, Copy)]
pub struct Analyzer<'a> {
    lexicons: &'a Lexicons,
}

impl Default for Analyzer<'static> {
    fn default() -> Self {
        Analyzer::new(Lexicons::builtin())
    }
}

impl<'a> Analyzer<'a> {
    /// Create an analyzer that reads `lexicons` for every article.
    ///
    /// Use [`Analyzer::default`] for the built-in lexicons.
    pub fn new(lexicons: &'a Lexicons) -> Self {
        Self { lexicons }
    }

    /// Produce the full credibility report for `record`.
    ///
    /// # Arguments
    ///
    /// * `record` - The article to assess; missing fields count as absent
    ///
    /// # Returns
    ///
    /// An [`AnalysisResult`] with every field populated. The result depends
    /// only on `record` and the lexicons, and this never fails.
    #[instrument(level = "debug", skip_all, fields(title = %record.title, content_bytes = record.content.len()))]
    pub fn analyze_article(&self, record: &ArticleRecord) -> AnalysisResult {
        let words = words_of(&record.content);

        let core_claims = claims::extract_claims(&record.content);
        let language_analysis = language::profile(self.lexicons, &words);
        let red_flags = red_flags::detect(self.lexicons, record, &words);
        let verification_questions = questions::questions(&core_claims, record);
        let credibility_score = scoring::score(&language_analysis, &red_flags, record);

        debug!(
            words = words.len(),
            claims = core_claims.len(),
            red_flags = red_flags.len(),
            tone = ?language_analysis.tone,
            credibility_score,
            "Analyzed article"
        );

        AnalysisResult {
            credibility_score,
            strengths: summary::strengths(self.lexicons, record, &words),
            weaknesses: summary::weaknesses(&red_flags, &language_analysis),
            core_claims,
            language_analysis,
            red_flags,
            verification_questions,
        }
    }
}
