//! Word and phrase lists that drive every heuristic in the analyzer.
//!
//! Four lexicons are used:
//! - **emotional**: charged words ("shocking", "devastating", ...)
//! - **hedging**: qualifiers ("might", "reportedly", ...)
//! - **absolute**: unqualified certainty ("always", "never", ...)
//! - **source indicators**: attribution phrases ("according to", ...)
//!
//! A [`Lexicons`] value is built once at startup, either from the built-in
//! defaults or from a YAML override file, and then only ever read.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{info, instrument, warn};

use crate::error::SkepticError;

const EMOTIONAL: &[&str] = &[
    "shocking",
    "outrageous",
    "devastating",
    "incredible",
    "unbelievable",
    "amazing",
    "terrible",
    "horrible",
    "fantastic",
    "extraordinary",
    "alarming",
    "disturbing",
    "sensational",
    "explosive",
    "dramatic",
];

const HEDGING: &[&str] = &[
    "might",
    "could",
    "possibly",
    "perhaps",
    "allegedly",
    "reportedly",
    "supposedly",
    "apparently",
    "seemingly",
    "presumably",
    "likely",
    "probably",
    "potentially",
    "may",
    "suggests",
    "indicates",
];

// "without question" and "beyond doubt" never match a single word token.
const ABSOLUTE: &[&str] = &[
    "always",
    "never",
    "all",
    "none",
    "every",
    "completely",
    "totally",
    "absolutely",
    "definitely",
    "certainly",
    "undoubtedly",
    "obviously",
    "clearly",
    "without question",
    "beyond doubt",
];

const SOURCE_INDICATORS: &[&str] = &[
    "according to",
    "sources say",
    "reports indicate",
    "studies show",
    "experts believe",
    "research suggests",
    "data reveals",
    "analysis shows",
];

static DEFAULT_LEXICONS: Lazy<Lexicons> = Lazy::new(|| Lexicons {
    emotional: Lexicon::from_entries(EMOTIONAL.iter().copied()),
    hedging: Lexicon::from_entries(HEDGING.iter().copied()),
    absolute: Lexicon::from_entries(ABSOLUTE.iter().copied()),
    source_indicators: Lexicon::from_entries(SOURCE_INDICATORS.iter().copied()),
});

/// A flat set of lowercase words or phrases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    entries: BTreeSet<String>,
}

impl Lexicon {
    /// Build a lexicon, lower-casing and trimming every entry. Blank entries are dropped.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|e| e.as_ref().trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { entries }
    }

    /// Exact membership of a single (already lower-cased) token.
    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains(token)
    }

    /// Number of tokens in `words` that belong to this lexicon, duplicates included.
    pub fn count_in<S: AsRef<str>>(&self, words: &[S]) -> usize {
        words.iter().filter(|w| self.contains(w.as_ref())).count()
    }

    /// Number of distinct entries occurring as substrings of `haystack`.
    ///
    /// `haystack` must already be lower-cased.
    pub fn phrases_present_in(&self, haystack: &str) -> usize {
        self.entries
            .iter()
            .filter(|phrase| haystack.contains(phrase.as_str()))
            .count()
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when every entry was blank or the list was empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The four lexicons the analyzer reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicons {
    pub emotional: Lexicon,
    pub hedging: Lexicon,
    pub absolute: Lexicon,
    pub source_indicators: Lexicon,
}

/// Shape of a lexicon override file. Any list left out keeps its default.
///
/// ```yaml
/// emotional: [shocking, outrageous]
/// source_indicators:
///   - according to
///   - officials said
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LexiconOverrides {
    emotional: Option<Vec<String>>,
    hedging: Option<Vec<String>>,
    absolute: Option<Vec<String>>,
    source_indicators: Option<Vec<String>>,
}

impl Default for Lexicons {
    fn default() -> Self {
        DEFAULT_LEXICONS.clone()
    }
}

impl Lexicons {
    /// The built-in lexicons, shared for the life of the process.
    pub fn builtin() -> &'static Lexicons {
        &DEFAULT_LEXICONS
    }

    /// Parse a YAML override document on top of the built-in defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, SkepticError> {
        let overrides: LexiconOverrides =
            serde_yaml::from_str(yaml).map_err(|e| SkepticError::Lexicon(e.to_string()))?;

        let mut lexicons = Lexicons::default();
        if let Some(words) = overrides.emotional {
            lexicons.emotional = Lexicon::from_entries(words);
        }
        if let Some(words) = overrides.hedging {
            lexicons.hedging = Lexicon::from_entries(words);
        }
        if let Some(words) = overrides.absolute {
            lexicons.absolute = Lexicon::from_entries(words);
        }
        if let Some(phrases) = overrides.source_indicators {
            lexicons.source_indicators = Lexicon::from_entries(phrases);
        }
        Ok(lexicons)
    }

    /// Load an override file from disk.
    #[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SkepticError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| SkepticError::Lexicon(format!("{}: {}", path.display(), e)))?;
        let lexicons = Self::from_yaml_str(&yaml)?;
        info!(
            emotional = lexicons.emotional.len(),
            hedging = lexicons.hedging.len(),
            absolute = lexicons.absolute.len(),
            source_indicators = lexicons.source_indicators.len(),
            "Loaded lexicon overrides"
        );
        for (name, lexicon) in [
            ("emotional", &lexicons.emotional),
            ("hedging", &lexicons.hedging),
            ("absolute", &lexicons.absolute),
            ("source_indicators", &lexicons.source_indicators),
        ] {
            if lexicon.is_empty() {
                warn!(lexicon = name, "Lexicon override has no entries");
            }
        }
        Ok(lexicons)
    }
}
