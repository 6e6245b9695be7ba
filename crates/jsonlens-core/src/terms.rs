//! Term expansion: label → normalized words, synonyms and compounds.

use parking_lot::RwLock;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::trace;

use crate::catalogs::{StopwordSet, SynonymTable, STOPWORDS, SYNONYMS};
use crate::types::TermSet;

static RE_NON_ALNUM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

static BUILTIN: LazyLock<TermExpander> = LazyLock::new(|| TermExpander::new(&SYNONYMS, &STOPWORDS));

/// Lower-case, collapse every run of non-alphanumerics into one space, trim.
pub fn normalize(s: &str) -> String {
    let lower = s.to_lowercase();
    RE_NON_ALNUM.replace_all(&lower, " ").trim().to_string()
}

/// Expand a label with the built-in tables, cached process-wide.
pub fn expand_terms(label: &str) -> TermSet {
    BUILTIN.expand(label)
}

/// The process-wide expander backed by the built-in tables.
pub fn builtin_expander() -> &'static TermExpander {
    &BUILTIN
}

/// Turns labels into search terms. Results are memoized per label string.
pub struct TermExpander {
    synonyms: &'static SynonymTable,
    stopwords: &'static StopwordSet,
    cache: RwLock<HashMap<String, TermSet>>,
}

impl TermExpander {
    pub fn new(synonyms: &'static SynonymTable, stopwords: &'static StopwordSet) -> Self {
        Self {
            synonyms,
            stopwords,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn expand(&self, label: &str) -> TermSet {
        if let Some(terms) = self.cache.read().get(label) {
            trace!(label, "term cache hit");
            return terms.clone();
        }

        let terms = self.expand_uncached(label);
        self.cache
            .write()
            .entry(label.to_string())
            .or_insert(terms)
            .clone()
    }

    /// Number of labels currently memoized.
    pub fn cached_labels(&self) -> usize {
        self.cache.read().len()
    }

    fn expand_uncached(&self, label: &str) -> TermSet {
        let normalized = normalize(label);
        let words: Vec<&str> = normalized
            .split_whitespace()
            .filter(|w| !self.stopwords.contains(*w) && w.chars().count() > 1)
            .collect();

        let mut terms = TermSet::new();
        for word in &words {
            terms.insert(*word);
        }
        for word in &words {
            if let Some(synonyms) = self.synonyms.get(*word) {
                for synonym in synonyms.iter() {
                    terms.insert(*synonym);
                }
            }
        }
        for pair in words.windows(2) {
            terms.insert(format!("{}{}", pair[0], pair[1]));
        }
        terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_separators() {
        assert_eq!(normalize("  Account__ID!! "), "account id");
        assert_eq!(normalize("createdAt"), "createdat");
        assert_eq!(normalize("---"), "");
    }

    #[test]
    fn expands_synonyms() {
        let terms = expand_terms("account_id");
        for t in ["account", "id", "identification", "number", "hash", "fingerprint"] {
            assert!(terms.contains(t), "missing {t}");
        }
    }

    #[test]
    fn compound_terms() {
        let terms = expand_terms("created at date");
        // "at" is a stopword, so the surviving neighbours are joined
        assert!(terms.contains("createddate"));
        assert!(!terms.contains("at"));
    }

    #[test]
    fn drops_stopwords_and_single_chars() {
        let terms = expand_terms("the x of y");
        assert!(terms.is_empty());
    }

    #[test]
    fn order_is_words_then_synonyms() {
        let terms = expand_terms("age");
        let collected: Vec<&str> = terms.iter().collect();
        assert_eq!(collected, vec!["age", "years", "birthday", "birth", "baby"]);
    }

    #[test]
    fn duplicates_collapse() {
        let terms = expand_terms("id id");
        assert_eq!(terms.iter().filter(|t| *t == "id").count(), 1);
        assert!(terms.contains("idid"));
    }

    #[test]
    fn memoized() {
        let expander = TermExpander::new(&SYNONYMS, &STOPWORDS);
        let first = expander.expand("home address");
        let second = expander.expand("home address");
        assert_eq!(first, second);
        assert_eq!(expander.cached_labels(), 1);
    }
}
