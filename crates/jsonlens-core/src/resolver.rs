use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::{debug, trace};

use crate::catalogs::{
    DEFAULT_ICON, FUZZY_MAX_DISTANCE_RATIO, FUZZY_SCORE_CUTOFF, ICON_NAMES, MIN_LABEL_CHARS,
    SEGMENT_SCORE, SUBSTRING_SCORE,
};
use crate::distance::levenshtein;
use crate::terms::{builtin_expander, normalize, TermExpander};
use crate::types::{IconHandle, TermSet};

static RESOLVER: LazyLock<IconResolver> = LazyLock::new(|| IconResolver::new(IconCatalog::builtin()));

/// Resolve a label against the built-in catalog, cached process-wide.
pub fn resolve_icon(label: &str) -> IconHandle {
    RESOLVER.resolve(label)
}

/// The process-wide resolver over the built-in catalog.
pub fn builtin_resolver() -> &'static IconResolver {
    &RESOLVER
}

// ---------------------------------------------------------------------------
// Icon catalog
// ---------------------------------------------------------------------------

struct CatalogEntry {
    handle: IconHandle,
    /// Name with hyphens removed (`calendar-days` → `calendardays`).
    compact: String,
    /// Name with hyphens as spaces, compared against normalized labels.
    spaced: String,
    segments: Vec<&'static str>,
}

/// Immutable icon-name → handle table. Iteration follows construction order,
/// which breaks every tie during matching.
pub struct IconCatalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<&'static str, usize>,
    default: IconHandle,
}

impl IconCatalog {
    /// Build a catalog. Duplicate names keep their first position.
    pub fn new(names: &[&'static str], default: &'static str) -> Self {
        let mut entries = Vec::with_capacity(names.len());
        let mut index = HashMap::with_capacity(names.len());
        for &name in names {
            if index.contains_key(name) {
                continue;
            }
            index.insert(name, entries.len());
            entries.push(CatalogEntry {
                handle: IconHandle::new(name),
                compact: name.replace('-', ""),
                spaced: name.replace('-', " "),
                segments: name.split('-').collect(),
            });
        }
        Self {
            entries,
            index,
            default: IconHandle::new(default),
        }
    }

    pub fn builtin() -> Self {
        Self::new(ICON_NAMES, DEFAULT_ICON)
    }

    pub fn get(&self, name: &str) -> Option<IconHandle> {
        self.index.get(name).map(|&i| self.entries[i].handle)
    }

    pub fn default_icon(&self) -> IconHandle {
        self.default
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = IconHandle> + '_ {
        self.entries.iter().map(|e| e.handle)
    }
}

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

/// Which stage produced a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPass {
    /// Label too short to match.
    Degenerate,
    Exact,
    Fuzzy,
    Fallback,
}

impl MatchPass {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchPass::Degenerate => "degenerate",
            MatchPass::Exact => "exact",
            MatchPass::Fuzzy => "fuzzy",
            MatchPass::Fallback => "fallback",
        }
    }
}

/// Maps free-text labels to catalog icons. Each label's answer is computed
/// once and then frozen for the lifetime of the resolver.
pub struct IconResolver {
    catalog: IconCatalog,
    expander: &'static TermExpander,
    cache: RwLock<HashMap<String, IconHandle>>,
}

impl IconResolver {
    pub fn new(catalog: IconCatalog) -> Self {
        Self::with_expander(catalog, builtin_expander())
    }

    pub fn with_expander(catalog: IconCatalog, expander: &'static TermExpander) -> Self {
        Self {
            catalog,
            expander,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn catalog(&self) -> &IconCatalog {
        &self.catalog
    }

    /// Number of labels with a frozen answer.
    pub fn cached_labels(&self) -> usize {
        self.cache.read().len()
    }

    /// Resolve a label to an icon. Total: falls back to the catalog default.
    pub fn resolve(&self, label: &str) -> IconHandle {
        if let Some(icon) = self.cache.read().get(label).copied() {
            trace!(label, %icon, "icon cache hit");
            return icon;
        }

        let (icon, pass) = self.decide(label);
        debug!(label, %icon, pass = pass.as_str(), "resolved label icon");

        // A concurrent resolver may have stored first; its answer stands.
        *self.cache.write().entry(label.to_string()).or_insert(icon)
    }

    fn decide(&self, label: &str) -> (IconHandle, MatchPass) {
        if label.trim().chars().count() < MIN_LABEL_CHARS {
            return (self.catalog.default, MatchPass::Degenerate);
        }

        let terms = self.expander.expand(label);
        if let Some(icon) = self.exact_match(&terms) {
            return (icon, MatchPass::Exact);
        }
        if let Some(icon) = self.fuzzy_match(label) {
            return (icon, MatchPass::Fuzzy);
        }
        (self.catalog.default, MatchPass::Fallback)
    }

    /// Score every icon against the terms: +1 per term contained in the
    /// hyphen-stripped name, +2 more per term equal to a whole segment.
    /// Highest score wins; ties go to the earlier catalog entry.
    pub fn exact_match(&self, terms: &TermSet) -> Option<IconHandle> {
        let mut best: Option<(IconHandle, u32)> = None;
        for entry in &self.catalog.entries {
            let score = score_entry(entry, terms);
            if score == 0 {
                continue;
            }
            if best.is_none_or(|(_, s)| score > s) {
                best = Some((entry.handle, score));
            }
        }
        best.map(|(icon, _)| icon)
    }

    /// Closest icon name by edit distance to the normalized label, accepted
    /// only within `ceil(FUZZY_MAX_DISTANCE_RATIO * longer_len)` edits.
    pub fn fuzzy_match(&self, label: &str) -> Option<IconHandle> {
        let needle = normalize(label);
        if needle.is_empty() {
            return None;
        }

        let mut best: Option<(&CatalogEntry, usize)> = None;
        for entry in &self.catalog.entries {
            let d = levenshtein(&needle, &entry.spaced);
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((entry, d));
            }
        }

        let (entry, distance) = best?;
        let longer = needle.chars().count().max(entry.spaced.chars().count());
        let limit = (longer as f64 * FUZZY_MAX_DISTANCE_RATIO).ceil() as usize;
        let dissimilarity = distance as f64 / longer as f64;
        trace!(
            label,
            candidate = entry.handle.name(),
            distance,
            dissimilarity,
            confident = dissimilarity < FUZZY_SCORE_CUTOFF,
            "fuzzy candidate"
        );

        (distance <= limit).then_some(entry.handle)
    }
}

fn score_entry(entry: &CatalogEntry, terms: &TermSet) -> u32 {
    let mut score = 0;
    for term in terms.iter() {
        if entry.compact.contains(term) {
            score += SUBSTRING_SCORE;
        }
        if entry.segments.iter().any(|s| *s == term) {
            score += SEGMENT_SCORE;
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terms::expand_terms;

    static SMALL: &[&str] = &[
        "calendar",
        "calendar-days",
        "clock",
        "fingerprint",
        "hash",
        "mail",
        "map-pin",
        "more-horizontal",
        "pencil",
        "pen",
        "user",
    ];

    fn small() -> IconResolver {
        IconResolver::new(IconCatalog::new(SMALL, "more-horizontal"))
    }

    #[test]
    fn catalog_lookup() {
        let catalog = IconCatalog::new(SMALL, "more-horizontal");
        assert_eq!(catalog.len(), SMALL.len());
        assert_eq!(catalog.get("clock").map(|h| h.name()), Some("clock"));
        assert!(catalog.get("nope").is_none());
        assert_eq!(catalog.default_icon().name(), "more-horizontal");
    }

    #[test]
    fn catalog_skips_duplicates() {
        let catalog = IconCatalog::new(&["a-b", "a-b", "c"], "c");
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn segment_beats_substring() {
        let r = small();
        let terms = expand_terms("pen");
        // "pencil" comes first but only contains the term; "pen" equals a segment
        assert_eq!(r.exact_match(&terms).map(|h| h.name()), Some("pen"));
    }

    #[test]
    fn ties_break_by_catalog_order() {
        let r = small();
        let terms = expand_terms("calendar");
        assert_eq!(r.exact_match(&terms).map(|h| h.name()), Some("calendar"));
        assert_eq!(r.resolve("account_id").name(), "fingerprint");
    }

    #[test]
    fn segment_only_in_longer_name() {
        let r = small();
        assert_eq!(r.resolve("days").name(), "calendar-days");
    }

    #[test]
    fn fuzzy_accepts_typos() {
        let r = small();
        assert_eq!(r.fuzzy_match("calender").map(|h| h.name()), Some("calendar"));
        assert_eq!(r.resolve("calender").name(), "calendar");
        assert_eq!(r.resolve("usr").name(), "user");
    }

    #[test]
    fn fuzzy_rejects_distant() {
        let r = small();
        assert!(r.fuzzy_match("zzzzzzzz").is_none());
        assert_eq!(r.resolve("zzzzzzzz").name(), "more-horizontal");
    }

    #[test]
    fn fuzzy_limit_is_half_the_longer_name() {
        assert_eq!(FUZZY_MAX_DISTANCE_RATIO, 0.5);
        let r = IconResolver::new(IconCatalog::new(&["abcd"], "more-horizontal"));
        // distance 2, limit ceil(0.5 * 4) = 2
        assert_eq!(r.fuzzy_match("abxy").map(|h| h.name()), Some("abcd"));
        // distance 3
        assert!(r.fuzzy_match("axyz").is_none());
        assert_eq!(r.resolve("axyz").name(), "more-horizontal");
    }

    #[test]
    fn fuzzy_limit_rounds_up() {
        let r = IconResolver::new(IconCatalog::new(&["abcde"], "more-horizontal"));
        // distance 3, limit ceil(0.5 * 5) = 3
        assert_eq!(r.resolve("abxyz").name(), "abcde");
        // distance 4
        assert_eq!(r.resolve("axyzw").name(), "more-horizontal");
    }

    #[test]
    fn fuzzy_ignores_symbol_only_labels() {
        let r = small();
        assert!(r.fuzzy_match("@@").is_none());
        assert_eq!(r.resolve("@@").name(), "more-horizontal");
    }

    #[test]
    fn degenerate_labels_use_default() {
        let r = small();
        assert_eq!(r.resolve("").name(), "more-horizontal");
        assert_eq!(r.resolve("x").name(), "more-horizontal");
        assert_eq!(r.resolve("  y  ").name(), "more-horizontal");
    }

    #[test]
    fn answers_are_frozen() {
        let r = small();
        let first = r.resolve("Email Address");
        let cached = r.cached_labels();
        let second = r.resolve("Email Address");
        assert_eq!(first, second);
        assert_eq!(r.cached_labels(), cached);
    }

    #[test]
    fn cache_keyed_by_raw_label() {
        let r = small();
        r.resolve("User Name");
        r.resolve("user_name");
        assert_eq!(r.cached_labels(), 2);
    }
}
