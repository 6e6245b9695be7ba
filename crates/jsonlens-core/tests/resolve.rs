use jsonlens_core::{
    builtin_resolver, expand_terms, resolve_icon, IconCatalog, IconResolver, DEFAULT_ICON,
};
use pretty_assertions::assert_eq;

fn icon(label: &str) -> &'static str {
    resolve_icon(label).name()
}

// ---------------------------------------------------------------------------
// Built-in catalog
// ---------------------------------------------------------------------------

#[test]
fn common_field_names() {
    let cases = [
        ("account_id", "fingerprint"),
        ("email", "mail"),
        ("gender", "venus-and-mars"),
        ("income", "hand-coins"),
        ("user_name", "user-round"),
        ("timestamp", "calendar-clock"),
        ("created_at", "calendar-clock"),
        ("location", "map-pin"),
        ("Home Address", "map-pin"),
        ("phone", "phone-call"),
        ("age", "baby"),
    ];
    for (label, expected) in cases {
        assert_eq!(icon(label), expected, "label {label:?}");
    }
}

#[test]
fn typos_resolve_fuzzily() {
    assert_eq!(icon("calender"), "calendar");
    assert_eq!(icon("umbrela"), "umbrella");
}

#[test]
fn unknown_labels_fall_back() {
    assert_eq!(icon("qwertyuiopasdf"), DEFAULT_ICON);
    assert_eq!(icon("@@"), DEFAULT_ICON);
}

#[test]
fn short_labels_fall_back() {
    assert_eq!(icon(""), DEFAULT_ICON);
    assert_eq!(icon("x"), DEFAULT_ICON);
    assert_eq!(icon(" x "), DEFAULT_ICON);
}

#[test]
fn every_answer_is_in_catalog() {
    let catalog = builtin_resolver().catalog();
    for label in ["zip code", "favourite colour", "Q3 revenue", "☃ snowman", "id"] {
        let handle = resolve_icon(label);
        assert_eq!(catalog.get(handle.name()), Some(handle), "label {label:?}");
    }
}

#[test]
fn repeated_calls_agree() {
    for label in ["Political Affiliation", "website", "score", "a_b_c"] {
        assert_eq!(resolve_icon(label), resolve_icon(label));
    }
}

#[test]
fn expansion_feeds_resolution() {
    let terms = expand_terms("account_id");
    for t in ["account", "id", "identification", "fingerprint"] {
        assert!(terms.contains(t), "missing {t}");
    }
}

// ---------------------------------------------------------------------------
// Custom catalogs
// ---------------------------------------------------------------------------

static TINY: &[&str] = &["clock", "more-horizontal", "star", "user"];

#[test]
fn custom_catalog_and_default() {
    let resolver = IconResolver::new(IconCatalog::new(TINY, "star"));
    assert_eq!(resolver.resolve("x").name(), "star");
    assert_eq!(resolver.resolve("username").name(), "user");
    assert_eq!(resolver.resolve("nothing alike here").name(), "star");
}

#[test]
fn answers_frozen_per_label() {
    let resolver = IconResolver::new(IconCatalog::new(TINY, "more-horizontal"));
    let first = resolver.resolve("rating");
    assert_eq!(first.name(), "star");
    let before = resolver.cached_labels();
    for _ in 0..3 {
        assert_eq!(resolver.resolve("rating"), first);
    }
    assert_eq!(resolver.cached_labels(), before);
}

#[test]
fn resolver_is_shareable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| resolve_icon("birthday")))
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(results[0].name(), "cake");
}
