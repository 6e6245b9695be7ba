//! Value classifier: decides the semantic kind of a scalar leaf.
//!
//! String checks run in a fixed priority and the first match wins:
//! color, music title, date/time, email, geo coordinate, gender, plain text.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

use crate::catalogs::GENDER_VALUES;
use crate::types::{Gender, ParsedDateTime, ScalarValue, ValueClassification};

// --- Regex patterns ---

static RE_DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").unwrap());
static RE_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static RE_GEO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<lat>[-+]?(?:[1-8]?\d(?:\.\d+)?|90(?:\.0+)?)),\s*(?P<lng>[-+]?(?:180(?:\.0+)?|(?:1[0-7]\d|[1-9]?\d)(?:\.\d+)?))$",
    )
    .unwrap()
});

// --- Date/time formats (tried in order, all locale-independent) ---

const OFFSET_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M%z",
];

/// Minute-precision UTC forms that RFC 3339 rejects (`2024-01-01T10:30Z`).
const UTC_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%MZ", "%Y-%m-%d %H:%MZ"];

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%B %d, %Y %H:%M:%S",
    "%B %d, %Y %H:%M",
    "%B %d %Y %H:%M:%S",
    "%B %d %Y %H:%M",
    "%d %B %Y %H:%M:%S",
    "%d %B %Y %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%a, %d %B %Y",
    "%A, %B %d, %Y",
];

/// Month and year only; the day is taken as the first of the month.
const MONTH_FORMATS: &[&str] = &["%B %Y"];

/// Years below this come from formats that read too few digits
/// (`January 2024` as day 20 of year 24), never from real input.
const MIN_YEAR: i32 = 1000;

/// Classify one scalar value. Total and deterministic.
pub fn classify(value: &ScalarValue) -> ValueClassification {
    let classification = match value {
        ScalarValue::Null => ValueClassification::Null,
        ScalarValue::Boolean(b) => ValueClassification::Boolean { value: *b },
        ScalarValue::Number(n) => classify_number(*n),
        ScalarValue::String(s) => classify_string(s),
    };
    trace!(kind = classification.kind(), "classified scalar");
    classification
}

fn classify_number(n: f64) -> ValueClassification {
    if (0.0..=1.0).contains(&n) {
        ValueClassification::Ratio { fraction: n }
    } else if n.fract() == 0.0 {
        ValueClassification::Integer { value: n }
    } else {
        ValueClassification::Decimal { value: n }
    }
}

fn classify_string(s: &str) -> ValueClassification {
    if s.starts_with('#') {
        return ValueClassification::Color { hex: s.to_string() };
    }

    let lower = s.to_lowercase();
    if lower.contains("song") || lower.contains("music") {
        return ValueClassification::MusicTitle {
            title: s.to_string(),
        };
    }

    if !RE_DIGITS.is_match(s) {
        if let Some(at) = parse_date_time(s) {
            return ValueClassification::DateTime { at };
        }
    }

    if RE_EMAIL.is_match(s) {
        return ValueClassification::Email {
            address: s.to_string(),
        };
    }

    if let Some(geo) = parse_geo(s) {
        return geo;
    }

    if let Some(category) = parse_gender(s) {
        return ValueClassification::Gender { category };
    }

    ValueClassification::PlainString {
        text: s.to_string(),
    }
}

fn plausible(dt: &NaiveDateTime) -> bool {
    dt.year() >= MIN_YEAR
}

/// Parse a calendar date or date-time. Never consults the clock.
pub fn parse_date_time(input: &str) -> Option<ParsedDateTime> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }

    let offset_parsers = [DateTime::parse_from_rfc3339, DateTime::parse_from_rfc2822];
    for parse in offset_parsers {
        if let Some(dt) = parse(s).ok().filter(|dt| plausible(&dt.naive_local())) {
            return Some(ParsedDateTime::with_offset(dt));
        }
    }
    for fmt in OFFSET_DATETIME_FORMATS {
        let parsed = DateTime::parse_from_str(s, fmt).ok();
        if let Some(dt) = parsed.filter(|dt| plausible(&dt.naive_local())) {
            return Some(ParsedDateTime::with_offset(dt));
        }
    }
    for fmt in UTC_DATETIME_FORMATS {
        if let Some(dt) = NaiveDateTime::parse_from_str(s, fmt).ok().filter(plausible) {
            return Some(ParsedDateTime {
                local: dt,
                offset_seconds: Some(0),
            });
        }
    }
    for fmt in NAIVE_DATETIME_FORMATS {
        if let Some(dt) = NaiveDateTime::parse_from_str(s, fmt).ok().filter(plausible) {
            return Some(ParsedDateTime::naive(dt));
        }
    }
    for fmt in DATE_FORMATS {
        let parsed = NaiveDate::parse_from_str(s, fmt).ok();
        if let Some(dt) = parsed.map(|d| d.and_time(NaiveTime::MIN)).filter(plausible) {
            return Some(ParsedDateTime::naive(dt));
        }
    }
    let first_of_month = format!("{s} 1");
    for fmt in MONTH_FORMATS {
        let parsed = NaiveDate::parse_from_str(&first_of_month, &format!("{fmt} %d")).ok();
        if let Some(dt) = parsed.map(|d| d.and_time(NaiveTime::MIN)).filter(plausible) {
            return Some(ParsedDateTime::naive(dt));
        }
    }
    None
}

fn parse_geo(s: &str) -> Option<ValueClassification> {
    let caps = RE_GEO.captures(s)?;
    let lat_text = caps.name("lat")?.as_str();
    let lng_text = caps.name("lng")?.as_str();
    let lat: f64 = lat_text.parse().ok()?;
    let lng: f64 = lng_text.parse().ok()?;
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        return None;
    }
    Some(ValueClassification::GeoCoordinate {
        lat,
        lng,
        lat_text: lat_text.to_string(),
        lng_text: lng_text.to_string(),
    })
}

fn parse_gender(s: &str) -> Option<Gender> {
    let normalized = s.trim().to_lowercase();
    if !GENDER_VALUES.contains(&normalized.as_str()) {
        return None;
    }
    Gender::from_normalized(&normalized)
}
