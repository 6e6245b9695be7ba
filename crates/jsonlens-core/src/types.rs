use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Scalar input
// ---------------------------------------------------------------------------

/// A leaf value handed to the classifier. Objects and arrays never reach it.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
}

impl ScalarValue {
    /// Convert a JSON value, returning `None` for objects and arrays.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Null => Some(ScalarValue::Null),
            serde_json::Value::Bool(b) => Some(ScalarValue::Boolean(*b)),
            serde_json::Value::Number(n) => Some(ScalarValue::Number(n.as_f64().unwrap_or(f64::NAN))),
            serde_json::Value::String(s) => Some(ScalarValue::String(s.clone())),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => None,
        }
    }
}

impl From<bool> for ScalarValue {
    fn from(b: bool) -> Self {
        ScalarValue::Boolean(b)
    }
}

impl From<f64> for ScalarValue {
    fn from(n: f64) -> Self {
        ScalarValue::Number(n)
    }
}

impl From<i64> for ScalarValue {
    fn from(n: i64) -> Self {
        ScalarValue::Number(n as f64)
    }
}

impl From<&str> for ScalarValue {
    fn from(s: &str) -> Self {
        ScalarValue::String(s.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(s: String) -> Self {
        ScalarValue::String(s)
    }
}

// ---------------------------------------------------------------------------
// Classification output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    NonBinary,
}

impl Gender {
    /// Parse an already lower-cased, trimmed string.
    pub fn from_normalized(s: &str) -> Option<Self> {
        match s {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            "non-binary" => Some(Gender::NonBinary),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::NonBinary => "non-binary",
        }
    }
}

/// A date/time as written in the input. `offset_seconds` is present only
/// when the text carried an explicit UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedDateTime {
    pub local: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_seconds: Option<i32>,
}

impl ParsedDateTime {
    pub fn naive(local: NaiveDateTime) -> Self {
        Self {
            local,
            offset_seconds: None,
        }
    }

    pub fn with_offset(dt: DateTime<FixedOffset>) -> Self {
        Self {
            local: dt.naive_local(),
            offset_seconds: Some(dt.offset().local_minus_utc()),
        }
    }

    /// The instant this value denotes, if it carried an offset.
    pub fn to_fixed_offset(&self) -> Option<DateTime<FixedOffset>> {
        let offset = FixedOffset::east_opt(self.offset_seconds?)?;
        self.local.and_local_timezone(offset).single()
    }
}

/// Semantic kind of a scalar, plus the data needed to display it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ValueClassification {
    Null,
    Boolean {
        value: bool,
    },
    /// A number in `[0, 1]`, shown as a percentage.
    Ratio {
        fraction: f64,
    },
    Integer {
        value: f64,
    },
    Decimal {
        value: f64,
    },
    Color {
        hex: String,
    },
    MusicTitle {
        title: String,
    },
    DateTime {
        at: ParsedDateTime,
    },
    Email {
        address: String,
    },
    #[serde(rename_all = "camelCase")]
    GeoCoordinate {
        lat: f64,
        lng: f64,
        lat_text: String,
        lng_text: String,
    },
    Gender {
        category: Gender,
    },
    PlainString {
        text: String,
    },
}

impl ValueClassification {
    /// The serialized tag of this classification.
    pub fn kind(&self) -> &'static str {
        match self {
            ValueClassification::Null => "null",
            ValueClassification::Boolean { .. } => "boolean",
            ValueClassification::Ratio { .. } => "ratio",
            ValueClassification::Integer { .. } => "integer",
            ValueClassification::Decimal { .. } => "decimal",
            ValueClassification::Color { .. } => "color",
            ValueClassification::MusicTitle { .. } => "musicTitle",
            ValueClassification::DateTime { .. } => "dateTime",
            ValueClassification::Email { .. } => "email",
            ValueClassification::GeoCoordinate { .. } => "geoCoordinate",
            ValueClassification::Gender { .. } => "gender",
            ValueClassification::PlainString { .. } => "plainString",
        }
    }
}

// ---------------------------------------------------------------------------
// Icons and terms
// ---------------------------------------------------------------------------

/// Opaque handle to an entry of an icon catalog. Serializes as the icon name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct IconHandle(&'static str);

impl IconHandle {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for IconHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Search terms derived from one label. Duplicates are collapsed; iteration
/// follows first-insertion order so matching stays deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TermSet {
    terms: Vec<String>,
}

impl TermSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a term; returns `false` if it was already present.
    pub fn insert(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        if self.contains(&term) {
            return false;
        }
        self.terms.push(term);
        true
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.iter().any(|t| t == term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a TermSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

// ---------------------------------------------------------------------------
// Display tree (tree walker output)
// ---------------------------------------------------------------------------

/// A field label as shown next to its value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelView {
    /// The object key as it appeared in the input.
    pub key: String,
    /// Title-cased text, e.g. `account_id` → `Account Id`.
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconHandle>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node", rename_all = "camelCase")]
pub enum DisplayNode {
    Value {
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<LabelView>,
        classification: ValueClassification,
        text: String,
    },
    Object {
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<LabelView>,
        entries: Vec<DisplayNode>,
    },
    Array {
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<LabelView>,
        items: Vec<DisplayNode>,
    },
    /// Stands in for a subtree below the configured depth limit.
    Truncated {
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<LabelView>,
    },
}

impl DisplayNode {
    pub fn label(&self) -> Option<&LabelView> {
        match self {
            DisplayNode::Value { label, .. }
            | DisplayNode::Object { label, .. }
            | DisplayNode::Array { label, .. }
            | DisplayNode::Truncated { label } => label.as_ref(),
        }
    }
}

/// Options for walking a whole document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VisualizeOptions {
    /// Resolve an icon for every label.
    pub icons: bool,
    /// Nodes deeper than this are emitted as [`DisplayNode::Truncated`].
    pub max_depth: Option<usize>,
}

impl Default for VisualizeOptions {
    fn default() -> Self {
        Self {
            icons: true,
            max_depth: None,
        }
    }
}
