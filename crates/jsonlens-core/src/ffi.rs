//! FFI-oriented JSON API for cross-language bindings.
//!
//! All functions take string inputs and return JSON strings,
//! minimizing the FFI surface area.

use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::types::*;
use crate::{classify, expand_terms, resolve_icon, visualize};

// ---------------------------------------------------------------------------
// Result types (serialized to JSON output)
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct FfiResult<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ClassifiedValue {
    pub classification: ValueClassification,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ResolvedIcon {
    pub icon: IconHandle,
}

const SERIALIZATION_FAILURE: &str =
    r#"{"success":false,"error":"JSON serialization error"}"#;

// ---------------------------------------------------------------------------
// Public FFI functions
// ---------------------------------------------------------------------------

/// Classify one scalar value.
///
/// Input: JSON text of a null, boolean, number or string
/// Output: `{ success, data?: { classification, text }, error? }`
pub fn classify_to_json(value_json: &str) -> String {
    respond(std::panic::catch_unwind(|| -> Result<ClassifiedValue> {
        let value: Value = serde_json::from_str(value_json).map_err(Error::InvalidInput)?;
        let scalar = ScalarValue::from_json(&value).ok_or(Error::NotScalar(json_type(&value)))?;
        let classification = classify(&scalar);
        let text = classification.display_text();
        Ok(ClassifiedValue {
            classification,
            text,
        })
    }))
}

/// Resolve the icon for a field label.
///
/// Input: raw label text (not JSON)
/// Output: `{ success, data?: { icon }, error? }`
pub fn resolve_icon_to_json(label: &str) -> String {
    respond(std::panic::catch_unwind(|| -> Result<ResolvedIcon> {
        Ok(ResolvedIcon {
            icon: resolve_icon(label),
        })
    }))
}

/// Expand a label into its search terms.
///
/// Input: raw label text (not JSON)
/// Output: `{ success, data?: string[], error? }`
pub fn expand_terms_to_json(label: &str) -> String {
    respond(std::panic::catch_unwind(|| -> Result<TermSet> {
        Ok(expand_terms(label))
    }))
}

/// Walk a whole JSON document into a display tree.
///
/// Input: JSON document text + options JSON (`{ icons?: boolean, maxDepth?: number }`,
/// empty string for defaults)
/// Output: `{ success, data?: DisplayNode, error? }`
pub fn visualize_to_json(input: &str, options_json: &str) -> String {
    respond(std::panic::catch_unwind(|| -> Result<DisplayNode> {
        let options = parse_options(options_json)?;
        let value: Value = serde_json::from_str(input).map_err(Error::InvalidInput)?;
        Ok(visualize(&value, &options))
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_options(options_json: &str) -> Result<VisualizeOptions> {
    if options_json.trim().is_empty() {
        return Ok(VisualizeOptions::default());
    }
    serde_json::from_str(options_json).map_err(Error::InvalidOptions)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn respond<T: Serialize>(outcome: std::thread::Result<Result<T>>) -> String {
    let envelope = match outcome {
        Ok(Ok(data)) => FfiResult {
            success: true,
            data: Some(data),
            error: None,
        },
        Ok(Err(e)) => FfiResult {
            success: false,
            data: None,
            error: Some(e.to_string()),
        },
        Err(_) => FfiResult {
            success: false,
            data: None,
            error: Some("Internal panic".to_string()),
        },
    };

    serde_json::to_string(&envelope).unwrap_or_else(|e| {
        serde_json::to_string(&FfiResult::<()> {
            success: false,
            data: None,
            error: Some(Error::Serialization(e).to_string()),
        })
        .unwrap_or_else(|_| SERIALIZATION_FAILURE.to_string())
    })
}
