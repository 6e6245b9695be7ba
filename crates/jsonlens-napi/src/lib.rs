//! jsonlens Node.js native addon via napi-rs.
//!
//! All functions take string inputs and return JSON strings.

#[macro_use]
extern crate napi_derive;

use jsonlens_core::{classify_to_json, expand_terms_to_json, resolve_icon_to_json, visualize_to_json};

/// Classify one scalar value.
///
/// @param value_json - JSON text of a null, boolean, number or string
/// @returns JSON string with `{ success: boolean, data?: { classification, text }, error?: string }`
#[napi]
pub fn classify(value_json: String) -> String {
    classify_to_json(&value_json)
}

/// Resolve the icon name for a field label.
///
/// @param label - Field name as it appears in the document
/// @returns JSON string with `{ success: boolean, data?: { icon: string }, error?: string }`
#[napi(js_name = "resolveIcon")]
pub fn resolve_icon(label: String) -> String {
    resolve_icon_to_json(&label)
}

/// Expand a label into its search terms.
#[napi(js_name = "expandTerms")]
pub fn expand_terms(label: String) -> String {
    expand_terms_to_json(&label)
}

/// Walk a JSON document into a display tree.
///
/// @param input - JSON document text
/// @param options_json - JSON options `{ icons?: boolean, maxDepth?: number }`
/// @returns JSON string with `{ success: boolean, data?: DisplayNode, error?: string }`
#[napi]
pub fn visualize(input: String, options_json: String) -> String {
    visualize_to_json(&input, &options_json)
}
