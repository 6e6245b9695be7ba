//! jsonlens WASM bindings.
//!
//! Provides JavaScript-callable functions via wasm-bindgen.
//! All functions take string inputs and return JSON strings.

use jsonlens_core::{classify_to_json, expand_terms_to_json, resolve_icon_to_json, visualize_to_json};
use wasm_bindgen::prelude::*;

/// Classify one scalar value.
///
/// @param value_json - JSON text of a null, boolean, number or string
/// @returns JSON string with `{ success: boolean, data?: { classification, text }, error?: string }`
#[wasm_bindgen(js_name = "classify")]
pub fn wasm_classify(value_json: &str) -> String {
    classify_to_json(value_json)
}

/// Resolve the icon name for a field label.
///
/// @param label - Field name as it appears in the document
/// @returns JSON string with `{ success: boolean, data?: { icon: string }, error?: string }`
#[wasm_bindgen(js_name = "resolveIcon")]
pub fn wasm_resolve_icon(label: &str) -> String {
    resolve_icon_to_json(label)
}

/// Expand a label into its search terms.
///
/// @param label - Field name as it appears in the document
/// @returns JSON string with `{ success: boolean, data?: string[], error?: string }`
#[wasm_bindgen(js_name = "expandTerms")]
pub fn wasm_expand_terms(label: &str) -> String {
    expand_terms_to_json(label)
}

/// Walk a JSON document into a display tree.
///
/// @param input - JSON document text
/// @param options_json - JSON options `{ icons?: boolean, maxDepth?: number }`
/// @returns JSON string with `{ success: boolean, data?: DisplayNode, error?: string }`
#[wasm_bindgen(js_name = "visualize")]
pub fn wasm_visualize(input: &str, options_json: &str) -> String {
    visualize_to_json(input, options_json)
}
