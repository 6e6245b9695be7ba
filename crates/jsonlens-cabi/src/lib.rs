//! C ABI bindings for jsonlens.
//!
//! All functions use C-compatible string types:
//! - Input: `*const c_char` (null-terminated C string)
//! - Output: `*mut c_char` (caller must free with `jsonlens_free_string`)
//!
//! This crate builds as a cdylib for use via P/Invoke (C#), ctypes (Python), etc.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use jsonlens_core::{classify_to_json, expand_terms_to_json, resolve_icon_to_json, visualize_to_json};

/// Classify one scalar value given as JSON text.
///
/// # Safety
/// - `value_json` must be a valid null-terminated UTF-8 string.
/// - The returned pointer must be freed with `jsonlens_free_string`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn jsonlens_classify(value_json: *const c_char) -> *mut c_char {
    let value_json = unsafe { CStr::from_ptr(value_json) };
    match value_json.to_str() {
        Ok(s) => to_c_string(&classify_to_json(s)),
        Err(_) => to_c_string(r#"{"success":false,"error":"Invalid UTF-8 in value_json"}"#),
    }
}

/// Resolve the icon name for a field label.
///
/// # Safety
/// - `label` must be a valid null-terminated UTF-8 string.
/// - The returned pointer must be freed with `jsonlens_free_string`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn jsonlens_resolve_icon(label: *const c_char) -> *mut c_char {
    let label = unsafe { CStr::from_ptr(label) };
    match label.to_str() {
        Ok(s) => to_c_string(&resolve_icon_to_json(s)),
        Err(_) => to_c_string(r#"{"success":false,"error":"Invalid UTF-8 in label"}"#),
    }
}

/// Expand a label into its search terms.
///
/// # Safety
/// - `label` must be a valid null-terminated UTF-8 string.
/// - The returned pointer must be freed with `jsonlens_free_string`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn jsonlens_expand_terms(label: *const c_char) -> *mut c_char {
    let label = unsafe { CStr::from_ptr(label) };
    match label.to_str() {
        Ok(s) => to_c_string(&expand_terms_to_json(s)),
        Err(_) => to_c_string(r#"{"success":false,"error":"Invalid UTF-8 in label"}"#),
    }
}

/// Walk a JSON document into a display tree.
///
/// # Safety
/// - `input` must be a valid null-terminated UTF-8 string.
/// - `options_json` must be a valid null-terminated UTF-8 JSON string.
/// - The returned pointer must be freed with `jsonlens_free_string`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn jsonlens_visualize(
    input: *const c_char,
    options_json: *const c_char,
) -> *mut c_char {
    let input = unsafe { CStr::from_ptr(input) };
    let options_json = unsafe { CStr::from_ptr(options_json) };

    let input_str = match input.to_str() {
        Ok(s) => s,
        Err(_) => return to_c_string(r#"{"success":false,"error":"Invalid UTF-8 in input"}"#),
    };
    let options_str = match options_json.to_str() {
        Ok(s) => s,
        Err(_) => {
            return to_c_string(r#"{"success":false,"error":"Invalid UTF-8 in options_json"}"#)
        }
    };

    to_c_string(&visualize_to_json(input_str, options_str))
}

/// Free a string previously returned by one of the jsonlens_* functions.
///
/// # Safety
/// - `ptr` must be a pointer previously returned by one of the jsonlens_* functions,
///   or null (in which case this is a no-op).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn jsonlens_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(unsafe { CString::from_raw(ptr) });
    }
}

/// Convert a Rust string to a heap-allocated C string. Interior NULs are
/// stripped so the JSON stays intact.
fn to_c_string(s: &str) -> *mut c_char {
    let bytes: Vec<u8> = s.bytes().filter(|&b| b != 0).collect();
    CString::new(bytes).map_or(std::ptr::null_mut(), CString::into_raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(f: impl FnOnce() -> *mut c_char) -> String {
        let ptr = f();
        assert!(!ptr.is_null());
        let out = unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned();
        unsafe { jsonlens_free_string(ptr) };
        out
    }

    #[test]
    fn classify_round_trip() {
        let input = CString::new("\"a@b.com\"").unwrap();
        let out = call(|| unsafe { jsonlens_classify(input.as_ptr()) });
        assert!(out.contains(r#""kind":"email""#));
    }

    #[test]
    fn resolve_icon_round_trip() {
        let input = CString::new("x").unwrap();
        let out = call(|| unsafe { jsonlens_resolve_icon(input.as_ptr()) });
        assert!(out.contains("more-horizontal"));
    }

    #[test]
    fn visualize_round_trip() {
        let input = CString::new(r#"{"age": 42}"#).unwrap();
        let options = CString::new("").unwrap();
        let out = call(|| unsafe { jsonlens_visualize(input.as_ptr(), options.as_ptr()) });
        assert!(out.starts_with(r#"{"success":true"#));
    }

    #[test]
    fn free_null_is_noop() {
        unsafe { jsonlens_free_string(std::ptr::null_mut()) };
    }

    #[test]
    fn nul_bytes_stripped() {
        let ptr = to_c_string("a\0b");
        let out = unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned();
        unsafe { jsonlens_free_string(ptr) };
        assert_eq!(out, "ab");
    }
}
