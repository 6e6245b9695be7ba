//! jsonlens core: decides what each value in a JSON document *is* (a date,
//! an email address, a percentage, ...) and which icon best fits each field
//! name. Everything here is pure and deterministic; the only state is the
//! process-wide memo tables behind term expansion, edit distance and icon
//! resolution.

pub mod catalogs;
pub mod classifier;
pub mod display;
pub mod distance;
pub mod error;
pub mod ffi;
pub mod resolver;
pub mod terms;
pub mod types;
pub mod walker;

pub use catalogs::DEFAULT_ICON;
pub use classifier::classify;
pub use display::format_label;
pub use error::{Error, Result};
pub use ffi::{classify_to_json, expand_terms_to_json, resolve_icon_to_json, visualize_to_json};
pub use resolver::{builtin_resolver, resolve_icon, IconCatalog, IconResolver, MatchPass};
pub use terms::{expand_terms, normalize, TermExpander};
pub use types::*;
pub use walker::{visualize, visualize_with};
