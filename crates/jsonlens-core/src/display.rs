//! Human-readable text for classified values and labels.

use crate::types::{Gender, ValueClassification};

impl ValueClassification {
    /// Text shown for this value (en-US conventions, locale-independent).
    pub fn display_text(&self) -> String {
        match self {
            ValueClassification::Null => "null".to_string(),
            ValueClassification::Boolean { value } => {
                let text = if *value { "True" } else { "False" };
                text.to_string()
            }
            ValueClassification::Ratio { fraction } => {
                // `+ 0.0` turns -0 into 0
                format!("{:.0}%", (fraction * 100.0).round() + 0.0)
            }
            ValueClassification::Integer { value } => format_grouped(*value, 0),
            ValueClassification::Decimal { value } => format_grouped(*value, 2),
            ValueClassification::Color { hex } => hex.clone(),
            ValueClassification::MusicTitle { title } => format!("\"{title}\""),
            ValueClassification::DateTime { at } => {
                at.local.format("%b %-d, %Y, %-I:%M:%S %p").to_string()
            }
            ValueClassification::Email { address } => address.clone(),
            ValueClassification::GeoCoordinate {
                lat_text, lng_text, ..
            } => format!("Lat: {lat_text}°, Long: {lng_text}°"),
            ValueClassification::Gender { category } => category.title().to_string(),
            ValueClassification::PlainString { text } => text.clone(),
        }
    }
}

impl Gender {
    pub fn title(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::NonBinary => "Non-binary",
        }
    }
}

/// Format with thousands separators and a fixed number of fraction digits.
fn format_grouped(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if value < 0.0 && fixed.bytes().any(|b| b != b'0' && b != b'.') {
        out.push('-');
    }
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Title text for a field label: underscores become spaces and every word
/// start is upper-cased (`account_id` → `Account Id`).
pub fn format_label(label: &str) -> String {
    let spaced = label.replace('_', " ");
    let mut out = String::with_capacity(spaced.len());
    let mut prev_is_word = false;
    for c in spaced.chars() {
        let is_word = c.is_ascii_alphanumeric() || c == '_';
        if is_word && !prev_is_word {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev_is_word = is_word;
    }
    out
}
