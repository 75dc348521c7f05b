// src/normalize.rs
//! Input text normalization: strip punctuation/specials, collapse whitespace.

use once_cell::sync::Lazy;
use regex::Regex;

// Keep only ASCII letters, digits, and whitespace.
static RE_STRIP: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9\s]+").expect("strip regex"));

// Any run of whitespace becomes a single space.
static RE_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("space regex"));

/// Normalize raw input into a canonical comparable form.
///
/// Removes every character that is not an ASCII letter, digit, or whitespace,
/// collapses whitespace runs to single spaces, and trims. Total over all
/// inputs; empty in, empty out.
pub fn clean_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let stripped = RE_STRIP.replace_all(text.trim(), "");
    let collapsed = RE_SPACE.replace_all(&stripped, " ");
    collapsed.trim().to_string()
}
