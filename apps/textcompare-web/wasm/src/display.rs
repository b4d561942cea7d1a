//! Display formatting for the comparison results panel
//!
//! On-screen rendering differs from the clipboard report: empty tokens get
//! a visible placeholder here, while the report keeps them raw.

use wasm_bindgen::prelude::*;

/// Shown in place of an empty token
pub const EMPTY_PLACEHOLDER: &str = "(empty)";

/// Token text as rendered on screen
#[wasm_bindgen(js_name = displayToken)]
pub fn display_token(token: &str) -> String {
    if token.is_empty() {
        EMPTY_PLACEHOLDER.to_string()
    } else {
        token.to_string()
    }
}

/// Similarity with exactly one decimal digit, e.g. "66.7".
/// The host page appends the percent sign.
#[wasm_bindgen(js_name = formatSimilarity)]
pub fn format_similarity(similarity_percent: f64) -> String {
    format!("{:.1}", similarity_percent)
}
