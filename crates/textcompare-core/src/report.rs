//! Plain-text report for the "Copy Results" action
//!
//! One line per pair: `<left> <marker> <right>`. Tokens are kept raw here,
//! including empty ones; the on-screen "(empty)" placeholder is a display
//! concern and does not appear in the report.

use crate::align::TokenPair;

/// Marker between the sides of an equal pair
pub const EQUAL_MARKER: char = '=';
/// Marker between the sides of a differing pair
pub const DIFFERENT_MARKER: char = '≠';

/// Serialize an alignment as newline-separated comparison lines.
///
/// The output has exactly one line per pair and no trailing newline.
pub fn render_report(pairs: &[TokenPair]) -> String {
    pairs
        .iter()
        .map(|pair| {
            let marker = if pair.differs {
                DIFFERENT_MARKER
            } else {
                EQUAL_MARKER
            };
            format!("{} {} {}", pair.left, marker, pair.right)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
