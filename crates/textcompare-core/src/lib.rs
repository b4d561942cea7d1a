//! Positional text comparison
//!
//! This crate provides the logic behind the text comparison tool:
//! whitespace tokenization, index-wise token alignment, and derived
//! similarity statistics.
//!
//! Everything here is pure: no I/O, no caching, no state. Callers
//! recompute whenever either source text changes.

pub mod align;
pub mod report;
pub mod stats;

pub use align::{align, token_count, tokenize, TokenPair};
pub use report::render_report;
pub use stats::{summarize, Stats};

use serde::Serialize;

/// A full comparison of two texts: the aligned pairs plus their summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub pairs: Vec<TokenPair>,
    pub stats: Stats,
}

/// Compare two texts token-by-token and summarize the result
pub fn compare(left: &str, right: &str) -> Comparison {
    let pairs = align(left, right);
    let stats = summarize(&pairs);
    Comparison { pairs, stats }
}
