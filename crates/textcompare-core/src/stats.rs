//! Aggregate statistics over an alignment

use crate::align::TokenPair;
use serde::Serialize;

/// Summary of one comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stats {
    /// Number of token pairs in the alignment
    pub total_pairs: usize,
    /// Pairs whose sides differ
    pub different_pairs: usize,
    /// Percentage of equal pairs, 0.0 to 100.0. An empty alignment counts
    /// as fully similar. Unrounded; display formatting trims to one decimal.
    pub similarity_percent: f64,
}

/// Summarize an alignment into pair counts and a similarity percentage
pub fn summarize(pairs: &[TokenPair]) -> Stats {
    let total_pairs = pairs.len();
    let different_pairs = pairs.iter().filter(|p| p.differs).count();

    let similarity_percent = if total_pairs == 0 {
        100.0
    } else {
        (total_pairs - different_pairs) as f64 / total_pairs as f64 * 100.0
    };

    Stats {
        total_pairs,
        different_pairs,
        similarity_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::align;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_summarize_all_equal_is_full_similarity() {
        let stats = summarize(&align("a b c", "a b c"));
        assert_eq!(stats.total_pairs, 3);
        assert_eq!(stats.different_pairs, 0);
        assert_eq!(stats.similarity_percent, 100.0);
    }

    #[test]
    fn test_summarize_all_different_is_zero_similarity() {
        let stats = summarize(&align("a b", "x y"));
        assert_eq!(stats.total_pairs, 2);
        assert_eq!(stats.different_pairs, 2);
        assert_eq!(stats.similarity_percent, 0.0);
    }

    #[test]
    fn test_summarize_half_different() {
        let stats = summarize(&align("a b", "a"));
        assert_eq!(stats.total_pairs, 2);
        assert_eq!(stats.different_pairs, 1);
        assert_eq!(stats.similarity_percent, 50.0);
    }

    #[test]
    fn test_summarize_empty_alignment_is_full_similarity() {
        let stats = summarize(&[]);
        assert_eq!(stats.total_pairs, 0);
        assert_eq!(stats.different_pairs, 0);
        assert_eq!(stats.similarity_percent, 100.0);
    }

    #[test]
    fn test_summarize_is_symmetric_under_input_swap() {
        let forward = summarize(&align("a b c", "a x"));
        let backward = summarize(&align("a x", "a b c"));
        assert_eq!(forward.total_pairs, backward.total_pairs);
        assert_eq!(forward.different_pairs, backward.different_pairs);
        assert_eq!(forward.similarity_percent, backward.similarity_percent);
    }
}
