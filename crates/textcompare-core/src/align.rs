//! Whitespace tokenization and positional token alignment
//!
//! Tokens are paired purely by index. This is not an edit-distance diff:
//! an insertion near the start of one text shifts every token after it
//! and the pairs downstream all read as different.

use serde::Serialize;

/// Two tokens occupying the same index, one from each text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenPair {
    /// Token from the first text; empty when that text has no token here
    pub left: String,
    /// Token from the second text; empty when that text has no token here
    pub right: String,
    /// Whether the sides differ (an empty side differs from a non-empty one)
    pub differs: bool,
}

/// Split a text into tokens: maximal runs of non-whitespace characters.
///
/// The empty string yields a single empty token rather than no tokens,
/// so comparing two empty documents produces one equal pair instead of
/// zero pairs.
pub fn tokenize(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return vec![""];
    }
    text.split_whitespace().collect()
}

/// Number of tokens `align` sees for one text
pub fn token_count(text: &str) -> usize {
    tokenize(text).len()
}

/// Pair up tokens from two texts at matching indices.
///
/// The shorter side is padded with empty tokens, so the result always has
/// `max(token_count(left), token_count(right))` pairs, in index order.
/// Any input is valid, including empty strings.
pub fn align(left: &str, right: &str) -> Vec<TokenPair> {
    let left_tokens = tokenize(left);
    let right_tokens = tokenize(right);
    let len = left_tokens.len().max(right_tokens.len());

    let mut pairs = Vec::with_capacity(len);
    for i in 0..len {
        let l = left_tokens.get(i).copied().unwrap_or("");
        let r = right_tokens.get(i).copied().unwrap_or("");
        pairs.push(TokenPair {
            left: l.to_string(),
            right: r.to_string(),
            differs: l != r,
        });
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tokenize_splits_on_whitespace_runs() {
        assert_eq!(tokenize("a  b\tc\nd"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_tokenize_empty_string_is_one_empty_token() {
        assert_eq!(tokenize(""), vec![""]);
    }

    #[test]
    fn test_tokenize_ignores_leading_and_trailing_whitespace() {
        assert_eq!(tokenize("  a b  "), vec!["a", "b"]);
    }

    #[test]
    fn test_tokenize_whitespace_only_has_no_tokens() {
        assert_eq!(tokenize(" \t\n"), Vec::<&str>::new());
    }

    #[test]
    fn test_align_pads_shorter_side() {
        let pairs = align("a b c", "a");
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[1].right, "");
        assert_eq!(pairs[2].right, "");
        assert!(pairs[1].differs);
        assert!(pairs[2].differs);
    }

    #[test]
    fn test_align_empty_against_token_differs() {
        let pairs = align("", "a");
        assert_eq!(
            pairs,
            vec![TokenPair {
                left: String::new(),
                right: "a".to_string(),
                differs: true,
            }]
        );
    }

    #[test]
    fn test_align_is_positional_not_edit_distance() {
        // Inserting a token at the front misaligns everything after it
        let pairs = align("x a b", "a b");
        assert!(pairs.iter().all(|p| p.differs));
    }

    #[test]
    fn test_align_preserves_index_order() {
        let pairs = align("one two three", "one 2 three");
        let lefts: Vec<&str> = pairs.iter().map(|p| p.left.as_str()).collect();
        assert_eq!(lefts, vec!["one", "two", "three"]);
        assert!(!pairs[0].differs);
        assert!(pairs[1].differs);
        assert!(!pairs[2].differs);
    }
}
