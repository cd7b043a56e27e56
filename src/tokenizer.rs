//! C2 — Tokenizer.
//!
//! Contract: `tokenize(text) -> ordered list of non-empty Unicode-string
//! tokens`, preserving input order and token content. A trivial
//! whitespace+punctuation splitter — no morphological analysis, no
//! stemming. Token indices are assigned in traversal order by the caller
//! (position in the returned `Vec`).

use once_cell::sync::Lazy;
use regex_lite::Regex;

/// Matches runs of Unicode whitespace. Splitting is Unicode-aware because
/// `Regex::split` here only needs `\s`-equivalent behavior, which regex-lite
/// supports without needing full Unicode property classes.
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// ASCII punctuation trimmed from the edges of a whitespace-delimited chunk.
/// Deliberately narrow: Sinhala script carries its own punctuation
/// (e.g. dandas) that isn't in this set, so those chunks pass through
/// untouched rather than being mangled by an ASCII-biased rule.
const EDGE_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':', '"', '\'', '(', ')', '[', ']'];

/// Split `text` into an ordered list of non-empty tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    WHITESPACE
        .split(trimmed)
        .map(|chunk| chunk.trim_matches(EDGE_PUNCTUATION))
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| chunk.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace() {
        let tokens = tokenize("මම අද ගොඩක් සතුටුයි");
        assert_eq!(tokens, vec!["මම", "අද", "ගොඩක්", "සතුටුයි"]);
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn trims_ascii_edge_punctuation() {
        let tokens = tokenize("hello, world!");
        assert_eq!(tokens, vec!["hello", "world"]);
    }

    #[test]
    fn preserves_order_and_duplicates() {
        let tokens = tokenize("a b a c b");
        assert_eq!(tokens, vec!["a", "b", "a", "c", "b"]);
    }

    #[test]
    fn collapses_multiple_whitespace() {
        let tokens = tokenize("a   b\tc\nd");
        assert_eq!(tokens, vec!["a", "b", "c", "d"]);
    }
}
