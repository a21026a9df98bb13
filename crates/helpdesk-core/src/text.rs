//! Text normalization shared by the rankers.
//!
//! All matching runs over lowercase ASCII-alphanumeric tokens; everything
//! else (punctuation, accents, emoji) acts as a separator.

use std::collections::HashSet;

/// English stop words excluded from TF-IDF terms.
///
/// Sorted so membership checks can binary-search.
const STOP_WORDS: &[&str] = &[
    "a", "about", "after", "all", "also", "am", "an", "and", "any", "are", "as", "at", "be",
    "because", "been", "before", "being", "but", "by", "can", "could", "did", "do", "does",
    "doing", "down", "during", "each", "few", "for", "from", "further", "had", "has", "have",
    "having", "he", "her", "here", "hers", "him", "his", "how", "i", "if", "in", "into", "is",
    "it", "its", "just", "me", "more", "most", "my", "no", "nor", "not", "now", "of", "off",
    "on", "once", "only", "or", "other", "our", "ours", "out", "over", "own", "same", "she",
    "should", "so", "some", "such", "than", "that", "the", "their", "theirs", "them", "then",
    "there", "these", "they", "this", "those", "through", "to", "too", "under", "until", "up",
    "very", "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom",
    "why", "will", "with", "would", "you", "your", "yours",
];

/// Split into lowercase alphanumeric tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    for ch in text.chars().flat_map(|c| c.to_lowercase()) {
        if ch.is_ascii_alphanumeric() {
            current.push(ch);
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// Normalize to the canonical matching form: tokens joined by single spaces.
pub fn clean_text(text: &str) -> String {
    tokenize(text).join(" ")
}

/// The distinct tokens of a text.
pub fn token_set(text: &str) -> HashSet<String> {
    tokenize(text).into_iter().collect()
}

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.binary_search(&token).is_ok()
}

/// Index terms for a token sequence: stop-filtered unigrams plus adjacent
/// bigrams over the surviving tokens.
pub fn index_terms(tokens: &[String]) -> Vec<String> {
    let kept: Vec<&String> = tokens.iter().filter(|t| !is_stop_word(t)).collect();
    let mut terms: Vec<String> = kept.iter().map(|t| t.to_string()).collect();
    for pair in kept.windows(2) {
        terms.push(format!("{} {}", pair[0], pair[1]));
    }
    terms
}
