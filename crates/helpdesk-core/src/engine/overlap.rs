//! Token-set overlap ranker.
//!
//! Scores a document by the fraction of query tokens it contains. Often
//! beats TF-IDF on very short queries, where idf weighting has little to
//! work with.

use std::collections::HashSet;

/// Best document by `|query ∩ doc| / |query|`.
///
/// Returns `None` when no document shares a token with the query.
pub fn best_match(
    query_tokens: &HashSet<String>,
    doc_token_sets: &[HashSet<String>],
) -> Option<(usize, f32)> {
    if query_tokens.is_empty() {
        return None;
    }

    let mut best: Option<(usize, f32)> = None;
    for (idx, doc_tokens) in doc_token_sets.iter().enumerate() {
        if doc_tokens.is_empty() {
            continue;
        }
        let shared = query_tokens.intersection(doc_tokens).count();
        let score = shared as f32 / query_tokens.len() as f32;
        if score > 0.0 && best.is_none_or(|(_, s)| score > s) {
            best = Some((idx, score));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::token_set;

    #[test]
    fn full_containment_scores_one() {
        let docs = vec![
            token_set("how do i track my order open my orders"),
            token_set("what is your return policy"),
        ];
        let (idx, score) = best_match(&token_set("track my order"), &docs).unwrap();
        assert_eq!(idx, 0);
        assert!((score - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn partial_overlap_scores_fractionally() {
        let docs = vec![token_set("delivery takes three to seven business days")];
        let (_, score) = best_match(&token_set("delivery cost"), &docs).unwrap();
        assert!((score - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn disjoint_tokens_yield_no_match() {
        let docs = vec![token_set("return policy")];
        assert!(best_match(&token_set("password reset"), &docs).is_none());
    }
}
