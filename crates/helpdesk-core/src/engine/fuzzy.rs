//! Fuzzy similarity fallback.
//!
//! Catches typo-ridden queries the token-based rankers miss, using a
//! normalized edit-distance ratio over the cleaned text.

/// Similarity ratio in `[0, 1]`: `1 - distance / max_len`.
pub fn similarity(a: &str, b: &str) -> f32 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    let len_a = a.chars().count();
    let len_b = b.chars().count();
    let max_len = len_a.max(len_b);
    1.0 - levenshtein(a, b) as f32 / max_len as f32
}

/// Best document by similarity ratio against the cleaned query.
///
/// Returns `None` when every document scores zero.
pub fn best_match(cleaned_query: &str, corpus: &[String]) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;
    for (idx, doc) in corpus.iter().enumerate() {
        let score = similarity(cleaned_query, doc);
        if score > 0.0 && best.is_none_or(|(_, s)| score > s) {
            best = Some((idx, score));
        }
    }
    best
}

/// Levenshtein distance, two-row dynamic programming over chars.
fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            current[j + 1] = substitution.min(prev[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut prev, &mut current);
    }
    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_score_one() {
        assert!((similarity("track my order", "track my order") - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn single_typo_scores_high() {
        let score = similarity("trak my order", "track my order");
        assert!(score > 0.9, "score was {score}");
    }

    #[test]
    fn levenshtein_known_distances() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", "abc"), 0);
    }

    #[test]
    fn best_match_prefers_closest_document() {
        let corpus = vec![
            "what is your return policy".to_string(),
            "how long does delivery take".to_string(),
        ];
        let (idx, _) = best_match("how long does delivry take", &corpus).unwrap();
        assert_eq!(idx, 1);
    }
}
