//! TF-IDF index over the FAQ corpus.
//!
//! Terms are stop-filtered unigrams plus bigrams. Idf is smoothed
//! (`ln((1 + n) / (1 + df)) + 1`) and document vectors are L2-normalized,
//! so cosine similarity reduces to a sparse dot product.

use std::collections::HashMap;

use crate::text::{index_terms, tokenize};

/// Sparse TF-IDF vectors for every document in the corpus.
#[derive(Debug)]
pub struct TfidfIndex {
    vocab: HashMap<String, usize>,
    idf: Vec<f32>,
    doc_vectors: Vec<HashMap<usize, f32>>,
}

impl TfidfIndex {
    /// Fit an index over cleaned documents.
    ///
    /// Returns `None` when no document contributes any term (all stop words
    /// or all empty), matching a corpus the index cannot help with.
    pub fn fit(docs: &[String]) -> Option<Self> {
        let doc_terms: Vec<Vec<String>> = docs
            .iter()
            .map(|doc| index_terms(&tokenize(doc)))
            .collect();

        let mut vocab: HashMap<String, usize> = HashMap::new();
        let mut doc_freq: Vec<u32> = Vec::new();
        for terms in &doc_terms {
            let mut seen: Vec<usize> = Vec::new();
            for term in terms {
                let term_id = *vocab.entry(term.clone()).or_insert_with(|| {
                    doc_freq.push(0);
                    doc_freq.len() - 1
                });
                if !seen.contains(&term_id) {
                    seen.push(term_id);
                    doc_freq[term_id] += 1;
                }
            }
        }

        if vocab.is_empty() {
            return None;
        }

        let n_docs = docs.len() as f32;
        let idf: Vec<f32> = doc_freq
            .iter()
            .map(|&df| ((1.0 + n_docs) / (1.0 + df as f32)).ln() + 1.0)
            .collect();

        let doc_vectors = doc_terms
            .iter()
            .map(|terms| {
                let mut counts: HashMap<usize, f32> = HashMap::new();
                for term in terms {
                    if let Some(&term_id) = vocab.get(term) {
                        *counts.entry(term_id).or_insert(0.0) += 1.0;
                    }
                }
                weigh_and_normalize(counts, &idf)
            })
            .collect();

        Some(Self {
            vocab,
            idf,
            doc_vectors,
        })
    }

    /// Number of indexed terms.
    pub fn vocab_len(&self) -> usize {
        self.vocab.len()
    }

    /// Project a cleaned query into the index's term space.
    fn vectorize(&self, text: &str) -> HashMap<usize, f32> {
        let mut counts: HashMap<usize, f32> = HashMap::new();
        for term in index_terms(&tokenize(text)) {
            if let Some(&term_id) = self.vocab.get(&term) {
                *counts.entry(term_id).or_insert(0.0) += 1.0;
            }
        }
        weigh_and_normalize(counts, &self.idf)
    }

    /// Best document for a cleaned query by cosine similarity.
    ///
    /// Returns `None` when the query shares no term with the corpus.
    pub fn best_match(&self, cleaned_query: &str) -> Option<(usize, f32)> {
        let query_vec = self.vectorize(cleaned_query);
        if query_vec.is_empty() {
            return None;
        }

        let mut best: Option<(usize, f32)> = None;
        for (idx, doc_vec) in self.doc_vectors.iter().enumerate() {
            let score = dot(&query_vec, doc_vec);
            if score > 0.0 && best.is_none_or(|(_, s)| score > s) {
                best = Some((idx, score));
            }
        }
        best
    }
}

/// Multiply raw counts by idf and L2-normalize.
fn weigh_and_normalize(counts: HashMap<usize, f32>, idf: &[f32]) -> HashMap<usize, f32> {
    let mut vec: HashMap<usize, f32> = counts
        .into_iter()
        .map(|(term_id, count)| (term_id, count * idf[term_id]))
        .collect();
    let norm = vec.values().map(|w| w * w).sum::<f32>().sqrt();
    if norm > 0.0 {
        for weight in vec.values_mut() {
            *weight /= norm;
        }
    }
    vec
}

/// Sparse dot product; iterates the smaller vector.
fn dot(a: &HashMap<usize, f32>, b: &HashMap<usize, f32>) -> f32 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small
        .iter()
        .filter_map(|(term_id, wa)| large.get(term_id).map(|wb| wa * wb))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<String> {
        vec![
            "how can i reset my password click forgot password on the login page".to_string(),
            "how do i track my order open my orders and click track order".to_string(),
            "what payment methods do you accept credit debit cards and wallets".to_string(),
        ]
    }

    #[test]
    fn exact_document_text_matches_itself_best() {
        let index = TfidfIndex::fit(&corpus()).unwrap();
        let (idx, score) = index.best_match("reset my password").unwrap();
        assert_eq!(idx, 0);
        assert!(score > 0.3, "score was {score}");
    }

    #[test]
    fn related_query_finds_right_document() {
        let index = TfidfIndex::fit(&corpus()).unwrap();
        let (idx, _) = index.best_match("track order").unwrap();
        assert_eq!(idx, 1);
        let (idx, _) = index.best_match("payment cards").unwrap();
        assert_eq!(idx, 2);
    }

    #[test]
    fn unknown_terms_yield_no_match() {
        let index = TfidfIndex::fit(&corpus()).unwrap();
        assert!(index.best_match("zebra xylophone").is_none());
    }

    #[test]
    fn all_stop_word_corpus_yields_no_index() {
        let docs = vec!["the a an of".to_string()];
        assert!(TfidfIndex::fit(&docs).is_none());
    }

    #[test]
    fn scores_are_bounded_by_one() {
        let docs = corpus();
        let index = TfidfIndex::fit(&docs).unwrap();
        for doc in &docs {
            let (_, score) = index.best_match(doc).unwrap();
            assert!(score <= 1.0 + 1e-5, "score was {score}");
        }
    }
}
