//! The response engine: a narrow trait seam plus the retrieval implementation.
//!
//! [`RetrievalEngine`] is built once from a [`FaqPack`] and is read-only
//! afterwards, so it can be shared across requests without locking. Matching
//! cascades through conversational shortcuts, TF-IDF cosine similarity,
//! token-set overlap, and a fuzzy ratio fallback; the highest-scoring
//! candidate wins and its ranker is reported in the reply's `method`.

pub mod fuzzy;
pub mod overlap;
pub mod rules;
pub mod tfidf;

use std::collections::HashSet;
use std::sync::Arc;

use helpdesk_types::config::GlobalConfig;
use helpdesk_types::faq::{FaqEntry, FaqPack};
use helpdesk_types::reply::{BotReply, MatchMethod};

use crate::text::{clean_text, token_set, tokenize};
use self::tfidf::TfidfIndex;

/// Reply when the utterance is empty after trimming.
pub const EMPTY_PROMPT: &str = "Please type a message.";

/// Reply when cleaning leaves too few tokens to rank.
pub const REPHRASE_PROMPT: &str = "I didn't quite get that. Could you rephrase?";

/// Reply substituted when the winning score falls below the threshold.
pub const LOW_CONFIDENCE_REPLY: &str =
    "I don't have an exact answer. Would you like me to connect you to a human agent?";

/// Narrow seam over the response model: one utterance in, one reply out.
///
/// Returns `None` when the engine has no usable output; the caller
/// substitutes its own fallback text. Implementations are synchronous and
/// must be shareable across request handlers.
pub trait ResponseEngine: Send + Sync {
    fn respond(&self, text: &str) -> Option<BotReply>;
}

/// Shared engine handle; the concrete model stays swappable behind the trait.
pub type SharedEngine = Arc<dyn ResponseEngine>;

/// FAQ retrieval engine combining three rankers over one indexed corpus.
pub struct RetrievalEngine {
    entries: Vec<FaqEntry>,
    /// Cleaned `question + answer` text per entry, index-aligned with `entries`.
    corpus: Vec<String>,
    token_sets: Vec<HashSet<String>>,
    tfidf: Option<TfidfIndex>,
    score_threshold: f32,
    min_query_tokens: usize,
}

impl RetrievalEngine {
    /// Index a pack's entries. The pack is the pre-built model artifact;
    /// nothing is persisted and nothing mutates after this returns.
    pub fn from_pack(pack: &FaqPack, config: &GlobalConfig) -> Self {
        let corpus: Vec<String> = pack
            .entries
            .iter()
            .map(|entry| clean_text(&format!("{} {}", entry.question, entry.answer)))
            .collect();
        let token_sets = corpus.iter().map(|doc| token_set(doc)).collect();

        let tfidf = TfidfIndex::fit(&corpus);
        match &tfidf {
            Some(index) => tracing::info!(
                entries = pack.len(),
                vocab = index.vocab_len(),
                "retrieval index built"
            ),
            None => tracing::warn!("corpus produced no index terms; TF-IDF disabled"),
        }

        Self {
            entries: pack.entries.clone(),
            corpus,
            token_sets,
            tfidf,
            score_threshold: config.score_threshold,
            min_query_tokens: config.min_query_tokens,
        }
    }

    /// Run the ranking cascade. The strict `>` comparisons keep TF-IDF as
    /// the tie-winner and fuzzy as the last resort.
    fn rank(&self, cleaned: &str, query_tokens: &HashSet<String>) -> Option<(usize, f32, MatchMethod)> {
        let mut best: Option<(usize, f32, MatchMethod)> = self
            .tfidf
            .as_ref()
            .and_then(|index| index.best_match(cleaned))
            .map(|(idx, score)| (idx, score, MatchMethod::Tfidf));

        if let Some((idx, score)) = overlap::best_match(query_tokens, &self.token_sets) {
            if best.is_none_or(|(_, s, _)| score > s) {
                best = Some((idx, score, MatchMethod::TokenOverlap));
            }
        }

        if let Some((idx, score)) = fuzzy::best_match(cleaned, &self.corpus) {
            if best.is_none_or(|(_, s, _)| score > s) {
                best = Some((idx, score, MatchMethod::Fuzzy));
            }
        }

        best
    }
}

impl ResponseEngine for RetrievalEngine {
    fn respond(&self, text: &str) -> Option<BotReply> {
        let message = text.trim();
        if message.is_empty() {
            return Some(BotReply::canned(EMPTY_PROMPT, MatchMethod::Empty));
        }

        let tokens = tokenize(message);
        if let Some(reply) = rules::shortcut(&tokens) {
            return Some(reply);
        }

        if tokens.len() < self.min_query_tokens {
            return Some(BotReply::canned(REPHRASE_PROMPT, MatchMethod::NoTokens));
        }

        let cleaned = tokens.join(" ");
        let query_tokens: HashSet<String> = tokens.into_iter().collect();

        let (idx, score, method) = self.rank(&cleaned, &query_tokens)?;
        tracing::debug!(intent_id = idx, score, %method, "ranked utterance");

        if score < self.score_threshold {
            return Some(BotReply {
                reply: LOW_CONFIDENCE_REPLY.to_string(),
                score,
                method: MatchMethod::LowConfidence,
                intent_id: Some(idx),
                image: None,
            });
        }

        let entry = &self.entries[idx];
        Some(BotReply {
            reply: entry.answer.clone(),
            score,
            method,
            intent_id: Some(idx),
            image: entry.image.clone(),
        })
    }
}
