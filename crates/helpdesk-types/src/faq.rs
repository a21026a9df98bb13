//! FAQ pack types -- the serialized knowledge artifact the engine is built from.
//!
//! A [`FaqPack`] is loaded once at process start and is immutable afterwards.
//! The engine indexes its entries by position, so `intent_id` values in reply
//! payloads are indexes into `entries`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One question/answer pair in the knowledge pack.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqEntry {
    /// Canonical phrasing of the question.
    pub question: String,
    /// The answer served verbatim as the bot reply.
    pub answer: String,
    /// Optional illustration URL rendered beneath the answer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// The serialized knowledge artifact: a versioned, timestamped entry list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqPack {
    /// Pack format version.
    #[serde(default = "default_pack_version")]
    pub version: u32,
    /// When the pack was assembled.
    pub built_at: DateTime<Utc>,
    /// The entries, in index order.
    pub entries: Vec<FaqEntry>,
}

fn default_pack_version() -> u32 {
    1
}

impl FaqPack {
    /// Build a pack from entries, stamped now.
    pub fn new(entries: Vec<FaqEntry>) -> Self {
        Self {
            version: default_pack_version(),
            built_at: Utc::now(),
            entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Question-only view returned by `GET /faqs` for frontend population.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqSummary {
    /// Index of the entry within the pack.
    pub id: usize,
    pub question: String,
}

impl FaqSummary {
    /// Summarize every entry of a pack, preserving index order.
    pub fn from_pack(pack: &FaqPack) -> Vec<Self> {
        pack.entries
            .iter()
            .enumerate()
            .map(|(id, entry)| Self {
                id,
                question: entry.question.clone(),
            })
            .collect()
    }
}
