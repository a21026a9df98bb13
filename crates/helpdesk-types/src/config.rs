//! Global configuration types for Helpdesk.
//!
//! `GlobalConfig` represents the top-level `config.toml` that tunes the
//! retrieval engine and points at an optional FAQ pack artifact.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level configuration, loaded from `{data_dir}/config.toml`.
///
/// All fields have sensible defaults; a missing file yields `Default`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Minimum ranker score before the low-confidence handoff reply is
    /// substituted for the matched answer.
    #[serde(default = "default_score_threshold")]
    pub score_threshold: f32,

    /// Minimum number of cleaned tokens required before ranking runs.
    #[serde(default = "default_min_query_tokens")]
    pub min_query_tokens: usize,

    /// Path to a FAQ pack JSON artifact. When unset (and no `HELPDESK_PACK`
    /// env override is present), the compiled-in default pack is used.
    #[serde(default)]
    pub pack_path: Option<PathBuf>,
}

fn default_score_threshold() -> f32 {
    0.18
}

fn default_min_query_tokens() -> usize {
    1
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            score_threshold: default_score_threshold(),
            min_query_tokens: default_min_query_tokens(),
            pack_path: None,
        }
    }
}
