//! Application state shared by the CLI commands and the HTTP handlers.
//!
//! The engine is built once from the loaded pack and shared read-only; there
//! is no other cross-request state.

use std::sync::Arc;

use helpdesk_core::engine::{RetrievalEngine, SharedEngine};
use helpdesk_infra::config::load_global_config;
use helpdesk_infra::data_dir::resolve_data_dir;
use helpdesk_infra::pack::load_pack;
use helpdesk_types::faq::FaqPack;

/// Shared application state: the response engine and the pack it was built from.
#[derive(Clone)]
pub struct AppState {
    pub engine: SharedEngine,
    pub pack: Arc<FaqPack>,
}

impl AppState {
    /// Resolve configuration, load the FAQ pack, and build the engine.
    ///
    /// Never fails: a missing config or a bad pack falls back to defaults
    /// (the loaders log what happened).
    pub async fn init() -> Self {
        let data_dir = resolve_data_dir();
        let config = load_global_config(&data_dir).await;
        let pack = load_pack(&config).await;
        let engine: SharedEngine = Arc::new(RetrievalEngine::from_pack(&pack, &config));

        Self {
            engine,
            pack: Arc::new(pack),
        }
    }
}
