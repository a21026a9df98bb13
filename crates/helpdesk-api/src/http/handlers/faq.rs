//! FAQ listing endpoint for frontend population.

use axum::extract::State;
use axum::Json;

use helpdesk_types::faq::FaqSummary;

use crate::state::AppState;

/// GET /faqs - the pack's questions with their entry indexes.
pub async fn list_faqs(State(state): State<AppState>) -> Json<Vec<FaqSummary>> {
    Json(FaqSummary::from_pack(&state.pack))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use helpdesk_core::engine::RetrievalEngine;
    use helpdesk_infra::pack::builtin_pack;
    use helpdesk_types::config::GlobalConfig;

    #[tokio::test]
    async fn lists_every_pack_entry_in_order() {
        let pack = builtin_pack();
        let expected = pack.len();
        let state = AppState {
            engine: Arc::new(RetrievalEngine::from_pack(&pack, &GlobalConfig::default())),
            pack: Arc::new(pack),
        };

        let Json(summaries) = list_faqs(State(state)).await;
        assert_eq!(summaries.len(), expected);
        assert_eq!(summaries[0].id, 0);
    }
}
