//! The message endpoint: one utterance in, one reply payload out.
//!
//! `POST /api/message` with `{"message": "<text>"}`. The response always
//! carries a displayable `reply` string; `score`, `method`, `intent_id`, and
//! `image` are diagnostics the chat UI is free to ignore.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use helpdesk_types::reply::{BotReply, MatchMethod};

use crate::http::error::AppError;
use crate::state::AppState;

/// Reply substituted when the engine yields no usable output.
pub const ENGINE_FALLBACK_REPLY: &str = "Sorry, something went wrong.";

/// Request body for the message endpoint.
#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    /// The user's utterance, as typed.
    pub message: String,
}

/// POST /api/message - answer one user utterance.
///
/// A missing or malformed body is a 400; everything the engine can say --
/// including prompts for empty input and the low-confidence handoff -- is a
/// 200 with the reply in the body.
pub async fn post_message(
    State(state): State<AppState>,
    payload: Result<Json<MessageRequest>, JsonRejection>,
) -> Result<Json<BotReply>, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let request_id = Uuid::now_v7();

    // Ranking is pure CPU work; keep it off the async workers.
    let engine = state.engine.clone();
    let reply = tokio::task::spawn_blocking(move || engine.respond(&request.message))
        .await
        .map_err(|err| AppError::Internal(err.to_string()))?
        .unwrap_or_else(|| BotReply::canned(ENGINE_FALLBACK_REPLY, MatchMethod::NoMatch));

    tracing::debug!(
        %request_id,
        method = %reply.method,
        score = reply.score,
        "message answered"
    );

    Ok(Json(reply))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use helpdesk_core::engine::{RetrievalEngine, EMPTY_PROMPT};
    use helpdesk_infra::pack::builtin_pack;
    use helpdesk_types::config::GlobalConfig;
    use helpdesk_types::faq::FaqPack;

    fn state_with(pack: FaqPack) -> AppState {
        let engine = RetrievalEngine::from_pack(&pack, &GlobalConfig::default());
        AppState {
            engine: Arc::new(engine),
            pack: Arc::new(pack),
        }
    }

    fn request(text: &str) -> Result<Json<MessageRequest>, JsonRejection> {
        Ok(Json(MessageRequest {
            message: text.to_string(),
        }))
    }

    #[tokio::test]
    async fn known_question_round_trips_its_answer() {
        let state = state_with(builtin_pack());
        let Json(reply) = post_message(State(state), request("How can I reset my password?"))
            .await
            .unwrap();
        assert!(reply.reply.contains("Forgot Password"));
        assert_eq!(reply.intent_id, Some(0));
    }

    #[tokio::test]
    async fn empty_message_gets_typing_prompt() {
        let state = state_with(builtin_pack());
        let Json(reply) = post_message(State(state), request("   ")).await.unwrap();
        assert_eq!(reply.reply, EMPTY_PROMPT);
        assert_eq!(reply.method, MatchMethod::Empty);
    }

    #[tokio::test]
    async fn engine_without_output_gets_fixed_fallback() {
        let state = state_with(FaqPack::new(vec![]));
        let Json(reply) = post_message(State(state), request("track my order"))
            .await
            .unwrap();
        assert_eq!(reply.reply, ENGINE_FALLBACK_REPLY);
        assert_eq!(reply.method, MatchMethod::NoMatch);
    }

    #[tokio::test]
    async fn greeting_answers_at_full_confidence() {
        let state = state_with(builtin_pack());
        let Json(reply) = post_message(State(state), request("hey")).await.unwrap();
        assert_eq!(reply.method, MatchMethod::Greeting);
        assert!((reply.score - 1.0).abs() < f32::EPSILON);
    }
}
