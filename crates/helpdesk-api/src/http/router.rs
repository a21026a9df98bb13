//! Axum router configuration with middleware.
//!
//! Middleware: CORS (permissive, the UI may be hosted elsewhere), request
//! tracing.
//!
//! The chat UI is served from `web/` (configurable via `HELPDESK_WEB_DIR`).
//! API routes take priority; unknown paths fall through to the UI's
//! `index.html`. If the directory does not exist, only the API is served and
//! `GET /` answers with a short hint.

use axum::response::Html;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/api/message", post(handlers::message::post_message))
        .route("/faqs", get(handlers::faq::list_faqs))
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Serve the chat UI from disk if the directory exists. API routes and
    // /health take priority; unknown paths fall through to index.html.
    let web_dir = std::env::var("HELPDESK_WEB_DIR").unwrap_or_else(|_| "web".to_string());
    if std::path::Path::new(&web_dir).exists() {
        let index_path = format!("{web_dir}/index.html");
        let serve_dir = ServeDir::new(&web_dir).fallback(ServeFile::new(index_path));
        router = router.fallback_service(serve_dir);
        tracing::info!(path = %web_dir, "chat UI static file serving enabled");
    } else {
        router = router.route("/", get(backend_only_hint));
        tracing::warn!(path = %web_dir, "chat UI directory not found, serving API only");
    }

    router
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET / when no chat UI is on disk.
async fn backend_only_hint() -> Html<&'static str> {
    Html("<h3>Helpdesk backend is running. POST to /api/message</h3>")
}
