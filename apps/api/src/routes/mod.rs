pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as scan;
use crate::assistant::handlers as chat;
use crate::state::AppState;

/// Upload cap for scan requests (résumé plus optional JD file).
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/presets", get(scan::handle_list_presets))
        .route("/api/v1/scan", post(scan::handle_scan))
        .route("/api/v1/chat", post(chat::handle_chat))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
