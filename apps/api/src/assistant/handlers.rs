//! Axum route handlers for the chat assistant.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::assistant::ChatTurn;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Transcript so far, owned by the caller. May be empty.
    #[serde(default)]
    pub history: Vec<ChatTurn>,
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// POST /api/v1/chat
///
/// Stateless: the caller posts its transcript with every request and
/// appends the reply on its side.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if request.prompt.trim().is_empty() {
        return Err(AppError::Validation("prompt cannot be empty".to_string()));
    }

    let reply = state.assistant.chat(&request.history, &request.prompt).await?;

    Ok(Json(ChatResponse { reply }))
}
