use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::ApiError;
use crate::infrastructure::AppState;

#[derive(Deserialize, ToSchema)]
pub struct ChatRequest {
    pub prompt: String,
}

#[derive(Serialize, ToSchema)]
pub struct ChatResponse {
    pub response: String,
}

#[utoipa::path(
    post,
    path = "/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Generated answer", body = ChatResponse),
        (status = 500, description = "Completion service failed")
    )
)]
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let answer = state
        .completions
        .complete(&payload.prompt)
        .await
        .map_err(|e| {
            tracing::warn!("Completion request failed: {}", e);
            ApiError::from(e)
        })?;

    // Best effort: the answer is returned even if it cannot be logged
    match state.interactions.append(&payload.prompt, &answer).await {
        Ok(id) => tracing::debug!("Logged interaction {}", id),
        Err(e) => tracing::error!("Failed to log interaction: {}", e),
    }

    Ok(Json(ChatResponse { response: answer }))
}
