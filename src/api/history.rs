use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::error::ApiError;
use crate::domain::{Interaction, HISTORY_LIMIT};
use crate::infrastructure::AppState;

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HistoryQuery {
    /// Page size, clamped to 1..=50
    pub limit: Option<u64>,
}

#[derive(Serialize, ToSchema)]
pub struct HistoryEntry {
    pub question: String,
    pub answer: String,
    pub timestamp: String,
}

impl From<Interaction> for HistoryEntry {
    fn from(i: Interaction) -> Self {
        Self {
            question: i.question,
            answer: i.answer,
            timestamp: i.timestamp,
        }
    }
}

#[utoipa::path(
    get,
    path = "/history",
    params(HistoryQuery),
    responses(
        (status = 200, description = "Most recent interactions, newest first", body = [HistoryEntry]),
        (status = 500, description = "Interaction log unavailable")
    )
)]
pub async fn list_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<HistoryEntry>>, ApiError> {
    let limit = query.limit.unwrap_or(HISTORY_LIMIT).clamp(1, HISTORY_LIMIT);

    let rows = state.interactions.recent(limit).await.map_err(|e| {
        tracing::error!("Failed to read history: {}", e);
        ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Failed to load history")
    })?;

    Ok(Json(rows.into_iter().map(HistoryEntry::from).collect()))
}
