pub mod chat;
pub mod error;
pub mod health;
pub mod history;

use axum::{
    routing::{get, post},
    Router,
};

use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Liveness
        .route("/", get(health::health_check))
        .route("/chat", post(chat::chat_handler))
        .route("/history", get(history::list_history))
        .with_state(state)
}
