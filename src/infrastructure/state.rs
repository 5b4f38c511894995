//! Application state containing the interaction log and completion client

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::config::Config;
use crate::domain::{CompletionService, InteractionRepository};
use crate::infrastructure::SeaOrmInteractionRepository;
use crate::services::ChatCompletionClient;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Interaction log
    pub interactions: Arc<dyn InteractionRepository>,
    /// Completion service client
    pub completions: Arc<dyn CompletionService>,
}

impl AppState {
    /// Wire the SeaORM repository and the HTTP completion client
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        Self {
            interactions: Arc::new(SeaOrmInteractionRepository::new(db)),
            completions: Arc::new(ChatCompletionClient::new(
                config.completion_api_url.clone(),
                config.api_key.clone(),
            )),
        }
    }

    /// Build state from arbitrary implementations (used by tests)
    pub fn from_parts(
        interactions: Arc<dyn InteractionRepository>,
        completions: Arc<dyn CompletionService>,
    ) -> Self {
        Self {
            interactions,
            completions,
        }
    }
}
