//! Repository and service trait definitions
//!
//! These traits define the contract for data access and the outbound
//! completion call. Implementations live in the infrastructure and
//! services layers.

use async_trait::async_trait;

use super::DomainError;

/// Maximum number of rows returned by the history endpoint
pub const HISTORY_LIMIT: u64 = 50;

/// One logged question/answer pair
#[derive(Debug, Clone, PartialEq)]
pub struct Interaction {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub timestamp: String,
}

/// Append-only log of interactions
#[async_trait]
pub trait InteractionRepository: Send + Sync {
    /// Insert a new row; id and timestamp are assigned by the store
    async fn append(&self, question: &str, answer: &str) -> Result<i32, DomainError>;

    /// Up to `limit` rows, newest first
    async fn recent(&self, limit: u64) -> Result<Vec<Interaction>, DomainError>;
}

/// Turns a user prompt into generated text
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, DomainError>;
}
