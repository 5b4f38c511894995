//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.

use std::fmt;

#[derive(Debug)]
pub enum DomainError {
    /// Database/persistence error
    Database(String),
    /// Completion service (or other upstream) error
    External(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::Database(msg) => write!(f, "Database error: {}", msg),
            DomainError::External(msg) => {
                write!(f, "Upstream completion service error: {}", msg)
            }
        }
    }
}

impl std::error::Error for DomainError {}

// Conversion from SeaORM errors (used in infrastructure layer)
impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Database(e.to_string())
    }
}

// Transport-level failures from the completion client
impl From<reqwest::Error> for DomainError {
    fn from(e: reqwest::Error) -> Self {
        DomainError::External(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_error_mentions_upstream() {
        let err = DomainError::External("HTTP 503".to_string());
        assert_eq!(
            err.to_string(),
            "Upstream completion service error: HTTP 503"
        );
    }

    #[test]
    fn db_err_maps_to_database_variant() {
        let err: DomainError = sea_orm::DbErr::Custom("disk I/O error".to_string()).into();
        assert!(matches!(err, DomainError::Database(ref m) if m.contains("disk I/O error")));
    }
}
