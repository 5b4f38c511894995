use std::env;
use std::fmt;

use crate::services::completion::DEFAULT_COMPLETION_API_URL;

pub const API_KEY_VAR: &str = "GROQ_API_KEY";

/// Cross-origin policy applied to every route.
#[derive(Clone, Debug, PartialEq)]
pub enum CorsPolicy {
    /// Allow-all: any origin, method and header, credentials allowed.
    /// This is an open policy for browser clients, NOT a security boundary.
    AllowAll,
    /// Only the listed origins
    Origins(Vec<String>),
}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    MissingVar(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingVar(name) => {
                write!(f, "{} environment variable not set!", name)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Read once at startup, immutable afterwards
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub database_url: String,
    pub port: u16,
    pub completion_api_url: String,
    pub cors: CorsPolicy,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("database_url", &self.database_url)
            .field("port", &self.port)
            .field("completion_api_url", &self.completion_api_url)
            .field("cors", &self.cors)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var(API_KEY_VAR)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingVar(API_KEY_VAR))?;

        Ok(Self {
            api_key,
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://qna.db?mode=rwc".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            completion_api_url: env::var("COMPLETION_API_URL")
                .unwrap_or_else(|_| DEFAULT_COMPLETION_API_URL.to_string()),
            cors: env::var("CORS_ALLOWED_ORIGINS")
                .ok()
                .map(|s| {
                    s.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect::<Vec<_>>()
                })
                .filter(|origins| !origins.is_empty())
                .map(CorsPolicy::Origins)
                .unwrap_or(CorsPolicy::AllowAll),
        })
    }
}
