//! Client for an OpenAI-compatible chat-completion endpoint

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{CompletionService, DomainError};

pub const DEFAULT_COMPLETION_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const COMPLETION_MODEL: &str = "meta-llama/llama-4-scout-17b-16e-instruct";
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";
pub const TEMPERATURE: f32 = 0.5;

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Sends one request per prompt. No retries, transport-default timeouts.
pub struct ChatCompletionClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl ChatCompletionClient {
    pub fn new(api_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
        }
    }
}

#[async_trait]
impl CompletionService for ChatCompletionClient {
    async fn complete(&self, prompt: &str) -> Result<String, DomainError> {
        let payload = ChatCompletionRequest {
            model: COMPLETION_MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: TEMPERATURE,
        };

        let resp = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let snippet: String = body.chars().take(200).collect();
            return Err(DomainError::External(format!(
                "HTTP {}: {}",
                status, snippet
            )));
        }

        let parsed: ChatCompletionResponse = resp
            .json()
            .await
            .map_err(|e| DomainError::External(format!("Invalid response body: {}", e)))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| DomainError::External("Response contained no choices".to_string()))
    }
}
