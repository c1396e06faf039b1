//! Text-generation advisor client
//!
//! Calls a chat-completions endpoint with the ranking prompt. The call
//! is configured with a low temperature to reduce run-to-run variance,
//! but the reply remains advisory free text; parsing and grounding
//! happen in the matching domain.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use domain_matching::{MatchAdvisor, MatchError};

use crate::error::ExternalError;

/// Advisor service configuration
#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    /// Chat-completions endpoint
    pub api_url: String,
    /// Bearer token for the generation service
    pub api_key: String,
    /// Model identifier
    pub model: String,
    /// Sampling temperature; kept low for consistency
    pub temperature: f32,
    /// Reply token cap
    pub max_tokens: u32,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.openai.com/v1/chat/completions".to_string(),
            api_key: String::new(),
            model: "gpt-4".to_string(),
            temperature: 0.3,
            max_tokens: 500,
            timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: Option<String>,
}

/// HTTP client for the chat-completions advisor
#[derive(Debug, Clone)]
pub struct ChatCompletionAdvisor {
    http: Client,
    config: AdvisorConfig,
}

impl ChatCompletionAdvisor {
    pub fn new(config: AdvisorConfig) -> Result<Self, ExternalError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ExternalError::ClientBuild(e.to_string()))?;
        Ok(Self { http, config })
    }

    async fn complete(&self, prompt: &str) -> Result<String, ExternalError> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let response = self
            .http
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ExternalError::Status { status, body });
        }

        let reply: ChatResponse = response.json().await?;
        let content = reply
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(ExternalError::EmptyReply)?;

        debug!(reply_len = content.len(), "advisor replied");
        Ok(content)
    }
}

#[async_trait]
impl MatchAdvisor for ChatCompletionAdvisor {
    async fn best_match_reply(&self, prompt: &str) -> Result<String, MatchError> {
        self.complete(prompt).await.map_err(MatchError::advisor)
    }
}
