use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

use crate::models::completion::CompletionRequest;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,

    #[error("completion API did not respond within {0:?}")]
    Timeout(Duration),

    #[error("request to completion API failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("completion API returned {status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("completion API returned no content")]
    EmptyCompletion,
}

/// A text-completion capability: takes a chat-style request, returns the
/// generated text of the first choice.
#[async_trait]
pub trait Completion: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError>;
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

pub struct OpenAiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl OpenAiClient {
    pub fn new(
        api_key: Option<String>,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, CompletionError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            timeout,
        })
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn transport_error(&self, err: reqwest::Error) -> CompletionError {
        if err.is_timeout() {
            CompletionError::Timeout(self.timeout)
        } else {
            CompletionError::Http(err)
        }
    }
}

#[async_trait]
impl Completion for OpenAiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError> {
        let api_key = self.api_key.as_deref().ok_or(CompletionError::MissingApiKey)?;

        log::debug!(
            "calling {} with model {} ({} messages)",
            self.url(),
            request.model,
            request.messages.len()
        );

        let response = self
            .http
            .post(self.url())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Api {
                status,
                message: api_error_message(&body),
            });
        }

        let chat = response
            .json::<ChatResponse>()
            .await
            .map_err(|e| self.transport_error(e))?;
        chat.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(CompletionError::EmptyCompletion)
    }
}

/// Pulls `error.message` out of a provider error body, falling back to the
/// raw body.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}
