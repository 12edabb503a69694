//! OpenAI-compatible HTTP completion provider.
//!
//! Talks to any `/chat/completions` endpoint that follows the OpenAI wire
//! format. The default endpoint is OpenRouter, whose `vendor/model` ids match
//! the model identifiers smelt is configured with.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use super::{CompletionError, CompletionProvider, CompletionRequest, Message};

/// Default OpenRouter API endpoint
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Environment variable consulted when a request carries no API key
const DEFAULT_API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// Connect timeout (30 seconds)
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Initial backoff duration for retries (1 second)
const INITIAL_BACKOFF: Duration = Duration::from_secs(1);

/// Completion provider backed by an HTTP chat-completions endpoint.
#[derive(Debug, Clone)]
pub struct HttpCompletionProvider {
    client: Client,
    base_url: String,
    backoff: Duration,
}

impl HttpCompletionProvider {
    /// Create a provider posting to `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `CompletionError::Misconfiguration` if the HTTP client cannot
    /// be constructed
    pub fn new(base_url: impl Into<String>) -> Result<Self, CompletionError> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| {
                CompletionError::Misconfiguration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            backoff: INITIAL_BACKOFF,
        })
    }

    /// Override the base backoff between attempts. Attempt `n` waits
    /// `n * backoff`.
    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    fn api_key(request: &CompletionRequest) -> Option<String> {
        request
            .api_key
            .clone()
            .or_else(|| std::env::var(DEFAULT_API_KEY_ENV).ok())
            .filter(|key| !key.is_empty())
    }
}

#[async_trait]
impl CompletionProvider for HttpCompletionProvider {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let body = ChatRequest {
            model: &request.model,
            messages: &request.messages,
            temperature: 0.0,
            stream: false,
        };

        let mut builder = self.client.post(&self.base_url).json(&body);
        if let Some(key) = Self::api_key(request) {
            builder = builder.bearer_auth(key);
        }

        let max_attempts = request.retries.saturating_add(1);
        let mut attempt = 0;

        loop {
            attempt += 1;
            debug!(
                "Requesting completion from {} (model {}, attempt {attempt}/{max_attempts})",
                self.base_url, request.model
            );

            let pending = builder.try_clone().ok_or_else(|| {
                CompletionError::Transport("Failed to clone request for retry".to_string())
            })?;

            let error = match pending.send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        let body: ChatResponse = response.json().await.map_err(|e| {
                            CompletionError::Transport(format!("Failed to parse response: {e}"))
                        })?;
                        return Ok(body.into_content());
                    }

                    let error = map_status(status);
                    if !is_retryable(status) {
                        return Err(error);
                    }
                    error
                }
                Err(e) => CompletionError::Transport(e.to_string()),
            };

            if attempt >= max_attempts {
                return Err(error);
            }

            warn!("Completion attempt {attempt} failed, will retry: {error}");
            tokio::time::sleep(self.backoff * attempt).await;
        }
    }
}

fn is_retryable(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

/// Map non-success status codes to CompletionError variants
fn map_status(status: StatusCode) -> CompletionError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            CompletionError::ProviderAuth(status.to_string())
        }
        StatusCode::TOO_MANY_REQUESTS => CompletionError::ProviderQuota(status.to_string()),
        s if s.is_server_error() => CompletionError::ProviderOutage(s.to_string()),
        s => CompletionError::Transport(format!("unexpected status {s}")),
    }
}

/// OpenAI-compatible request body
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f32,
    stream: bool,
}

/// OpenAI-compatible response body
#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl ChatResponse {
    /// Text of the first choice; an absent message reads as empty text.
    fn into_content(self) -> String {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default()
    }
}
