//! Language-model completion providers.
//!
//! The plan parser never talks HTTP itself. It builds a [`CompletionRequest`]
//! and hands it to a [`CompletionProvider`]; the provider owns transport,
//! authentication and the retry loop, and returns the raw generated text.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

pub mod http;

pub use http::HttpCompletionProvider;

/// Errors raised by completion providers once retries are exhausted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompletionError {
    /// The provider could not be set up (bad URL, TLS backend, ...)
    #[error("provider misconfigured: {0}")]
    Misconfiguration(String),
    /// Network failure or unreadable response
    #[error("transport error: {0}")]
    Transport(String),
    /// 401/403 from the provider
    #[error("authentication failed: {0}")]
    ProviderAuth(String),
    /// 429 from the provider
    #[error("rate limited: {0}")]
    ProviderQuota(String),
    /// 5xx from the provider
    #[error("provider outage: {0}")]
    ProviderOutage(String),
}

/// Speaker of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Everything a provider needs for one completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    /// Model identifier, e.g. `anthropic/claude-haiku-4-5-20251001`
    pub model: String,
    /// Explicit API key; providers may fall back to their own environment
    pub api_key: Option<String>,
    /// System instruction followed by the user message
    pub messages: Vec<Message>,
    /// How many times a transient failure may be retried
    pub retries: u32,
}

/// A language-model completion backend.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Returns the generated text for `request`.
    ///
    /// # Errors
    ///
    /// Returns the last failure once `request.retries` retries are used up.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;
}
