//! Core domain types, error definitions, and the responder trait.
//!
//! This crate defines the fundamental types shared across the assistant:
//! errors, the validated incoming message, the stamped reply, and the
//! strategy trait implemented by both response strategies.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Caller identifier used when a request does not name one.
pub const DEFAULT_USER: &str = "default_user";

/// Errors that can occur while producing a reply.
#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("No message provided")]
    EmptyMessage,

    #[error("LLM request failed: {0}")]
    LlmError(String),

    #[error("LLM request timed out after {0}s")]
    Timeout(u64),
}

/// A chat message that has passed validation.
///
/// Construction trims surrounding whitespace and rejects empty text, so a
/// value of this type always carries a non-empty message.
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    text: String,
    user_id: String,
}

impl IncomingMessage {
    /// Validates raw request input into a routable message.
    pub fn new(raw: &str, user_id: Option<&str>) -> Result<Self, AssistantError> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(AssistantError::EmptyMessage);
        }

        let user_id = user_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .unwrap_or(DEFAULT_USER);

        Ok(Self {
            text: text.to_string(),
            user_id: user_id.to_string(),
        })
    }

    /// The trimmed message text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The caller identifier.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }
}

/// A reply produced for a single request and discarded after sending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    pub response: String,
    pub timestamp: DateTime<Utc>,
    pub user_id: String,
}

impl Reply {
    /// Stamps a response text with the current time and the caller id.
    pub fn now(response: String, user_id: &str) -> Self {
        Self {
            response,
            timestamp: Utc::now(),
            user_id: user_id.to_string(),
        }
    }
}

/// Trait for strategies that turn a message into a response.
///
/// Implementations must be safe to call concurrently from multiple
/// simultaneous requests.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Short strategy name for logging.
    fn name(&self) -> &'static str;

    /// Produces a response for a validated message.
    async fn respond(&self, message: &IncomingMessage) -> Result<String, AssistantError>;
}
