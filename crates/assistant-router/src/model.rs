//! Model-backed response strategy.
//!
//! Wraps the user message in a fixed instruction template, sends one chat
//! completion to the external model, and returns its text unmodified. The
//! call runs under a bounded timeout; failures surface as typed errors and
//! never escape as panics.

use std::time::Duration;

use assistant_core::{AssistantError, IncomingMessage, Responder};
use assistant_network::LlmClient;
use async_trait::async_trait;
use tracing::info;

use crate::prompts::ROUTE_TASK_PROMPT;

/// Delegates response generation to an external language model.
pub struct ModelResponder {
    client: LlmClient,
    timeout: Duration,
}

impl ModelResponder {
    /// Creates a responder for the given model, optional API base, and
    /// per-call timeout.
    pub fn new(model: &str, api_base: Option<&str>, timeout: Duration) -> Self {
        Self {
            client: LlmClient::new(model, api_base),
            timeout,
        }
    }
}

#[async_trait]
impl Responder for ModelResponder {
    fn name(&self) -> &'static str {
        "model"
    }

    async fn respond(&self, message: &IncomingMessage) -> Result<String, AssistantError> {
        let secs = self.timeout.as_secs();
        let reply = tokio::time::timeout(
            self.timeout,
            self.client.chat(ROUTE_TASK_PROMPT, message.text()),
        )
        .await
        .map_err(|_| AssistantError::Timeout(secs))??;

        info!("Model reply: {} chars", reply.content.len());
        Ok(reply.content)
    }
}
