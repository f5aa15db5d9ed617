//! OpenAI-compatible chat client.
//!
//! Works with the OpenAI API and any compatible endpoint (including local
//! servers exposing a /v1 route). One-shot completions with token and
//! latency metrics.

use std::time::Instant;

use assistant_core::AssistantError;
use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use tracing::info;

/// Token counts reported by the upstream API.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenUsage {
    pub input: u32,
    pub output: u32,
}

/// The model's reply to a single chat request.
#[derive(Debug, Clone)]
pub struct ModelReply {
    pub content: String,
    pub usage: TokenUsage,
    pub elapsed_ms: u64,
}

fn llm_err(e: impl ToString) -> AssistantError {
    AssistantError::LlmError(e.to_string())
}

/// Client for OpenAI-compatible chat completion APIs.
pub struct LlmClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl LlmClient {
    /// Creates a client for the given model and optional API base URL.
    ///
    /// Without an `api_base` the standard OpenAI configuration applies and
    /// the API key is read from the environment.
    pub fn new(model: &str, api_base: Option<&str>) -> Self {
        let config = match api_base {
            Some(base) => OpenAIConfig::new().with_api_base(base).with_api_key("local"),
            None => OpenAIConfig::default(),
        };

        Self {
            client: Client::with_config(config),
            model: model.to_string(),
        }
    }

    /// Sends one system + user exchange and returns the complete reply.
    pub async fn chat(
        &self,
        system_prompt: &str,
        user_input: &str,
    ) -> Result<ModelReply, AssistantError> {
        let start = Instant::now();

        let messages = vec![
            ChatCompletionRequestMessage::System(
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(system_prompt)
                    .build()
                    .map_err(llm_err)?,
            ),
            ChatCompletionRequestMessage::User(
                ChatCompletionRequestUserMessageArgs::default()
                    .content(user_input)
                    .build()
                    .map_err(llm_err)?,
            ),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .build()
            .map_err(llm_err)?;

        let response = self.client.chat().create(request).await.map_err(llm_err)?;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        let usage = response
            .usage
            .as_ref()
            .map(|u| TokenUsage {
                input: u.prompt_tokens,
                output: u.completion_tokens,
            })
            .unwrap_or_default();

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| AssistantError::LlmError("No response content".into()))?;

        info!(
            "LLM: {}ms, tokens: {}/{} (in/out)",
            elapsed_ms, usage.input, usage.output
        );

        Ok(ModelReply {
            content,
            usage,
            elapsed_ms,
        })
    }
}
