//! Chat-completion client
//!
//! [`CompletionBackend`] is the seam between the prompt logic and the
//! network. [`OpenAiClient`] speaks the OpenAI-compatible
//! `/chat/completions` protocol over reqwest; tests substitute an in-memory
//! backend.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::config::AiConfig;
use crate::error::{CasherError, CasherResult};

/// One message of a chat prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// A prompt plus its sampling parameters; the backend supplies the model
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Anything that can turn a prompt into the model's reply text
pub trait CompletionBackend {
    fn complete(&self, prompt: &Prompt) -> impl Future<Output = CasherResult<String>> + Send;
}

// =============================================================================
// Wire types
// =============================================================================

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

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
    #[serde(default)]
    content: Option<String>,
}

impl ChatResponse {
    fn into_text(self) -> CasherResult<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| CasherError::Ai("Response contained no message".into()))
    }
}

// =============================================================================
// OpenAI client
// =============================================================================

/// Client for an OpenAI-compatible chat-completion endpoint
pub struct OpenAiClient {
    config: AiConfig,
    http: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(config: AiConfig) -> CasherResult<Self> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }
}

impl CompletionBackend for OpenAiClient {
    async fn complete(&self, prompt: &Prompt) -> CasherResult<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| CasherError::Ai("No API key configured".into()))?;

        let request = ChatRequest {
            model: &self.config.model,
            messages: &prompt.messages,
            temperature: prompt.temperature,
            max_tokens: prompt.max_tokens,
        };

        tracing::debug!(model = %self.config.model, url = %self.config.completions_url(), "sending completion request");

        let response: ChatResponse = self
            .http
            .post(self.config.completions_url())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        response.into_text()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::*;

    /// Backend that replays canned replies and records the prompts it saw
    pub struct StubBackend {
        replies: Mutex<Vec<CasherResult<String>>>,
        pub seen: Mutex<Vec<Prompt>>,
    }

    impl StubBackend {
        pub fn replying(reply: &str) -> Self {
            Self {
                replies: Mutex::new(vec![Ok(reply.to_string())]),
                seen: Mutex::new(Vec::new()),
            }
        }

        pub fn failing() -> Self {
            Self {
                replies: Mutex::new(vec![Err(CasherError::Ai("connection refused".into()))]),
                seen: Mutex::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> usize {
            self.seen.lock().unwrap().len()
        }
    }

    impl CompletionBackend for StubBackend {
        async fn complete(&self, prompt: &Prompt) -> CasherResult<String> {
            self.seen.lock().unwrap().push(prompt.clone());
            self.replies
                .lock()
                .unwrap()
                .pop()
                .unwrap_or_else(|| Err(CasherError::Ai("no reply queued".into())))
        }
    }
}
