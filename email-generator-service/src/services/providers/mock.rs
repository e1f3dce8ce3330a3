//! Mock provider implementation for tests and local runs without an API key.

use super::{FinishReason, GenerationParams, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use std::sync::Mutex;

/// How the mock answers.
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Reply with `Mock reply for: {prompt}`.
    Echo,
    /// Always reply with the given text.
    Fixed(String),
    /// Always fail with an API error carrying the message.
    Failing(String),
}

/// Mock text provider.
pub struct MockTextProvider {
    mode: MockMode,
    last_prompt: Mutex<Option<String>>,
}

impl MockTextProvider {
    pub fn new(mode: MockMode) -> Self {
        Self {
            mode,
            last_prompt: Mutex::new(None),
        }
    }

    pub fn echo() -> Self {
        Self::new(MockMode::Echo)
    }

    pub fn fixed(reply: impl Into<String>) -> Self {
        Self::new(MockMode::Fixed(reply.into()))
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self::new(MockMode::Failing(message.into()))
    }

    /// Prompt received by the most recent `generate` call.
    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or(None)
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn generate(
        &self,
        prompt: &str,
        _params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        if let Ok(mut last) = self.last_prompt.lock() {
            *last = Some(prompt.to_string());
        }

        let text = match &self.mode {
            MockMode::Echo => format!("Mock reply for: {}", prompt),
            MockMode::Fixed(reply) => reply.clone(),
            MockMode::Failing(message) => return Err(ProviderError::ApiError(message.clone())),
        };

        Ok(ProviderResponse {
            input_tokens: prompt.len() as i32 / 4,
            output_tokens: text.len() as i32 / 4,
            text: Some(text),
            finish_reason: FinishReason::Complete,
        })
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        match &self.mode {
            MockMode::Failing(message) => Err(ProviderError::NotConfigured(message.clone())),
            _ => Ok(()),
        }
    }
}
