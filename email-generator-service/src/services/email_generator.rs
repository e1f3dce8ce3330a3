//! Reply generation: turns an [`EmailRequest`] into a prompt and asks the
//! configured text provider for the reply body.

use crate::models::EmailRequest;
use crate::services::metrics;
use crate::services::providers::{GenerationParams, ProviderError, TextProvider};
use std::sync::Arc;
use std::time::Instant;

const BASE_INSTRUCTION: &str = "Generate a professional email reply for the following email content. Please don't generate a subject line.";

/// Generation service held by the HTTP layer.
pub struct EmailGenerator {
    provider: Arc<dyn TextProvider>,
    params: GenerationParams,
}

impl EmailGenerator {
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self {
            provider,
            params: GenerationParams::default(),
        }
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    pub fn provider(&self) -> &Arc<dyn TextProvider> {
        &self.provider
    }

    /// Generate a reply for the request. The provider's text is returned as is.
    #[tracing::instrument(skip(self, request), fields(provider = self.provider.name(), tone = %request.tone))]
    pub async fn generate_email_reply(&self, request: &EmailRequest) -> Result<String, ProviderError> {
        let prompt = build_prompt(request);
        let started = Instant::now();

        let result = self
            .provider
            .generate(&prompt, &self.params)
            .await
            .and_then(|response| response.text.ok_or(ProviderError::EmptyResponse));

        metrics::record_generation(self.provider.name(), &result, started.elapsed());

        match &result {
            Ok(reply) => tracing::info!(
                prompt_len = prompt.len(),
                reply_len = reply.len(),
                "Generated email reply"
            ),
            Err(e) => tracing::error!(
                error = %e,
                error_kind = e.kind(),
                "Email reply generation failed"
            ),
        }

        result
    }
}

/// Build the instruction sent to the text provider.
pub fn build_prompt(request: &EmailRequest) -> String {
    let mut prompt = String::from(BASE_INSTRUCTION);

    if let Some(tone) = request.tone() {
        prompt.push_str(" Use a ");
        prompt.push_str(tone);
        prompt.push_str(" tone.");
    }

    prompt.push_str("\nOriginal email: \n");
    prompt.push_str(&request.email_content);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::providers::MockTextProvider;

    #[test]
    fn prompt_includes_tone_and_content() {
        let prompt = build_prompt(&EmailRequest::new("Hi team, any update?", "friendly"));

        assert!(prompt.starts_with(BASE_INSTRUCTION));
        assert!(prompt.contains("Use a friendly tone."));
        assert!(prompt.ends_with("\nOriginal email: \nHi team, any update?"));
    }

    #[test]
    fn prompt_skips_blank_tone() {
        let prompt = build_prompt(&EmailRequest::new("Hello", "  "));
        assert!(!prompt.contains("tone."));
        assert_eq!(
            prompt,
            format!("{}\nOriginal email: \nHello", BASE_INSTRUCTION)
        );
    }

    #[test]
    fn prompt_handles_empty_request() {
        let prompt = build_prompt(&EmailRequest::default());
        assert!(prompt.ends_with("Original email: \n"));
    }

    #[tokio::test]
    async fn reply_is_passed_through_untouched() {
        let reply = "  Sure thing!\n\nBest,\nSam  ";
        let generator = EmailGenerator::new(Arc::new(MockTextProvider::fixed(reply)));

        let out = generator
            .generate_email_reply(&EmailRequest::new("ping", "friendly"))
            .await
            .unwrap();
        assert_eq!(out, reply);
    }

    #[tokio::test]
    async fn provider_receives_built_prompt() {
        let provider = Arc::new(MockTextProvider::echo());
        let generator = EmailGenerator::new(provider.clone());
        let request = EmailRequest::new("Can we move the call?", "apologetic");

        generator.generate_email_reply(&request).await.unwrap();
        assert_eq!(provider.last_prompt(), Some(build_prompt(&request)));
    }

    #[tokio::test]
    async fn provider_failure_is_returned() {
        let generator = EmailGenerator::new(Arc::new(MockTextProvider::failing("quota")));
        let err = generator
            .generate_email_reply(&EmailRequest::new("x", "y"))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::ApiError(_)));
    }
}
