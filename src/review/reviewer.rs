// Persona review: one framed generation request per persona

use anyhow::{bail, Context, Result};
use std::sync::Arc;

use super::types::RawFeedback;
use crate::config::Persona;
use crate::input::DocumentText;
use crate::providers::{LlmProvider, Message, ProviderRequest};

/// Issues a single review request for a persona against a document.
///
/// The provider is injected so that tests (and alternative backends) can stand
/// in for the HTTP client.
pub struct PersonaReviewer {
    provider: Arc<dyn LlmProvider>,
    model: String,
    temperature: f32,
}

impl PersonaReviewer {
    pub fn new(provider: Arc<dyn LlmProvider>, model: impl Into<String>, temperature: f32) -> Self {
        Self {
            provider,
            model: model.into(),
            temperature,
        }
    }

    /// Build the two-message conversation for `persona`: system framing, then
    /// the rubric or question set with the document embedded verbatim.
    pub fn build_request(&self, persona: &Persona, document: &DocumentText) -> ProviderRequest {
        ProviderRequest::new(vec![
            Message::system(persona.system_prompt.clone()),
            Message::user(persona.to_user_message(document.as_str())),
        ])
        .with_model(self.model.clone())
        .with_max_tokens(persona.max_tokens)
        .with_temperature(self.temperature)
    }

    /// Run the review. The generated text is returned unmodified.
    pub async fn review(&self, persona: &Persona, document: &DocumentText) -> Result<RawFeedback> {
        let request = self.build_request(persona, document);

        tracing::info!(
            persona = %persona.kind,
            model = %request.model,
            max_tokens = request.max_tokens,
            "requesting persona review"
        );

        let response = self
            .provider
            .send_message(&request)
            .await
            .with_context(|| format!("{} review request failed", persona.name))?;

        if response.is_empty() {
            bail!("{} review came back empty", persona.name);
        }

        tracing::debug!(
            persona = %persona.kind,
            chars = response.text.len(),
            stop_reason = response.stop_reason.as_deref().unwrap_or("none"),
            "persona review received"
        );

        Ok(RawFeedback {
            persona: persona.kind,
            text: response.text,
        })
    }
}
