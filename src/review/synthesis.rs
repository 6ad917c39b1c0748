// Cross-persona synthesis: the fourth generation call

use anyhow::{bail, Context, Result};
use std::sync::Arc;

use super::types::{NormalizedFeedback, Synthesis};
use crate::providers::{LlmProvider, Message, ProviderRequest};

/// Combines the persona feedbacks and the readability score into a short
/// summary. Runs on the cheaper model tier with a small output cap.
pub struct SummarySynthesizer {
    provider: Arc<dyn LlmProvider>,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl SummarySynthesizer {
    pub fn new(
        provider: Arc<dyn LlmProvider>,
        model: impl Into<String>,
        temperature: f32,
        max_tokens: u32,
    ) -> Self {
        Self {
            provider,
            model: model.into(),
            temperature,
            max_tokens,
        }
    }

    /// Single user message quoting every feedback under its persona label.
    pub fn build_prompt(feedbacks: &[NormalizedFeedback], readability_score: f64) -> String {
        let mut prompt = String::from(
            "Based on the following assessments of a Terms of Reference document, \
             write a summary of 3 to 5 sentences that highlights its main strengths \
             and the most important areas for improvement.\n",
        );

        for feedback in feedbacks {
            prompt.push_str(&format!(
                "\n{}:\n{}\n",
                feedback.persona.label(),
                feedback.text.trim()
            ));
        }

        prompt.push_str(&format!(
            "\nFlesch Reading Ease score: {:.2}\n\n\
             Write plain prose without headings or bullet points.",
            readability_score
        ));
        prompt
    }

    pub fn build_request(
        &self,
        feedbacks: &[NormalizedFeedback],
        readability_score: f64,
    ) -> ProviderRequest {
        ProviderRequest::new(vec![Message::user(Self::build_prompt(
            feedbacks,
            readability_score,
        ))])
        .with_model(self.model.clone())
        .with_max_tokens(self.max_tokens)
        .with_temperature(self.temperature)
    }

    pub async fn synthesize(
        &self,
        feedbacks: &[NormalizedFeedback],
        readability_score: f64,
    ) -> Result<Synthesis> {
        let request = self.build_request(feedbacks, readability_score);

        tracing::info!(model = %request.model, "requesting synthesis");

        let response = self
            .provider
            .send_message(&request)
            .await
            .context("Synthesis request failed")?;

        if response.is_empty() {
            bail!("Synthesis came back empty");
        }

        Ok(Synthesis {
            text: response.text.trim().to_string(),
        })
    }
}
