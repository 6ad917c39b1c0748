// LLM provider abstraction
//
// Reviewers and the synthesizer receive a provider as a dependency instead of
// reaching for a global client, so tests can substitute a scripted one.

use anyhow::Result;
use async_trait::async_trait;

pub mod openai;
pub mod types;

pub use openai::OpenAIProvider;
pub use types::{Message, ProviderRequest, ProviderResponse};

/// Trait for text-generation providers
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send a request and wait for the full response
    async fn send_message(&self, request: &ProviderRequest) -> Result<ProviderResponse>;

    /// Get the provider name (e.g., "openai")
    fn name(&self) -> &str;
}
