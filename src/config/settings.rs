// Configuration structs

use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::constants::{
    DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_REVIEW_MODEL, DEFAULT_SUMMARY_MODEL,
    DEFAULT_TEMPERATURE, REPORT_FILE_NAME, SUMMARY_MAX_TOKENS,
};

/// Runtime configuration for an assessment run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API key for the chat completions service
    #[serde(skip_serializing)]
    pub api_key: String,

    /// Base URL of the OpenAI-compatible API (no trailing slash)
    pub base_url: String,

    /// Model used for the three persona reviews
    pub review_model: String,

    /// Model used for the synthesis call
    pub summary_model: String,

    /// Sampling temperature for every call
    pub temperature: f32,

    /// Output cap for the synthesis call
    pub summary_max_tokens: u32,

    /// Timeout applied to each outbound generation request
    pub request_timeout_secs: u64,

    /// Directory the report is written into
    pub output_dir: PathBuf,

    /// Run the persona reviews concurrently instead of one after another
    pub parallel_reviews: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            review_model: DEFAULT_REVIEW_MODEL.to_string(),
            summary_model: DEFAULT_SUMMARY_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            summary_max_tokens: SUMMARY_MAX_TOKENS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            output_dir: PathBuf::from("."),
            parallel_reviews: false,
        }
    }
}

impl Config {
    /// Validate configuration and return helpful errors
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_key.trim().is_empty() {
            bail!(
                "No API key configured. Set OPENAI_API_KEY, pass --api-key, \
                 or add `api_key = \"...\"` to ~/.torqa/config.toml"
            );
        }
        if self.request_timeout_secs == 0 {
            bail!("request_timeout_secs must be greater than zero");
        }
        if self.review_model.trim().is_empty() || self.summary_model.trim().is_empty() {
            bail!("review_model and summary_model must not be empty");
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            bail!(
                "temperature must be between 0.0 and 2.0 (got {})",
                self.temperature
            );
        }
        Ok(())
    }

    /// Full path of the report file this configuration produces
    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join(REPORT_FILE_NAME)
    }
}
