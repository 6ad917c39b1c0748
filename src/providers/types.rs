// Provider-agnostic request/response types

use serde::{Deserialize, Serialize};

/// A single chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
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

/// One generation request: model, conversation and sampling settings
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderRequest {
    /// Model name; empty means the provider default
    pub model: String,
    pub messages: Vec<Message>,
    pub max_tokens: u32,
    pub temperature: Option<f32>,
}

impl ProviderRequest {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            model: String::new(),
            messages,
            max_tokens: 1024,
            temperature: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Content of the system message, if any
    pub fn system_prompt(&self) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == "system")
            .map(|m| m.content.as_str())
    }

    /// Content of the last user message, if any
    pub fn user_prompt(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == "user")
            .map(|m| m.content.as_str())
    }
}

/// A complete (non-streaming) generation result
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    pub id: String,
    pub model: String,
    pub text: String,
    pub stop_reason: Option<String>,
    pub provider: String,
}

impl ProviderResponse {
    /// True when the reply carries no usable text
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = ProviderRequest::new(vec![
            Message::system("frame"),
            Message::user("question"),
        ])
        .with_model("gpt-4o")
        .with_max_tokens(500)
        .with_temperature(0.7);

        assert_eq!(request.model, "gpt-4o");
        assert_eq!(request.max_tokens, 500);
        assert_eq!(request.temperature, Some(0.7));
        assert_eq!(request.system_prompt(), Some("frame"));
        assert_eq!(request.user_prompt(), Some("question"));
    }

    #[test]
    fn test_request_without_system_message() {
        let request = ProviderRequest::new(vec![Message::user("only user")]);
        assert!(request.system_prompt().is_none());
        assert!(request.model.is_empty());
    }

    #[test]
    fn test_whitespace_response_is_empty() {
        let response = ProviderResponse {
            id: "x".into(),
            model: "m".into(),
            text: " \n\t".into(),
            stop_reason: None,
            provider: "openai".into(),
        };
        assert!(response.is_empty());
    }
}
