//! OpenAI Provider - Implementation of AiProvider for OpenAI-compatible
//! chat-completion APIs.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OpenAiConfig::new(api_key)
//!     .with_model("gpt-4o-mini")
//!     .with_base_url("https://api.openai.com/v1");
//!
//! let provider = OpenAiProvider::new(config)?;
//! ```
//!
//! The analysis cycle deliberately does not retry: a failure surfaces to the
//! user immediately and the session returns to its pre-analysis state. The
//! configured timeout bounds how long the triggering control stays disabled.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::{AiConfig, ValidationError};
use crate::ports::{AiError, AiProvider, CompletionRequest, CompletionResponse, MessageRole};

/// Configuration for the OpenAI provider.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use (e.g. "gpt-4o-mini").
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl OpenAiConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gpt-4o-mini".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Builds provider configuration from the application settings.
    pub fn from_settings(settings: &AiConfig) -> Result<Self, ValidationError> {
        let api_key = settings
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(ValidationError::MissingRequired("EMOLOG__AI__API_KEY"))?;

        Ok(Self::new(api_key)
            .with_model(&settings.model)
            .with_base_url(&settings.base_url)
            .with_timeout(settings.timeout()))
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// OpenAI-compatible chat-completion provider.
pub struct OpenAiProvider {
    config: OpenAiConfig,
    client: Client,
}

impl OpenAiProvider {
    /// Creates a new provider with the given configuration.
    pub fn new(config: OpenAiConfig) -> Result<Self, AiError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AiError::InvalidRequest(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    /// Builds the chat completions endpoint URL.
    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    /// Converts the port request to the wire format.
    fn to_wire_request(&self, request: &CompletionRequest) -> ChatRequest {
        let messages = request
            .messages
            .iter()
            .map(|msg| ChatMessage {
                role: match msg.role {
                    MessageRole::System => "system",
                    MessageRole::User => "user",
                    MessageRole::Assistant => "assistant",
                }
                .to_string(),
                content: msg.content.clone(),
            })
            .collect();

        ChatRequest {
            model: self.config.model.clone(),
            messages,
            temperature: request.temperature,
        }
    }

    /// Sends the request, mapping transport failures onto AiError.
    async fn send_request(&self, request: &CompletionRequest) -> Result<Response, AiError> {
        let wire_request = self.to_wire_request(request);

        self.client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .header("Content-Type", "application/json")
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AiError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    AiError::network(format!("Connection failed: {}", e))
                } else {
                    AiError::network(e.to_string())
                }
            })
    }

    /// Maps non-success statuses onto AiError.
    async fn handle_response_status(&self, response: Response) -> Result<Response, AiError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 => Err(AiError::AuthenticationFailed),
            429 => Err(AiError::RateLimited),
            400 => Err(AiError::InvalidRequest(error_body)),
            500..=599 => Err(AiError::unavailable(format!(
                "Server error {}: {}",
                status, error_body
            ))),
            _ => Err(AiError::network(format!(
                "Unexpected status {}: {}",
                status, error_body
            ))),
        }
    }

    /// Parses the response envelope down to the first choice's content.
    async fn parse_response(&self, response: Response) -> Result<CompletionResponse, AiError> {
        let response = self.handle_response_status(response).await?;

        let wire_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| AiError::parse(format!("Failed to parse response: {}", e)))?;

        let choice = wire_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AiError::parse("No choices in response"))?;

        Ok(CompletionResponse {
            content: choice.message.content,
            model: wire_response.model,
        })
    }
}

#[async_trait]
impl AiProvider for OpenAiProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AiError> {
        tracing::debug!(
            trace_id = %request.metadata.trace_id,
            model = %self.config.model,
            "sending chat completion request"
        );

        let response = self.send_request(&request).await?;
        self.parse_response(response).await
    }
}

// ----- Wire Types -----

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    model: String,
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::RequestMetadata;

    #[test]
    fn config_builder_works() {
        let config = OpenAiConfig::new("test-key")
            .with_model("gpt-4o")
            .with_base_url("https://custom.api.com/v1")
            .with_timeout(Duration::from_secs(10));

        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.base_url, "https://custom.api.com/v1");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.api_key(), "test-key");
    }

    #[test]
    fn config_from_settings_requires_api_key() {
        let settings = AiConfig::default();
        assert!(OpenAiConfig::from_settings(&settings).is_err());

        let settings = AiConfig {
            api_key: Some("sk-test".to_string()),
            ..Default::default()
        };
        let config = OpenAiConfig::from_settings(&settings).unwrap();
        assert_eq!(config.api_key(), "sk-test");
        assert_eq!(config.model, settings.model);
    }

    #[test]
    fn completions_url_joins_base_and_path() {
        let provider =
            OpenAiProvider::new(OpenAiConfig::new("k").with_base_url("https://api.example.com/v1"))
                .unwrap();
        assert_eq!(
            provider.completions_url(),
            "https://api.example.com/v1/chat/completions"
        );
    }

    #[test]
    fn wire_request_carries_model_messages_and_temperature() {
        let provider =
            OpenAiProvider::new(OpenAiConfig::new("k").with_model("gpt-4o-mini")).unwrap();
        let request = CompletionRequest::new(RequestMetadata::new())
            .with_message(MessageRole::User, "오늘의 일기")
            .with_temperature(1.0);

        let wire = provider.to_wire_request(&request);
        let json = serde_json::to_value(&wire).unwrap();

        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "오늘의 일기");
        assert_eq!(json["temperature"], 1.0);
    }

    #[test]
    fn wire_request_omits_absent_temperature() {
        let provider = OpenAiProvider::new(OpenAiConfig::new("k")).unwrap();
        let request = CompletionRequest::new(RequestMetadata::new())
            .with_message(MessageRole::User, "테스트");

        let json = serde_json::to_value(provider.to_wire_request(&request)).unwrap();
        assert!(json.get("temperature").is_none());
    }

    #[test]
    fn response_envelope_deserializes() {
        let body = r#"{
            "model": "gpt-4o-mini",
            "choices": [
                {"message": {"role": "assistant", "content": "{\"감정\": []}"}}
            ]
        }"#;
        let parsed: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.model, "gpt-4o-mini");
        assert_eq!(parsed.choices[0].message.content, "{\"감정\": []}");
    }
}
