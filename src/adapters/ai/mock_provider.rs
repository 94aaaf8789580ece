//! Mock AI Provider for testing.
//!
//! Configurable mock implementation of the AiProvider port, allowing tests
//! to run the full journaling cycle without calling a real endpoint.
//!
//! # Example
//!
//! ```ignore
//! let provider = MockAiProvider::new()
//!     .with_response(r#"{"감정":["슬픔","지침","희망"],"액션리스트":{...}}"#);
//!
//! let response = provider.complete(request).await?;
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{AiError, AiProvider, CompletionRequest, CompletionResponse};

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a successful completion with this content.
    Success { content: String },
    /// Return an error.
    Error(MockError),
}

/// Mock error types for testing failure handling.
#[derive(Debug, Clone)]
pub enum MockError {
    /// Simulate authentication failure.
    AuthenticationFailed,
    /// Simulate rate limiting.
    RateLimited,
    /// Simulate provider unavailable.
    Unavailable { message: String },
    /// Simulate network error.
    Network { message: String },
    /// Simulate timeout.
    Timeout { timeout_secs: u32 },
}

impl From<MockError> for AiError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::AuthenticationFailed => AiError::AuthenticationFailed,
            MockError::RateLimited => AiError::RateLimited,
            MockError::Unavailable { message } => AiError::unavailable(message),
            MockError::Network { message } => AiError::network(message),
            MockError::Timeout { timeout_secs } => AiError::Timeout { timeout_secs },
        }
    }
}

/// Mock provider with queued responses and call tracking.
#[derive(Debug, Clone, Default)]
pub struct MockAiProvider {
    /// Pre-configured responses (consumed in order).
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockAiProvider {
    /// Creates a mock with an empty response queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful response.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(MockResponse::Success {
                content: content.into(),
            });
        self
    }

    /// Queues an error response.
    pub fn with_error(self, error: MockError) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(MockResponse::Error(error));
        self
    }

    /// Number of completion calls received.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Copies of all received requests, in call order.
    pub fn calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AiError> {
        self.calls.lock().unwrap().push(request);

        let next = self.responses.lock().unwrap().pop_front();
        match next {
            Some(MockResponse::Success { content }) => Ok(CompletionResponse {
                content,
                model: "mock-model".to_string(),
            }),
            Some(MockResponse::Error(err)) => Err(err.into()),
            None => Err(AiError::unavailable("no mock response configured")),
        }
    }
}
