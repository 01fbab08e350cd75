//! Mock provider implementation for testing.

use super::{ContentPart, GenerativeProvider, ProviderError};
use async_trait::async_trait;
use std::sync::Mutex;

/// Fake backend replying with a canned text or a canned failure, recording
/// every part sequence it receives.
pub struct MockProvider {
    reply: Result<String, String>,
    requests: Mutex<Vec<Vec<ContentPart>>>,
}

impl MockProvider {
    /// A provider that answers every call with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Ok(text.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A provider that rejects every call with an API error carrying
    /// `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Err(message.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Part sequences received so far, in dispatch order.
    pub fn requests(&self) -> Vec<Vec<ContentPart>> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeProvider for MockProvider {
    async fn generate(&self, parts: &[ContentPart]) -> Result<String, ProviderError> {
        self.requests.lock().unwrap().push(parts.to_vec());

        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(ProviderError::ApiError(message.clone())),
        }
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        Ok(())
    }
}
