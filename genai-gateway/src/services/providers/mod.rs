//! Generative backend abstractions and implementations.
//!
//! The gateway talks to its backend through the [`GenerativeProvider`]
//! trait, constructed once at startup and shared read-only across requests,
//! so tests can substitute a fake backend.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// One unit of a generation request: plain text, or a base64 payload
/// tagged with a media type. Serializes to the backend's wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentPart {
    Text { text: String },
    Inline { inline_data: InlineData },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

impl ContentPart {
    pub fn text(text: impl Into<String>) -> Self {
        ContentPart::Text { text: text.into() }
    }

    pub fn inline(data: impl Into<String>, media_type: impl Into<String>) -> Self {
        ContentPart::Inline {
            inline_data: InlineData {
                mime_type: media_type.into(),
                data: data.into(),
            },
        }
    }
}

/// Trait for generative inference backends.
#[async_trait]
pub trait GenerativeProvider: Send + Sync {
    /// Dispatch the ordered part sequence and return the generated text.
    ///
    /// A failed call is surfaced immediately; the gateway never retries.
    async fn generate(&self, parts: &[ContentPart]) -> Result<String, ProviderError>;

    /// Health check.
    async fn health_check(&self) -> Result<(), ProviderError>;
}
