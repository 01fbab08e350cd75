use crate::services::providers::ProviderError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Failure kinds surfaced by the generation pipeline.
///
/// Every variant collapses to the same HTTP shape at the handler boundary:
/// status 500 with an `{error}` body.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The endpoint requires a file field and the request did not carry one.
    #[error("missing required file field `{0}`")]
    MissingFile(&'static str),

    /// The upload could not be read, stored, or encoded into a content part.
    #[error("{0}")]
    Encoding(String),

    /// The backend rejected the generation call; carries its message.
    #[error("{0}")]
    Inference(String),
}

impl From<ProviderError> for PipelineError {
    fn from(err: ProviderError) -> Self {
        PipelineError::Inference(err.to_string())
    }
}

impl IntoResponse for PipelineError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            error: String,
        }

        tracing::warn!(error = %self, "generation request failed");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_maps_to_internal_server_error() {
        let errors = vec![
            PipelineError::MissingFile("image"),
            PipelineError::Encoding("failed to read uploaded file".to_string()),
            PipelineError::Inference("backend unavailable".to_string()),
        ];

        for err in errors {
            let response = err.into_response();
            assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, response.status());
        }
    }

    #[test]
    fn provider_error_message_passes_through() {
        let err: PipelineError = ProviderError::ApiError("quota exceeded".to_string()).into();
        assert_eq!("API error: quota exceeded", err.to_string());
    }

    #[test]
    fn missing_file_names_the_field() {
        let err = PipelineError::MissingFile("document");
        assert_eq!("missing required file field `document`", err.to_string());
    }
}
