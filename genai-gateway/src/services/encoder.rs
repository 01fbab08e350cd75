//! Converts a stored upload into an inference-ready inline content part.

use crate::error::PipelineError;
use crate::services::providers::ContentPart;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::path::Path;

/// Read the file at `path` and wrap its bytes as a base64 inline part
/// tagged with `media_type`.
pub async fn inline_part(path: &Path, media_type: &str) -> Result<ContentPart, PipelineError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| PipelineError::Encoding(format!("failed to read uploaded file: {}", e)))?;

    Ok(ContentPart::inline(STANDARD.encode(&bytes), media_type))
}
