//! Generation endpoints.
//!
//! All four handlers share one shape: receive the request, turn any upload
//! into an inline content part, dispatch prompt-then-part to the backend,
//! and map the outcome to `{output}` or `{error}`. The transient upload is
//! owned by a [`TransientFile`] guard, so it is removed on every exit path.

use crate::dtos::{GenerateResponse, GenerateTextRequest};
use crate::error::PipelineError;
use crate::services::encoder;
use crate::services::providers::ContentPart;
use crate::services::{TransientFile, TransientStore};
use crate::startup::AppState;
use axum::{
    extract::{Multipart, State},
    Json,
};

/// Media type attached to image uploads regardless of what the client
/// declared.
const IMAGE_MEDIA_TYPE: &str = "image/png";

const DEFAULT_DOCUMENT_PROMPT: &str = "Analyse the following document:";
const DEFAULT_AUDIO_PROMPT: &str = "Transcribe or analyse the following audio:";

pub async fn generate_text(
    State(state): State<AppState>,
    Json(request): Json<GenerateTextRequest>,
) -> Result<Json<GenerateResponse>, PipelineError> {
    let parts = vec![ContentPart::text(request.prompt)];
    let output = state.provider.generate(&parts).await?;

    Ok(Json(GenerateResponse { output }))
}

pub async fn generate_from_image(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<GenerateResponse>, PipelineError> {
    let upload = receive_upload(&state.store, multipart, "image").await?;
    let file = upload.file.ok_or(PipelineError::MissingFile("image"))?;
    let prompt = upload.prompt.unwrap_or_default();

    let image = encoder::inline_part(file.path(), IMAGE_MEDIA_TYPE).await?;
    let parts = vec![ContentPart::text(prompt), image];
    let output = state.provider.generate(&parts).await?;

    Ok(Json(GenerateResponse { output }))
}

pub async fn generate_from_document(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<GenerateResponse>, PipelineError> {
    let upload = receive_upload(&state.store, multipart, "document").await?;
    let file = upload.file.ok_or(PipelineError::MissingFile("document"))?;
    let prompt = upload
        .prompt
        .unwrap_or_else(|| DEFAULT_DOCUMENT_PROMPT.to_string());

    let document = encoder::inline_part(file.path(), file.media_type()).await?;
    let parts = vec![ContentPart::text(prompt), document];
    let output = state.provider.generate(&parts).await?;

    Ok(Json(GenerateResponse { output }))
}

pub async fn generate_from_audio(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<GenerateResponse>, PipelineError> {
    let upload = receive_upload(&state.store, multipart, "audio").await?;
    let file = upload.file.ok_or(PipelineError::MissingFile("audio"))?;
    let prompt = upload
        .prompt
        .unwrap_or_else(|| DEFAULT_AUDIO_PROMPT.to_string());

    let audio = encoder::inline_part(file.path(), file.media_type()).await?;
    let parts = vec![ContentPart::text(prompt), audio];
    let output = state.provider.generate(&parts).await?;

    Ok(Json(GenerateResponse { output }))
}

struct ReceivedUpload {
    file: Option<TransientFile>,
    prompt: Option<String>,
}

/// Drain the multipart body, storing the named file field in transient
/// storage and capturing the optional `prompt` text field.
///
/// The uploaded media type is not validated against the endpoint's expected
/// kind; whatever the client declares is forwarded as-is.
async fn receive_upload(
    store: &TransientStore,
    mut multipart: Multipart,
    file_field: &'static str,
) -> Result<ReceivedUpload, PipelineError> {
    let mut file = None;
    let mut prompt = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| PipelineError::Encoding(format!("failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();

        if name == file_field {
            let media_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| PipelineError::Encoding(format!("failed to read file bytes: {}", e)))?;

            file = Some(store.store(data.to_vec(), media_type).await?);
        } else if name == "prompt" {
            prompt = Some(field.text().await.map_err(|e| {
                PipelineError::Encoding(format!("failed to read prompt field: {}", e))
            })?);
        }
    }

    Ok(ReceivedUpload { file, prompt })
}
