use serde::{Deserialize, Serialize};

/// JSON body of `POST /generate-text`.
#[derive(Debug, Deserialize)]
pub struct GenerateTextRequest {
    pub prompt: String,
}

/// Success envelope shared by all generation endpoints.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub output: String,
}
