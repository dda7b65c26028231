//! Error type shared by the outbound HTTP clients.

use thiserror::Error;

/// API client errors
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Image upload failed ({status}): {body}")]
    Upload { status: u16, body: String },
    #[error("Server returned error: {0}")]
    Server(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Authentication required")]
    MissingToken,
}
