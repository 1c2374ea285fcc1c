// src/error.rs
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("PACIFICES_API_KEY is not set")]
    MissingApiKey,
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
    #[error("Invalid server id: {0:?}")]
    InvalidServerId(String),
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("API returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("Invalid JSON in API response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Failed to render response: {0}")]
    Render(#[source] serde_json::Error),
}
