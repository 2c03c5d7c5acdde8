//! Common error types for Forge services

use thiserror::Error;

/// Common result type for Forge operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across Forge services
#[derive(Error, Debug)]
pub enum Error {
    /// Document failed validation against its declared schema
    #[error("Validation failed for {kind}: {detail}")]
    Validation { kind: &'static str, detail: String },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
