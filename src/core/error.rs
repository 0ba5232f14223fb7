//! Error types for catalog operations.
//!
//! One unified error type covers the API client, the normalizer, and the
//! accessor. Localization misses and history storage problems are recovered
//! where they occur and never surface through this type.

use thiserror::Error;

/// Unified error type for catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Requested entry does not exist upstream (HTTP 404).
    #[error("Not found: {query}")]
    NotFound { query: String },

    /// Network or protocol failure talking to the upstream API.
    #[error("Upstream error: {0}")]
    Upstream(#[from] reqwest::Error),

    /// Upstream answered with a non-success status other than 404.
    #[error("API error: status {status} for {path}")]
    Api { status: u16, path: String },

    /// Payload did not match the expected endpoint schema.
    #[error("Unexpected payload: {0}")]
    Schema(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
