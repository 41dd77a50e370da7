//! Error types for the client library.
//!
//! These errors are internal plumbing: resource-client operations convert
//! every one of them into an [`Outcome::Failure`](crate::Outcome) before
//! returning, so callers only see the envelope.

use thiserror::Error;

/// Errors that can occur while talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend responded with a non-success status.
    #[error("API error: {status}")]
    Status {
        status: reqwest::StatusCode,
        body: serde_json::Value,
    },

    /// Response body could not be parsed.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors that can occur persisting or clearing session state.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading or writing the session blob failed.
    #[error("session storage error: {0}")]
    Io(#[from] std::io::Error),

    /// Session blob could not be serialized.
    #[error("session serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors that can occur constructing the client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Configuration was missing or invalid.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// The underlying HTTP client failed to build.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}
