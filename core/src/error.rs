//! Error types for the customer API client.
//!
//! # Design
//! `NotFound` and `Conflict` get dedicated variants because the console shows
//! a specific notice for each. Every other unexpected status lands in `Server`
//! with the raw code and body. `Connection` is produced by transports, never
//! by this crate, since the core performs no I/O.

use thiserror::Error;

/// Errors returned by `CustomerClient` parse methods and by transports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound { body: String },

    /// The server returned 409 (duplicate email on create).
    #[error("conflict: {body}")]
    Conflict { body: String },

    /// The server returned a status the operation does not expect.
    #[error("HTTP {status}: {body}")]
    Server { status: u16, body: String },

    /// The request never produced a response: DNS, refused, timeout.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    /// True for failures that never produced a usable response.
    ///
    /// The console reports all of these with the same connection-error panel.
    pub fn is_connection(&self) -> bool {
        matches!(
            self,
            ApiError::Connection(_) | ApiError::Deserialization(_) | ApiError::Serialization(_)
        )
    }

    /// Status code and body for errors backed by an HTTP response.
    pub fn response(&self) -> Option<(u16, &str)> {
        match self {
            ApiError::NotFound { body } => Some((404, body)),
            ApiError::Conflict { body } => Some((409, body)),
            ApiError::Server { status, body } => Some((*status, body)),
            _ => None,
        }
    }
}
