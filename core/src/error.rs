//! Error types shared by every government data client.
//!
//! # Design
//! A non-2xx response is always surfaced as `Remote` with the raw status and
//! body, for all three clients. Local rejections (`Configuration`,
//! `InvalidQuery`) happen before any request leaves the process, so callers
//! can tell "never sent" apart from "sent and refused".

use thiserror::Error;

/// Errors returned by the client build, execute and parse steps.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The network call itself failed (DNS, refused connection, timeout).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Remote { status: u16, body: String },

    /// The client was given an invalid setting, e.g. an unknown response format.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A 2xx response body could not be decoded as JSON.
    #[error("decoding failed: {0}")]
    Decode(String),

    /// A dataset query was rejected locally before being sent.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// A payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// Writing a saved payload failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ApiError {
    /// HTTP status carried by a `Remote` error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}
