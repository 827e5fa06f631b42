//! Error types for the coffee API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the record does not exist" from "the server returned an unexpected
//! status." All other non-2xx responses land in `Http` with the raw status
//! code and body. Together with `Transport` these are the request errors;
//! everything else is a problem with the payload shape.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response: connection refused, timeout,
    /// DNS failure.
    #[error("request failed: {0}")]
    Transport(String),

    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("decode failed: {0}")]
    Decode(String),

    /// The request payload could not be serialized to JSON.
    #[error("encode failed: {0}")]
    Encode(String),

    /// A record builder was given values that break the record invariants.
    #[error("invalid record: {0}")]
    InvalidRecord(String),
}

impl ApiError {
    /// True for failures of the exchange itself rather than of its payload.
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            ApiError::Transport(_) | ApiError::NotFound | ApiError::Http { .. }
        )
    }
}
