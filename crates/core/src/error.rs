//! Transport error model.
//!
//! Every remote call the client makes can fail; all of those failures
//! collapse into [`ApiError`]. The store layer only ever retains a
//! human-readable message extracted from the failure (or a fallback
//! literal), so this type stays deliberately small.

use serde_json::Value;
use thiserror::Error;

/// Result type used for all transport calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure of a remote API call.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, timeout, ...).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    ///
    /// `body` is the parsed JSON response body, when one was present.
    #[error("API error ({status})")]
    Api { status: u16, body: Option<Value> },

    /// The response arrived but could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),
}

impl ApiError {
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn api(status: u16, body: Option<Value>) -> Self {
        Self::Api { status, body }
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// The `message` field of the failure's JSON response body, if any.
    ///
    /// Only [`ApiError::Api`] failures carry a response body; network and
    /// decode failures never have a server-provided message.
    pub fn response_message(&self) -> Option<&str> {
        match self {
            Self::Api {
                body: Some(body), ..
            } => body.get("message").and_then(Value::as_str),
            _ => None,
        }
    }
}
