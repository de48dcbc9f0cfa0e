//! Client error types.

use thiserror::Error;

use crate::config::ConfigError;
use crate::response::ApiError;

/// Errors raised by the HTTP layer before any body was received
#[derive(Debug, Error)]
pub enum TransportError {
    /// reqwest failed to build, send or read the request
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Any other transport that could not deliver the request
    #[error("Connection failed: {0}")]
    Connection(String),
}

/// Errors returned by client calls.
///
/// `Api` and `InvalidResponse` map to the two ways a call can fail after
/// reaching the server; both are also recorded in the client's error
/// history. `Transport` is recorded the same way as `InvalidResponse`.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a populated `error` field
    #[error("API error: {0}")]
    Api(ApiError),

    /// The body was not valid JSON, was falsy, or did not match the expected result shape
    #[error("Invalid response: {0}")]
    InvalidResponse(ApiError),

    /// No body was received at all
    #[error("Transport error: {source}")]
    Transport {
        error: ApiError,
        #[source]
        source: TransportError,
    },

    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Build(TransportError),

    /// The request body could not be serialized
    #[error("Failed to serialize request body: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Invalid client configuration
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Writing the debug report failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// The error as recorded in the client's history, if this failure was recorded
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            ClientError::Api(e) | ClientError::InvalidResponse(e) => Some(e),
            ClientError::Transport { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Error key (`invalid_public_key_provided`, ...) if one applies
    pub fn key(&self) -> Option<&str> {
        self.api_error().map(|e| e.key.as_str())
    }

    /// True for server-reported domain errors
    pub fn is_api(&self) -> bool {
        matches!(self, ClientError::Api(_))
    }

    /// True when the response could not be used (parse failure or no response)
    pub fn is_invalid_response(&self) -> bool {
        matches!(
            self,
            ClientError::InvalidResponse(_) | ClientError::Transport { .. }
        )
    }
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
