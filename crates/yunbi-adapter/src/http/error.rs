/*
[INPUT]:  Error sources (method validation, credentials, transport, JSON decoding)
[OUTPUT]: Structured error type for every client operation
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::Method;
use thiserror::Error;

/// Main error type for the Yunbi adapter
#[derive(Error, Debug)]
pub enum YunbiError {
    /// Dispatcher asked for a verb other than GET or POST
    #[error("Unknown method {0}")]
    InvalidMethod(Method),

    /// Private endpoint called on a client built without credentials
    #[error("Private API, access_key and secret_key required")]
    AuthenticationRequired,

    /// Network-level failure (connect, timeout, DNS, TLS, body read)
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body is not valid JSON
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Client could not be constructed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl YunbiError {
    /// Check if error indicates missing credentials
    pub fn is_auth_error(&self) -> bool {
        matches!(self, YunbiError::AuthenticationRequired)
    }

    /// Check if error came from the network layer
    pub fn is_transport_error(&self) -> bool {
        matches!(self, YunbiError::Transport(_))
    }
}

/// Result type alias for Yunbi operations
pub type Result<T> = std::result::Result<T, YunbiError>;
