//! Unified error type for the client crate.
//!
//! All accessor operations return `Result<T, ClientError>`. Network
//! failures, non-JSON bodies, and backend error envelopes are all mapped
//! here; consumers surface them as display-only notifications. Cart
//! mutations never produce errors - see `pocketmart_core::cart`.

use thiserror::Error;

/// Errors that can occur when talking to the catalog or backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connection refused, timeout, TLS, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the JSON we expected.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The backend answered with an error envelope or error status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Message from the backend, or a generic fallback.
        message: String,
    },

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// No stored session, or the backend rejected the token.
    #[error("Not signed in")]
    Unauthorized,

    /// Session storage failed.
    #[error("Session storage error: {0}")]
    Session(#[from] crate::session::SessionError),

    /// Configuration failed to load.
    #[error("Config error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Result type alias for [`ClientError`].
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ClientError::NotFound("product 123".to_string());
        assert_eq!(err.to_string(), "Not found: product 123");

        let err = ClientError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "API error (500): boom");

        assert_eq!(ClientError::Unauthorized.to_string(), "Not signed in");
    }
}
