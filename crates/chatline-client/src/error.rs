//! Error types for chatline-client

use thiserror::Error;

/// Result type alias using chatline-client Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when talking to the chat endpoint
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Endpoint answered with a non-success status
    #[error("Endpoint returned {status}: {message}")]
    Api { status: u16, message: String },

    /// Endpoint URL could not be parsed
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

impl Error {
    /// Create an API error from a status code and message
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let e = Error::api(400, "No message provided");
        assert_eq!(e.to_string(), "Endpoint returned 400: No message provided");
    }

    #[test]
    fn test_json_error_converts() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let e: Error = parse.into();
        assert!(matches!(e, Error::Json(_)));
    }
}
