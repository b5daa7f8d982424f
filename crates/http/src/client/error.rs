//! Client error types

use crate::types::ErrorBody;
use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: ErrorBody },

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(ErrorBody),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(ErrorBody),

    /// Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(ErrorBody),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(ErrorBody),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create error from HTTP status code and response text
    pub fn from_status(status: reqwest::StatusCode, text: String) -> Self {
        let body = ErrorBody::parse(text);
        match status.as_u16() {
            400 => Self::BadRequest(body),
            401 => Self::AuthenticationFailed(body),
            403 => Self::Forbidden(body),
            404 => Self::NotFound(body),
            _ => Self::ServerError {
                status: status.as_u16(),
                body,
            },
        }
    }

    /// Message the backend put in its error body, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::ServerError { body, .. }
            | Self::AuthenticationFailed(body)
            | Self::BadRequest(body)
            | Self::Forbidden(body)
            | Self::NotFound(body) => body.message.as_deref(),
            Self::Request(_) | Self::Configuration(_) => None,
        }
    }
}
