//! Request and response bodies exchanged with the backend

use serde::{Deserialize, Serialize};
use std::fmt;

/// Answer of `POST /api/{admin,doctor}/login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Body of an error response
///
/// The backend usually answers `{"success": false, "message": "..."}` but
/// proxies in front of it may return plain text, so the raw text is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub message: Option<String>,
    pub raw: String,
}

impl ErrorBody {
    /// Pull `message` out of a JSON body when there is one
    #[must_use]
    pub fn parse(raw: String) -> Self {
        #[derive(Deserialize)]
        struct Envelope {
            message: Option<String>,
        }

        let message = serde_json::from_str::<Envelope>(&raw)
            .ok()
            .and_then(|envelope| envelope.message)
            .filter(|message| !message.trim().is_empty());

        Self { message, raw }
    }
}

impl fmt::Display for ErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => f.write_str(message),
            None => f.write_str(&self.raw),
        }
    }
}
