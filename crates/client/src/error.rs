//! Errors surfaced by the API client.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when calling the marketplace API.
///
/// Failures propagate unchanged to the caller; nothing here is retried.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure (connection refused, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API error: {status} - {message}")]
    Api {
        status: StatusCode,
        /// `message` field of the error body, or the raw body text.
        message: String,
        /// The error body exactly as the server sent it, when it was JSON.
        body: Option<serde_json::Value>,
    },

    /// The server could not be reached at all.
    #[error("{0}")]
    Unreachable(String),

    /// The response body did not have the expected shape.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A header value could not be encoded.
    #[error("Invalid header {name}: {reason}")]
    InvalidHeader { name: String, reason: String },
}

impl ApiError {
    /// HTTP status of an API error, if the server responded.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status(),
            _ => None,
        }
    }

    /// Whether this error is a 404 from the API.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Build an API error from a status and the raw response body.
    pub(crate) fn from_response_body(status: StatusCode, text: &str) -> Self {
        let body = serde_json::from_str::<serde_json::Value>(text).ok();
        let message = body
            .as_ref()
            .and_then(extract_message)
            .unwrap_or_else(|| {
                if text.is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string()
                } else {
                    text.chars().take(200).collect()
                }
            });

        Self::Api {
            status,
            message,
            body,
        }
    }
}

/// Pull a human-readable message out of an error body.
///
/// The API uses `message` as a string or, for validation failures, an array
/// of strings.
fn extract_message(body: &serde_json::Value) -> Option<String> {
    match body.get("message")? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Array(items) => {
            let parts: Vec<&str> = items.iter().filter_map(serde_json::Value::as_str).collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        _ => None,
    }
}
