use reqwest::StatusCode;
use thiserror::Error;

/// Message shown when no response body is available at all.
pub const NETWORK_ERROR_MESSAGE: &str = "Network Error";

/// Message shown when a successful response cannot be decoded.
pub const INVALID_RESPONSE_MESSAGE: &str = "Invalid response from server";

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

/// Failure returned by every gateway call.
///
/// The variant keeps the original cause so callers can branch on it, while
/// [`ApiError::user_message`] collapses all of them into one line of text
/// suitable for a notification.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed with status {status}: {}", truncate_body(.body))]
    Status {
        status: StatusCode,
        message: String,
        body: String,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Login rejected: {message}")]
    Rejected { message: String },

    #[error("Failed to save credential: {0}")]
    Storage(String),
}

/// Truncate a response body to avoid logging excessive data
fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY_LENGTH {
        return body.to_string();
    }
    let mut end = MAX_ERROR_BODY_LENGTH;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... (truncated, {} total bytes)", &body[..end], body.len())
}

/// Pull a human-readable message out of a response body.
///
/// Order: a string body, then a string `message` field on an object.
/// Returns `None` for an empty body or a structured body with no message.
pub fn extract_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::String(s)) => Some(s),
        Ok(serde_json::Value::Object(map)) => map
            .get("message")
            .and_then(|m| m.as_str())
            .filter(|m| !m.is_empty())
            .map(str::to_string),
        Ok(_) => None,
        // Not JSON at all: the body is plain text
        Err(_) => Some(trimmed.to_string()),
    }
}

impl ApiError {
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let message = extract_message(body).unwrap_or_else(|| {
            if body.trim().is_empty() {
                NETWORK_ERROR_MESSAGE.to_string()
            } else {
                format!("Request failed with status {}", status.as_u16())
            }
        });
        ApiError::Status {
            status,
            message,
            body: body.to_string(),
        }
    }

    /// Text for the user-visible notification.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { message, .. } => message.clone(),
            ApiError::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
            ApiError::Decode { .. } => INVALID_RESPONSE_MESSAGE.to_string(),
            ApiError::Rejected { message } => message.clone(),
            ApiError::Storage(_) => "Failed to save credential".to_string(),
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Network(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}
