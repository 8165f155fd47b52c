//! Client error types

use thiserror::Error;

/// Client error type
///
/// Variants built from an error response keep the service's `message` field
/// when the body had one.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required (401)
    #[error("Authentication required")]
    Unauthorized(Option<String>),

    /// Permission denied (403)
    #[error("Permission denied: {}", display(.0))]
    Forbidden(Option<String>),

    /// Resource not found (404)
    #[error("Not found: {}", display(.0))]
    NotFound(Option<String>),

    /// Request rejected by the service (400 / 422)
    #[error("Validation error: {}", display(.0))]
    Validation(Option<String>),

    /// Any other non-2xx status
    #[error("API error {status}: {}", display(.message))]
    Api { status: u16, message: Option<String> },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn display(message: &Option<String>) -> &str {
    message.as_deref().unwrap_or("-")
}

impl ClientError {
    /// The service's own message, if it sent one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Unauthorized(m)
            | ClientError::Forbidden(m)
            | ClientError::NotFound(m)
            | ClientError::Validation(m)
            | ClientError::Api { message: m, .. } => m.as_deref(),
            ClientError::Http(_)
            | ClientError::InvalidResponse(_)
            | ClientError::Serialization(_) => None,
        }
    }

    /// Message shown on the page: the service's message, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(fallback)
            .to_string()
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Unauthorized(_))
    }

    /// Transport-level failure, the service never answered
    pub fn is_network(&self) -> bool {
        matches!(self, ClientError::Http(e) if e.is_connect() || e.is_timeout())
    }

    /// The request ran past the configured timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::Http(e) if e.is_timeout())
    }

    /// HTTP status the service answered with, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Unauthorized(_) => Some(401),
            ClientError::Forbidden(_) => Some(403),
            ClientError::NotFound(_) => Some(404),
            ClientError::Validation(_) => Some(400),
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            ClientError::InvalidResponse(_) | ClientError::Serialization(_) => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
