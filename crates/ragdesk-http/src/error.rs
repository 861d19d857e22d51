//! Gateway error types

use reqwest::StatusCode;
use thiserror::Error;

/// Result type for gateway operations
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Display message for a response that did not come from the project backend.
pub const PROTOCOL_MISMATCH_MESSAGE: &str = "Not an API of this system";

/// Fallback when a business failure carries no `status_message`.
pub const BUSINESS_FALLBACK_MESSAGE: &str = "Error";

/// Gateway errors
///
/// Three rejection causes are distinguishable: a well-formed envelope with a
/// non-success business code, a response that does not match the backend
/// contract at all, and a transport-level failure.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The backend understood the request but reports a business failure;
    /// the message is the envelope's `status_message`
    #[error("{message}")]
    Business { message: String },

    /// Response lacks the envelope shape and the transport status is not
    /// success: wrong backend or misconfiguration
    #[error("Not an API of this system")]
    ProtocolMismatch,

    /// HTTP-level failure with a known status code
    #[error("{message}")]
    Status { status: StatusCode, message: String },

    /// Network-level failure before any HTTP status exists
    #[error("Network request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Typed decoding of a response payload failed
    #[error("Payload decoding failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Client construction error
    #[error("Failed to build gateway: {0}")]
    Build(String),
}

impl GatewayError {
    /// The human-readable message surfaced to the notification sink
    pub fn display_message(&self) -> String {
        self.to_string()
    }
}

/// Fixed mapping of HTTP status codes to display messages.
///
/// Any code outside this table keeps the transport's own message.
pub fn status_message(status: StatusCode) -> Option<&'static str> {
    let message = match status.as_u16() {
        400 => "Bad request",
        403 => "Access denied",
        404 => "Resource not found",
        408 => "Request timed out",
        500 => "Internal server error",
        501 => "Not implemented",
        502 => "Bad gateway",
        503 => "Service unavailable",
        504 => "Gateway timeout",
        505 => "HTTP version not supported",
        _ => return None,
    };
    Some(message)
}
