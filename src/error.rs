//! Error types for TON API client operations.
//!
//! Every failure mode of the client maps to exactly one variant here:
//! locally rejected input, one variant per classified HTTP status family,
//! stream protocol violations, and transport failures.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TonApiError>;

// ============================================================================
// Error Types
// ============================================================================

/// Custom error type for TON API client operations.
///
/// HTTP statuses are classified as follows: 400 → [`BadRequest`],
/// 401 → [`Unauthorized`], 404 → [`NotFound`], 429 → [`RateLimited`],
/// 501 → [`NotImplemented`], 403 and the remaining 5xx family →
/// [`InternalServerError`], everything else → [`Unclassified`] with the raw
/// status preserved. Only [`RateLimited`] is ever retried.
///
/// [`BadRequest`]: TonApiError::BadRequest
/// [`Unauthorized`]: TonApiError::Unauthorized
/// [`NotFound`]: TonApiError::NotFound
/// [`RateLimited`]: TonApiError::RateLimited
/// [`NotImplemented`]: TonApiError::NotImplemented
/// [`InternalServerError`]: TonApiError::InternalServerError
/// [`Unclassified`]: TonApiError::Unclassified
#[derive(Debug, Error)]
pub enum TonApiError {
    /// Malformed address text or call arguments, rejected before any
    /// network traffic.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The server rejected the request content (HTTP 400).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The access token is missing or invalid (HTTP 401).
    #[error("Access token is missing or invalid. You can get an access token here https://tonconsole.com/")]
    Unauthorized,

    /// The requested resource or method does not exist (HTTP 404).
    #[error("Not found: {0}")]
    NotFound(String),

    /// The request was rate limited (HTTP 429). The only retryable condition.
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// The server encountered an internal error (HTTP 403/5xx).
    #[error("Internal server error: {0}")]
    InternalServerError(String),

    /// The method is not implemented by the server (HTTP 501).
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// A failure while reading or decoding a subscription stream.
    #[error("Stream error: {0}")]
    Stream(String),

    /// JSON response did not match the expected shape.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what failed to parse.
        message: String,
    },

    /// Network-related errors from HTTP requests.
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// Any status not covered by the classification table, carrying the raw
    /// server-supplied detail.
    #[error("Unexpected response (status {status}): {message}")]
    Unclassified {
        /// The raw HTTP status code.
        status: u16,
        /// The server-supplied error text, when present.
        message: String,
    },
}

impl TonApiError {
    /// Create a new invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a new parse error with the given message.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new stream error with the given message.
    #[must_use]
    pub fn stream(message: impl Into<String>) -> Self {
        Self::Stream(message.into())
    }

    /// Whether the bounded retry loop may re-attempt after this error.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited(_))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let invalid = TonApiError::invalid_input("bad address");
        assert_eq!(format!("{invalid}"), "Invalid input: bad address");

        let not_found = TonApiError::NotFound("method does not exist".to_string());
        assert_eq!(format!("{not_found}"), "Not found: method does not exist");

        let unauthorized = TonApiError::Unauthorized;
        assert!(format!("{unauthorized}").contains("tonconsole.com"));

        let unclassified = TonApiError::Unclassified {
            status: 418,
            message: "teapot".to_string(),
        };
        assert_eq!(
            format!("{unclassified}"),
            "Unexpected response (status 418): teapot"
        );
    }

    #[test]
    fn test_parse_error_creation() {
        let err = TonApiError::parse("missing field");
        match err {
            TonApiError::Parse { message } => assert_eq!(message, "missing field"),
            _ => panic!("Expected Parse variant"),
        }
    }

    #[test]
    fn test_only_rate_limited_is_retryable() {
        assert!(TonApiError::RateLimited("slow down".to_string()).is_retryable());
        assert!(!TonApiError::Unauthorized.is_retryable());
        assert!(!TonApiError::NotFound("gone".to_string()).is_retryable());
        assert!(!TonApiError::InternalServerError("boom".to_string()).is_retryable());
        assert!(!TonApiError::stream("dropped").is_retryable());
    }
}
