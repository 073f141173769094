//! Upstream error types

use thiserror::Error;

/// Errors that can occur while talking to the departure-monitor API
///
/// Every failure category collapses into this one type; its `Display`
/// output is the message surfaced to HTTP callers.
#[derive(Debug, Error)]
pub enum TfnswError {
    /// Connection to the provider failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Provider answered with a non-success status
    #[error("Request failed: HTTP {status}")]
    RequestFailed {
        /// Status code returned by the provider
        status: u16,
    },

    /// Failed to parse the response body
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl TfnswError {
    /// Map a transport-level `reqwest` failure, distinguishing timeouts
    pub(crate) fn from_transport(err: &reqwest::Error, timeout_secs: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout { timeout_secs }
        } else {
            Self::ConnectionFailed(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TfnswError::RequestFailed { status: 503 };
        assert_eq!(err.to_string(), "Request failed: HTTP 503");

        let err = TfnswError::Timeout { timeout_secs: 10 };
        assert!(err.to_string().contains("10"));

        let err = TfnswError::ParseError("expected value at line 1".to_string());
        assert!(err.to_string().starts_with("Parse error"));
    }

    #[test]
    fn test_messages_are_never_empty() {
        let errors = [
            TfnswError::ConnectionFailed(String::new()),
            TfnswError::RequestFailed { status: 500 },
            TfnswError::ParseError(String::new()),
            TfnswError::Timeout { timeout_secs: 1 },
            TfnswError::ConfigurationError(String::new()),
        ];
        for err in errors {
            assert!(!err.to_string().is_empty());
        }
    }
}
