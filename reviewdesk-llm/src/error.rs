//! Error types for text generation and report requests.

use thiserror::Error;

/// Provider-level errors. These carry the underlying cause and are only
/// ever logged; callers of the report generator see [`ReportError`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LlmError {
    #[error("Request to {provider} failed with status {status}: {message}")]
    RequestFailed {
        provider: String,
        status: u16,
        message: String,
    },

    #[error("Rate limited by {provider}, retry after {retry_after_ms}ms")]
    RateLimited {
        provider: String,
        retry_after_ms: i64,
    },

    #[error("Invalid API key for {provider}: {message}")]
    InvalidApiKey { provider: String, message: String },

    #[error("Invalid response from {provider}: {reason}")]
    InvalidResponse { provider: String, reason: String },

    #[error("Transport error talking to {provider}: {reason}")]
    Transport { provider: String, reason: String },
}

/// Result type alias for provider operations.
pub type LlmResult<T> = Result<T, LlmError>;

/// Errors surfaced to whoever requested a report.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReportError {
    /// The credential is not configured. No network access was attempted.
    #[error("{message}")]
    Configuration { message: String },

    /// Any transport or service failure, normalized. The cause is logged.
    #[error("Failed to communicate with the AI service.")]
    Service,

    /// Another report request already holds the slot.
    #[error("A report is already being generated.")]
    Busy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_error_display_request_failed() {
        let err = LlmError::RequestFailed {
            provider: "gemini".to_string(),
            status: 500,
            message: "internal".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("gemini"));
        assert!(msg.contains("500"));
        assert!(msg.contains("internal"));
    }

    #[test]
    fn test_service_error_does_not_leak_cause() {
        assert_eq!(
            ReportError::Service.to_string(),
            "Failed to communicate with the AI service."
        );
    }

    #[test]
    fn test_configuration_error_displays_message() {
        let err = ReportError::Configuration {
            message: "API key is missing".to_string(),
        };
        assert_eq!(err.to_string(), "API key is missing");
    }
}
