//! Text-generation provider implementations
//!
//! This module contains concrete implementations of the [`TextGenerator`]
//! trait for hosted model services.
//!
//! [`TextGenerator`]: crate::TextGenerator

pub mod gemini;

pub use gemini::GeminiClient;

use crate::error::LlmError;

pub(crate) fn request_failed(provider: &str, status: u16, message: impl Into<String>) -> LlmError {
    LlmError::RequestFailed {
        provider: provider.to_string(),
        status,
        message: message.into(),
    }
}

pub(crate) fn rate_limited(provider: &str, retry_after_ms: i64) -> LlmError {
    LlmError::RateLimited {
        provider: provider.to_string(),
        retry_after_ms,
    }
}

pub(crate) fn invalid_api_key(provider: &str, message: impl Into<String>) -> LlmError {
    LlmError::InvalidApiKey {
        provider: provider.to_string(),
        message: message.into(),
    }
}

pub(crate) fn invalid_response(provider: &str, reason: impl Into<String>) -> LlmError {
    LlmError::InvalidResponse {
        provider: provider.to_string(),
        reason: reason.into(),
    }
}

pub(crate) fn transport_failed(provider: &str, reason: impl Into<String>) -> LlmError {
    LlmError::Transport {
        provider: provider.to_string(),
        reason: reason.into(),
    }
}
