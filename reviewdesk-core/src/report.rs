//! Report status tracking.

use serde::{Deserialize, Serialize};

/// Status of the single report request.
///
/// `Idle` is the initial state and is restored only by explicit dismissal.
/// At most one of `Generating`, `Succeeded`, `Failed` is active at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportState {
    #[default]
    Idle,
    Generating,
    Succeeded(String),
    Failed(String),
}

impl ReportState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_generating(&self) -> bool {
        matches!(self, Self::Generating)
    }

    /// Report text, if the last request succeeded.
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::Succeeded(text) => Some(text),
            _ => None,
        }
    }

    /// User-facing error message, if the last request failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Short label for status bars.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Generating => "Generating...",
            Self::Succeeded(_) => "Ready",
            Self::Failed(_) => "Failed",
        }
    }
}
