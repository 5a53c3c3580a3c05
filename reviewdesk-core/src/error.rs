//! Error types for reviewdesk core operations

use crate::NoteField;
use thiserror::Error;

/// Validation errors raised when a draft cannot become a note.
///
/// These are recoverable: the caller surfaces them to the user and the
/// store is left untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all required fields (missing: {})", field_labels(.fields))]
    RequiredFieldsMissing { fields: Vec<NoteField> },
}

impl ValidationError {
    /// Fields the user still has to fill in.
    pub fn missing_fields(&self) -> &[NoteField] {
        match self {
            Self::RequiredFieldsMissing { fields } => fields,
        }
    }
}

fn field_labels(fields: &[NoteField]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, ValidationError>;

// =============================================================================
// TESTS
// =============================================================================
