//! Entity types: captured notes and the draft they are built from.

use crate::error::{CoreResult, ValidationError};
use crate::identity::{NoteId, Timestamp};
use serde::{Deserialize, Serialize};

// ============================================================================
// NOTE FIELDS
// ============================================================================

/// Editable fields of a note, in form order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteField {
    #[default]
    Category,
    Owner,
    Title,
    Description,
    Content,
}

impl NoteField {
    /// All fields in the order they appear on the form.
    pub const ALL: [NoteField; 5] = [
        NoteField::Category,
        NoteField::Owner,
        NoteField::Title,
        NoteField::Description,
        NoteField::Content,
    ];

    /// Human-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Category => "Direction / Function",
            Self::Owner => "Owner",
            Self::Title => "Title",
            Self::Description => "Description",
            Self::Content => "Your Notes Here",
        }
    }

    /// Description is the only optional field.
    pub fn is_required(&self) -> bool {
        !matches!(self, Self::Description)
    }

    /// Whether the form offers suggestions drawn from existing notes.
    pub fn has_suggestions(&self) -> bool {
        matches!(self, Self::Category | Self::Owner)
    }

    pub fn next(&self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(&self) -> usize {
        match self {
            Self::Category => 0,
            Self::Owner => 1,
            Self::Title => 2,
            Self::Description => 3,
            Self::Content => 4,
        }
    }
}

// ============================================================================
// NOTE
// ============================================================================

/// A captured review note.
/// Immutable once created; the only lifecycle event after creation is deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub note_id: NoteId,
    /// Direction / function / core capability the note belongs to
    pub category: String,
    pub owner: String,
    pub title: String,
    /// Optional context; may be empty
    pub description: String,
    pub content: String,
    pub created_at: Timestamp,
}

impl Note {
    /// Build a note from a draft that already passed validation.
    pub(crate) fn from_draft(draft: &NoteDraft, note_id: NoteId, created_at: Timestamp) -> Self {
        Self {
            note_id,
            category: draft.category.clone(),
            owner: draft.owner.clone(),
            title: draft.title.clone(),
            description: draft.description.clone(),
            content: draft.content.clone(),
            created_at,
        }
    }

    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }
}

// ============================================================================
// DRAFT
// ============================================================================

/// Mutable scratch record backing the note form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub category: String,
    pub owner: String,
    pub title: String,
    pub description: String,
    pub content: String,
}

impl NoteDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a single field.
    pub fn field(&self, field: NoteField) -> &str {
        match field {
            NoteField::Category => &self.category,
            NoteField::Owner => &self.owner,
            NoteField::Title => &self.title,
            NoteField::Description => &self.description,
            NoteField::Content => &self.content,
        }
    }

    /// Mutable access to a single field.
    pub fn field_mut(&mut self, field: NoteField) -> &mut String {
        match field {
            NoteField::Category => &mut self.category,
            NoteField::Owner => &mut self.owner,
            NoteField::Title => &mut self.title,
            NoteField::Description => &mut self.description,
            NoteField::Content => &mut self.content,
        }
    }

    /// Builder-style setter, mostly for tests and fixtures.
    pub fn with(mut self, field: NoteField, value: impl Into<String>) -> Self {
        *self.field_mut(field) = value.into();
        self
    }

    /// Required fields that are empty, in form order. Whitespace counts as content.
    pub fn missing_fields(&self) -> Vec<NoteField> {
        NoteField::ALL
            .iter()
            .copied()
            .filter(|f| f.is_required() && self.field(*f).is_empty())
            .collect()
    }

    pub fn validate(&self) -> CoreResult<()> {
        let fields = self.missing_fields();
        if fields.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::RequiredFieldsMissing { fields })
        }
    }

    /// Clear the per-note fields after a submission.
    /// Category and owner are kept so repeated entries for the same owner are quick.
    pub fn reset_after_submit(&mut self) {
        self.title.clear();
        self.description.clear();
        self.content.clear();
    }
}

// =============================================================================
// TESTS
// =============================================================================
