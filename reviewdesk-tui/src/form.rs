//! Note capture form state.
//!
//! Wraps a [`NoteDraft`] with the active field and the suggestion cursor.
//! Category and owner offer completions drawn from values already captured.

use reviewdesk_core::{NoteDraft, NoteField, NoteStore};

#[derive(Debug, Clone, Default)]
pub struct NoteForm {
    pub draft: NoteDraft,
    pub active: NoteField,
    /// Highlighted entry in the current suggestion list
    pub suggestion: Option<usize>,
}

impl NoteForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: NoteField) -> &str {
        self.draft.field(field)
    }

    pub fn next_field(&mut self) {
        self.active = self.active.next();
        self.suggestion = None;
    }

    pub fn prev_field(&mut self) {
        self.active = self.active.previous();
        self.suggestion = None;
    }

    pub fn insert(&mut self, c: char) {
        self.draft.field_mut(self.active).push(c);
        self.suggestion = None;
    }

    pub fn backspace(&mut self) {
        self.draft.field_mut(self.active).pop();
        self.suggestion = None;
    }

    pub fn clear_field(&mut self) {
        self.draft.field_mut(self.active).clear();
        self.suggestion = None;
    }

    /// Completions for the active field: previously captured values that start
    /// with the current input (case-insensitive), excluding an exact match.
    pub fn suggestions(&self, store: &NoteStore) -> Vec<String> {
        if !self.active.has_suggestions() {
            return Vec::new();
        }
        let source = if self.active == NoteField::Category {
            store.distinct_categories()
        } else {
            store.distinct_owners()
        };
        let typed = self.value(self.active).trim().to_lowercase();
        source
            .into_iter()
            .filter(|candidate| {
                let lower = candidate.to_lowercase();
                lower.starts_with(&typed) && lower != typed
            })
            .collect()
    }

    pub fn suggestion_next(&mut self, store: &NoteStore) {
        let count = self.suggestions(store).len();
        if count == 0 {
            self.suggestion = None;
            return;
        }
        self.suggestion = Some(match self.suggestion {
            Some(index) => (index + 1) % count,
            None => 0,
        });
    }

    pub fn suggestion_prev(&mut self, store: &NoteStore) {
        let count = self.suggestions(store).len();
        if count == 0 {
            self.suggestion = None;
            return;
        }
        self.suggestion = Some(match self.suggestion {
            Some(0) | None => count - 1,
            Some(index) => index - 1,
        });
    }

    /// Replace the active field with the highlighted suggestion.
    /// Returns false when nothing was highlighted.
    pub fn accept_suggestion(&mut self, store: &NoteStore) -> bool {
        let Some(index) = self.suggestion else {
            return false;
        };
        let Some(choice) = self.suggestions(store).into_iter().nth(index) else {
            self.suggestion = None;
            return false;
        };
        *self.draft.field_mut(self.active) = choice;
        self.suggestion = None;
        true
    }

    /// Enter key: accept a highlighted suggestion, add a line break in the
    /// notes body, otherwise advance to the next field.
    pub fn confirm(&mut self, store: &NoteStore) {
        if self.accept_suggestion(store) {
            return;
        }
        if self.active == NoteField::Content {
            self.insert('\n');
        } else {
            self.next_field();
        }
    }

    /// Clear per-note fields after a successful save; category and owner stay.
    pub fn reset_after_submit(&mut self) {
        self.draft.reset_after_submit();
        self.active = NoteField::Title;
        self.suggestion = None;
    }
}
