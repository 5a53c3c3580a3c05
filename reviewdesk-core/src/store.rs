//! In-memory note store.
//!
//! The store exclusively owns every note for the session. Mutation goes
//! through [`NoteStore::add_note`] and [`NoteStore::delete_note`] only;
//! everything else is a read-only view.

use crate::entities::{Note, NoteDraft};
use crate::error::CoreResult;
use crate::identity::NoteId;
use chrono::Utc;
use std::collections::BTreeSet;

/// Ordered collection of notes, newest first.
#[derive(Debug, Clone, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the draft and prepend a new note built from it.
    ///
    /// # Returns
    /// * `Ok(())` - The note is now first in [`NoteStore::list_notes`]
    /// * `Err(ValidationError::RequiredFieldsMissing)` - Store unchanged
    pub fn add_note(&mut self, draft: &NoteDraft) -> CoreResult<()> {
        draft.validate()?;
        let note = Note::from_draft(draft, NoteId::now_v7(), Utc::now());
        self.notes.insert(0, note);
        Ok(())
    }

    /// Remove the note with the given id.
    /// Unknown ids are a no-op; the return value only says whether anything was removed.
    pub fn delete_note(&mut self, id: NoteId) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| n.note_id != id);
        self.notes.len() != before
    }

    /// Current notes, newest first.
    pub fn list_notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.note_id == id)
    }

    /// Owned copy of the current notes, for handing to an in-flight report call.
    pub fn snapshot(&self) -> Vec<Note> {
        self.notes.clone()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Distinct non-empty categories, ascending.
    pub fn distinct_categories(&self) -> Vec<String> {
        distinct(self.notes.iter().map(|n| n.category.as_str()))
    }

    /// Distinct non-empty owners, ascending.
    pub fn distinct_owners(&self) -> Vec<String> {
        distinct(self.notes.iter().map(|n| n.owner.as_str()))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

// ============================================================================
// UNIT TESTS
// ============================================================================


// ============================================================================
// PROPERTY-BASED TESTS
// ============================================================================

#[cfg(test)]
mod prop_tests {
    use super::*;
    use crate::NoteField;
    use proptest::prelude::*;

    fn arb_draft() -> impl Strategy<Value = NoteDraft> {
        (
            prop::sample::select(vec!["", "Engineering", "Marketing", "Sales", "Ops"]),
            prop::sample::select(vec!["", "Jane", "Sam", "Team Alpha"]),
            "[a-z ]{0,12}",
            "[a-z ]{0,12}",
            "[a-z ]{0,24}",
        )
            .prop_map(|(category, owner, title, description, content)| NoteDraft {
                category: category.to_string(),
                owner: owner.to_string(),
                title,
                description,
                content,
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// A valid draft grows the store by one and lands first;
        /// an invalid one leaves the store exactly as it was.
        #[test]
        fn prop_add_note_grows_by_one_or_not_at_all(
            drafts in prop::collection::vec(arb_draft(), 1..20)
        ) {
            let mut store = NoteStore::new();
            for d in &drafts {
                let before = store.snapshot();
                match store.add_note(d) {
                    Ok(()) => {
                        prop_assert!(d.validate().is_ok());
                        prop_assert_eq!(store.len(), before.len() + 1);
                        prop_assert_eq!(&store.list_notes()[0].title, &d.title);
                        prop_assert_eq!(&store.list_notes()[1..], before.as_slice());
                    }
                    Err(_) => {
                        prop_assert!(!d.missing_fields().is_empty());
                        prop_assert_eq!(store.list_notes(), before.as_slice());
                    }
                }
            }
        }

        /// Distinct projections never contain empties or duplicates and are ascending.
        #[test]
        fn prop_distinct_projections_are_clean(
            drafts in prop::collection::vec(arb_draft(), 0..30)
        ) {
            let mut store = NoteStore::new();
            for d in &drafts {
                let _ = store.add_note(d);
            }

            for values in [store.distinct_categories(), store.distinct_owners()] {
                prop_assert!(values.iter().all(|v| !v.is_empty()));
                prop_assert!(values.windows(2).all(|w| w[0] < w[1]));
            }
            for note in store.list_notes() {
                prop_assert!(store.distinct_categories().contains(&note.category));
                prop_assert!(store.distinct_owners().contains(&note.owner));
            }
        }

        /// Deleting by id removes exactly that note.
        #[test]
        fn prop_delete_removes_exactly_one(
            count in 1usize..15,
            pick in any::<prop::sample::Index>()
        ) {
            let mut store = NoteStore::new();
            for i in 0..count {
                let d = NoteDraft::new()
                    .with(NoteField::Category, "Engineering")
                    .with(NoteField::Owner, "Jane")
                    .with(NoteField::Title, format!("note {}", i))
                    .with(NoteField::Content, "body");
                store.add_note(&d).unwrap();
            }

            let before = store.snapshot();
            let target = before[pick.index(before.len())].note_id;
            prop_assert!(store.delete_note(target));

            let expected: Vec<_> = before.into_iter().filter(|n| n.note_id != target).collect();
            prop_assert_eq!(store.list_notes(), expected.as_slice());
        }
    }
}
