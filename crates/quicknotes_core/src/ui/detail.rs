//! Note detail editor view-model.
//!
//! Holds the transient edit draft for the bound note; nothing here is
//! persisted until a save intent goes through the store.

use crate::model::note::{Note, NotePatch};
use crate::ui::UiIntent;

const UNTITLED: &str = "Untitled";

/// Transient editable copy of title and content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditDraft {
    pub title: String,
    pub content: String,
}

/// Editor for the currently selected note.
#[derive(Debug, Default)]
pub struct NoteDetail {
    note: Option<Note>,
    draft: EditDraft,
}

impl NoteDetail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds the editor to a note (or none), resetting the draft to the
    /// bound note's current fields.
    pub fn bind(&mut self, note: Option<&Note>) {
        self.draft = match note {
            Some(note) => EditDraft {
                title: note.title.clone(),
                content: note.content.clone(),
            },
            None => EditDraft::default(),
        };
        self.note = note.cloned();
    }

    /// The bound note, if any.
    pub fn note(&self) -> Option<&Note> {
        self.note.as_ref()
    }

    /// Current draft state.
    pub fn draft(&self) -> &EditDraft {
        &self.draft
    }

    pub fn edit_title(&mut self, value: impl Into<String>) {
        self.draft.title = value.into();
    }

    pub fn edit_content(&mut self, value: impl Into<String>) {
        self.draft.content = value.into();
    }

    /// Save intent for the draft, or `None` when no note is bound.
    ///
    /// A blank title is replaced with "Untitled" so a save can never
    /// strip a note of its title.
    pub fn save_intent(&self) -> Option<UiIntent> {
        self.note.as_ref()?;
        let trimmed = self.draft.title.trim();
        let title = if trimmed.is_empty() {
            UNTITLED.to_string()
        } else {
            trimmed.to_string()
        };
        Some(UiIntent::Save(NotePatch {
            title: Some(title),
            content: Some(self.draft.content.clone()),
            ..NotePatch::default()
        }))
    }

    /// Delete intent, or `None` when no note is bound.
    pub fn delete_intent(&self) -> Option<UiIntent> {
        self.note.as_ref().map(|_| UiIntent::Delete)
    }
}
