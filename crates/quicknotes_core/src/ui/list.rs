//! Note list view-model: rows derived from the cache plus the selection.

use crate::model::note::{Note, NoteId};
use crate::ui::UiIntent;

/// One rendered row in the note list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteListRow {
    pub id: NoteId,
    pub title: String,
    /// Human-readable last-update label.
    pub updated_label: String,
    pub selected: bool,
}

impl NoteListRow {
    /// Intent emitted when this row is activated.
    pub fn select_intent(&self) -> UiIntent {
        UiIntent::Select(self.id.clone())
    }
}

/// Builds list rows in the order the notes are given.
pub fn rows(notes: &[Note], selected: Option<&NoteId>) -> Vec<NoteListRow> {
    notes
        .iter()
        .map(|note| NoteListRow {
            id: note.id.clone(),
            title: note.title.clone(),
            updated_label: note.updated_at.format("%Y-%m-%d %H:%M").to_string(),
            selected: selected == Some(&note.id),
        })
        .collect()
}
