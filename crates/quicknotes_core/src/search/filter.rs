//! Case-insensitive substring filter over title, content and tags.

use crate::model::note::Note;

/// Returns the notes matching `term`, preserving input order.
///
/// Matching is a case-insensitive substring check against the title, the
/// content, and every tag. A blank term matches everything.
pub fn filter_notes(notes: &[Note], term: &str) -> Vec<Note> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return notes.to_vec();
    }
    notes
        .iter()
        .filter(|note| note_matches(note, &needle))
        .cloned()
        .collect()
}

fn note_matches(note: &Note, needle: &str) -> bool {
    note.title.to_lowercase().contains(needle)
        || note.content.to_lowercase().contains(needle)
        || note
            .tags
            .iter()
            .flatten()
            .any(|tag| tag.to_lowercase().contains(needle))
}
