//! Presentation layer: view-models and the page orchestrator.
//!
//! # Responsibility
//! - Turn user actions into explicit `UiIntent` values.
//! - Keep components stateless beyond transient drafts and queries.
//!
//! Rendering is out of scope; these types are what a rendering layer
//! reads from and feeds events into.

use crate::model::note::{NoteId, NotePatch};

pub mod detail;
pub mod list;
pub mod page;
pub mod sidebar;
pub mod topbar;

/// User intent emitted by a presentation component, handled by the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiIntent {
    /// Create a fresh note and select it.
    CreateNote,
    /// Narrow the visible list to notes matching the term.
    Search(String),
    /// Select a note for viewing/editing.
    Select(NoteId),
    /// Save the current edit draft against the selected note.
    Save(NotePatch),
    /// Delete the selected note.
    Delete,
}
