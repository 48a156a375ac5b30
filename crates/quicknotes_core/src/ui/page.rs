//! Main page orchestrator: wires components to the store.
//!
//! # Responsibility
//! - Dispatch `UiIntent`s from sidebar/topbar/list/detail to the store.
//! - Derive the visible (filtered) note list for rendering.
//! - Keep a selection alive once notes exist.

use crate::api::notes_api::NotesApi;
use crate::model::note::{Note, NoteDraft};
use crate::search::filter::filter_notes;
use crate::store::notes_store::{NotesStore, StoreResult};
use crate::ui::UiIntent;
use std::sync::Arc;

const NEW_NOTE_TITLE: &str = "New note";

/// Orchestrator for the notes screen.
///
/// Owns a shared handle to the store plus the transient search term; all
/// persistent state lives in the store.
pub struct NotesPage<A: NotesApi> {
    store: Arc<NotesStore<A>>,
    search_term: String,
}

impl<A: NotesApi> NotesPage<A> {
    /// Creates a page over an explicitly constructed store.
    pub fn new(store: Arc<NotesStore<A>>) -> Self {
        Self {
            store,
            search_term: String::new(),
        }
    }

    /// The store handle, for components that subscribe directly.
    pub fn store(&self) -> &Arc<NotesStore<A>> {
        &self.store
    }

    /// Current search term.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Initial load: fetches all notes and ensures something is selected.
    pub async fn init(&self) -> StoreResult<()> {
        self.store.load_notes().await?;
        self.reconcile_selection();
        Ok(())
    }

    /// Selects the first note when nothing is selected yet.
    ///
    /// Runs after every load so a screen never starts on an empty detail
    /// pane while notes exist.
    pub fn reconcile_selection(&self) {
        if self.store.selected_note_id().is_none() {
            if let Some(first) = self.store.notes_snapshot().first() {
                self.store.select_note(Some(first.id.clone()));
            }
        }
    }

    /// Notes currently visible in the list: the cache narrowed by the
    /// search term. Never mutates the store.
    pub fn visible_notes(&self) -> Vec<Note> {
        filter_notes(&self.store.notes_snapshot(), &self.search_term)
    }

    /// Handles one user intent.
    ///
    /// `Save` and `Delete` without a selection are no-ops, matching the
    /// disabled state a rendering layer would show.
    pub async fn handle(&mut self, intent: UiIntent) -> StoreResult<()> {
        match intent {
            UiIntent::CreateNote => {
                self.store
                    .create_note(NoteDraft::with_content(NEW_NOTE_TITLE, ""))
                    .await?;
            }
            UiIntent::Search(term) => {
                self.search_term = term;
            }
            UiIntent::Select(id) => {
                self.store.select_note(Some(id));
            }
            UiIntent::Save(patch) => {
                if let Some(id) = self.store.selected_note_id() {
                    self.store.update_note(&id, patch).await?;
                }
            }
            UiIntent::Delete => {
                if let Some(id) = self.store.selected_note_id() {
                    self.store.delete_note(&id).await?;
                }
            }
        }
        Ok(())
    }
}
