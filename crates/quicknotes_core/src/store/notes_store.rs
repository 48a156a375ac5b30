//! Notes store: cache, loading flag and selection over a backend client.
//!
//! # Responsibility
//! - Mirror backend responses into the local note cache.
//! - Expose three independently observable channels plus snapshot reads.
//!
//! # Invariants
//! - Each state transition is a single `send_replace`/`send_modify`, so
//!   observers never see a torn intermediate state.
//! - The store never retries; backend failures go back to the caller with
//!   the cache untouched.
//! - `loading` only toggles around `load_notes` and is reset on failure.
//!
//! Subscription semantics: each channel holds the current value, new
//! subscribers observe it immediately, and dropping the receiver
//! unsubscribes. Concurrent `load_notes` calls are not serialized; the
//! last response to resolve wins.

use crate::api::notes_api::{ApiError, NotesApi};
use crate::model::note::{sort_notes, Note, NoteDraft, NoteId, NotePatch};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use tokio::sync::watch;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error for note mutations.
#[derive(Debug)]
pub enum StoreError {
    /// Create payload had a blank title.
    EmptyTitle,
    /// Backend-request failure, forwarded unchanged.
    Api(ApiError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "note title must not be empty"),
            Self::Api(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptyTitle => None,
            Self::Api(err) => Some(err),
        }
    }
}

impl From<ApiError> for StoreError {
    fn from(value: ApiError) -> Self {
        Self::Api(value)
    }
}

/// Single source of truth for the known notes, the loading flag and the
/// current selection.
///
/// Constructed explicitly and shared by reference (or `Arc`) with whoever
/// needs it; there is no ambient global instance.
pub struct NotesStore<A: NotesApi> {
    api: A,
    notes: watch::Sender<Vec<Note>>,
    loading: watch::Sender<bool>,
    selected: watch::Sender<Option<NoteId>>,
}

impl<A: NotesApi> NotesStore<A> {
    /// Creates an empty store over the given backend client.
    pub fn new(api: A) -> Self {
        Self {
            api,
            notes: watch::Sender::new(Vec::new()),
            loading: watch::Sender::new(false),
            selected: watch::Sender::new(None),
        }
    }

    /// The backend client this store drives.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Subscribes to the note collection channel.
    pub fn watch_notes(&self) -> watch::Receiver<Vec<Note>> {
        self.notes.subscribe()
    }

    /// Subscribes to the loading-flag channel.
    pub fn watch_loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }

    /// Subscribes to the selection channel.
    pub fn watch_selection(&self) -> watch::Receiver<Option<NoteId>> {
        self.selected.subscribe()
    }

    /// Synchronous snapshot of the cached notes in display order.
    pub fn notes_snapshot(&self) -> Vec<Note> {
        self.notes.borrow().clone()
    }

    /// Synchronous read of the loading flag.
    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    /// Synchronous read of the selected note id.
    pub fn selected_note_id(&self) -> Option<NoteId> {
        self.selected.borrow().clone()
    }

    /// Resolves the selection against the cache.
    ///
    /// A selection id absent from the cache resolves to `None`; the stored
    /// id is deliberately left in place (the page orchestrator re-selects
    /// after the next load).
    pub fn selected_note(&self) -> Option<Note> {
        let id = self.selected.borrow().clone()?;
        self.notes.borrow().iter().find(|note| note.id == id).cloned()
    }

    /// Replaces the cache with the backend's full collection, sorted into
    /// display order.
    ///
    /// On failure the cache is untouched and only the loading flag is
    /// reset. No retry happens here; recovery is the caller's concern.
    pub async fn load_notes(&self) -> StoreResult<Vec<Note>> {
        self.loading.send_replace(true);
        let mut fetched = match self.api.list_notes().await {
            Ok(notes) => notes,
            Err(err) => {
                self.loading.send_replace(false);
                warn!("event=notes_load module=store status=error error={err}");
                return Err(err.into());
            }
        };
        sort_notes(&mut fetched);
        self.notes.send_replace(fetched.clone());
        self.loading.send_replace(false);
        info!(
            "event=notes_load module=store status=ok count={}",
            fetched.len()
        );
        Ok(fetched)
    }

    /// Creates a note and selects the server-canonical record.
    ///
    /// The returned record carries the newest `updated_at`, so prepending
    /// keeps the cache in display order.
    pub async fn create_note(&self, draft: NoteDraft) -> StoreResult<Note> {
        if draft.title.trim().is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        let created = self.api.create_note(&draft).await?;
        let cached = created.clone();
        self.notes.send_modify(|notes| notes.insert(0, cached));
        self.selected.send_replace(Some(created.id.clone()));
        info!("event=note_create module=store status=ok id={}", created.id);
        Ok(created)
    }

    /// Applies a partial patch and replaces the cached entry with the
    /// server-returned full record.
    ///
    /// An id the cache does not know is still forwarded to the backend;
    /// its failure response propagates unchanged.
    pub async fn update_note(&self, id: &NoteId, patch: NotePatch) -> StoreResult<Note> {
        let updated = self.api.update_note(id, &patch).await?;
        let cached = updated.clone();
        self.notes.send_modify(|notes| {
            if let Some(slot) = notes.iter_mut().find(|note| &note.id == id) {
                *slot = cached;
            }
            sort_notes(notes);
        });
        info!("event=note_update module=store status=ok id={id}");
        Ok(updated)
    }

    /// Deletes a note and drops it from the cache.
    ///
    /// When the deleted note was selected, selection falls back to the
    /// first remaining note, or to no selection on an empty cache.
    pub async fn delete_note(&self, id: &NoteId) -> StoreResult<()> {
        self.api.delete_note(id).await?;
        self.notes
            .send_modify(|notes| notes.retain(|note| &note.id != id));
        if self.selected.borrow().as_deref() == Some(id.as_str()) {
            let fallback = self.notes.borrow().first().map(|note| note.id.clone());
            self.selected.send_replace(fallback);
        }
        info!("event=note_delete module=store status=ok id={id}");
        Ok(())
    }

    /// Changes the selection. Local-only, always succeeds.
    pub fn select_note(&self, id: Option<NoteId>) {
        self.selected.send_replace(id);
    }
}
