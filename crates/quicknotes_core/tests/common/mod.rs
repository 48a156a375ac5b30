//! In-memory stand-in for the notes backend, shared by integration tests.
//!
//! Mimics the REST contract: it assigns ids and timestamps, answers with
//! full records, and can be told to fail the next request.

use chrono::{DateTime, Duration, TimeZone, Utc};
use quicknotes_core::{ApiError, ApiResult, Note, NoteDraft, NoteId, NotePatch, NotesApi};
use reqwest::StatusCode;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Mutex;
use uuid::Uuid;

pub struct MockApi {
    notes: Mutex<Vec<Note>>,
    // Monotonic tick so every server-side mutation gets a strictly newer
    // updated_at.
    clock: AtomicI64,
    fail_next: AtomicBool,
}

#[allow(dead_code)]
impl MockApi {
    pub fn new() -> Self {
        Self::seeded(Vec::new())
    }

    pub fn seeded(notes: Vec<Note>) -> Self {
        Self {
            notes: Mutex::new(notes),
            clock: AtomicI64::new(1_000),
            fail_next: AtomicBool::new(false),
        }
    }

    /// Makes the next request answer with HTTP 500.
    pub fn fail_next_request(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    /// Server-side view of the stored notes.
    pub fn backend_notes(&self) -> Vec<Note> {
        self.notes.lock().unwrap().clone()
    }

    fn tick(&self) -> DateTime<Utc> {
        let seconds = self.clock.fetch_add(1, Ordering::SeqCst);
        base_time() + Duration::seconds(seconds)
    }

    fn gate(&self) -> ApiResult<()> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(ApiError::Status {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                url: "http://mock/notes".to_string(),
            });
        }
        Ok(())
    }
}

impl NotesApi for MockApi {
    async fn list_notes(&self) -> ApiResult<Vec<Note>> {
        self.gate()?;
        Ok(self.backend_notes())
    }

    async fn create_note(&self, draft: &NoteDraft) -> ApiResult<Note> {
        self.gate()?;
        let now = self.tick();
        let note = Note {
            id: Uuid::new_v4().to_string(),
            title: draft.title.clone(),
            content: draft.content.clone().unwrap_or_default(),
            created_at: now,
            updated_at: now,
            tags: draft.tags.clone(),
            pinned: draft.pinned,
        };
        self.notes.lock().unwrap().push(note.clone());
        Ok(note)
    }

    async fn update_note(&self, id: &NoteId, patch: &NotePatch) -> ApiResult<Note> {
        self.gate()?;
        let now = self.tick();
        let mut notes = self.notes.lock().unwrap();
        let note = notes
            .iter_mut()
            .find(|note| &note.id == id)
            .ok_or_else(|| not_found(id))?;
        if let Some(title) = &patch.title {
            note.title = title.clone();
        }
        if let Some(content) = &patch.content {
            note.content = content.clone();
        }
        if let Some(tags) = &patch.tags {
            note.tags = Some(tags.clone());
        }
        if let Some(pinned) = patch.pinned {
            note.pinned = Some(pinned);
        }
        note.updated_at = now;
        Ok(note.clone())
    }

    async fn delete_note(&self, id: &NoteId) -> ApiResult<()> {
        self.gate()?;
        let mut notes = self.notes.lock().unwrap();
        let before = notes.len();
        notes.retain(|note| &note.id != id);
        if notes.len() == before {
            return Err(not_found(id));
        }
        Ok(())
    }
}

fn not_found(id: &NoteId) -> ApiError {
    ApiError::Status {
        status: StatusCode::NOT_FOUND,
        url: format!("http://mock/notes/{id}"),
    }
}

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// Builds a note the way the backend would, `offset_secs` after the mock
/// epoch.
#[allow(dead_code)]
pub fn seeded_note(id: &str, title: &str, offset_secs: i64) -> Note {
    let at = base_time() + Duration::seconds(offset_secs);
    Note {
        id: id.to_string(),
        title: title.to_string(),
        content: String::new(),
        created_at: at,
        updated_at: at,
        tags: None,
        pinned: None,
    }
}
