//! Client-side core for the QuickNotes UI.
//! This crate owns the note cache, backend access and UI orchestration state.

pub mod api;
pub mod config;
pub mod logging;
pub mod model;
pub mod search;
pub mod store;
pub mod ui;

pub use api::notes_api::{ApiError, ApiResult, HttpNotesApi, NotesApi};
pub use config::ApiConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteDraft, NoteId, NotePatch};
pub use search::filter::filter_notes;
pub use store::notes_store::{NotesStore, StoreError, StoreResult};
pub use ui::detail::NoteDetail;
pub use ui::page::NotesPage;
pub use ui::UiIntent;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
