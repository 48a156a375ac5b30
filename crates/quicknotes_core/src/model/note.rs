//! Note record and partial wire payloads.
//!
//! # Responsibility
//! - Mirror the backend's Note resource shape (camelCase JSON).
//! - Provide create/update payload types with true partial semantics.
//!
//! # Invariants
//! - `id` is server-assigned and opaque to the client.
//! - `updated_at` is server-assigned on every mutation; clients never set it.
//! - `None` fields are omitted from serialized payloads entirely.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stable identifier for a note, assigned by the backend.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = String;

/// A single persisted note as the backend returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Server-assigned id, immutable once created.
    pub id: NoteId,
    pub title: String,
    pub content: String,
    /// Set by the server at creation time.
    pub created_at: DateTime<Utc>,
    /// Set by the server on every mutation; sole display sort key.
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned: Option<bool>,
}

/// Creation payload. The backend fills in id and timestamps and returns
/// the full record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteDraft {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinned: Option<bool>,
}

impl NoteDraft {
    /// Creates a draft with title only.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: None,
            tags: None,
            pinned: None,
        }
    }

    /// Creates a draft with title and content.
    pub fn with_content(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::new(title)
        }
    }
}

/// Partial update payload. Only fields present in the patch are sent;
/// the backend returns the full updated record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinned: Option<bool>,
}

/// Sorts notes into display order: `updated_at DESC, id ASC`.
///
/// The id tie-break keeps ordering deterministic when the backend hands
/// back identical timestamps.
pub fn sort_notes(notes: &mut [Note]) {
    notes.sort_by(|a, b| {
        b.updated_at
            .cmp(&a.updated_at)
            .then_with(|| a.id.cmp(&b.id))
    });
}

#[cfg(test)]
mod tests {
    use super::{sort_notes, Note, NoteDraft, NotePatch};
    use chrono::{TimeZone, Utc};

    fn note(id: &str, updated_secs: i64) -> Note {
        let at = Utc.timestamp_opt(updated_secs, 0).unwrap();
        Note {
            id: id.to_string(),
            title: format!("note {id}"),
            content: String::new(),
            created_at: at,
            updated_at: at,
            tags: None,
            pinned: None,
        }
    }

    #[test]
    fn sort_is_descending_by_updated_at_with_id_tiebreak() {
        let mut notes = vec![note("c", 10), note("a", 30), note("b", 10)];
        sort_notes(&mut notes);
        let ids: Vec<&str> = notes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn note_round_trips_camel_case_wire_names() {
        let json = serde_json::json!({
            "id": "n1",
            "title": "hello",
            "content": "body",
            "createdAt": "2024-05-01T10:00:00Z",
            "updatedAt": "2024-05-02T11:30:00Z",
            "tags": ["work"],
            "pinned": true
        });
        let parsed: Note = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.id, "n1");
        assert_eq!(parsed.tags.as_deref(), Some(["work".to_string()].as_slice()));

        let back = serde_json::to_value(&parsed).unwrap();
        // Wire names stay camelCase and the record survives a round trip.
        assert!(back.get("createdAt").is_some());
        assert!(back.get("updatedAt").is_some());
        let reparsed: Note = serde_json::from_value(back).unwrap();
        assert_eq!(reparsed, parsed);
    }

    #[test]
    fn note_parses_without_optional_fields() {
        let json = serde_json::json!({
            "id": "n2",
            "title": "plain",
            "content": "",
            "createdAt": "2024-05-01T10:00:00Z",
            "updatedAt": "2024-05-01T10:00:00Z"
        });
        let parsed: Note = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.tags, None);
        assert_eq!(parsed.pinned, None);
    }

    #[test]
    fn draft_omits_absent_fields_from_payload() {
        let draft = NoteDraft::new("only title");
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value, serde_json::json!({ "title": "only title" }));
    }

    #[test]
    fn patch_serializes_only_changed_fields() {
        let patch = NotePatch {
            title: Some("renamed".to_string()),
            ..NotePatch::default()
        };
        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(value, serde_json::json!({ "title": "renamed" }));
    }
}
