//! Notes backend contract and HTTP implementation.
//!
//! # Responsibility
//! - Provide the stable CRUD API over the backend's `/notes` resource.
//! - Keep URL layout and status handling inside this boundary.
//!
//! # Invariants
//! - Non-success HTTP statuses are surfaced as `ApiError::Status`, never
//!   swallowed.
//! - Request bodies are the partial payload types from the model; full
//!   records only ever come back from the server.

use crate::config::ApiConfig;
use crate::model::note::{Note, NoteDraft, NoteId, NotePatch};
use log::debug;
use reqwest::{Client, Response, StatusCode};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ApiResult<T> = Result<T, ApiError>;

/// Backend-request failure: transport-level or a non-success status.
#[derive(Debug)]
pub enum ApiError {
    /// Connection, timeout or body-decoding failure from the HTTP stack.
    Transport(reqwest::Error),
    /// The server answered with a non-success status.
    Status { status: StatusCode, url: String },
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "{err}"),
            Self::Status { status, url } => {
                write!(f, "backend answered {status} for `{url}`")
            }
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            Self::Status { .. } => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value)
    }
}

/// Backend contract for note CRUD operations.
///
/// Implemented over HTTP in production and in memory for tests.
#[allow(async_fn_in_trait)]
pub trait NotesApi {
    async fn list_notes(&self) -> ApiResult<Vec<Note>>;
    async fn create_note(&self, draft: &NoteDraft) -> ApiResult<Note>;
    async fn update_note(&self, id: &NoteId, patch: &NotePatch) -> ApiResult<Note>;
    async fn delete_note(&self, id: &NoteId) -> ApiResult<()>;
}

/// REST client for the notes backend.
pub struct HttpNotesApi {
    http: Client,
    base_url: String,
}

impl HttpNotesApi {
    /// Creates a client with a fresh connection pool.
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Creates a client reusing a caller-provided `reqwest::Client`.
    pub fn with_client(http: Client, config: &ApiConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.clone(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/notes", self.base_url)
    }

    fn entry_url(&self, id: &NoteId) -> String {
        format!("{}/notes/{id}", self.base_url)
    }
}

impl NotesApi for HttpNotesApi {
    async fn list_notes(&self) -> ApiResult<Vec<Note>> {
        let url = self.collection_url();
        debug!("event=api_request module=api method=GET url={url}");
        let response = self.http.get(&url).send().await?;
        let notes: Vec<Note> = checked(response)?.json().await?;
        Ok(notes)
    }

    async fn create_note(&self, draft: &NoteDraft) -> ApiResult<Note> {
        let url = self.collection_url();
        debug!("event=api_request module=api method=POST url={url}");
        let response = self.http.post(&url).json(draft).send().await?;
        let note: Note = checked(response)?.json().await?;
        Ok(note)
    }

    async fn update_note(&self, id: &NoteId, patch: &NotePatch) -> ApiResult<Note> {
        let url = self.entry_url(id);
        debug!("event=api_request module=api method=PUT url={url}");
        let response = self.http.put(&url).json(patch).send().await?;
        let note: Note = checked(response)?.json().await?;
        Ok(note)
    }

    async fn delete_note(&self, id: &NoteId) -> ApiResult<()> {
        let url = self.entry_url(id);
        debug!("event=api_request module=api method=DELETE url={url}");
        let response = self.http.delete(&url).send().await?;
        checked(response)?;
        Ok(())
    }
}

fn checked(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status,
            url: response.url().to_string(),
        })
    }
}
