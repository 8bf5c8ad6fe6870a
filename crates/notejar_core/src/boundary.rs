//! Host-facing loader/action contract.
//!
//! # Responsibility
//! - Convert service results into the payloads a host view layer renders.
//! - Classify failures with HTTP-style status codes.
//! - Own the empty-list policy decision point.
//!
//! # Invariants
//! - Payload and error shapes are serde-serializable and stable.
//! - Every failure maps to a structured payload; nothing panics across the
//!   boundary.
//! - Validation failures never persist anything; a success on the write path
//!   always means the note was stored.

use crate::model::note::{Note, NoteDraft};
use crate::service::note_service::{NoteService, NoteServiceError};
use crate::store::NoteStore;
use log::error;
use serde::Serialize;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Redirect target rendered after a successful create action.
pub const NOTES_LOCATION: &str = "/notes";

/// Failure classification exposed to host error boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Requested note (or, under the `NotFound` policy, any note) is absent.
    NotFound,
    /// Submitted fields failed acceptance rules; the user can resubmit.
    ValidationFailed,
    /// Reading or writing the notes document failed unexpectedly.
    StorageFailure,
}

impl ErrorKind {
    /// HTTP-style status code a host should attach to the response.
    pub fn status_code(self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::ValidationFailed => 400,
            Self::StorageFailure => 500,
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let token = match self {
            Self::NotFound => "not_found",
            Self::ValidationFailed => "validation_failed",
            Self::StorageFailure => "storage_failure",
        };
        write!(f, "{token}")
    }
}

/// Structured error payload rendered by host error boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorPayload {
    /// Failure classification.
    pub kind: ErrorKind,
    /// HTTP-style status code derived from `kind`.
    pub status: u16,
    /// Human-readable message for the failure view.
    pub message: String,
}

impl ErrorPayload {
    /// Builds a payload with the status code implied by `kind`.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            status: kind.status_code(),
            message: message.into(),
        }
    }
}

impl Display for ErrorPayload {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}: {}", self.status, self.kind, self.message)
    }
}

/// Loader payload for the note list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotesPayload {
    /// Full collection in insertion order.
    pub notes: Vec<Note>,
}

/// Loader payload for the note detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteDetailPayload {
    /// The note matching the requested id.
    pub selected_note: Note,
}

/// Success signal returned by the create action.
///
/// The host is expected to navigate to `location` instead of rendering a
/// body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Redirect {
    pub location: String,
}

/// Raw form fields submitted to the create action.
///
/// Hosts pass field values as received; absent fields read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteForm {
    pub title: String,
    pub content: String,
}

/// Policy for rendering an empty collection on the list read path.
///
/// The observed revisions of this flow disagreed (one rendered an
/// empty-state view, a sibling raised 404), so the choice is explicit
/// configuration rather than an accident of which revision shipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyListPolicy {
    /// Return the empty payload; the view renders a "no notes" state.
    #[default]
    ShowEmpty,
    /// Treat an empty collection as a 404-classified load failure.
    NotFound,
}

/// Loader/action pair exposed to host frameworks.
///
/// The host contributes dispatch and rendering only: it invokes the read
/// path and renders the payload or the error, and invokes the write path and
/// follows the redirect or renders the error.
pub struct NotesBoundary<S: NoteStore> {
    service: NoteService<S>,
    empty_list_policy: EmptyListPolicy,
}

impl<S: NoteStore> NotesBoundary<S> {
    /// Creates a boundary with the default empty-list policy.
    pub fn new(service: NoteService<S>) -> Self {
        Self::with_empty_list_policy(service, EmptyListPolicy::default())
    }

    /// Creates a boundary with an explicit empty-list policy.
    pub fn with_empty_list_policy(service: NoteService<S>, policy: EmptyListPolicy) -> Self {
        Self {
            service,
            empty_list_policy: policy,
        }
    }

    /// Read path for the list view.
    ///
    /// Returns the `{ notes: [...] }` payload, or an error payload: 500 on
    /// storage failure, 404 on an empty collection under
    /// [`EmptyListPolicy::NotFound`].
    pub fn notes_loader(&self) -> Result<NotesPayload, ErrorPayload> {
        let notes = self
            .service
            .list_notes()
            .map_err(|err| classify(err, "failed to load notes"))?;

        if notes.is_empty() && self.empty_list_policy == EmptyListPolicy::NotFound {
            return Err(ErrorPayload::new(ErrorKind::NotFound, "no notes found"));
        }

        Ok(NotesPayload { notes })
    }

    /// Read path for the detail view.
    ///
    /// Accepts the raw route parameter; an id that does not parse is treated
    /// the same as an id no note carries.
    pub fn note_loader(&self, note_id: &str) -> Result<NoteDetailPayload, ErrorPayload> {
        let id = match Uuid::parse_str(note_id) {
            Ok(id) => id,
            Err(_) => return Err(not_found_payload(note_id)),
        };

        let selected_note = self.service.get_note(id).map_err(|err| match err {
            NoteServiceError::NoteNotFound(_) => not_found_payload(note_id),
            other => classify(other, "failed to load notes"),
        })?;

        Ok(NoteDetailPayload { selected_note })
    }

    /// Write path for the create form.
    ///
    /// Returns the redirect signal on success, a 400 payload on rejection
    /// and a 500 payload on persistence failure.
    pub fn notes_action(&self, form: NoteForm) -> Result<Redirect, ErrorPayload> {
        let draft = NoteDraft::new(form.title, form.content);
        self.service
            .create_note(draft)
            .map_err(|err| classify(err, "failed to store note"))?;

        Ok(Redirect {
            location: NOTES_LOCATION.to_string(),
        })
    }
}

fn not_found_payload(note_id: &str) -> ErrorPayload {
    ErrorPayload::new(
        ErrorKind::NotFound,
        format!("could not find note for id {note_id}"),
    )
}

/// Maps a service failure to its boundary payload.
///
/// Storage details stay in the operator log; the payload carries the
/// operation-specific generic message.
fn classify(err: NoteServiceError, storage_message: &str) -> ErrorPayload {
    match err {
        NoteServiceError::Validation(err) => {
            ErrorPayload::new(ErrorKind::ValidationFailed, err.to_string())
        }
        NoteServiceError::NoteNotFound(id) => not_found_payload(&id.to_string()),
        NoteServiceError::Store(err) => {
            error!("event=boundary module=boundary status=error error_code=storage_failure error={err}");
            ErrorPayload::new(ErrorKind::StorageFailure, storage_message)
        }
    }
}
