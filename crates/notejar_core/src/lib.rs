//! Core domain logic for notejar.
//! This crate is the single source of truth for note business invariants.

pub mod boundary;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use boundary::{
    EmptyListPolicy, ErrorKind, ErrorPayload, NoteDetailPayload, NoteForm, NotesBoundary,
    NotesPayload, Redirect, NOTES_LOCATION,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteDraft, NoteId, NoteValidationError, MIN_TITLE_CHARS};
pub use service::note_service::{derive_content_preview, NoteService, NoteServiceError};
pub use store::{JsonNoteStore, NoteStore, NotesDocument, StoreError, StoreResult};

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
