//! JSON-document persistence for the note collection.
//!
//! # Responsibility
//! - Own the on-disk representation: one JSON document holding the full
//!   collection inside a `{ "notes": [...] }` envelope.
//! - Keep file and serialization details inside the persistence boundary.
//!
//! # Invariants
//! - A missing document reads as an empty collection, never as an error.
//! - A malformed document is surfaced to the caller, never masked as empty.
//! - No in-memory cache is kept between operations; every read hits the
//!   document, every write rewrites it in full.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

pub mod note_store;

pub use note_store::{JsonNoteStore, NoteStore, NotesDocument};

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence error for note document operations.
#[derive(Debug)]
pub enum StoreError {
    /// Filesystem read or write failed (permissions, missing parent, ...).
    ///
    /// A plainly missing document is not reported here; `load` treats it as
    /// the empty state.
    Io { path: PathBuf, source: io::Error },
    /// The document content is not a valid notes envelope.
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot access notes document `{}`: {source}", path.display())
            }
            Self::Malformed { path, source } => {
                write!(f, "invalid notes document `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Malformed { source, .. } => Some(source),
        }
    }
}
