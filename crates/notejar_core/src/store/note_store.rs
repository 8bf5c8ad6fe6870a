//! Note store contract and JSON file implementation.
//!
//! # Responsibility
//! - Provide load/save/append APIs over the single notes document.
//! - Serialize read-modify-write cycles through a store-owned write lock.
//!
//! # Invariants
//! - The persisted document always carries the `{ "notes": [...] }` envelope.
//! - `save` rewrites the document in full; there is no append-only log, no
//!   atomic rename and no partial-write protection.
//! - `append` holds the write lock from load through save, so concurrent
//!   appends through one store cannot lose updates.

use crate::model::note::Note;
use crate::store::{StoreError, StoreResult};
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use std::time::Instant;

/// Persisted envelope wrapping the note collection.
///
/// A document without a `notes` key reads as an empty collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotesDocument {
    #[serde(default)]
    pub notes: Vec<Note>,
}

/// Borrowed envelope used on the write path to avoid cloning the collection.
#[derive(Serialize)]
struct NotesDocumentRef<'a> {
    notes: &'a [Note],
}

/// Storage contract for the note collection.
pub trait NoteStore {
    /// Reads the full collection from the backing document.
    ///
    /// A missing document yields an empty collection. A document that exists
    /// but cannot be parsed yields `StoreError::Malformed`.
    fn load(&self) -> StoreResult<Vec<Note>>;

    /// Serializes the full collection and overwrites the backing document.
    fn save(&self, notes: &[Note]) -> StoreResult<()>;

    /// Appends one note under the store's write lock and persists the
    /// updated collection. Returns the new collection length.
    ///
    /// This is the single-writer serialization point for the
    /// load-then-append-then-save cycle; `load` and `save` called separately
    /// do not take part in it.
    fn append(&self, note: Note) -> StoreResult<usize>;
}

/// File-backed note store over one JSON document.
pub struct JsonNoteStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonNoteStore {
    /// Creates a store for the document at `path`.
    ///
    /// The document is not touched until the first operation; a store over a
    /// path that never existed is a valid empty store.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the backing document path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn malformed_error(&self, source: serde_json::Error) -> StoreError {
        StoreError::Malformed {
            path: self.path.clone(),
            source,
        }
    }
}

impl NoteStore for JsonNoteStore {
    fn load(&self) -> StoreResult<Vec<Note>> {
        let started_at = Instant::now();

        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    "event=store_load module=store status=ok outcome=missing_document count=0 duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                return Ok(Vec::new());
            }
            Err(err) => {
                error!(
                    "event=store_load module=store status=error error_code=read_failed duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(self.io_error(err));
            }
        };

        let document: NotesDocument = match serde_json::from_str(&raw) {
            Ok(document) => document,
            Err(err) => {
                error!(
                    "event=store_load module=store status=error error_code=malformed_document duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(self.malformed_error(err));
            }
        };

        info!(
            "event=store_load module=store status=ok count={} duration_ms={}",
            document.notes.len(),
            started_at.elapsed().as_millis()
        );
        Ok(document.notes)
    }

    fn save(&self, notes: &[Note]) -> StoreResult<()> {
        let started_at = Instant::now();

        let contents = serde_json::to_string_pretty(&NotesDocumentRef { notes })
            .map_err(|err| self.malformed_error(err))?;

        if let Err(err) = fs::write(&self.path, contents) {
            error!(
                "event=store_save module=store status=error error_code=write_failed count={} duration_ms={} error={}",
                notes.len(),
                started_at.elapsed().as_millis(),
                err
            );
            return Err(self.io_error(err));
        }

        info!(
            "event=store_save module=store status=ok count={} duration_ms={}",
            notes.len(),
            started_at.elapsed().as_millis()
        );
        Ok(())
    }

    fn append(&self, note: Note) -> StoreResult<usize> {
        // Lock recovery is safe here: the guard protects no data, only the
        // load-modify-save window.
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut notes = self.load()?;
        notes.push(note);
        self.save(&notes)?;

        info!(
            "event=store_append module=store status=ok count={}",
            notes.len()
        );
        Ok(notes.len())
    }
}
