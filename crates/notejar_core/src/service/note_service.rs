//! Note use-case service.
//!
//! # Responsibility
//! - Provide the list/detail/create entry points consumed by the boundary.
//! - Stamp identity and creation time on accepted drafts.
//! - Derive the plain-text preview projection for list rendering.
//!
//! # Invariants
//! - Drafts are validated before any store write.
//! - Create persists through the store's serialized `append` only.
//! - List preserves persisted insertion order; the service never sorts.

use crate::model::note::{Note, NoteDraft, NoteId, NoteValidationError};
use crate::store::{NoteStore, StoreError};
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Maximum characters retained in a derived content preview.
const PREVIEW_MAX_CHARS: usize = 80;

static MARKDOWN_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link regex"));
static MARKDOWN_SYMBOL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\*_`#>~\[\]\(\)!]+").expect("valid markdown symbol regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Service error for note use-cases.
#[derive(Debug)]
pub enum NoteServiceError {
    /// Submitted draft failed acceptance rules; nothing was persisted.
    Validation(NoteValidationError),
    /// Requested note does not exist in the collection.
    NoteNotFound(NoteId),
    /// Persistence-layer failure.
    Store(StoreError),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NoteNotFound(_) => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<NoteValidationError> for NoteServiceError {
    fn from(value: NoteValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for NoteServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Note service facade over store implementations.
pub struct NoteService<S: NoteStore> {
    store: S,
}

impl<S: NoteStore> NoteService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Lists the full collection in insertion order.
    ///
    /// An empty collection is a normal result; empty-vs-error presentation
    /// policy belongs to the boundary.
    pub fn list_notes(&self) -> Result<Vec<Note>, NoteServiceError> {
        Ok(self.store.load()?)
    }

    /// Gets one note by stable ID.
    ///
    /// Returns `NoteNotFound` when the id is absent, whether or not the
    /// collection holds other notes.
    pub fn get_note(&self, id: NoteId) -> Result<Note, NoteServiceError> {
        self.store
            .load()?
            .into_iter()
            .find(|note| note.id == id)
            .ok_or(NoteServiceError::NoteNotFound(id))
    }

    /// Validates a draft and, on acceptance, appends the stamped note.
    ///
    /// # Contract
    /// - A rejected draft persists nothing and returns the field-level
    ///   reason.
    /// - An accepted draft is stamped with a fresh `id` and `created_at`,
    ///   then appended through the store's serialized write path.
    /// - A persistence failure surfaces unchanged; there is no retry.
    pub fn create_note(&self, draft: NoteDraft) -> Result<Note, NoteServiceError> {
        if let Err(err) = draft.validate() {
            info!(
                "event=note_create module=service status=error error_code=validation_failed error={err}"
            );
            return Err(err.into());
        }

        let note = Note::new(draft.title, draft.content);
        let count = self.store.append(note.clone())?;

        info!(
            "event=note_create module=service status=ok id={} count={count}",
            note.id
        );
        Ok(note)
    }
}

/// Derives a single-line plain-text preview from note content.
///
/// Rules:
/// - Markdown links keep their text, losing the target.
/// - Markdown emphasis/heading symbols are stripped.
/// - Whitespace runs collapse to single spaces; at most
///   `PREVIEW_MAX_CHARS` characters are retained.
///
/// Returns `None` when nothing printable remains.
pub fn derive_content_preview(content: &str) -> Option<String> {
    let without_links = MARKDOWN_LINK_RE.replace_all(content, "$1");
    let without_symbols = MARKDOWN_SYMBOL_RE.replace_all(&without_links, " ");
    let normalized = WHITESPACE_RE.replace_all(&without_symbols, " ");
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(PREVIEW_MAX_CHARS).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::derive_content_preview;

    #[test]
    fn preview_keeps_link_text_and_drops_target() {
        let preview = derive_content_preview("see [the docs](https://example.com) first");
        assert_eq!(preview.as_deref(), Some("see the docs first"));
    }

    #[test]
    fn preview_strips_markdown_symbols_and_collapses_whitespace() {
        let preview = derive_content_preview("# Heading\n\n**bold**   and `code`");
        let text = preview.expect("preview should exist");
        assert!(!text.contains('#'));
        assert!(!text.contains('*'));
        assert!(!text.contains('`'));
        assert!(!text.contains("  "));
    }

    #[test]
    fn preview_caps_length_and_counts_chars_not_bytes() {
        let long = "ä".repeat(200);
        let preview = derive_content_preview(&long).expect("preview should exist");
        assert_eq!(preview.chars().count(), 80);
    }

    #[test]
    fn preview_of_symbol_only_content_is_none() {
        assert_eq!(derive_content_preview("### *** ```"), None);
    }
}
