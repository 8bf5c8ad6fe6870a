//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record persisted in the notes document.
//! - Define the submission candidate (`NoteDraft`) and its acceptance rules.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `id` is decoupled from `created_at`; the creation instant is display
//!   metadata, not identity.
//! - Drafts must pass `validate()` before a `Note` is built from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every persisted note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// Minimum number of title characters, counted after trimming whitespace.
pub const MIN_TITLE_CHARS: usize = 5;

/// Canonical note record.
///
/// Serializes to the persisted wire shape; field order is the document
/// field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable unique ID used for detail lookup and linking.
    pub id: NoteId,
    /// Free-text title as submitted (surrounding whitespace preserved).
    pub title: String,
    /// Free-text body as submitted.
    pub content: String,
    /// UTC creation instant, serialized as an RFC 3339 string.
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Creates a note with a generated stable ID and the current instant.
    ///
    /// Callers are expected to validate the source draft first; this
    /// constructor performs no field checks.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), Utc::now(), title, content)
    }

    /// Creates a note with caller-provided identity and creation instant.
    ///
    /// Used by fixtures and import paths where both already exist.
    pub fn with_id(
        id: NoteId,
        created_at: DateTime<Utc>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            created_at,
        }
    }
}

/// Submission candidate carrying raw form field values.
///
/// A draft holds whatever the host handed over; nothing is normalized or
/// trimmed on construction. `validate()` decides acceptance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    /// Raw title field value.
    pub title: String,
    /// Raw content field value.
    pub content: String,
}

impl NoteDraft {
    /// Builds a draft from raw field values.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Checks the draft against the acceptance rules.
    ///
    /// # Contract
    /// - `title` must hold at least [`MIN_TITLE_CHARS`] characters after
    ///   trimming. An absent title fails this rule with a count of zero.
    /// - `content` must be non-empty. Whitespace-only content is accepted.
    /// - Rules are checked in that order; the first failure is returned.
    ///
    /// No other structural checks are performed: no length cap, no HTML
    /// sanitization, no encoding checks.
    pub fn validate(&self) -> Result<(), NoteValidationError> {
        let title_chars = self.title.trim().chars().count();
        if title_chars < MIN_TITLE_CHARS {
            return Err(NoteValidationError::TitleTooShort { chars: title_chars });
        }

        if self.content.is_empty() {
            return Err(NoteValidationError::ContentEmpty);
        }

        Ok(())
    }
}

/// Field-level rejection reason for a submitted draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteValidationError {
    /// Trimmed title is shorter than [`MIN_TITLE_CHARS`].
    TitleTooShort {
        /// Character count of the trimmed title.
        chars: usize,
    },
    /// Content field is empty.
    ContentEmpty,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TitleTooShort { chars } => write!(
                f,
                "invalid title: must be at least {MIN_TITLE_CHARS} characters long after trimming (got {chars})"
            ),
            Self::ContentEmpty => write!(f, "content must not be empty"),
        }
    }
}

impl Error for NoteValidationError {}
