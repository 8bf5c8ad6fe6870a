//! Domain model for the persisted note collection.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Own the acceptance rules applied to submitted drafts.
//!
//! # Invariants
//! - Every persisted note is identified by a stable `NoteId`.
//! - Collection order is insertion order; the model never reorders.

pub mod note;
