//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into loader/action level APIs.
//! - Keep host boundaries decoupled from persistence details.

pub mod note_service;
