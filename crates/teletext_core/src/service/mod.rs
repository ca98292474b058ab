//! Viewer use-case services.
//!
//! # Responsibility
//! - Own the single content document and its change revision.
//! - Export/import the document as JSON files.
//! - Tie content, routing, key input and view state into one session.
//!
//! # Invariants
//! - Content is only ever replaced wholesale or merged at the top level.
//! - A failed import never mutates the content document.

pub mod content_store;
pub mod session;
pub mod transfer;
