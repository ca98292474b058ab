//! Keyboard input capture.
//!
//! # Responsibility
//! - Model host-independent key events.
//! - Fan key bursts out to session-wide listeners with scoped registration.
//! - Turn digit keystrokes into 3-character page codes.
//!
//! # Invariants
//! - A listener is registered for exactly as long as its guard is alive.
//! - The digit buffer only ever resets by emitting a page code.

pub mod digit_buffer;
pub mod key;
pub mod listeners;
