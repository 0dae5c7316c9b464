//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps browser-only concerns (wall clock) and display formatting out of
//! pages so both stay testable on the host.

pub mod clock;
pub mod format;
