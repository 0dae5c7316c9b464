//! View state for the interactive pages.
//!
//! ARCHITECTURE
//! ============
//! Each module holds a plain struct plus pure transitions. Pages wrap them in
//! `RwSignal` and call the transitions from event handlers, which keeps the
//! rules testable without a browser.

pub mod build_run;
pub mod showcase;
pub mod waitlist;
pub mod wizard;
