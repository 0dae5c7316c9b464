//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page sets its document title and description, owns any route-scoped
//! state, and delegates card and chrome rendering to `components`.

pub mod about;
pub mod build;
pub mod home;
pub mod not_found;
pub mod prototype;
pub mod showcase;
pub mod templates;
pub mod wizard;
