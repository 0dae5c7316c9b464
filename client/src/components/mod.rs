//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the shared chrome (header, footer) and the cards and
//! controls the pages compose. They take plain props and hold no state of
//! their own beyond what the caller passes in.

pub mod build_log_item;
pub mod feature_card;
pub mod filter_button;
pub mod footer;
pub mod header;
pub mod project_card;
pub mod step_indicator;
pub mod template_card;
