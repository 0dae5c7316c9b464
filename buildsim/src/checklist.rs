//! Checklist ticks shown under the progress bar.

#[cfg(test)]
#[path = "checklist_test.rs"]
mod checklist_test;

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Threshold {
    /// Ticked once progress is strictly greater than the value.
    Above(u8),
    /// Ticked only when progress equals the value.
    Exactly(u8),
}

impl Threshold {
    #[must_use]
    pub fn is_met(self, progress: u8) -> bool {
        match self {
            Self::Above(limit) => progress > limit,
            Self::Exactly(value) => progress == value,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ChecklistItem {
    pub label: &'static str,
    pub threshold: Threshold,
}

pub const BUILD_CHECKLIST: [ChecklistItem; 7] = [
    ChecklistItem { label: "Analyzing your requirements", threshold: Threshold::Above(10) },
    ChecklistItem { label: "Setting up project structure", threshold: Threshold::Above(25) },
    ChecklistItem { label: "Generating UI components", threshold: Threshold::Above(40) },
    ChecklistItem { label: "Implementing core features", threshold: Threshold::Above(55) },
    ChecklistItem { label: "Optimizing for performance", threshold: Threshold::Above(70) },
    ChecklistItem { label: "Finalizing your prototype", threshold: Threshold::Above(85) },
    ChecklistItem { label: "Build complete!", threshold: Threshold::Exactly(100) },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ChecklistEntry {
    pub label: &'static str,
    pub done: bool,
}

/// Checklist rows for a given progress percentage.
#[must_use]
pub fn checklist(progress: u8) -> Vec<ChecklistEntry> {
    BUILD_CHECKLIST
        .iter()
        .map(|item| ChecklistEntry { label: item.label, done: item.threshold.is_met(progress) })
        .collect()
}
