//! Build steps and the validated plan they form.

#[cfg(test)]
#[path = "step_test.rs"]
mod step_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Delay between the last step completing and the redirect to the result page.
pub const DEFAULT_GRACE_MS: u64 = 1000;

const DEFAULT_STEPS: [(&str, u64); 8] = [
    ("Analyzing requirements...", 1000),
    ("Setting up project structure...", 1500),
    ("Generating components...", 2000),
    ("Applying template styling...", 1500),
    ("Implementing core features...", 3000),
    ("Optimizing for performance...", 1500),
    ("Finalizing prototype...", 1000),
    ("Build complete!", 500),
];

/// One labelled phase of the simulated build.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildStep {
    pub label: String,
    pub duration_ms: u64,
}

impl BuildStep {
    #[must_use]
    pub fn new(label: impl Into<String>, duration_ms: u64) -> Self {
        Self { label: label.into(), duration_ms }
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    #[error("build plan has no steps")]
    Empty,
    #[error("build step {index} ({label:?}) has a zero duration")]
    ZeroDuration { index: usize, label: String },
}

/// Ordered, non-empty list of steps with its precomputed total duration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildPlan {
    steps: Vec<BuildStep>,
    total_ms: u64,
    grace: Duration,
}

impl BuildPlan {
    /// Validate `steps` and precompute the total duration.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::Empty`] for an empty list and
    /// [`PlanError::ZeroDuration`] for the first step with no duration.
    pub fn new(steps: Vec<BuildStep>, grace: Duration) -> Result<Self, PlanError> {
        if steps.is_empty() {
            return Err(PlanError::Empty);
        }
        if let Some((index, step)) = steps.iter().enumerate().find(|(_, s)| s.duration_ms == 0) {
            return Err(PlanError::ZeroDuration { index, label: step.label.clone() });
        }
        Ok(Self::from_validated(steps, grace))
    }

    fn from_validated(steps: Vec<BuildStep>, grace: Duration) -> Self {
        let total_ms = steps
            .iter()
            .fold(0_u64, |acc, s| acc.saturating_add(s.duration_ms));
        Self { steps, total_ms, grace }
    }

    #[must_use]
    pub fn steps(&self) -> &[BuildStep] {
        &self.steps
    }

    #[must_use]
    pub fn step(&self, index: usize) -> Option<&BuildStep> {
        self.steps.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[must_use]
    pub fn total_ms(&self) -> u64 {
        self.total_ms
    }

    #[must_use]
    pub fn grace(&self) -> Duration {
        self.grace
    }

    /// `floor(elapsed / total * 100)`, capped at 100.
    #[must_use]
    pub fn progress_for(&self, elapsed_ms: u64) -> u8 {
        let total = u128::from(self.total_ms.max(1));
        let pct = (u128::from(elapsed_ms) * 100 / total).min(100);
        u8::try_from(pct).unwrap_or(100)
    }
}

impl Default for BuildPlan {
    fn default() -> Self {
        default_plan()
    }
}

/// The eight-step plan shown on the build screen.
#[must_use]
pub fn default_plan() -> BuildPlan {
    let steps = DEFAULT_STEPS
        .iter()
        .map(|(label, ms)| BuildStep::new(*label, *ms))
        .collect();
    BuildPlan::from_validated(steps, Duration::from_millis(DEFAULT_GRACE_MS))
}
