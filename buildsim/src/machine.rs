//! Pure state machine for one build run.
//!
//! DESIGN
//! ======
//! `reduce` never touches a timer. It returns the next state plus at most one
//! [`Command`] for the host to carry out, so the whole sequence is testable
//! without wall-clock waits. Once a run is disposed or has redirected, every
//! further event is a no-op.

#[cfg(test)]
#[path = "machine_test.rs"]
mod machine_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::step::BuildPlan;

/// Lifecycle phase of a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// A step timer is pending.
    #[default]
    Running,
    /// All steps are done; the grace timer is pending.
    Finishing,
    /// The redirect was issued. Terminal.
    Redirected,
    /// The host view was torn down. Terminal.
    Disposed,
}

/// Observable state of a build run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildRunState {
    /// Number of completed steps, in `0..=plan.len()`.
    pub current_index: usize,
    /// Sum of the durations of completed steps.
    pub elapsed_ms: u64,
    pub progress_percent: u8,
    pub current_label: String,
    pub phase: Phase,
}

impl BuildRunState {
    /// State at mount: nothing completed, first step's label shown.
    #[must_use]
    pub fn initial(plan: &BuildPlan) -> Self {
        Self {
            current_index: 0,
            elapsed_ms: 0,
            progress_percent: 0,
            current_label: plan.step(0).map(|s| s.label.clone()).unwrap_or_default(),
            phase: Phase::Running,
        }
    }

    /// Timer the host must arm right after mounting.
    #[must_use]
    pub fn first_command(plan: &BuildPlan) -> Command {
        Command::Schedule(plan.step(0).map_or(Duration::ZERO, crate::step::BuildStep::duration))
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.phase == Phase::Disposed
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress_percent >= 100
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, Phase::Redirected | Phase::Disposed)
    }
}

/// Inputs to [`reduce`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildEvent {
    /// The timer for the current step fired.
    StepElapsed,
    /// The post-completion grace timer fired.
    GraceElapsed,
    /// The host view is being torn down.
    Dispose,
}

/// Side effect requested by a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Arm a single timer that fires after the given delay.
    Schedule(Duration),
    /// Navigate once to the synthesized result page.
    Redirect,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: BuildRunState,
    pub command: Option<Command>,
}

impl Transition {
    fn unchanged(state: &BuildRunState) -> Self {
        Self { state: state.clone(), command: None }
    }
}

/// Apply `event` to `state` under `plan`.
#[must_use]
pub fn reduce(state: &BuildRunState, plan: &BuildPlan, event: BuildEvent) -> Transition {
    if state.is_disposed() {
        return Transition::unchanged(state);
    }

    match (state.phase, event) {
        (_, BuildEvent::Dispose) => {
            let mut next = state.clone();
            next.phase = Phase::Disposed;
            Transition { state: next, command: None }
        }
        (Phase::Running, BuildEvent::StepElapsed) => complete_step(state, plan),
        (Phase::Finishing, BuildEvent::GraceElapsed) => {
            let mut next = state.clone();
            next.phase = Phase::Redirected;
            Transition { state: next, command: Some(Command::Redirect) }
        }
        // Out-of-phase timer deliveries carry no meaning.
        _ => Transition::unchanged(state),
    }
}

fn complete_step(state: &BuildRunState, plan: &BuildPlan) -> Transition {
    let Some(step) = plan.step(state.current_index) else {
        return Transition::unchanged(state);
    };

    let mut next = state.clone();
    next.elapsed_ms = state.elapsed_ms.saturating_add(step.duration_ms);
    next.current_index = state.current_index + 1;
    next.progress_percent = plan.progress_for(next.elapsed_ms).max(state.progress_percent);

    let command = if let Some(upcoming) = plan.step(next.current_index) {
        next.current_label.clone_from(&upcoming.label);
        Command::Schedule(upcoming.duration())
    } else {
        next.phase = Phase::Finishing;
        Command::Schedule(plan.grace())
    };

    Transition { state: next, command: Some(command) }
}
