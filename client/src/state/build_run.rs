//! Host side of the build simulator: what the page does with each delivery.

#[cfg(test)]
#[path = "build_run_test.rs"]
mod build_run_test;

use buildsim::{BuildRunState, Clock, Fired, ManualScheduler, PendingTimer, Simulator};

/// What the build page should do after a timer elapsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostStep {
    /// Publish the new state and keep waiting.
    Render(BuildRunState),
    /// Run finished; leave for the result page.
    Navigate(String),
    /// Run was torn down or the timer went stale; stop the loop.
    Stop,
}

/// Hand an elapsed `timer` back to the simulator and map the outcome.
pub fn deliver_elapsed<C: Clock>(sim: &mut Simulator<ManualScheduler, C>, timer: PendingTimer) -> HostStep {
    match sim.deliver(timer) {
        Fired::Progressed(state) => HostStep::Render(state),
        Fired::Redirect(path) => HostStep::Navigate(path),
        Fired::Ignored => HostStep::Stop,
    }
}
