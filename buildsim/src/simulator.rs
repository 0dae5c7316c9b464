//! Simulator driver: reducer + scheduler + clock.
//!
//! DESIGN
//! ======
//! The simulator remembers the one token it armed. A delivery with any other
//! token (stale, cancelled, or after dispose) is dropped without touching
//! state. `dispose` cancels the armed timer through the scheduler, so a
//! torn-down view never sees another update.
//!
//! A host backed by [`ManualScheduler`] waits on [`Simulator::next_timer`]
//! and hands the timer back through [`Simulator::deliver`]. The timer stays
//! pending in the scheduler for the whole wait, which is what lets `dispose`
//! find and cancel it.

#[cfg(test)]
#[path = "simulator_test.rs"]
mod simulator_test;

use std::time::Duration;

use crate::clock::Clock;
use crate::machine::{BuildEvent, BuildRunState, Command, Phase, reduce};
use crate::params::{BuildError, BuildParams};
use crate::result_id::result_path;
use crate::scheduler::{ManualScheduler, PendingTimer, Scheduler, TimerToken};
use crate::step::BuildPlan;

/// Outcome of delivering a timer token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fired {
    /// Token was stale or the run is over; nothing changed.
    Ignored,
    /// A step completed; carries the new state.
    Progressed(BuildRunState),
    /// The grace delay elapsed; navigate to this path.
    Redirect(String),
}

pub struct Simulator<S, C> {
    params: BuildParams,
    plan: BuildPlan,
    state: BuildRunState,
    scheduler: S,
    clock: C,
    armed: Option<TimerToken>,
    last_token: u64,
    redirect: Option<String>,
}

impl<S: Scheduler, C: Clock> Simulator<S, C> {
    /// Create the run and arm the timer for the first step.
    pub fn start(params: BuildParams, plan: BuildPlan, scheduler: S, clock: C) -> Self {
        let state = BuildRunState::initial(&plan);
        let first = BuildRunState::first_command(&plan);
        let mut sim = Self {
            params,
            plan,
            state,
            scheduler,
            clock,
            armed: None,
            last_token: 0,
            redirect: None,
        };
        if let Command::Schedule(delay) = first {
            sim.arm(delay);
        }
        sim
    }

    /// Validate raw query values, then [`start`](Self::start).
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingParameters`] without arming any timer.
    pub fn try_start(
        name: Option<&str>,
        template: Option<&str>,
        plan: BuildPlan,
        scheduler: S,
        clock: C,
    ) -> Result<Self, BuildError> {
        let params = BuildParams::from_query(name, template)?;
        Ok(Self::start(params, plan, scheduler, clock))
    }

    #[must_use]
    pub fn params(&self) -> &BuildParams {
        &self.params
    }

    #[must_use]
    pub fn plan(&self) -> &BuildPlan {
        &self.plan
    }

    #[must_use]
    pub fn state(&self) -> &BuildRunState {
        &self.state
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Token of the timer currently armed, if any.
    #[must_use]
    pub fn armed(&self) -> Option<TimerToken> {
        self.armed
    }

    /// Path issued by the terminal redirect, once it happened.
    #[must_use]
    pub fn redirect_path(&self) -> Option<&str> {
        self.redirect.as_deref()
    }

    /// Deliver a timer. Only the currently armed token has any effect.
    pub fn fire(&mut self, token: TimerToken) -> Fired {
        if self.armed != Some(token) {
            return Fired::Ignored;
        }
        self.armed = None;

        let event = match self.state.phase {
            Phase::Running => BuildEvent::StepElapsed,
            Phase::Finishing => BuildEvent::GraceElapsed,
            Phase::Redirected | Phase::Disposed => return Fired::Ignored,
        };
        let transition = reduce(&self.state, &self.plan, event);
        self.state = transition.state;

        match transition.command {
            Some(Command::Schedule(delay)) => {
                self.arm(delay);
                Fired::Progressed(self.state.clone())
            }
            Some(Command::Redirect) => {
                let path = result_path(&self.params.template, self.clock.now_ms());
                self.redirect = Some(path.clone());
                Fired::Redirect(path)
            }
            None => Fired::Ignored,
        }
    }

    /// Tear the run down. Cancels the armed timer; idempotent.
    pub fn dispose(&mut self) {
        if let Some(token) = self.armed.take() {
            self.scheduler.cancel(token);
        }
        self.state = reduce(&self.state, &self.plan, BuildEvent::Dispose).state;
    }

    fn arm(&mut self, delay: Duration) {
        self.last_token += 1;
        let token = TimerToken::new(self.last_token);
        self.armed = Some(token);
        self.scheduler.arm(token, delay);
    }
}

impl<C: Clock> Simulator<ManualScheduler, C> {
    /// Timer the host should wait on next. It remains pending until delivered.
    #[must_use]
    pub fn next_timer(&self) -> Option<PendingTimer> {
        self.scheduler.pending()
    }

    /// Deliver `timer` once its delay has elapsed on the host.
    ///
    /// Returns [`Fired::Ignored`] if the timer was cancelled or replaced while
    /// the host was waiting.
    pub fn deliver(&mut self, timer: PendingTimer) -> Fired {
        if !self.scheduler.complete(timer.token) {
            return Fired::Ignored;
        }
        self.fire(timer.token)
    }
}
