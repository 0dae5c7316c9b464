//! Timer abstraction used by [`crate::Simulator`].
//!
//! DESIGN
//! ======
//! A scheduler only arms and cancels; it never calls back into the simulator.
//! Whoever owns the scheduler delivers due tokens to [`crate::Simulator::fire`].
//! That keeps ownership one-directional and lets tests advance virtual time.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

use std::time::Duration;

/// Identity of one armed timer. Tokens increase monotonically per simulator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerToken(u64);

impl TimerToken {
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

pub trait Scheduler {
    /// Arm a timer that should be delivered after `delay`.
    fn arm(&mut self, token: TimerToken, delay: Duration);

    /// Drop the timer identified by `token` if it is still pending.
    fn cancel(&mut self, token: TimerToken);
}

impl<S: Scheduler + ?Sized> Scheduler for &mut S {
    fn arm(&mut self, token: TimerToken, delay: Duration) {
        (**self).arm(token, delay);
    }

    fn cancel(&mut self, token: TimerToken) {
        (**self).cancel(token);
    }
}

/// A timer waiting for delivery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingTimer {
    pub token: TimerToken,
    pub delay: Duration,
    /// Virtual time at which the timer is due.
    pub due_at: Duration,
}

/// Externally driven scheduler with a single pending slot.
///
/// Tests move its virtual clock with [`advance`](Self::advance) or
/// [`advance_to_next`](Self::advance_to_next); the browser host instead takes
/// the pending timer, sleeps for its delay and hands the token back.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    pending: Option<PendingTimer>,
    armed: usize,
    cancelled: usize,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    #[must_use]
    pub fn pending(&self) -> Option<PendingTimer> {
        self.pending
    }

    /// Claim the pending timer after the host waited out its delay.
    ///
    /// The timer stays in the slot while the host waits, so a `cancel` issued
    /// in the meantime still finds it. Returns `false` when `token` is no
    /// longer pending; virtual time then stays where it was.
    pub fn complete(&mut self, token: TimerToken) -> bool {
        match self.pending {
            Some(timer) if timer.token == token => {
                self.pending = None;
                self.now = self.now.max(timer.due_at);
                true
            }
            _ => false,
        }
    }

    /// Total timers armed over this scheduler's lifetime.
    #[must_use]
    pub fn armed_count(&self) -> usize {
        self.armed
    }

    /// Total pending timers removed by `cancel` or replaced by a new `arm`.
    #[must_use]
    pub fn cancelled_count(&self) -> usize {
        self.cancelled
    }

    /// Move virtual time forward by `by`. Returns the pending token if it
    /// became due within that window.
    pub fn advance(&mut self, by: Duration) -> Option<TimerToken> {
        self.now += by;
        match self.pending {
            Some(timer) if timer.due_at <= self.now => {
                self.pending = None;
                Some(timer.token)
            }
            _ => None,
        }
    }

    /// Jump virtual time to the pending timer's deadline and deliver it.
    pub fn advance_to_next(&mut self) -> Option<TimerToken> {
        let timer = self.pending.take()?;
        self.now = self.now.max(timer.due_at);
        Some(timer.token)
    }
}

impl Scheduler for ManualScheduler {
    fn arm(&mut self, token: TimerToken, delay: Duration) {
        if self.pending.is_some() {
            self.cancelled += 1;
        }
        self.pending = Some(PendingTimer { token, delay, due_at: self.now + delay });
        self.armed += 1;
    }

    fn cancel(&mut self, token: TimerToken) {
        if self.pending.is_some_and(|p| p.token == token) {
            self.pending = None;
            self.cancelled += 1;
        }
    }
}
