//! Simulated multi-step build progress for the prototype build screen.
//!
//! This crate owns the only stateful flow of the front-end: a fixed sequence of
//! labelled steps, each with a duration, stepped through one timer at a time
//! until the run finishes and hands off to a result page. It has no UI or
//! browser dependencies; time is injected through [`Scheduler`] and [`Clock`]
//! so the whole sequence can be driven deterministically from tests.
//!
//! LAYERS
//! ======
//! - [`reduce`] is the pure transition function over [`BuildRunState`].
//! - [`Simulator`] binds the reducer to a scheduler, tracks the single armed
//!   timer token and guarantees nothing happens after [`Simulator::dispose`].
//! - The host (the Leptos build page) owns the simulator for the lifetime of
//!   the view and feeds timer deliveries back into it.

pub mod checklist;
pub mod clock;
pub mod machine;
pub mod params;
pub mod result_id;
pub mod scheduler;
pub mod simulator;
pub mod step;

pub use checklist::{BUILD_CHECKLIST, ChecklistEntry, ChecklistItem, Threshold, checklist};
pub use clock::{Clock, FixedClock, SystemClock};
pub use machine::{BuildEvent, BuildRunState, Command, Phase, Transition, reduce};
pub use params::{BuildError, BuildParams};
pub use result_id::{result_path, synthesize_result_id, to_base36};
pub use scheduler::{ManualScheduler, PendingTimer, Scheduler, TimerToken};
pub use simulator::{Fired, Simulator};
pub use step::{BuildPlan, BuildStep, DEFAULT_GRACE_MS, PlanError, default_plan};
