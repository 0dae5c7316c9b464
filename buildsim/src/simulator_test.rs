use pretty_assertions::assert_eq;

use super::*;
use crate::clock::FixedClock;
use crate::result_id::to_base36;
use crate::scheduler::ManualScheduler;
use crate::step::default_plan;

type TestSim = Simulator<ManualScheduler, FixedClock>;

fn start(template: &str, now_ms: u64) -> TestSim {
    let params = BuildParams::from_query(Some("TaskMaster"), Some(template)).expect("params");
    Simulator::start(params, default_plan(), ManualScheduler::new(), FixedClock(now_ms))
}

/// Deliver timers until none is pending. Returns every `Fired` in order.
fn drive(sim: &mut TestSim) -> Vec<Fired> {
    let mut out = Vec::new();
    while let Some(token) = sim.scheduler_mut().advance_to_next() {
        out.push(sim.fire(token));
    }
    out
}

#[test]
fn start_arms_first_step_only() {
    let sim = start("saas", 0);
    assert_eq!(sim.state().current_index, 0);
    assert_eq!(sim.state().progress_percent, 0);
    assert_eq!(sim.scheduler().armed_count(), 1);
    let pending = sim.scheduler().pending().expect("pending timer");
    assert_eq!(pending.delay, Duration::from_millis(1000));
    assert_eq!(Some(pending.token), sim.armed());
}

#[test]
fn run_to_completion_reaches_one_hundred_and_redirects() {
    let now_ms = 1_747_267_200_000;
    let mut sim = start("saas", now_ms);
    let fired = drive(&mut sim);

    assert_eq!(fired.len(), 9);
    assert_eq!(sim.state().progress_percent, 100);
    assert_eq!(sim.state().current_index, sim.plan().len());
    assert_eq!(sim.state().elapsed_ms, 12_000);
    assert_eq!(sim.state().phase, Phase::Redirected);

    let expected = format!("/prototype/saas-{}", to_base36(now_ms));
    assert_eq!(fired.last(), Some(&Fired::Redirect(expected.clone())));
    assert_eq!(sim.redirect_path(), Some(expected.as_str()));
    assert_eq!(sim.scheduler().now(), Duration::from_millis(13_000));
    assert_eq!(sim.armed(), None);
}

#[test]
fn progress_is_monotonic_and_steps_are_sequential() {
    let mut sim = start("booking", 0);
    let mut last = 0;
    while let Some(token) = sim.scheduler_mut().advance_to_next() {
        if let Fired::Progressed(state) = sim.fire(token) {
            assert!(state.progress_percent >= last);
            last = state.progress_percent;
            // A step never completes before its full duration has elapsed.
            assert_eq!(sim.scheduler().now(), Duration::from_millis(state.elapsed_ms));
            assert!(sim.scheduler().pending().is_some());
        }
    }
    assert_eq!(last, 100);
}

#[test]
fn dispose_mid_run_stops_all_updates() {
    let mut sim = start("social", 0);
    while sim.state().elapsed_ms < 6_000 {
        let token = sim.scheduler_mut().advance_to_next().expect("pending timer");
        sim.fire(token);
    }
    let armed = sim.armed().expect("armed timer");
    let before = sim.state().clone();
    assert_eq!(before.progress_percent, 50);

    sim.dispose();

    assert_eq!(sim.armed(), None);
    assert!(sim.scheduler().pending().is_none());
    assert_eq!(sim.scheduler().cancelled_count(), 1);
    assert!(sim.state().is_disposed());
    assert_eq!(sim.state().elapsed_ms, before.elapsed_ms);
    assert_eq!(sim.state().progress_percent, before.progress_percent);

    // A callback that still wakes up after teardown has no effect.
    assert_eq!(sim.fire(armed), Fired::Ignored);
    assert_eq!(sim.scheduler_mut().advance(Duration::from_secs(60)), None);
    assert_eq!(sim.state().progress_percent, 50);
    assert_eq!(sim.redirect_path(), None);
    assert_eq!(sim.scheduler().armed_count(), 5);
}

#[test]
fn dispose_is_idempotent() {
    let mut sim = start("chatbot", 0);
    sim.dispose();
    let after_first = sim.state().clone();
    sim.dispose();
    assert_eq!(sim.state(), &after_first);
    assert_eq!(sim.scheduler().cancelled_count(), 1);
}

#[test]
fn dispose_while_host_waits_cancels_pending_timer() {
    let mut sim = start("saas", 0);
    let timer = sim.next_timer().expect("pending timer");
    assert!(matches!(sim.deliver(timer), Fired::Progressed(_)));

    // Host has read the next timer and is sleeping on it when the view goes away.
    let timer = sim.next_timer().expect("pending timer");
    let progress = sim.state().progress_percent;
    sim.dispose();

    assert_eq!(sim.scheduler().cancelled_count(), 1);
    assert!(sim.scheduler().pending().is_none());
    assert!(sim.next_timer().is_none());
    assert_eq!(sim.deliver(timer), Fired::Ignored);
    assert_eq!(sim.fire(timer.token), Fired::Ignored);
    assert_eq!(sim.state().progress_percent, progress);
}

#[test]
fn deliver_runs_to_redirect_in_host_order() {
    let mut sim = start("ecommerce", 0);
    let mut fired = Vec::new();
    while let Some(timer) = sim.next_timer() {
        fired.push(sim.deliver(timer));
    }
    assert_eq!(fired.len(), 9);
    assert!(matches!(fired.last(), Some(Fired::Redirect(_))));
    assert_eq!(sim.scheduler().now(), Duration::from_millis(13_000));
    assert_eq!(sim.scheduler().cancelled_count(), 0);
}

#[test]
fn dispose_during_grace_prevents_redirect() {
    let mut sim = start("saas", 0);
    while sim.state().phase == Phase::Running {
        let token = sim.scheduler_mut().advance_to_next().expect("pending timer");
        sim.fire(token);
    }
    assert_eq!(sim.state().phase, Phase::Finishing);
    let grace = sim.armed().expect("grace timer");
    sim.dispose();
    assert_eq!(sim.fire(grace), Fired::Ignored);
    assert_eq!(sim.redirect_path(), None);
}

#[test]
fn stale_token_is_ignored() {
    let mut sim = start("saas", 0);
    let before = sim.state().clone();
    assert_eq!(sim.fire(TimerToken::new(99)), Fired::Ignored);
    assert_eq!(sim.state(), &before);
    assert!(sim.armed().is_some());
}

#[test]
fn redirect_happens_once() {
    let mut sim = start("saas", 42);
    let fired = drive(&mut sim);
    let redirects = fired.iter().filter(|f| matches!(f, Fired::Redirect(_))).count();
    assert_eq!(redirects, 1);
    assert_eq!(sim.fire(TimerToken::new(9)), Fired::Ignored);
}

#[test]
fn missing_name_schedules_nothing() {
    let mut scheduler = ManualScheduler::new();
    let result = Simulator::try_start(None, Some("saas"), default_plan(), &mut scheduler, FixedClock(0));
    assert!(matches!(result, Err(BuildError::MissingParameters { .. })));
    assert_eq!(scheduler.armed_count(), 0);
    assert!(scheduler.pending().is_none());
}

#[test]
fn missing_template_schedules_nothing() {
    let mut scheduler = ManualScheduler::new();
    let result = Simulator::try_start(Some("App"), None, default_plan(), &mut scheduler, FixedClock(0));
    assert!(result.is_err());
    assert_eq!(scheduler.armed_count(), 0);
}

#[test]
fn try_start_with_borrowed_scheduler_runs() {
    let mut scheduler = ManualScheduler::new();
    let mut sim = Simulator::try_start(Some("App"), Some("saas"), default_plan(), &mut scheduler, FixedClock(0))
        .expect("simulator");
    let token = sim.scheduler_mut().advance_to_next().expect("pending timer");
    assert!(matches!(sim.fire(token), Fired::Progressed(_)));
}

#[test]
fn runs_at_different_times_get_different_ids() {
    let mut a = start("marketplace", 1_000_000);
    let mut b = start("marketplace", 1_000_001);
    drive(&mut a);
    drive(&mut b);
    assert_ne!(a.redirect_path(), b.redirect_path());
    assert!(a.redirect_path().is_some());
}
