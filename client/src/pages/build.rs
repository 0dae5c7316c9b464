//! Simulated build progress screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached from the wizard as `/build?name=..&template=..`. A missing
//! parameter renders the error state and nothing is scheduled. Otherwise the
//! page owns one `buildsim::Simulator` for its lifetime: in the browser a
//! sleep loop delivers each armed timer, and `on_cleanup` disposes the run so
//! a navigation away stops all further updates.
//!
//! The loop sleeps on the pending timer without taking it out of the
//! scheduler. Cleanup disposes the simulator, which cancels that timer, and
//! then fires a cancel signal that drops the in-flight sleep.
//!
//! TRADE-OFFS
//! ==========
//! The simulator sits behind `Arc<Mutex<_>>` only because cleanup hooks must
//! be `Send + Sync`; the loop and the hook never contend in practice.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::hooks::use_query_map;

use buildsim::{BuildError, BuildParams, BuildRunState, Clock, ManualScheduler, Simulator, checklist, default_plan};

use crate::components::build_log_item::BuildLogItem;
use crate::components::header::Header;
use crate::util::clock::BrowserClock;

#[component]
pub fn BuildPage() -> impl IntoView {
    let query = use_query_map();
    let (name, template) = query.with_untracked(|q| (q.get("name"), q.get("template")));

    match BuildParams::from_query(name.as_deref(), template.as_deref()) {
        Ok(params) => view! { <BuildProgress params/> }.into_any(),
        Err(err) => view! { <BuildFailed err/> }.into_any(),
    }
}

#[component]
fn BuildFailed(err: BuildError) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    log::warn!("build not started: {err:?}");
    view! {
        <Title text="Building Your Prototype - PromptoType.ai"/>
        <div class="page">
            <Header/>
            <main class="page__main page__main--center">
                <div class="build-error">
                    <h1 class="page__title">"Error"</h1>
                    <p class="page__lead">{err.to_string()}</p>
                    <a class="button button--primary" href="/wizard">"Back to Wizard"</a>
                </div>
            </main>
        </div>
    }
}

#[component]
fn BuildProgress(params: BuildParams) -> impl IntoView {
    let app_name = params.name.clone();
    let template_display = params.template_display();
    let template_id = params.template.clone();

    let sim = Simulator::start(params, default_plan(), ManualScheduler::new(), BrowserClock);
    let run = RwSignal::new(sim.state().clone());

    #[cfg(feature = "hydrate")]
    drive_in_browser(sim, run);

    let progress = move || run.with(|s| s.progress_percent);
    let finished = move || run.with(BuildRunState::is_complete);
    let result_href = move || buildsim::result_path(&template_id, BrowserClock.now_ms());

    view! {
        <Title text="Building Your Prototype - PromptoType.ai"/>
        <Meta name="description" content="Your prototype is being built. Please wait..."/>
        <div class="page">
            <Header/>
            <main class="page__main page__main--center">
                <div class="build">
                    <div class="build__intro">
                        <h1 class="page__title">"Building Your Prototype"</h1>
                        <p class="page__lead">
                            "We're creating " <strong>{app_name}</strong> " using the "
                            <strong>{template_display}</strong> " template"
                        </p>
                    </div>

                    <div class="panel build__panel">
                        <div class="build__status">
                            <span class="spinner" aria-hidden="true"></span>
                            <div class="build__status-body">
                                <p class="build__label">{move || run.with(|s| s.current_label.clone())}</p>
                                <div class="progress">
                                    <div
                                        class="progress__fill"
                                        style:width=move || format!("{}%", progress())
                                        role="progressbar"
                                        aria-valuemin="0"
                                        aria-valuemax="100"
                                        aria-valuenow=move || progress().to_string()
                                    ></div>
                                </div>
                            </div>
                        </div>

                        <div class="build__log">
                            {move || {
                                checklist(progress())
                                    .into_iter()
                                    .map(|entry| view! { <BuildLogItem label=entry.label done=entry.done/> })
                                    .collect_view()
                            }}
                        </div>

                        <p class="build__hint">"This usually takes less than a minute. Please wait..."</p>
                    </div>

                    <Show when=finished>
                        <div class="build__done">
                            <p class="page__lead">"Your prototype is ready!"</p>
                            <a class="button button--primary button--large" href=result_href.clone()>
                                "View Your Prototype"
                            </a>
                        </div>
                    </Show>
                </div>
            </main>
        </div>
    }
}

/// Deliver armed timers with real sleeps until the run redirects or the page
/// is torn down.
#[cfg(feature = "hydrate")]
fn drive_in_browser(sim: Simulator<ManualScheduler, BrowserClock>, run: RwSignal<BuildRunState>) {
    use std::sync::{Arc, Mutex};

    use futures::channel::oneshot;
    use futures::future::{self, Either};
    use leptos_router::NavigateOptions;
    use leptos_router::hooks::use_navigate;

    use crate::state::build_run::{HostStep, deliver_elapsed};

    let template = sim.params().template.clone();
    log::debug!("build started: template={template}");

    let sim = Arc::new(Mutex::new(sim));
    let sim_task = Arc::clone(&sim);
    let navigate = use_navigate();
    let (cancel_tx, mut cancel_rx) = oneshot::channel::<()>();

    leptos::task::spawn_local(async move {
        loop {
            let next = match sim_task.lock() {
                Ok(guard) => guard.next_timer(),
                Err(_) => None,
            };
            let Some(timer) = next else {
                break;
            };

            let sleep = Box::pin(gloo_timers::future::sleep(timer.delay));
            if let Either::Right(_) = future::select(sleep, &mut cancel_rx).await {
                break;
            }

            let step = match sim_task.lock() {
                Ok(mut guard) => deliver_elapsed(&mut *guard, timer),
                Err(_) => break,
            };
            match step {
                HostStep::Render(state) => run.set(state),
                HostStep::Navigate(path) => {
                    log::info!("build finished, redirecting to {path}");
                    navigate(&path, NavigateOptions::default());
                    break;
                }
                HostStep::Stop => break,
            }
        }
    });

    on_cleanup(move || {
        if let Ok(mut guard) = sim.lock() {
            guard.dispose();
            log::debug!("build disposed at {}%", guard.state().progress_percent);
        }
        if cancel_tx.send(()).is_err() {
            log::debug!("build loop already finished");
        }
    });
}
