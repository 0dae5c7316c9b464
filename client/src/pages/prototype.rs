//! Prototype detail page with waitlist signup and stats.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::hooks::use_params_map;

use crate::catalog::{Project, find_project};
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::pages::not_found::NotFoundPage;
use crate::state::waitlist::WaitlistForm;
use crate::util::clock::today;
use crate::util::format::{days_live, long_date};

#[component]
pub fn PrototypePage() -> impl IntoView {
    let params = use_params_map();
    let project = move || params.with(|p| p.get("id")).and_then(|id| find_project(&id));

    move || match project() {
        Some(project) => view! { <PrototypeDetail project/> }.into_any(),
        None => view! { <NotFoundPage/> }.into_any(),
    }
}

#[component]
fn PrototypeDetail(project: &'static Project) -> impl IntoView {
    let waitlist = RwSignal::new(WaitlistForm::default());
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        waitlist.update(|form| {
            if form.submit().is_ok() {
                #[cfg(feature = "hydrate")]
                log::info!("waitlist signup recorded locally for {}", project.id);
            }
        });
    };

    view! {
        <Title text=format!("{} - PromptoType.ai", project.name)/>
        <Meta name="description" content=format!("{} - {}", project.name, project.description)/>
        <div class="page">
            <Header/>
            <main class="page__main">
                <section class="panel prototype-info">
                    <div class="prototype-info__image">
                        <img src=project.image_url alt=project.name/>
                    </div>
                    <div class="prototype-info__body">
                        <div class="prototype-info__heading">
                            <h1 class="page__title">{project.name}</h1>
                            <span class="badge">{project.category.badge()}</span>
                        </div>
                        <p class="page__lead">{project.description}</p>
                        <ul class="prototype-info__meta">
                            <li>{format!("Created by {}", project.author)}</li>
                            <li>{format!("Published on {}", long_date(project.published))}</li>
                            <li>{format!("{} people on waitlist", project.waitlist_count)}</li>
                        </ul>
                        <div class="chips">
                            {project
                                .features
                                .iter()
                                .map(|feature| view! { <span class="chip">{*feature}</span> })
                                .collect_view()}
                        </div>
                    </div>
                </section>

                <div class="prototype-layout">
                    <section class="prototype-layout__preview">
                        <h2 class="section__title section__title--left">"Prototype Preview"</h2>
                        <div class="panel preview-placeholder">
                            <p class="page__lead">"Interactive prototype preview"</p>
                            <p class="muted">
                                "In a full implementation, this would contain an iframe with the actual prototype"
                            </p>
                        </div>
                    </section>

                    <aside class="prototype-layout__side">
                        <h2 class="section__title section__title--left">"Join Waitlist"</h2>
                        <div class="panel">
                            <Show
                                when=move || waitlist.with(|f| f.submitted)
                                fallback=move || {
                                    view! {
                                        <p>
                                            {format!(
                                                "Be the first to know when {} launches. Sign up for early access.",
                                                project.name,
                                            )}
                                        </p>
                                        <form class="waitlist-form" on:submit=on_submit>
                                            <label class="field">
                                                <span class="field__label">"Email address"</span>
                                                <input
                                                    class="field__input"
                                                    type="email"
                                                    placeholder="you@example.com"
                                                    prop:value=move || waitlist.with(|f| f.email.clone())
                                                    on:input=move |ev| {
                                                        waitlist.update(|f| f.set_email(event_target_value(&ev)));
                                                    }
                                                />
                                            </label>
                                            <Show when=move || waitlist.with(|f| f.error.is_some())>
                                                <p class="field__error">
                                                    {move || waitlist.with(|f| f.error_message().unwrap_or_default())}
                                                </p>
                                            </Show>
                                            <button type="submit" class="button button--primary button--block">
                                                "Join Waitlist"
                                            </button>
                                        </form>
                                        <p class="muted waitlist-form__privacy">
                                            "We'll never share your email with anyone else"
                                        </p>
                                    }
                                }
                            >
                                <div class="waitlist-thanks">
                                    <h3>"Thank you!"</h3>
                                    <p>
                                        {format!(
                                            "You've been added to the waitlist for {}. We'll notify you when it launches.",
                                            project.name,
                                        )}
                                    </p>
                                </div>
                            </Show>
                        </div>

                        <div class="panel stats">
                            <h3 class="panel__title">"Project Stats"</h3>
                            <dl class="stats__list">
                                <dt>"Waitlist Signups"</dt>
                                <dd>{project.waitlist_count}</dd>
                                <dt>"Days Live"</dt>
                                <dd>{days_live(project.published, today())}</dd>
                                <dt>"Prototype Views"</dt>
                                <dd>{project.prototype_views()}</dd>
                            </dl>
                        </div>
                    </aside>
                </div>
            </main>
            <Footer/>
        </div>
    }
}
