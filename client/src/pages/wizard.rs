//! Three-step wizard that collects the idea and hands off to the build page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Entered from the header, the home page, or the gallery's "Use This
//! Template" link (`/wizard?template=<id>`), which highlights that option on
//! the last step. Each template option is a link to `/build` carrying the
//! entered app name.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::hooks::use_query_map;

use crate::catalog::wizard_templates;
use crate::components::header::Header;
use crate::components::step_indicator::StepIndicator;
use crate::state::wizard::{WizardForm, WizardStep};

#[component]
pub fn WizardPage() -> impl IntoView {
    let query = use_query_map();
    let preselected = query.with_untracked(|q| q.get("template"));
    let form = RwSignal::new(WizardForm::with_preselected(preselected.as_deref()));

    let step = move || form.with(|f| f.step);
    let blocked = move || !form.with(WizardForm::can_advance);
    let on_next = move |_| {
        form.update(|f| {
            f.next();
        });
    };
    let on_back = move |_| form.update(WizardForm::back);

    view! {
        <Title text="PromptoType.ai - Build Your Prototype"/>
        <Meta name="description" content="Create your prototype by answering a few simple questions"/>
        <div class="page">
            <Header/>
            <main class="page__main page__main--narrow">
                <div class="page__intro page__intro--left">
                    <h1 class="page__title">"Create Your Prototype"</h1>
                    <p class="page__lead">"Answer a few questions to help us understand what you're building"</p>
                </div>

                <div class="step-indicators">
                    {WizardStep::ALL.map(|s| view! { <StepIndicator step=s form/> }).into_iter().collect_view()}
                </div>

                <Show when=move || step() == WizardStep::AppDetails>
                    <div class="panel">
                        <label class="field">
                            <span class="field__label">"App Name"</span>
                            <input
                                class="field__input"
                                type="text"
                                name="appName"
                                placeholder="e.g., TaskMaster, FitConnect, etc."
                                prop:value=move || form.with(|f| f.app_name.clone())
                                on:input=move |ev| form.update(|f| f.app_name = event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span class="field__label">"Problem Statement"</span>
                            <textarea
                                class="field__input"
                                name="problemStatement"
                                rows="4"
                                placeholder="Describe the problem your app will solve..."
                                prop:value=move || form.with(|f| f.problem_statement.clone())
                                on:input=move |ev| form.update(|f| f.problem_statement = event_target_value(&ev))
                            ></textarea>
                        </label>
                        <div class="panel__actions panel__actions--end">
                            <button type="button" class="button button--primary" disabled=blocked on:click=on_next>
                                "Next"
                            </button>
                        </div>
                    </div>
                </Show>

                <Show when=move || step() == WizardStep::TargetAudience>
                    <div class="panel">
                        <label class="field">
                            <span class="field__label">"Target Audience"</span>
                            <textarea
                                class="field__input"
                                name="targetAudience"
                                rows="4"
                                placeholder="Who will use your app? Be as specific as possible..."
                                prop:value=move || form.with(|f| f.target_audience.clone())
                                on:input=move |ev| form.update(|f| f.target_audience = event_target_value(&ev))
                            ></textarea>
                        </label>
                        <div class="panel__actions">
                            <button type="button" class="button button--secondary" on:click=on_back>
                                "Back"
                            </button>
                            <button type="button" class="button button--primary" disabled=blocked on:click=on_next>
                                "Next"
                            </button>
                        </div>
                    </div>
                </Show>

                <Show when=move || step() == WizardStep::SelectTemplate>
                    <div class="panel">
                        <h3 class="panel__title">"Choose a Template"</h3>
                        <div class="grid grid--2">
                            {wizard_templates()
                                .map(|template| {
                                    view! {
                                        <a
                                            class="template-option"
                                            class:template-option--selected=move || {
                                                form.with(|f| f.is_highlighted(template.id))
                                            }
                                            href=move || form.with(|f| f.href_for(template.id))
                                            on:click=move |_| {
                                                form.update(|f| {
                                                    f.select_template(template.id);
                                                });
                                            }
                                        >
                                            <div class="template-option__image">
                                                <img src=template.image_url alt=template.short_name/>
                                            </div>
                                            <div class="template-option__body">
                                                <h4>{template.short_name}</h4>
                                                <p>{template.tagline}</p>
                                            </div>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="panel__actions">
                            <button type="button" class="button button--secondary" on:click=on_back>
                                "Back"
                            </button>
                        </div>
                    </div>
                </Show>
            </main>
        </div>
    }
}
