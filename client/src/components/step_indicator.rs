//! Wizard progress bubble with title and connector bar.

use leptos::prelude::*;

use crate::state::wizard::{StepStatus, WizardForm, WizardStep};

#[component]
pub fn StepIndicator(step: WizardStep, form: RwSignal<WizardForm>) -> impl IntoView {
    let status = move || form.with(|f| f.status_of(step));
    let is_last = step == WizardStep::SelectTemplate;
    view! {
        <div class="step-indicator">
            <div class="step-indicator__row">
                <span
                    class="step-indicator__bubble"
                    class:step-indicator__bubble--active=move || status() == StepStatus::Active
                    class:step-indicator__bubble--completed=move || status() == StepStatus::Completed
                >
                    {move || match status() {
                        StepStatus::Completed => "\u{2713}".to_owned(),
                        StepStatus::Active | StepStatus::Pending => step.number().to_string(),
                    }}
                </span>
                <span
                    class="step-indicator__title"
                    class:step-indicator__title--muted=move || status() == StepStatus::Pending
                >
                    {step.title()}
                </span>
            </div>
            <Show when=move || !is_last>
                <div
                    class="step-indicator__bar"
                    class:step-indicator__bar--completed=move || status() == StepStatus::Completed
                ></div>
            </Show>
        </div>
    }
}
