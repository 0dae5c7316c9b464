//! One row of the build checklist.

use leptos::prelude::*;

#[component]
pub fn BuildLogItem(label: &'static str, done: bool) -> impl IntoView {
    view! {
        <div class="build-log-item" class:build-log-item--done=done>
            <span class="build-log-item__check">{if done { "\u{2713}" } else { "" }}</span>
            <span class="build-log-item__label">{label}</span>
        </div>
    }
}
