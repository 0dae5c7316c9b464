//! Pill button for the showcase category filter.

use leptos::prelude::*;

use crate::state::showcase::ShowcaseFilter;

#[component]
pub fn FilterButton(filter: ShowcaseFilter, active: RwSignal<ShowcaseFilter>) -> impl IntoView {
    view! {
        <button
            type="button"
            class="filter-button"
            class:filter-button--active=move || active.get() == filter
            on:click=move |_| active.set(filter)
        >
            {filter.label()}
        </button>
    }
}
