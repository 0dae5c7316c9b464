//! Title + description card used by the home and about pages.

use leptos::prelude::*;

/// A feature card. `number` renders a numbered badge instead of an icon.
#[component]
pub fn FeatureCard(
    title: &'static str,
    description: &'static str,
    #[prop(optional)] icon: Option<&'static str>,
    #[prop(optional)] number: Option<u8>,
) -> impl IntoView {
    view! {
        <div class="feature-card">
            {number.map(|n| view! { <span class="feature-card__number">{n}</span> })}
            {icon.map(|class| view! { <span class=format!("feature-card__icon {class}") aria-hidden="true"></span> })}
            <h3 class="feature-card__title">{title}</h3>
            <p class="feature-card__description">{description}</p>
        </div>
    }
}
