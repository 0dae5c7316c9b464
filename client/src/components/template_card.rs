//! Template cards for the home preview and the gallery.

use leptos::prelude::*;

use crate::catalog::Template;

/// Compact card: image, short name, tagline, "Use this template" link.
#[component]
pub fn TemplatePreviewCard(template: &'static Template) -> impl IntoView {
    view! {
        <div class="template-card template-card--compact">
            <div class="template-card__image">
                <img src=template.image_url alt=template.short_name/>
            </div>
            <div class="template-card__body">
                <h3 class="template-card__name">{template.short_name}</h3>
                <p class="template-card__description">{template.tagline}</p>
                <a class="template-card__link" href=template.wizard_href()>"Use this template"</a>
            </div>
        </div>
    }
}

/// Gallery card: full name, category badge, first three features.
#[component]
pub fn TemplateCard(template: &'static Template) -> impl IntoView {
    view! {
        <div class="template-card">
            <div class="template-card__image">
                <img src=template.image_url alt=template.name/>
            </div>
            <div class="template-card__body">
                <div class="template-card__heading">
                    <h3 class="template-card__name">{template.name}</h3>
                    <span class="badge">{template.category_label}</span>
                </div>
                <p class="template-card__description">{template.description}</p>
                <h4 class="template-card__features-title">"Key Features:"</h4>
                <ul class="template-card__features">
                    {template
                        .key_features()
                        .iter()
                        .map(|feature| view! { <li class="check-item">{*feature}</li> })
                        .collect_view()}
                </ul>
                <a class="button button--primary button--block" href=template.wizard_href()>
                    "Use This Template"
                </a>
            </div>
        </div>
    }
}
