//! Showcase grid card for one project.

use leptos::prelude::*;

use crate::catalog::Project;
use crate::util::format::short_date;

#[component]
pub fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class="project-card">
            <div class="project-card__image">
                <img src=project.image_url alt=project.name/>
            </div>
            <div class="project-card__body">
                <div class="project-card__heading">
                    <h3 class="project-card__name">{project.name}</h3>
                    <span class="badge">{project.category.badge()}</span>
                </div>
                <p class="project-card__description">{project.description}</p>
                <div class="project-card__meta">
                    <span>{format!("By {}", project.author)}</span>
                    <span>{short_date(project.published)}</span>
                </div>
                <p class="project-card__waitlist">{format!("{} on waitlist", project.waitlist_count)}</p>
                <a class="button button--primary button--block" href=project.href()>"View Prototype"</a>
            </div>
        </div>
    }
}
