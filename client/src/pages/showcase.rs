//! Prototype showcase with category filter.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::catalog::projects;
use crate::components::filter_button::FilterButton;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::project_card::ProjectCard;
use crate::state::showcase::{ShowcaseFilter, filter_projects};

#[component]
pub fn ShowcasePage() -> impl IntoView {
    let filter = RwSignal::new(ShowcaseFilter::All);
    let visible = Memo::new(move |_| filter_projects(projects(), filter.get()));

    view! {
        <Title text="PromptoType.ai - Prototype Showcase"/>
        <Meta name="description" content="Explore and discover working prototypes built with PromptoType.ai"/>
        <div class="page">
            <Header/>
            <main class="page__main">
                <div class="page__intro">
                    <h1 class="page__title">"Prototype Showcase"</h1>
                    <p class="page__lead">"Explore prototypes built by founders just like you using PromptoType.ai"</p>
                </div>

                <div class="filter-bar">
                    {ShowcaseFilter::options()
                        .map(|option| view! { <FilterButton filter=option active=filter/> })
                        .collect_view()}
                </div>

                <div class="grid grid--3">
                    <For each=move || visible.get() key=|project| project.id let:project>
                        <ProjectCard project/>
                    </For>
                </div>

                <Show when=move || visible.with(Vec::is_empty)>
                    <div class="empty-state">
                        <p>"No projects found with this filter"</p>
                        <button
                            type="button"
                            class="link-button"
                            on:click=move |_| filter.set(ShowcaseFilter::All)
                        >
                            "View all projects"
                        </button>
                    </div>
                </Show>

                <section class="panel cta">
                    <h2 class="cta__title">"Ready to showcase your idea?"</h2>
                    <p class="cta__lead">
                        "Join these founders and create your own prototype in minutes. No coding required."
                    </p>
                    <a class="button button--primary" href="/wizard">"Start Building"</a>
                </section>
            </main>
            <Footer/>
        </div>
    }
}
