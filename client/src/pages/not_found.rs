//! Fallback for unknown routes and unknown prototype ids.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::footer::Footer;
use crate::components::header::Header;

/// Marks the SSR response as 404. No-op in the browser.
pub fn set_not_found_status() {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    set_not_found_status();
    view! {
        <Title text="Not Found - PromptoType.ai"/>
        <div class="page">
            <Header/>
            <main class="page__main page__main--center">
                <div class="not-found">
                    <h1 class="page__title">"Page not found."</h1>
                    <p class="page__lead">"The page you're looking for doesn't exist."</p>
                    <a class="button button--primary" href="/">"Go Home"</a>
                </div>
            </main>
            <Footer/>
        </div>
    }
}
