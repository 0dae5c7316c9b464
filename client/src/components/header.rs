//! Site header with brand link and primary navigation.

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">
                <span class="site-header__logo" aria-hidden="true"></span>
                "PromptoType.ai"
            </a>
            <nav class="site-header__nav">
                <a href="/templates">"Templates"</a>
                <a href="/showcase">"Showcase"</a>
                <a href="/about">"About"</a>
                <a class="button button--primary" href="/wizard">"Start Building"</a>
            </nav>
        </header>
    }
}
