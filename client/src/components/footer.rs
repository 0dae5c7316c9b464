//! Site footer with secondary navigation and copyright line.

use leptos::prelude::*;

use crate::util::clock::today;

#[component]
pub fn Footer() -> impl IntoView {
    let year = today().year();
    view! {
        <footer class="site-footer">
            <div class="site-footer__top">
                <div>
                    <span class="site-footer__brand">"PromptoType.ai"</span>
                    <p class="site-footer__tagline">"From idea to prototype in minutes"</p>
                </div>
                <nav class="site-footer__nav">
                    <a href="/about">"About"</a>
                    <a href="/templates">"Templates"</a>
                    <a href="/showcase">"Showcase"</a>
                </nav>
            </div>
            <p class="site-footer__copyright">
                {format!("\u{a9} {year} PromptoType.ai. All rights reserved.")}
            </p>
        </footer>
    }
}
