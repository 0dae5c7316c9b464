//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    about::AboutPage, build::BuildPage, home::HomePage, not_found::NotFoundPage, prototype::PrototypePage,
    showcase::ShowcasePage, templates::TemplatesPage, wizard::WizardPage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/promptotype.css"/>
        <Title text="PromptoType.ai"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("about") view=AboutPage/>
                <Route path=StaticSegment("templates") view=TemplatesPage/>
                <Route path=StaticSegment("showcase") view=ShowcasePage/>
                <Route path=StaticSegment("wizard") view=WizardPage/>
                <Route path=StaticSegment("build") view=BuildPage/>
                <Route path=(StaticSegment("prototype"), ParamSegment("id")) view=PrototypePage/>
            </Routes>
        </Router>
    }
}
