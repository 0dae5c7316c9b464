//! Template gallery.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::catalog::templates;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::template_card::TemplateCard;

#[component]
pub fn TemplatesPage() -> impl IntoView {
    view! {
        <Title text="PromptoType.ai - Template Gallery"/>
        <Meta name="description" content="Explore our pre-built templates to kickstart your prototype"/>
        <div class="page">
            <Header/>
            <main class="page__main">
                <div class="page__intro">
                    <h1 class="page__title">"Template Gallery"</h1>
                    <p class="page__lead">
                        "Choose from our collection of professionally designed templates to jumpstart your prototype"
                    </p>
                </div>
                <div class="grid grid--3">
                    {templates().iter().map(|template| view! { <TemplateCard template/> }).collect_view()}
                </div>
            </main>
            <Footer/>
        </div>
    }
}
