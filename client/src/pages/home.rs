//! Landing page: hero, how-it-works, featured templates, call to action.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::catalog::featured_templates;
use crate::components::feature_card::FeatureCard;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::template_card::TemplatePreviewCard;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="PromptoType.ai - From Idea to Prototype in Minutes"/>
        <Meta name="description" content="Turn your ideas into working prototypes without writing code"/>
        <div class="page">
            <Header/>
            <main class="page__main">
                <section class="hero">
                    <h1 class="hero__title">
                        "From Idea to Prototype in " <span class="accent">"Minutes"</span>
                    </h1>
                    <p class="hero__lead">
                        "PromptoType.ai helps non-technical founders build and validate their ideas without writing a single line of code."
                    </p>
                    <div class="hero__actions">
                        <a class="button button--primary button--large" href="/wizard">"Start Building"</a>
                        <a class="button button--secondary button--large" href="/showcase">"Explore Showcase"</a>
                    </div>
                </section>

                <section class="section section--alt">
                    <h2 class="section__title">"How PromptoType.ai Works"</h2>
                    <div class="grid grid--3">
                        <FeatureCard
                            icon="icon-lightbulb"
                            title="Describe Your Idea"
                            description="Tell us what you're building, who it's for, and what problem it solves."
                        />
                        <FeatureCard
                            icon="icon-template"
                            title="Choose a Template"
                            description="Select from our gallery of proven startup templates or let us recommend one."
                        />
                        <FeatureCard
                            icon="icon-rocket"
                            title="Build & Validate"
                            description="Get a working prototype in minutes and start collecting sign-ups right away."
                        />
                    </div>
                </section>

                <section class="section">
                    <h2 class="section__title">"Ready-to-Use Templates"</h2>
                    <p class="section__lead">
                        "Start with one of our proven templates, tailored for different types of startups and use cases."
                    </p>
                    <div class="grid grid--3">
                        {featured_templates()
                            .iter()
                            .map(|template| view! { <TemplatePreviewCard template/> })
                            .collect_view()}
                    </div>
                    <div class="section__more">
                        <a class="link-arrow" href="/templates">"View all templates"</a>
                    </div>
                </section>

                <section class="section section--alt cta">
                    <h2 class="cta__title">"Ready to Build Your Prototype?"</h2>
                    <p class="cta__lead">"No coding required. Go from idea to working prototype in minutes, not weeks."</p>
                    <a class="button button--primary button--large" href="/wizard">"Get Started for Free"</a>
                </section>
            </main>
            <Footer/>
        </div>
    }
}
