//! About page: mission, how it works, benefits, technology.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::components::feature_card::FeatureCard;
use crate::components::footer::Footer;
use crate::components::header::Header;

const BENEFITS: [(&str, &str, &str); 5] = [
    ("icon-clock", "Save Time", "Go from idea to prototype in under 10 minutes instead of weeks or months."),
    ("icon-dollar", "Save Money", "No need to hire developers or designers for your initial prototype."),
    (
        "icon-pencil",
        "No Coding Required",
        "Describe your idea in plain English and let our AI handle the technical details.",
    ),
    ("icon-chart", "Validate Faster", "Start collecting feedback and building your waitlist immediately."),
    (
        "icon-devices",
        "Real Working Prototypes",
        "Not just mockups. Fully interactive applications you can share and test.",
    ),
];

const TECHNOLOGY: [(&str, &str, &str); 4] = [
    (
        "icon-brain",
        "Advanced AI",
        "Powered by cutting-edge AI models that understand your requirements and generate appropriate code.",
    ),
    (
        "icon-cube",
        "WebContainer Technology",
        "Run full-stack applications directly in your browser with no servers or complex setup.",
    ),
    ("icon-template", "Proven Templates", "Start with battle-tested templates designed for common startup use cases."),
    (
        "icon-code",
        "Modern Web Stack",
        "Built on Rust, WebAssembly, and other modern web technologies for optimal performance.",
    ),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About PromptoType.ai"/>
        <Meta
            name="description"
            content="Learn about PromptoType.ai - the AI-powered prototyping platform for non-technical founders"
        />
        <div class="page">
            <Header/>
            <main class="page__main page__main--narrow">
                <h1 class="page__title">"About PromptoType.ai"</h1>

                <section class="panel">
                    <h2 class="panel__title">"Our Mission"</h2>
                    <p class="panel__lead">
                        "PromptoType.ai was created with a simple but powerful mission: to democratize the startup building process by enabling anyone to quickly create, test, and validate their ideas without writing a single line of code."
                    </p>
                    <p>
                        "We believe that great ideas can come from anywhere, but technical barriers often prevent non-technical founders from bringing their visions to life. PromptoType.ai removes these barriers by leveraging AI to transform plain English descriptions into working prototypes in minutes, not weeks or months."
                    </p>
                </section>

                <section class="section">
                    <h2 class="section__title">"How It Works"</h2>
                    <div class="grid grid--3">
                        <FeatureCard
                            number=1
                            title="Describe Your Idea"
                            description="Tell us what you're building, who it's for, and what problem it solves."
                        />
                        <FeatureCard
                            number=2
                            title="Choose a Template"
                            description="Select from our gallery of proven startup templates or let us recommend one."
                        />
                        <FeatureCard
                            number=3
                            title="Build & Validate"
                            description="Get a working prototype in minutes and start collecting sign-ups right away."
                        />
                    </div>
                </section>

                <section class="panel">
                    <h2 class="panel__title">"Why Choose PromptoType.ai?"</h2>
                    <ul class="benefits">
                        {BENEFITS
                            .iter()
                            .map(|(icon, title, description)| {
                                view! {
                                    <li class="benefit">
                                        <span class=format!("benefit__icon {icon}") aria-hidden="true"></span>
                                        <div>
                                            <h3 class="benefit__title">{*title}</h3>
                                            <p>{*description}</p>
                                        </div>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </section>

                <section class="section">
                    <h2 class="section__title">"Our Technology"</h2>
                    <div class="grid grid--2">
                        {TECHNOLOGY
                            .iter()
                            .map(|(icon, title, description)| {
                                view! { <FeatureCard icon=*icon title=*title description=*description/> }
                            })
                            .collect_view()}
                    </div>
                </section>

                <section class="section cta">
                    <h2 class="cta__title">"Ready to Build Your Prototype?"</h2>
                    <p class="cta__lead">
                        "Join hundreds of founders who have already brought their ideas to life with PromptoType.ai. No coding required. Go from idea to working prototype in minutes, not weeks."
                    </p>
                    <a class="button button--primary" href="/wizard">"Get Started for Free"</a>
                </section>
            </main>
            <Footer/>
        </div>
    }
}
