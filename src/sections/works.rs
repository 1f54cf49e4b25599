//! Works Section
//!
//! Project cards from the content store listing, each linking to its detail page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::Reveal;
use crate::models::ProjectSummary;
use crate::routes::{project_href, Anchor};
use crate::store::content_store;

#[component]
fn WorkCard(summary: &'static ProjectSummary, index: usize) -> impl IntoView {
    view! {
        <Reveal class="work-card">
            <div style=format!("--reveal-delay: {}ms;", index * 100)>
                <A href=project_href(&summary.slug)>
                    <div class="work-card-media">
                        <img src=summary.image.clone() alt=summary.title.clone() />
                        <div class="work-card-shade"></div>
                        <div class="work-card-arrow">"↗"</div>
                    </div>
                    <div class="work-card-body">
                        <div class="work-card-meta">
                            <span class="work-card-category">{summary.category.clone()}</span>
                            <span class="meta-dot">"•"</span>
                            <span class="work-card-year">{summary.year.clone()}</span>
                        </div>
                        <h3 class="work-card-title">{summary.title.clone()}</h3>
                        <p class="work-card-description">{summary.description.clone()}</p>
                    </div>
                </A>
            </div>
        </Reveal>
    }
}

#[component]
pub fn Works() -> impl IntoView {
    view! {
        <section id=Anchor::Works.id() class="section works">
            <div class="section-inner">
                <Reveal class="section-header">
                    <span class="section-eyebrow">"Portfolio"</span>
                    <h2 class="section-title">"SELECTED WORKS"</h2>
                    <p class="section-lead">
                        "A collection of projects showcasing my expertise in design engineering, robotics, aerodynamics, and product development."
                    </p>
                </Reveal>
                <div class="works-grid">
                    {content_store()
                        .listing()
                        .iter()
                        .enumerate()
                        .map(|(index, summary)| view! { <WorkCard summary=summary index=index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
