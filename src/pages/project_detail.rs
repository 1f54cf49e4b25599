//! Project Detail Page
//!
//! Renders one record from the content store, looked up by the `:slug` route
//! parameter. Unknown slugs get a static placeholder.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::{Navigation, Reveal};
use crate::i18n::{DetailLabels, Language};
use crate::markdown::render_narrative;
use crate::models::ProjectRecord;
use crate::routes::Anchor;
use crate::store::{content_store, ContentStore};

/// What the page shows for a given slug
#[derive(Debug, PartialEq)]
pub enum DetailState<'a> {
    Found(&'a ProjectRecord),
    NotFound,
}

pub fn resolve<'a>(store: &'a ContentStore, slug: Option<&str>) -> DetailState<'a> {
    match slug.and_then(|s| store.lookup(s)) {
        Some(record) => DetailState::Found(record),
        None => DetailState::NotFound,
    }
}

/// One gallery tile: image path and alt text
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryTile {
    pub src: String,
    pub alt: String,
}

/// Gallery tiles in record order; repeated images are kept
pub fn gallery_tiles(record: &ProjectRecord) -> Vec<GalleryTile> {
    record
        .images
        .iter()
        .enumerate()
        .map(|(i, src)| GalleryTile {
            src: src.clone(),
            alt: format!("{} - {}", record.title, i + 1),
        })
        .collect()
}

#[component]
fn NotFound(language: ReadSignal<Language>) -> impl IntoView {
    view! {
        <div class="not-found">
            <p>{move || language.get().labels().not_found}</p>
        </div>
    }
}

#[component]
fn NarrativeBlock(
    language: ReadSignal<Language>,
    heading: fn(&DetailLabels) -> &'static str,
    text: String,
) -> impl IntoView {
    view! {
        <Reveal class="detail-narrative">
            <h2 class="detail-heading">{move || heading(language.get().labels())}</h2>
            <div class="detail-copy" inner_html=render_narrative(&text)></div>
        </Reveal>
    }
}

#[component]
fn ProjectBody(record: &'static ProjectRecord, language: ReadSignal<Language>) -> impl IntoView {
    let navigate = use_navigate();
    let back = move |_| navigate(&Anchor::Works.home_href(), Default::default());

    view! {
        <Navigation />
        <section class="detail-hero">
            <div class="detail-hero-media">
                <img src=record.image.clone() alt=record.title.clone() />
                <div class="detail-hero-shade"></div>
            </div>
            <div class="detail-hero-inner">
                <button class="detail-back" on:click=back>
                    "← "{move || language.get().labels().back}
                </button>
                <div class="detail-meta">
                    <span class="detail-category">{record.category.clone()}</span>
                    <span class="meta-dot">"•"</span>
                    <span class="detail-year">{record.year.clone()}</span>
                </div>
                <h1 class="detail-title">{record.title.clone()}</h1>
                <p class="detail-subtitle">{record.subtitle.clone()}</p>
            </div>
        </section>

        <section class="detail-content">
            <div class="detail-grid">
                <div class="detail-main">
                    <NarrativeBlock language=language heading={|l: &DetailLabels| l.overview} text=record.overview.clone() />
                    <NarrativeBlock language=language heading={|l: &DetailLabels| l.challenge} text=record.challenge.clone() />
                    <NarrativeBlock language=language heading={|l: &DetailLabels| l.solution} text=record.solution.clone() />

                    <Reveal class="detail-gallery">
                        <h2 class="detail-heading">{move || language.get().labels().gallery}</h2>
                        <div class="detail-gallery-grid">
                            {gallery_tiles(record)
                                .into_iter()
                                .map(|tile| view! {
                                    <div class="detail-gallery-tile">
                                        <img src=tile.src alt=tile.alt />
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </Reveal>
                </div>

                <aside class="detail-sidebar">
                    <Reveal class="detail-panel">
                        <h3 class="detail-panel-title">"🔧 "{move || language.get().labels().tools}</h3>
                        <div class="detail-chips">
                            {record
                                .tools
                                .iter()
                                .map(|tool| view! { <span class="detail-chip">{tool.clone()}</span> })
                                .collect_view()}
                        </div>
                    </Reveal>
                    <Reveal class="detail-panel">
                        <h3 class="detail-panel-title">"✔ "{move || language.get().labels().features}</h3>
                        <ul class="detail-features">
                            {record
                                .features
                                .iter()
                                .map(|feature| view! { <li>{feature.clone()}</li> })
                                .collect_view()}
                        </ul>
                    </Reveal>
                </aside>
            </div>
        </section>
    }
}

#[component]
pub fn ProjectDetail(language: ReadSignal<Language>) -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.with(|p| p.get("slug"));

    move || {
        let slug = slug();
        match resolve(content_store(), slug.as_deref()) {
            DetailState::Found(record) => {
                log::debug!("Showing project {}", record.slug);
                view! { <ProjectBody record=record language=language /> }.into_any()
            }
            DetailState::NotFound => {
                log::warn!("No project for slug {:?}", slug);
                view! { <NotFound language=language /> }.into_any()
            }
        }
    }
}
