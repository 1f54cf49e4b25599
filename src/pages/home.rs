//! Home Page
//!
//! All sections in order. Arriving with a section hash (e.g. `/#works`)
//! scrolls to that section once it is mounted.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::Navigation;
use crate::config::InteractionConfig;
use crate::routes::{scroll_to_element, Anchor};
use crate::sections::{ExperienceSection, Footer, Hero, Honors, Skills, Works};

#[component]
pub fn HomePage() -> impl IntoView {
    let config = InteractionConfig::default();
    let location = use_location();

    Effect::new(move |_| {
        let hash = location.hash.get();
        if let Some(anchor) = Anchor::from_fragment(&hash) {
            log::debug!("Jumping to #{}", anchor.id());
            scroll_to_element(anchor.id(), config.anchor_offset_px);
        }
    });

    view! {
        <Navigation />
        <main class="home">
            <Hero />
            <Works />
            <ExperienceSection />
            <Honors />
            <Skills />
            <Footer />
        </main>
    }
}
