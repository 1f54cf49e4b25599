//! Hero Section
//!
//! Greeting, discipline tags, short bio and the gradient orb.

use leptos::prelude::*;

use crate::components::{DistortText, GradientOrb};
use crate::config::PROFILE;

const HERO_TAGS: [&str; 4] = ["DESIGN ENGINEER", "ROBOTICS", "AERODYNAMICS", "PROTOTYPING"];

const HERO_BIO: &str = "Design Engineering student at Imperial College London, passionate about solving complex problems through mechatronic systems.";

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="hero-grid"></div>
            <div class="hero-inner">
                <div class="hero-text">
                    <div class="hero-greeting">
                        <h1 class="hero-line">"HELLO"</h1>
                        <h1 class="hero-line">"I'M"</h1>
                        <h1 class="hero-line text-gradient">
                            <DistortText text=PROFILE.first_name />
                        </h1>
                        <h1 class="hero-line">{PROFILE.last_name}</h1>
                    </div>
                    <div class="hero-tags">
                        {HERO_TAGS
                            .iter()
                            .map(|tag| view! { <span class="hero-tag">{*tag}</span> })
                            .collect_view()}
                    </div>
                    <p class="hero-bio">{HERO_BIO}</p>
                </div>
                <div class="hero-orb">
                    <GradientOrb />
                </div>
            </div>
            <div class="hero-fade"></div>
        </section>
    }
}
