//! Gradient Orb Component
//!
//! Hero decoration; a lightning layer shows while the pointer is near.

use leptos::html::Div;
use leptos::prelude::*;
use leptos_pointer::{element_center, use_proximity};

use crate::config::InteractionConfig;

const LIGHTNING_PATHS: [&str; 5] = [
    "M30,20 Q35,40 30,50 T35,70 T25,90",
    "M70,15 Q65,35 70,45 T65,65 T75,85",
    "M50,25 Q55,40 50,55 T55,75 T45,95",
    "M25,30 Q30,45 25,60 T30,80 T20,100",
    "M75,25 Q70,45 75,60 T70,80 T80,100",
];

const BRANCH_PATHS: [&str; 3] = [
    "M40,35 L45,45 L42,50",
    "M60,40 L55,50 L58,55",
    "M50,60 L48,70 L52,75",
];

#[component]
pub fn GradientOrb() -> impl IntoView {
    let config = InteractionConfig::default();
    let orb_ref = NodeRef::<Div>::new();

    let near = use_proximity(
        move || orb_ref.get_untracked().map(|el| element_center(&el)),
        config.orb_radius_px,
    );

    view! {
        <div node_ref=orb_ref class="orb">
            <div class="orb-layer orb-layer-1"></div>
            <div class="orb-layer orb-layer-2"></div>
            <div class="orb-layer orb-layer-3"></div>
            <div class="orb-layer orb-core"></div>
            <svg
                class=move || if near.get() { "orb-lightning active" } else { "orb-lightning" }
                viewBox="0 0 100 100"
            >
                {LIGHTNING_PATHS
                    .iter()
                    .enumerate()
                    .map(|(i, d)| view! {
                        <path class=format!("bolt bolt-{}", i) d=*d fill="none" stroke-linecap="round" />
                    })
                    .collect_view()}
                {BRANCH_PATHS
                    .iter()
                    .enumerate()
                    .map(|(i, d)| view! {
                        <path class=format!("branch branch-{}", i) d=*d fill="none" stroke-linecap="round" />
                    })
                    .collect_view()}
            </svg>
            <div class="orb-glow"></div>
            <div class="orb-spin orb-spin-cw"></div>
            <div class="orb-spin orb-spin-ccw"></div>
        </div>
    }
}
