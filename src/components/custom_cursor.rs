//! Custom Cursor Component
//!
//! Dot + ring following the pointer; both shrink while the pointer is idle.

use leptos::prelude::*;
use leptos_pointer::{use_idle, use_pointer_position};

use crate::config::InteractionConfig;
use crate::routes::is_coarse_pointer;

/// Pointer-following cursor, hidden on touch devices
#[component]
pub fn CustomCursor() -> impl IntoView {
    let config = InteractionConfig::default();
    let coarse = is_coarse_pointer();

    let position = use_pointer_position();
    let idle = use_idle(config.idle_quiet_ms);

    let follow = move || {
        let p = position.get();
        format!("transform: translate3d({}px, {}px, 0);", p.x, p.y)
    };

    view! {
        <Show when=move || !coarse>
            <div class="cursor-layer cursor-layer-dot" style=follow>
                <div class=move || if idle.get() { "cursor-dot shrunk" } else { "cursor-dot" }></div>
            </div>
            <div class="cursor-layer cursor-layer-ring" style=follow>
                <div class=move || if idle.get() { "cursor-ring shrunk" } else { "cursor-ring" }></div>
            </div>
        </Show>
    }
}
