//! Distort Text Component
//!
//! Text that drifts toward the pointer while it is close.

use leptos::html::Span;
use leptos::prelude::*;
use leptos_pointer::{element_center, use_distortion, Offset};

use crate::config::InteractionConfig;

fn distortion_style(offset: Offset) -> String {
    let shadow = if offset.is_zero() {
        "none"
    } else {
        "2px 2px 0 rgba(147, 51, 234, 0.3), -2px -2px 0 rgba(59, 130, 246, 0.3)"
    };
    format!(
        "display: inline-block; transform: translate({}px, {}px); text-shadow: {};",
        offset.dx, offset.dy, shadow
    )
}

#[component]
pub fn DistortText(#[prop(into)] text: String) -> impl IntoView {
    let config = InteractionConfig::default();
    let text_ref = NodeRef::<Span>::new();

    let offset = use_distortion(
        move || text_ref.get_untracked().map(|el| element_center(&el)),
        config.distortion,
    );

    view! {
        <span node_ref=text_ref class="distort-text" style=move || distortion_style(offset.get())>
            {text}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resting_style_has_no_shadow() {
        let style = distortion_style(Offset::ZERO);
        assert!(style.contains("translate(0px, 0px)"));
        assert!(style.contains("text-shadow: none"));
    }

    #[test]
    fn test_displaced_style_has_shadow() {
        let style = distortion_style(Offset { dx: 4.0, dy: -2.0 });
        assert!(style.contains("translate(4px, -2px)"));
        assert!(!style.contains("text-shadow: none"));
    }
}
