//! Navigation Component
//!
//! Fixed top bar with section anchors; turns solid once the page is scrolled.

use leptos::prelude::*;
use leptos_pointer::use_scroll_flag;
use leptos_router::hooks::{use_location, use_navigate};

use crate::config::{InteractionConfig, PROFILE};
use crate::routes::{scroll_to_element, scroll_to_top, Anchor, HOME_PATH};

#[component]
pub fn Navigation() -> impl IntoView {
    let config = InteractionConfig::default();
    let scrolled = use_scroll_flag(config.scroll_threshold_px);
    let location = use_location();
    let navigate = use_navigate();

    let go_home = {
        let navigate = navigate.clone();
        move |ev: web_sys::MouseEvent| {
            ev.prevent_default();
            if location.pathname.get_untracked() == HOME_PATH {
                scroll_to_top();
            } else {
                navigate(HOME_PATH, Default::default());
            }
        }
    };

    let nav_class = move || {
        if scrolled.get() {
            "site-nav scrolled"
        } else {
            "site-nav"
        }
    };

    view! {
        <nav class=nav_class>
            <div class="site-nav-inner">
                <a href=HOME_PATH class="site-nav-brand" on:click=go_home>
                    {PROFILE.brand}
                </a>
                <div class="site-nav-links">
                    {Anchor::NAV
                        .into_iter()
                        .map(|anchor| {
                            let navigate = navigate.clone();
                            let on_click = move |ev: web_sys::MouseEvent| {
                                ev.prevent_default();
                                // Not on the home page: go there and let it scroll
                                if !scroll_to_element(anchor.id(), config.anchor_offset_px) {
                                    navigate(&anchor.home_href(), Default::default());
                                }
                            };
                            view! {
                                <a href=anchor.fragment() class="site-nav-link" on:click=on_click>
                                    {anchor.label()}
                                    <span class="site-nav-underline"></span>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <button class="site-nav-menu" aria-label="Menu">
                    <svg viewBox="0 0 24 24" fill="none" stroke="currentColor">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16m-7 6h7" />
                    </svg>
                </button>
            </div>
        </nav>
    }
}
