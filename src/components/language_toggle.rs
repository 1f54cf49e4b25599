//! Language Toggle Component
//!
//! Floating button in the bottom-left corner.

use leptos::prelude::*;

use crate::context::ShellState;

#[component]
pub fn LanguageToggle(shell: ShellState) -> impl IntoView {
    view! {
        <button
            class="language-toggle"
            title="Switch language"
            on:click=move |_| shell.toggle_language()
        >
            {move || shell.language.get().switch_label()}
        </button>
    }
}
