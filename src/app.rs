//! Portfolio App
//!
//! Root shell: owns the display language, renders the cursor and the
//! language toggle, and routes between the home and detail pages.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{CustomCursor, LanguageToggle};
use crate::context::ShellState;
use crate::pages::{HomePage, ProjectDetail};

#[component]
pub fn App() -> impl IntoView {
    // Single writer for the language; pages get the read side as a prop
    let shell = ShellState::new();
    let language = shell.language;

    // Keep <html lang> in sync for screen readers and fonts
    Effect::new(move |_| {
        let lang = language.get();
        if let Some(root) = document().document_element() {
            let _ = root.set_attribute("lang", lang.html_lang());
        }
    });

    view! {
        <Router>
            <div class="site-root">
                <CustomCursor />
                <LanguageToggle shell=shell />
                <Routes fallback=|| view! { <p class="route-fallback">"Page not found"</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route
                        path=path!("/project/:slug")
                        view=move || view! { <ProjectDetail language=language /> }
                    />
                </Routes>
            </div>
        </Router>
    }
}
