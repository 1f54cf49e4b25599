//! Portfolio Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod i18n;
mod logging;
mod markdown;
mod models;
mod pages;
mod routes;
mod sections;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    });

    // Build (and validate) the content table before the first render
    let store = store::content_store();
    log::info!("Starting portfolio with {} projects", store.len());

    mount_to_body(App);
}
