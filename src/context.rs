//! Shell State
//!
//! The one piece of cross-cutting state: the display language. The shell owns
//! the writer; consumers receive the read side as an explicit prop.

use leptos::prelude::*;

use crate::i18n::Language;

/// Language signal pair held by the app shell
#[derive(Clone, Copy)]
pub struct ShellState {
    /// Current display language - read
    pub language: ReadSignal<Language>,
    /// Current display language - write
    set_language: WriteSignal<Language>,
}

impl ShellState {
    pub fn new() -> Self {
        let (language, set_language) = signal(Language::default());
        Self {
            language,
            set_language,
        }
    }

    /// Flip between the two languages
    pub fn toggle_language(&self) {
        self.set_language.update(|lang| *lang = lang.toggled());
        log::debug!("Language -> {:?}", self.language.get_untracked());
    }
}
