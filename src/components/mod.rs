//! UI Components
//!
//! Reusable Leptos components shared by the pages.

mod custom_cursor;
mod distort_text;
mod gradient_orb;
mod language_toggle;
mod navigation;
mod reveal;

pub use custom_cursor::CustomCursor;
pub use distort_text::DistortText;
pub use gradient_orb::GradientOrb;
pub use language_toggle::LanguageToggle;
pub use navigation::Navigation;
pub use reveal::Reveal;
