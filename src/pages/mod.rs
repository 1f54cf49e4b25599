//! Pages
//!
//! Route targets: the home composition and the project detail page.

mod home;
mod project_detail;

pub use home::HomePage;
pub use project_detail::ProjectDetail;
