//! Home Page Sections
//!
//! Stateless views over static data and the content store listing.

mod experience;
mod footer;
mod hero;
mod honors;
mod skills;
mod works;

pub use experience::ExperienceSection;
pub use footer::Footer;
pub use hero::Hero;
pub use honors::Honors;
pub use skills::Skills;
pub use works::Works;
