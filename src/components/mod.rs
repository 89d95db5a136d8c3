//! Page sections.

mod about;
mod contact_dialog;
mod footer;
mod hero;
mod nav_dock;
mod portrait;
mod projects;
mod tech_stack;

pub use about::{About, EducationCard};
pub use contact_dialog::ContactDialog;
pub use footer::Footer;
pub use hero::Hero;
pub use nav_dock::NavDock;
pub use portrait::Portrait;
pub use projects::ProjectGallery;
pub use tech_stack::TechStack;
