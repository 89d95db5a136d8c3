//! Reusable presentation primitives
//!
//! Stateless where possible: widget state is held by the caller using the
//! headless types from `portfolio_core::widgets`.

mod accordion;
mod button;
mod dialog;
mod icons;
mod progress_bar;
mod tag_pill;
mod typewriter;

pub use accordion::*;
pub use button::*;
pub use dialog::*;
pub use icons::*;
pub use progress_bar::*;
pub use tag_pill::*;
pub use typewriter::*;
