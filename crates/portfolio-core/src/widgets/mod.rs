//! Headless state for the page's interactive widgets.
//!
//! The Dioxus components own a copy of these inside signals; all transitions
//! live here so they can be tested without a renderer.

pub mod accordion;
pub mod dialog;
pub mod reveal;
pub mod typewriter;

pub use accordion::AccordionState;
pub use dialog::{DialogState, DismissReason};
pub use reveal::RevealOnce;
pub use typewriter::{Typewriter, TypewriterOptions};
