//! Portfolio UI Components
//!
//! Dioxus primitives the portfolio page is composed from: buttons and
//! links, accordion, modal dialog, animated progress bar, typewriter text,
//! tag pills, and an inline SVG icon set.
//!
//! Components here know nothing about the page's content. Styling is by
//! class name; the stylesheet ships with the application.

pub mod components;

pub use components::*;
