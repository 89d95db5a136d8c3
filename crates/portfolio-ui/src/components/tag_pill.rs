//! Tag Pill Component
//!
//! Small rounded label for technology tags on project cards.

use dioxus::prelude::*;

#[component]
pub fn TagPill(label: String) -> Element {
    rsx! {
        span { class: "tag-pill", "{label}" }
    }
}
