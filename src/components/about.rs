//! About and Education Components

use dioxus::prelude::*;
use portfolio_core::{render_markdown, Education};

/// About paragraph rendered from Markdown
#[component]
pub fn About(markdown: &'static str) -> Element {
    let html = render_markdown(markdown);

    rsx! {
        div { class: "section about",
            h1 { class: "section-title", "About" }
            div { class: "about-body", dangerous_inner_html: "{html}" }
        }
    }
}

/// Education card
#[component]
pub fn EducationCard(education: Education) -> Element {
    let degree = render_markdown(education.degree);

    rsx! {
        div { class: "section education",
            h1 { class: "section-title", "Education" }
            div { class: "education-card",
                p { class: "education-year", "{education.year_line}" }
                div { class: "education-degree", dangerous_inner_html: "{degree}" }
                p { "{education.institution}" }
                h3 { class: "education-focus", "{education.focus}" }
            }
        }
    }
}
