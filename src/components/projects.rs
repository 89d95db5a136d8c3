//! Project Gallery Component
//!
//! Responsive grid of project cards, keyed by table position.

use dioxus::prelude::*;
use portfolio_core::{card_placement, Project};
use portfolio_ui::TagPill;

#[component]
pub fn ProjectGallery(projects: &'static [Project]) -> Element {
    rsx! {
        div { class: "projects",
            div { class: "projects-inner",
                h1 { class: "section-title", "Projects" }
                div { class: "project-grid",
                    for (index, project) in projects.iter().enumerate() {
                        ProjectCard { key: "{index}", index, project: *project }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(index: usize, project: Project) -> Element {
    let class = match card_placement(index).class() {
        Some(extra) => format!("project-card {}", extra),
        None => "project-card".to_string(),
    };

    rsx! {
        div { class: "{class}",
            div { class: "project-title", "{project.title}" }
            div { class: "project-tags",
                for tech in project.technology.iter() {
                    TagPill { label: tech.to_string() }
                }
            }
            p { class: "project-description", "{project.description}" }
        }
    }
}
