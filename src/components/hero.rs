//! Hero Component
//!
//! Greeting, tagline, rotating role, profile links, and the resume and
//! "Hire Me" actions, beside the portrait.

use dioxus::prelude::*;
use portfolio_core::Profile;
use portfolio_ui::{ButtonVariant, Icon, IconKind, LinkButton, PillButton, TypewriterText};

use crate::components::Portrait;
use crate::context::use_contact_dialog;

#[component]
pub fn Hero(profile: &'static Profile) -> Element {
    let mut dialog = use_contact_dialog();
    let links = profile.links;
    let roles: Vec<String> = profile.roles.iter().map(|r| r.to_string()).collect();
    let tagline_len = profile.tagline.len();

    rsx! {
        div { class: "hero", id: "home",
            div { class: "hero-text",
                h1 { class: "hero-greeting", "{profile.greeting}" }
                h3 { class: "hero-tagline",
                    for (i, line) in profile.tagline.iter().enumerate() {
                        "{line}"
                        if i + 1 < tagline_len {
                            br {}
                        }
                    }
                }
                h3 { class: "hero-role",
                    "{profile.role_prefix}"
                    TypewriterText { phrases: roles }
                }

                div { class: "hero-links",
                    LinkButton { href: links.linkedin.to_string(),
                        Icon { kind: IconKind::LinkedIn, size: 25 }
                        "{links.linkedin_label}"
                    }
                    LinkButton { href: links.github.to_string(),
                        Icon { kind: IconKind::GitHub, size: 25 }
                        "{links.github_label}"
                    }
                }

                div { class: "hero-actions",
                    LinkButton {
                        href: links.resume.to_string(),
                        variant: ButtonVariant::Pill,
                        "Resume"
                        span { class: "bounce",
                            Icon { kind: IconKind::Download, size: 16 }
                        }
                    }
                    PillButton {
                        onclick: move |_| {
                            dialog.write().open();
                        },
                        "Hire Me"
                        Icon { kind: IconKind::Handshake, size: 16 }
                    }
                }
            }

            Portrait { src: links.portrait.to_string() }
        }
    }
}
