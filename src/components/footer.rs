//! Footer Component

use dioxus::prelude::*;
use portfolio_core::Profile;
use portfolio_ui::{ButtonVariant, Icon, IconKind, LinkButton};

#[component]
pub fn Footer(profile: &'static Profile) -> Element {
    let links = profile.links;

    rsx! {
        footer { class: "footer",
            div { class: "footer-copyright", "{profile.copyright}" }
            div { class: "footer-links",
                LinkButton {
                    href: links.linkedin.to_string(),
                    variant: ButtonVariant::Plain,
                    aria_label: IconKind::LinkedIn.label().to_string(),
                    Icon { kind: IconKind::LinkedIn, size: 25 }
                }
                LinkButton {
                    href: links.github.to_string(),
                    variant: ButtonVariant::Plain,
                    aria_label: IconKind::GitHub.label().to_string(),
                    Icon { kind: IconKind::GitHub, size: 25 }
                }
            }
        }
    }
}
