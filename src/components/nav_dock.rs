//! Navigation Dock Component
//!
//! Fixed pill at the bottom of the viewport: home anchor, profile links,
//! and the theme toggle.

use dioxus::prelude::*;
use portfolio_core::Links;
use portfolio_ui::{ButtonVariant, Icon, IconKind, LinkButton, PillButton};

use crate::context::{toggle_theme, use_theme, use_theme_root};

#[component]
pub fn NavDock(links: Links) -> Element {
    let theme = use_theme();
    let root = use_theme_root();
    let current = theme.read().theme();

    // Shows where the toggle leads: moon while light, sun while dark
    let toggle_icon = if current.is_dark() {
        IconKind::Sun
    } else {
        IconKind::Moon
    };

    rsx! {
        nav { class: "nav-dock",
            div { class: "nav-dock-group",
                LinkButton {
                    href: "#".to_string(),
                    variant: ButtonVariant::Plain,
                    aria_label: IconKind::Home.label().to_string(),
                    Icon { kind: IconKind::Home, size: 20 }
                }
                div { class: "nav-dock-divider" }
            }
            div { class: "nav-dock-group",
                LinkButton {
                    href: links.linkedin.to_string(),
                    variant: ButtonVariant::Plain,
                    aria_label: IconKind::LinkedIn.label().to_string(),
                    Icon { kind: IconKind::LinkedIn, size: 20 }
                }
                LinkButton {
                    href: links.github.to_string(),
                    variant: ButtonVariant::Plain,
                    aria_label: IconKind::GitHub.label().to_string(),
                    Icon { kind: IconKind::GitHub, size: 20 }
                }
                div { class: "nav-dock-divider" }
            }
            div { class: "nav-dock-group",
                PillButton {
                    variant: ButtonVariant::Plain,
                    aria_label: current.toggle_label().to_string(),
                    onclick: move |_| toggle_theme(theme, root),
                    Icon { kind: toggle_icon, size: 20 }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::PROFILE;

    use crate::components::test_support::render;
    use crate::context::provide_page_state;

    #[test]
    fn light_theme_shows_moon_toggle() {
        fn app() -> Element {
            provide_page_state();
            rsx! { NavDock { links: PROFILE.links } }
        }
        let html = render(app);

        assert!(html.contains("aria-label=\"Switch to dark theme\""));
        assert!(html.contains("href=\"#\""));
        assert!(html.contains("href=\"https://github.com/SahilKalarkar\""));
    }
}
