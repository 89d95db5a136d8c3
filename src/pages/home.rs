//! Home page: the whole portfolio.

use dioxus::prelude::*;
use portfolio_core::Portfolio;

use crate::components::{
    About, ContactDialog, EducationCard, Footer, Hero, NavDock, ProjectGallery, TechStack,
};
use crate::context::{use_theme, use_theme_root};

/// The single page.
///
/// The root section's colors come from the theme flag; its mounted handle is
/// what the theme toggle checks for before flipping.
#[component]
pub fn Home(portfolio: Portfolio) -> Element {
    let theme = use_theme();
    let mut root = use_theme_root().0;
    let style = theme.read().theme().root_style().css();
    let profile = portfolio.profile;

    rsx! {
        section {
            class: "page-root",
            style: "{style}",
            onmounted: move |e| root.set(Some(e.data())),

            section { class: "container",
                Hero { profile }
                About { markdown: profile.about }
                EducationCard { education: profile.education }
                TechStack { groups: portfolio.tech_stack }
                ProjectGallery { projects: portfolio.projects }
            }
            section { class: "container footer-container",
                Footer { profile }
                NavDock { links: profile.links }
            }
            ContactDialog { links: profile.links }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::{PROJECTS, TECH_STACK_GROUPS};

    use crate::components::test_support::render;
    use crate::context::provide_page_state;

    fn app() -> Element {
        provide_page_state();
        rsx! { Home { portfolio: Portfolio::authored() } }
    }

    // Tokio runtime so the typewriter task has a timer if it gets polled
    #[tokio::test]
    async fn page_starts_in_light_theme() {
        let html = render(app);
        assert!(html.contains("style=\"background-color: white; color: black;\""));
    }

    #[tokio::test]
    async fn page_renders_every_table_entry() {
        let html = render(app);

        assert_eq!(
            html.matches("class=\"accordion-item\"").count(),
            TECH_STACK_GROUPS.len()
        );
        assert_eq!(html.matches("class=\"project-card").count(), PROJECTS.len());
    }

    #[tokio::test]
    async fn static_paths_are_verbatim() {
        let html = render(app);

        assert!(html.contains("href=\"/RESUME(SAHIL KALARKAR).pdf\""));
        assert!(html.contains("href=\"/SK.png\""));
        assert!(html.contains("href=\"https://www.linkedin.com/in/sahil-kalarkar-b09b79233\""));
        // Contact dialog is closed until "Hire Me"
        assert!(!html.contains("mailto:"));
    }
}
