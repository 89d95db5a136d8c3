//! Contact Dialog Component
//!
//! Bottom sheet opened by "Hire Me". Offers a single action: the email link.

use dioxus::prelude::*;
use portfolio_core::Links;
use portfolio_ui::{DialogSurface, Icon, IconKind, LinkButton};

use crate::context::use_contact_dialog;

#[component]
pub fn ContactDialog(links: Links) -> Element {
    let mut dialog = use_contact_dialog();
    let open = dialog.read().is_open();

    rsx! {
        DialogSurface {
            open,
            title: "Contact Me".to_string(),
            on_dismiss: move |reason| {
                dialog.write().dismiss(reason);
            },
            p { class: "contact-intro", "Let's bulid something great together. \u{1F447} " }
            div { class: "contact-actions",
                LinkButton { href: links.mailto(),
                    Icon { kind: IconKind::Mail, size: 24 }
                    "{links.email}"
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
    fn closed_by_default() {
        fn app() -> Element {
            provide_page_state();
            rsx! { ContactDialog { links: PROFILE.links } }
        }
        let html = render(app);
        assert!(!html.contains("role=\"dialog\""));
        assert!(!html.contains("mailto:"));
    }

    #[test]
    fn open_dialog_offers_only_email() {
        fn app() -> Element {
            provide_page_state();
            let mut dialog = use_contact_dialog();
            use_hook(move || {
                dialog.write().open();
            });
            rsx! { ContactDialog { links: PROFILE.links } }
        }
        let html = render(app);

        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("Contact Me"));
        assert_eq!(html.matches("href=").count(), 1);
        assert!(html.contains("href=\"mailto:sahilkalarkar@gmail.com\""));
    }
}
