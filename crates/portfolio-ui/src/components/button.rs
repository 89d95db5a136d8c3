//! Button Components
//!
//! Link and button styles used across the page:
//! - Badge: cyan rounded link with an icon (profile links, email)
//! - Pill: white outlined pill with black text (resume, hire me)
//! - Plain: bare icon link (footer, navigation dock)

use dioxus::prelude::*;

/// Link/button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Cyan rounded rectangle with icon and small bold label
    #[default]
    Badge,
    /// White pill with cyan outline; text stays black in both themes
    Pill,
    /// No chrome, icon only
    Plain,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Badge => "btn-badge",
            ButtonVariant::Pill => "btn-pill",
            ButtonVariant::Plain => "btn-plain",
        }
    }
}

fn join_class(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// Properties for the LinkButton component
#[derive(Clone, PartialEq, Props)]
pub struct LinkButtonProps {
    /// Link target, used verbatim
    pub href: String,
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Accessible label for icon-only links
    #[props(default)]
    pub aria_label: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
    pub children: Element,
}

/// Anchor styled as a button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     LinkButton {
///         href: "https://github.com/SahilKalarkar".to_string(),
///         Icon { kind: IconKind::GitHub, size: 25 }
///         "github/SahilKalarkar"
///     }
/// }
/// ```
#[component]
pub fn LinkButton(props: LinkButtonProps) -> Element {
    let full_class = join_class(props.variant.class(), props.class.as_deref());

    rsx! {
        a {
            class: "{full_class}",
            href: "{props.href}",
            "aria-label": props.aria_label.clone(),
            {props.children}
        }
    }
}

/// Properties for the PillButton component
#[derive(Clone, PartialEq, Props)]
pub struct PillButtonProps {
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label when the content is an icon
    #[props(default)]
    pub aria_label: Option<String>,
    /// Visual style variant
    #[props(default = ButtonVariant::Pill)]
    pub variant: ButtonVariant,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Clickable button in one of the link styles
#[component]
pub fn PillButton(props: PillButtonProps) -> Element {
    let full_class = join_class(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": props.aria_label.clone(),
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Badge.class(), "btn-badge");
        assert_eq!(ButtonVariant::Pill.class(), "btn-pill");
        assert_eq!(ButtonVariant::Plain.class(), "btn-plain");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Badge);
    }

    #[test]
    fn extra_classes_are_appended() {
        assert_eq!(join_class("btn-pill", None), "btn-pill");
        assert_eq!(join_class("btn-pill", Some("")), "btn-pill");
        assert_eq!(join_class("btn-plain", Some("ml-2")), "btn-plain ml-2");
    }

    #[test]
    fn link_href_is_verbatim() {
        fn app() -> Element {
            rsx! {
                LinkButton {
                    href: "/RESUME(SAHIL KALARKAR).pdf".to_string(),
                    variant: ButtonVariant::Pill,
                    "Resume"
                }
            }
        }
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("href=\"/RESUME(SAHIL KALARKAR).pdf\""));
        assert!(html.contains("class=\"btn-pill\""));
        assert!(html.contains("Resume"));
    }
}
