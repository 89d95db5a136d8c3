//! Accordion Components
//!
//! Collapsible sections in "multiple" mode. The open set lives with the
//! caller (usually an `AccordionState` in a signal); items only render it.
//! Closed content stays mounted but hidden so observers inside it keep
//! their element.

use dioxus::prelude::*;
use portfolio_core::dom_id;

use crate::components::{Icon, IconKind};

/// Properties for the AccordionItem component
#[derive(Clone, PartialEq, Props)]
pub struct AccordionItemProps {
    /// Item key, unique within the accordion
    pub value: String,
    /// Trigger text
    pub title: String,
    /// Whether the content is expanded
    pub open: bool,
    /// Called with `value` when the trigger is clicked
    pub on_toggle: EventHandler<String>,
    pub children: Element,
}

/// Container for accordion items
#[component]
pub fn Accordion(children: Element) -> Element {
    rsx! {
        div { class: "accordion", {children} }
    }
}

/// One collapsible section with a chevron trigger
///
/// # Example
///
/// ```rust,ignore
/// let mut state = use_signal(AccordionState::new);
///
/// rsx! {
///     Accordion {
///         AccordionItem {
///             value: "Frontend".to_string(),
///             title: "Frontend".to_string(),
///             open: state.read().is_open("Frontend"),
///             on_toggle: move |key: String| { state.write().toggle(&key); },
///             "content"
///         }
///     }
/// }
/// ```
#[component]
pub fn AccordionItem(props: AccordionItemProps) -> Element {
    let state = if props.open { "open" } else { "closed" };
    let content_id = dom_id(&["accordion", &props.value]);
    let value = props.value.clone();

    rsx! {
        div {
            class: "accordion-item",
            "data-state": state,
            h3 { class: "accordion-header",
                button {
                    class: "accordion-trigger",
                    r#type: "button",
                    "aria-expanded": if props.open { "true" } else { "false" },
                    "aria-controls": "{content_id}",
                    "data-state": state,
                    onclick: move |_| props.on_toggle.call(value.clone()),
                    "{props.title}"
                    Icon { kind: IconKind::ChevronDown, size: 16, class: "accordion-chevron".to_string() }
                }
            }
            div {
                id: "{content_id}",
                class: "accordion-content",
                role: "region",
                "data-state": state,
                hidden: !props.open,
                {props.children}
            }
        }
    }
}
