//! Dialog Surface Component
//!
//! Modal sheet over a dimmed backdrop. Closes on backdrop click, the close
//! button, or Escape; the caller decides what "closed" means by handling
//! `on_dismiss`.

use dioxus::prelude::*;
use portfolio_core::DismissReason;

use crate::components::{Icon, IconKind};

/// Modal dialog rendered only while `open`
///
/// # Example
///
/// ```rust,ignore
/// let mut dialog = use_signal(DialogState::new);
///
/// rsx! {
///     DialogSurface {
///         open: dialog.read().is_open(),
///         title: "Contact Me".to_string(),
///         on_dismiss: move |reason| { dialog.write().dismiss(reason); },
///         p { "..." }
///     }
/// }
/// ```
#[component]
pub fn DialogSurface(
    /// Whether the dialog is shown
    open: bool,
    /// Heading, also the accessible name
    title: String,
    /// Called once per dismissal with its cause
    on_dismiss: EventHandler<DismissReason>,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "dialog-overlay",
            onclick: move |_| on_dismiss.call(DismissReason::Overlay),
        }
        div {
            class: "dialog-content",
            role: "dialog",
            "aria-modal": "true",
            "aria-label": "{title}",
            tabindex: "-1",
            onmounted: move |e| async move {
                let _ = e.set_focus(true).await;
            },
            onkeydown: move |e: KeyboardEvent| {
                if e.key() == Key::Escape {
                    on_dismiss.call(DismissReason::Escape);
                }
            },
            button {
                class: "dialog-close",
                r#type: "button",
                "aria-label": "Close",
                onclick: move |_| on_dismiss.call(DismissReason::CloseButton),
                Icon { kind: IconKind::Close, size: 20 }
            }
            div { class: "dialog-body",
                h2 { class: "dialog-title", "{title}" }
                {children}
            }
        }
    }
}
