//! Typewriter Text Component
//!
//! Types and deletes phrases in a loop with a blinking caret.

use dioxus::prelude::*;
use portfolio_core::{Typewriter, TypewriterOptions};

/// Cycling typewriter text
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TypewriterText {
///         phrases: vec!["Software Engineer".to_string(), "Web Developer".to_string()],
///     }
/// }
/// ```
#[component]
pub fn TypewriterText(
    phrases: Vec<String>,
    #[props(default)] options: Option<TypewriterOptions>,
) -> Element {
    let mut typewriter =
        use_signal(move || Typewriter::new(phrases, options.unwrap_or_default()));

    use_future(move || async move {
        loop {
            let next = typewriter.write().tick();
            match next {
                Some(delay) => tokio::time::sleep(delay).await,
                None => break,
            }
        }
    });

    let text = typewriter.read().text().to_string();

    rsx! {
        span { class: "typewriter", "aria-live": "polite",
            span { class: "typewriter-text", "{text}" }
            span { class: "typewriter-cursor", "aria-hidden": "true", "|" }
        }
    }
}
