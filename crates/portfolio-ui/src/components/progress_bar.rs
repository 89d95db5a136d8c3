//! Animated Progress Bar Component
//!
//! Horizontal bar that fills to its percentage the first time it scrolls
//! into view. Visibility comes from an IntersectionObserver evaluated in the
//! webview; the latch itself is a `RevealOnce`, so leaving and re-entering
//! the viewport never replays the animation.

use dioxus::prelude::*;
use portfolio_core::{skill_fill_percent, RevealOnce};

/// Observer script; `__ID__` is replaced with the fill element's id.
/// Sends `true` once, on the first intersection, then disconnects.
const REVEAL_SCRIPT: &str = r#"
const el = document.getElementById("__ID__");
if (el) {
  const observer = new IntersectionObserver((entries) => {
    if (entries.some((entry) => entry.isIntersecting)) {
      observer.disconnect();
      dioxus.send(true);
    }
  });
  observer.observe(el);
}
"#;

fn reveal_script(id: &str) -> String {
    REVEAL_SCRIPT.replace("__ID__", id)
}

/// Properties for the ProgressBar component
#[derive(Clone, PartialEq, Props)]
pub struct ProgressBarProps {
    /// Element id for the fill; must be unique on the page
    pub id: String,
    /// Target fill, clamped to 0..=100
    pub percent: u8,
    /// Accessible name
    #[props(default)]
    pub label: Option<String>,
}

/// Progress bar that animates its fill once per page lifetime
///
/// The final width is carried in the `--fill` custom property and applied
/// by the `.revealed` class, so the transition runs in CSS.
#[component]
pub fn ProgressBar(props: ProgressBarProps) -> Element {
    let mut reveal = use_signal(RevealOnce::new);
    let fill = skill_fill_percent(props.percent);
    let revealed = reveal.read().is_revealed();
    let id = props.id.clone();

    let observe = move |_| {
        let script = reveal_script(&id);
        async move {
            let mut eval = document::eval(&script);
            let visible = match eval.recv::<bool>().await {
                Ok(visible) => visible,
                Err(e) => {
                    // No observer available: show the bar instead of leaving it empty
                    tracing::debug!("visibility observer failed: {:?}", e);
                    true
                }
            };
            reveal.write().fire(visible);
        }
    };

    rsx! {
        div {
            class: "progress-track",
            role: "progressbar",
            "aria-valuemin": "0",
            "aria-valuemax": "100",
            "aria-valuenow": "{fill}",
            "aria-label": props.label.clone(),
            div {
                id: "{props.id}",
                class: if revealed { "progress-fill revealed" } else { "progress-fill" },
                style: "--fill: {fill}%;",
                onmounted: observe,
            }
        }
    }
}
