//! Icon Set
//!
//! Inline SVG icons (Lucide outlines plus the page's two custom glyphs).
//! All icons paint with `currentColor` so they follow the surrounding text.

use dioxus::prelude::*;

/// Available icons
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IconKind {
    LinkedIn,
    GitHub,
    Home,
    Moon,
    Sun,
    ChevronDown,
    Mail,
    /// Double down-arrow on the resume button
    Download,
    /// People glyph on the hire button
    Handshake,
    Close,
}

impl IconKind {
    /// Accessible name for icon-only links
    pub fn label(&self) -> &'static str {
        match self {
            IconKind::LinkedIn => "LinkedIn",
            IconKind::GitHub => "GitHub",
            IconKind::Home => "Home",
            IconKind::Moon => "Dark theme",
            IconKind::Sun => "Light theme",
            IconKind::ChevronDown => "Expand",
            IconKind::Mail => "Email",
            IconKind::Download => "Download",
            IconKind::Handshake => "Hire",
            IconKind::Close => "Close",
        }
    }
}

/// Inline SVG icon
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Icon { kind: IconKind::GitHub, size: 25 }
/// }
/// ```
#[component]
pub fn Icon(
    kind: IconKind,
    /// Width and height in pixels
    #[props(default = 20)]
    size: u32,
    #[props(default)] class: Option<String>,
) -> Element {
    let class = class.unwrap_or_default();

    match kind {
        IconKind::Download => rsx! {
            svg {
                class: "icon {class}",
                xmlns: "http://www.w3.org/2000/svg",
                width: "{size}",
                height: "{size}",
                view_box: "0 0 448 512",
                fill: "currentColor",
                "aria-hidden": "true",
                path { d: "M246.6 470.6c-12.5 12.5-32.8 12.5-45.3 0l-160-160c-12.5-12.5-12.5-32.8 0-45.3s32.8-12.5 45.3 0L224 402.7 361.4 265.4c12.5-12.5 32.8-12.5 45.3 0s12.5 32.8 0 45.3l-160 160zm160-352l-160 160c-12.5 12.5-32.8 12.5-45.3 0l-160-160c-12.5-12.5-12.5-32.8 0-45.3s32.8-12.5 45.3 0L224 210.7 361.4 73.4c12.5-12.5 32.8-12.5 45.3 0s12.5 32.8 0 45.3z" }
            }
        },
        IconKind::Handshake => rsx! {
            svg {
                class: "icon {class}",
                xmlns: "http://www.w3.org/2000/svg",
                width: "{size}",
                height: "{size}",
                view_box: "0 0 24 24",
                fill: "currentColor",
                "aria-hidden": "true",
                path { fill: "none", d: "M0 0h24v24H0z" }
                path { d: "M11 14H9a9 9 0 0 1 9-9v2c-3.87 0-7 3.13-7 7zm7-3V9c-2.76 0-5 2.24-5 5h2c0-1.66 1.34-3 3-3zM7 4c0-1.11-.89-2-2-2s-2 .89-2 2 .89 2 2 2 2-.89 2-2zm4.45.5h-2A2.99 2.99 0 0 1 6.5 7h-3C2.67 7 2 7.67 2 8.5V11h6V8.74a4.97 4.97 0 0 0 3.45-4.24zM19 17c1.11 0 2-.89 2-2s-.89-2-2-2-2 .89-2 2 .89 2 2 2zm1.5 1h-3a2.99 2.99 0 0 1-2.95-2.5h-2A4.97 4.97 0 0 0 16 19.74V22h6v-2.5c0-.83-.67-1.5-1.5-1.5z" }
            }
        },
        IconKind::Mail => rsx! {
            svg {
                class: "icon {class}",
                xmlns: "http://www.w3.org/2000/svg",
                width: "{size}",
                height: "{size}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "1.5",
                "aria-hidden": "true",
                path {
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    d: "M21.75 6.75v10.5a2.25 2.25 0 01-2.25 2.25H4.5a2.25 2.25 0 01-2.25-2.25V6.75M21.75 6.75l-9.75 6.75L2.25 6.75M21.75 6.75H2.25",
                }
            }
        },
        outline => rsx! {
            svg {
                class: "icon {class}",
                xmlns: "http://www.w3.org/2000/svg",
                width: "{size}",
                height: "{size}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                "aria-hidden": "true",
                {render_outline(outline)}
            }
        },
    }
}

/// Path data for the Lucide outline icons
fn render_outline(kind: IconKind) -> Element {
    match kind {
        IconKind::LinkedIn => rsx! {
            path { d: "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" }
            rect { x: "2", y: "9", width: "4", height: "12" }
            circle { cx: "4", cy: "4", r: "2" }
        },
        IconKind::GitHub => rsx! {
            path { d: "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4" }
            path { d: "M9 18c-4.51 2-5-2-7-2" }
        },
        IconKind::Home => rsx! {
            path { d: "m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" }
            polyline { points: "9 22 9 12 15 12 15 22" }
        },
        IconKind::Moon => rsx! {
            path { d: "M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" }
        },
        IconKind::Sun => rsx! {
            circle { cx: "12", cy: "12", r: "4" }
            path { d: "M12 2v2" }
            path { d: "M12 20v2" }
            path { d: "m4.93 4.93 1.41 1.41" }
            path { d: "m17.66 17.66 1.41 1.41" }
            path { d: "M2 12h2" }
            path { d: "M20 12h2" }
            path { d: "m6.34 17.66-1.41 1.41" }
            path { d: "m19.07 4.93-1.41 1.41" }
        },
        IconKind::ChevronDown => rsx! {
            path { d: "m6 9 6 6 6-6" }
        },
        IconKind::Close => rsx! {
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        },
        // Filled glyphs are handled by Icon directly
        IconKind::Mail | IconKind::Download | IconKind::Handshake => rsx! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_labels() {
        assert_eq!(IconKind::LinkedIn.label(), "LinkedIn");
        assert_eq!(IconKind::Moon.label(), "Dark theme");
        assert_eq!(IconKind::Sun.label(), "Light theme");
    }

    #[test]
    fn renders_current_color_svg() {
        fn app() -> Element {
            rsx! { Icon { kind: IconKind::Sun, size: 25 } }
        }
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("<svg"));
        assert!(html.contains("width=\"25\""));
        assert!(html.contains("stroke=\"currentColor\""));
    }
}
