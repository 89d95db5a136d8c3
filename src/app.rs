use dioxus::prelude::*;
use portfolio_core::Portfolio;

use crate::context::provide_page_state;
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, document metadata, and page state.
#[component]
pub fn App() -> Element {
    provide_page_state();
    let portfolio = Portfolio::authored();

    rsx! {
        document::Title { "{portfolio.profile.name}" }
        document::Meta { property: "og:title", content: "{portfolio.profile.og_title}" }
        style { {GLOBAL_STYLES} }
        Home { portfolio }
    }
}
