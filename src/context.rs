//! Page-wide state provided through Dioxus context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! provide_page_state();
//!
//! // In child components
//! let theme = use_theme();
//! ```

use std::rc::Rc;

use dioxus::prelude::*;
use portfolio_core::{DialogState, ThemeSwitch};

/// Mounted handle of the root container the theme colors apply to.
///
/// `None` until the root section has mounted.
#[derive(Clone, Copy)]
pub struct ThemeRoot(pub Signal<Option<Rc<MountedData>>>);

/// Register theme, theme root, and contact dialog state for the page.
pub fn provide_page_state() {
    use_context_provider(|| Signal::new(ThemeSwitch::new()));
    use_context_provider(|| ThemeRoot(Signal::new(None)));
    use_context_provider(|| Signal::new(DialogState::new()));
}

/// Hook to access the theme flag.
pub fn use_theme() -> Signal<ThemeSwitch> {
    use_context::<Signal<ThemeSwitch>>()
}

/// Hook to access the theme root handle.
pub fn use_theme_root() -> ThemeRoot {
    use_context::<ThemeRoot>()
}

/// Hook to access the "Hire Me" contact dialog state.
pub fn use_contact_dialog() -> Signal<DialogState> {
    use_context::<Signal<DialogState>>()
}

/// Flip the theme, logging instead of failing when the root is not mounted.
pub fn toggle_theme(mut theme: Signal<ThemeSwitch>, root: ThemeRoot) {
    let target = root.0.read();
    if let Err(e) = theme.write().toggle(target.as_ref()) {
        tracing::warn!("Theme toggle ignored: {}", e);
    }
}

