//! Light/dark theme state.
//!
//! The page tracks a single boolean. Root container colors are derived from
//! it on every render instead of being written into the element's style.

use serde::Serialize;

use crate::error::{PortfolioError, PortfolioResult};

/// The two page themes
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// The other theme
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Root container background color
    pub fn background(&self) -> &'static str {
        match self {
            Theme::Light => "white",
            Theme::Dark => "black",
        }
    }

    /// Root container text color
    pub fn foreground(&self) -> &'static str {
        match self {
            Theme::Light => "black",
            Theme::Dark => "white",
        }
    }

    pub fn root_style(&self) -> RootStyle {
        RootStyle {
            background: self.background(),
            color: self.foreground(),
        }
    }

    /// Accessible label for the control that switches away from this theme
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Light => "Switch to dark theme",
            Theme::Dark => "Switch to light theme",
        }
    }
}

/// The two visual properties the theme controls
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RootStyle {
    pub background: &'static str,
    pub color: &'static str,
}

impl RootStyle {
    /// Inline CSS for the root container
    pub fn css(&self) -> String {
        format!("background-color: {}; color: {};", self.background, self.color)
    }
}

/// Owner of the theme flag.
///
/// Created light, flipped only through [`ThemeSwitch::toggle`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ThemeSwitch {
    is_dark: bool,
}

impl ThemeSwitch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    pub fn theme(&self) -> Theme {
        Theme::from_dark(self.is_dark)
    }

    /// Flip the theme if the render target is present.
    ///
    /// With no target the flag is left untouched and the error says why;
    /// callers log it and carry on.
    pub fn toggle<T>(&mut self, target: Option<&T>) -> PortfolioResult<Theme> {
        if target.is_none() {
            return Err(PortfolioError::RenderTargetUnavailable(
                "theme root".to_string(),
            ));
        }

        self.is_dark = !self.is_dark;
        let theme = self.theme();
        tracing::debug!(?theme, "theme toggled");
        Ok(theme)
    }
}
