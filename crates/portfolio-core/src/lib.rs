//! Portfolio Core Library
//!
//! Everything the portfolio page shows and every state transition it makes,
//! without any UI framework.
//!
//! ## Overview
//!
//! - [`content`]: the authored tables (tech stack groups, projects) and
//!   profile text, published verbatim
//! - [`theme`]: the light/dark flag and the colors derived from it
//! - [`layout`]: skill bar widths and project grid placement
//! - [`widgets`]: accordion, dialog, reveal-once and typewriter state
//!
//! ## Quick Start
//!
//! ```
//! use portfolio_core::{Portfolio, ThemeSwitch};
//!
//! let portfolio = Portfolio::authored();
//! assert!(portfolio.validate().is_ok());
//!
//! let mut theme = ThemeSwitch::new();
//! let root = ();
//! theme.toggle(Some(&root)).unwrap();
//! assert!(theme.is_dark());
//! ```

pub mod content;
pub mod error;
pub mod layout;
pub mod logging;
pub mod theme;
pub mod widgets;

// Re-exports
pub use content::{
    render_markdown, Education, Links, Portfolio, Profile, Project, Skill, TechStackGroup,
    PROFILE, PROJECTS, TECH_STACK_GROUPS,
};
pub use error::{PortfolioError, PortfolioResult};
pub use layout::{card_placement, dom_id, skill_bar_width, skill_fill_percent, CardPlacement};
pub use theme::{RootStyle, Theme, ThemeSwitch};
pub use widgets::{
    AccordionState, DialogState, DismissReason, RevealOnce, Typewriter, TypewriterOptions,
};
