//! Color constants used from Rust.
//!
//! Everything else is in the stylesheet's custom properties.

/// Portrait blob fill (cyan-400)
pub const CYAN: &str = "#22d3ee";
