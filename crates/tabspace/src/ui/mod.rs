//! UI rendering and layout utilities.
//!
//! This module contains pure rendering logic separated from state.
//! All functions here take data and produce ratatui widgets without
//! side effects.
//!
//! Submodules:
//! - layout: helpers for rect manipulation, centering and anchoring
//! - widgets: theme colors and reusable line builders

mod layout;
mod widgets;

pub use layout::{anchored_rect, centered_rect, inset_horizontal};
pub use widgets::{hex_color, list_line, theme_colors, ThemeColors};
