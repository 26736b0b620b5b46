//! Input event handling.
//!
//! Handles keyboard and mouse events, routing them to shortcuts,
//! overlays, or the focused input.

mod event;
mod keys;
mod mouse;
mod overlay;

pub use event::handle_event;
