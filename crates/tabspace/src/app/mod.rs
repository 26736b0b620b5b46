//! Application orchestration and main event loop.
//!
//! This module owns the terminal host lifecycle:
//! - Initialization (terminal setup, config, logging, state store)
//! - Event loop (input, surface signals)
//! - View state (focus, drafts, selection, gestures)
//! - UI rendering delegation
//!
//! The app is structured around a single `App` struct that holds
//! all state. Events are processed sequentially in the main loop.
//!
//! Submodules:
//! - state: App struct and type definitions
//! - runner: main loop and terminal setup
//! - input: keyboard and mouse event handling
//! - render: UI rendering methods

mod input;
mod render;
mod runner;
mod state;


pub use runner::run;
