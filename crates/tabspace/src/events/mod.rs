//! Application event types.
//!
//! Defines the event enum used for communication between the input
//! thread, content surface workers, and the main event loop.
//!
//! Events are sent via mpsc channels and processed sequentially
//! in the main loop to update app state and trigger re-renders.

use crossterm::event::{KeyEvent, MouseEvent};

#[derive(Debug)]
pub enum AppEvent {
    Input(KeyEvent),
    Mouse(MouseEvent),
    Resize,
    /// The content surface finished (or failed) loading a navigation.
    SurfaceSettled {
        generation: u64,
    },
}
