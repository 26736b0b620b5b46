//! Panel edge resizing with pointer capture.
//!
//! Pressing on a panel edge captures the pointer into a `ResizeGesture`.
//! Every later drag event is routed to the gesture no matter where the
//! pointer is, until the button is released.

use crate::browser::{Intent, Panel};

/// Pixels represented by one terminal column.
pub const CELL_WIDTH_PX: u16 = 8;

pub fn px_to_cols(px: u16) -> u16 {
    (px / CELL_WIDTH_PX).max(1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeGesture {
    panel: Panel,
    start_x: u16,
    start_width: u16,
}

impl ResizeGesture {
    pub fn capture(panel: Panel, start_x: u16, start_width: u16) -> Self {
        Self {
            panel,
            start_x,
            start_width,
        }
    }

    /// Resize intent for the pointer at column `pointer_x`. The sidebar grows
    /// to the right, the chat panel grows to the left.
    pub fn track(&self, pointer_x: u16) -> Intent {
        let delta = (i32::from(pointer_x) - i32::from(self.start_x)) * i32::from(CELL_WIDTH_PX);
        let width = match self.panel {
            Panel::Sidebar => i32::from(self.start_width) + delta,
            Panel::Chat => i32::from(self.start_width) - delta,
        };
        Intent::ResizePanel {
            panel: self.panel,
            width,
        }
    }
}
