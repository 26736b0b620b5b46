use crossterm::event::KeyEventKind;

use crate::app::state::App;
use crate::events::AppEvent;

use super::keys::handle_key;
use super::mouse::handle_mouse_event;

/// Main event dispatcher.
pub fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Input(key) => {
            if key.kind != KeyEventKind::Release {
                handle_key(app, key);
            }
        }
        AppEvent::Mouse(mouse) => handle_mouse_event(app, mouse),
        AppEvent::Resize => {}
        AppEvent::SurfaceSettled { generation } => {
            app.surface.settle(generation);
        }
    }
}
