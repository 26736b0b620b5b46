use std::time::{Duration, Instant};

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::app::state::{contains, App, Focus};
use crate::browser::{ContextMenu, Intent, MenuTarget, Panel, SpaceSwitch};
use crate::drag::{resolve_drop, DragPayload, DropTarget};
use crate::resize::{px_to_cols, ResizeGesture};

use super::overlay::{choose_menu_item, choose_palette_entry, close_palette, open_menu};

const DOUBLE_CLICK: Duration = Duration::from_millis(400);
/// Columns at the left edge that reveal a hidden sidebar.
const PEEK_ZONE_COLS: u16 = 1;

pub(super) fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    // A captured resize gesture receives every drag and the release,
    // wherever the pointer is.
    if let Some(gesture) = app.resize {
        match mouse.kind {
            MouseEventKind::Drag(MouseButton::Left) => {
                app.dispatch(gesture.track(mouse.column));
                return;
            }
            MouseEventKind::Up(_) => {
                app.resize = None;
                return;
            }
            _ => {}
        }
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_left_press(app, mouse),
        MouseEventKind::Down(MouseButton::Right) => handle_right_press(app, mouse),
        MouseEventKind::Drag(MouseButton::Left) => {
            if app.drag.is_some() {
                app.drag_hover = Some((mouse.column, mouse.row));
            }
        }
        MouseEventKind::Up(MouseButton::Left) => handle_release(app, mouse),
        MouseEventKind::Moved => update_peek(app, mouse),
        _ => {}
    }
}

fn handle_left_press(app: &mut App, mouse: MouseEvent) {
    let (column, row) = (mouse.column, mouse.row);
    let double = is_double_click(app, column, row);

    if app.browser.ui().context_menu.is_some() {
        let hit = app
            .hits
            .menu_rows
            .iter()
            .position(|rect| contains(*rect, column, row));
        let inside = app.hits.menu.is_some_and(|rect| contains(rect, column, row));
        match hit {
            Some(index) => choose_menu_item(app, index),
            None if inside => {}
            None => app.dispatch(Intent::CloseContextMenu),
        }
        return;
    }

    if app.browser.ui().palette_open {
        let hit = app
            .hits
            .palette_rows
            .iter()
            .position(|rect| contains(*rect, column, row));
        match hit {
            Some(index) => choose_palette_entry(app, index),
            None => close_palette(app),
        }
        return;
    }

    for (edge, panel) in [
        (app.hits.sidebar_edge, Panel::Sidebar),
        (app.hits.chat_edge, Panel::Chat),
    ] {
        if edge.is_some_and(|rect| contains(rect, column, row)) {
            if double {
                app.dispatch(Intent::ResetPanel(panel));
            } else {
                let width = app.browser.ui().panel_width(panel);
                app.resize = Some(ResizeGesture::capture(panel, column, width));
            }
            return;
        }
    }

    if let Some(id) = app.hits.tab_at(column, row).cloned() {
        app.focus = Focus::Sidebar;
        match DragPayload::begin(&app.browser, &id) {
            Ok(payload) => {
                app.drag = Some(payload);
                app.drag_hover = None;
            }
            Err(err) => tracing::debug!(%err, "drag not started"),
        }
        app.dispatch(Intent::SelectTab(id));
        return;
    }

    let dot = app
        .hits
        .space_dots
        .iter()
        .find(|(rect, _)| contains(*rect, column, row))
        .map(|(_, id)| id.clone());
    if let Some(id) = dot {
        app.dispatch(Intent::SwitchSpace(SpaceSwitch::To(id)));
        return;
    }

    if app.hits.new_tab.is_some_and(|rect| contains(rect, column, row)) {
        app.dispatch(Intent::CreateTab { url: None });
        return;
    }

    if app.hits.address.is_some_and(|rect| contains(rect, column, row)) {
        app.focus = Focus::Address;
        return;
    }

    let chip = app
        .hits
        .chips
        .iter()
        .find(|(rect, _)| contains(*rect, column, row))
        .map(|(_, index)| *index);
    if let Some(index) = chip {
        app.chat.apply_suggestion(index);
        app.focus = Focus::Chat;
        return;
    }

    if app.hits.chat_input.is_some_and(|rect| contains(rect, column, row)) {
        app.focus = Focus::Chat;
        return;
    }

    if app.focus == Focus::Address {
        app.focus = Focus::Sidebar;
        app.address_draft = app
            .browser
            .active_tab()
            .map(|tab| tab.url.clone())
            .unwrap_or_default();
    }
}

fn handle_right_press(app: &mut App, mouse: MouseEvent) {
    let (x, y) = (mouse.column, mouse.row);
    if let Some(id) = app.hits.tab_at(x, y).cloned() {
        open_menu(app, ContextMenu { x, y, target: MenuTarget::Tab(id) });
        return;
    }
    let on_space = app.hits.space_header.is_some_and(|rect| contains(rect, x, y));
    let dot = app
        .hits
        .space_dots
        .iter()
        .find(|(rect, _)| contains(*rect, x, y))
        .map(|(_, id)| id.clone());
    let target = match dot {
        Some(id) => Some(id),
        None if on_space => Some(app.browser.active_space_id().clone()),
        None => None,
    };
    if let Some(id) = target {
        open_menu(app, ContextMenu { x, y, target: MenuTarget::Space(id) });
    }
}

fn handle_release(app: &mut App, mouse: MouseEvent) {
    let Some(payload) = app.drag.take() else {
        return;
    };
    let moved = app.drag_hover.take().is_some();
    if !moved {
        // Plain click: the press already selected the tab.
        return;
    }
    let (column, row) = (mouse.column, mouse.row);
    let target = match app.hits.tab_at(column, row) {
        Some(id) => Some(DropTarget::Tab(id.clone())),
        None => app.hits.bucket_at(column, row).map(DropTarget::Bucket),
    };
    let Some(target) = target else {
        return;
    };
    match resolve_drop(&app.browser, &payload, target) {
        Ok(intent) => app.dispatch(intent),
        Err(err) => tracing::debug!(%err, "drop rejected"),
    }
}

fn update_peek(app: &mut App, mouse: MouseEvent) {
    let ui = app.browser.ui();
    if ui.sidebar_visible {
        return;
    }
    let (peeking, sidebar_cols) = (ui.peeking, px_to_cols(ui.sidebar_width));
    if !peeking && mouse.column < PEEK_ZONE_COLS {
        app.dispatch(Intent::SetPeek(true));
    } else if peeking && mouse.column >= sidebar_cols {
        app.dispatch(Intent::SetPeek(false));
    }
}

fn is_double_click(app: &mut App, column: u16, row: u16) -> bool {
    let now = Instant::now();
    let double = app.last_click.is_some_and(|(at, last_column, last_row)| {
        now.duration_since(at) <= DOUBLE_CLICK && last_column == column && last_row == row
    });
    app.last_click = if double { None } else { Some((now, column, row)) };
    double
}
