use crossterm::event::{KeyCode, KeyEvent};

use crate::app::state::{App, Focus};
use crate::browser::{ContextMenu, Intent};
use crate::menu::{menu_items, MenuAction};
use crate::palette::palette_entries;

use super::keys::edit_text;

pub(super) fn open_palette(app: &mut App) {
    if app.browser.ui().context_menu.is_some() {
        app.dispatch(Intent::CloseContextMenu);
    }
    app.palette.query.clear();
    app.palette.selected = 0;
    app.dispatch(Intent::OpenPalette);
}

pub(super) fn close_palette(app: &mut App) {
    app.palette.query.clear();
    app.palette.selected = 0;
    app.dispatch(Intent::ClosePalette);
}

pub(super) fn handle_palette_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => close_palette(app),
        KeyCode::Enter => choose_palette_entry(app, app.palette.selected),
        KeyCode::Up => {
            let len = palette_entries(&app.browser, &app.palette.query).len();
            app.palette.selected = wrap_selection(app.palette.selected, len, -1);
        }
        KeyCode::Down => {
            let len = palette_entries(&app.browser, &app.palette.query).len();
            app.palette.selected = wrap_selection(app.palette.selected, len, 1);
        }
        _ => {
            if edit_text(&mut app.palette.query, &key) {
                app.palette.selected = 0;
            }
        }
    }
}

pub(super) fn choose_palette_entry(app: &mut App, index: usize) {
    let entries = palette_entries(&app.browser, &app.palette.query);
    let Some(entry) = entries.get(index) else {
        return;
    };
    let intent = entry.intent(&app.config.search.url);
    close_palette(app);
    app.dispatch(intent);
}

pub(super) fn open_menu(app: &mut App, menu: ContextMenu) {
    if app.browser.ui().palette_open {
        close_palette(app);
    }
    app.menu_selected = 0;
    app.dispatch(Intent::OpenContextMenu(menu));
}

pub(super) fn handle_menu_key(app: &mut App, key: KeyEvent) {
    let Some(menu) = app.browser.ui().context_menu.clone() else {
        return;
    };
    let len = menu_items(&app.browser, &menu.target).len();
    match key.code {
        KeyCode::Esc => app.dispatch(Intent::CloseContextMenu),
        KeyCode::Enter => choose_menu_item(app, app.menu_selected),
        KeyCode::Up | KeyCode::Char('k') => {
            app.menu_selected = wrap_selection(app.menu_selected, len, -1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.menu_selected = wrap_selection(app.menu_selected, len, 1);
        }
        _ => {}
    }
}

pub(super) fn choose_menu_item(app: &mut App, index: usize) {
    let Some(menu) = app.browser.ui().context_menu.clone() else {
        return;
    };
    let items = menu_items(&app.browser, &menu.target);
    app.dispatch(Intent::CloseContextMenu);
    let Some(item) = items.get(index) else {
        return;
    };
    match item.action() {
        MenuAction::Apply(intent) => app.dispatch(intent),
        MenuAction::BeginRename(id) => {
            if let Some(space) = app.browser.space(&id) {
                app.rename_draft = space.name.clone();
                app.focus = Focus::Rename(id);
            }
        }
    }
}

fn wrap_selection(current: usize, len: usize, delta: isize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    let mut next = current as isize + delta;
    if next < 0 {
        next = len - 1;
    } else if next >= len {
        next = 0;
    }
    next as usize
}
