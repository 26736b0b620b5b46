use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::state::{App, Focus};
use crate::browser::{ContextMenu, Intent, MenuTarget, Panel, SpaceId, SpaceSwitch};
use crate::keymap::Shortcut;

use super::overlay::{handle_menu_key, handle_palette_key, open_menu, open_palette};

const WIDTH_STEP_PX: i32 = 16;

pub(super) fn handle_key(app: &mut App, key: KeyEvent) {
    // Shortcuts win over every input, including text fields.
    if let Some(shortcut) = app.shortcuts.lookup(&key) {
        run_shortcut(app, shortcut);
        return;
    }
    if app.browser.ui().context_menu.is_some() {
        handle_menu_key(app, key);
        return;
    }
    if app.browser.ui().palette_open {
        handle_palette_key(app, key);
        return;
    }
    match app.focus.clone() {
        Focus::Sidebar => handle_sidebar_key(app, key),
        Focus::Address => handle_address_key(app, key),
        Focus::Chat => handle_chat_key(app, key),
        Focus::Rename(id) => handle_rename_key(app, key, id),
    }
}

fn run_shortcut(app: &mut App, shortcut: Shortcut) {
    tracing::debug!(?shortcut, "shortcut");
    match shortcut {
        Shortcut::Quit => app.should_quit = true,
        Shortcut::CommandPalette => open_palette(app),
        other => {
            if let Some(intent) = other.intent(&app.browser) {
                app.dispatch(intent);
            }
        }
    }
}

fn plain(key: &KeyEvent) -> bool {
    !key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
}

/// Shared single-line editing. Returns whether the key was consumed.
pub(super) fn edit_text(buffer: &mut String, key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(ch) if plain(key) => {
            buffer.push(ch);
            true
        }
        KeyCode::Backspace => {
            buffer.pop();
            true
        }
        _ => false,
    }
}

fn handle_sidebar_key(app: &mut App, key: KeyEvent) {
    if !plain(&key) {
        return;
    }
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => move_selection(app, 1),
        KeyCode::Up | KeyCode::Char('k') => move_selection(app, -1),
        KeyCode::Char('J') => move_selected_tab(app, 1),
        KeyCode::Char('K') => move_selected_tab(app, -1),
        KeyCode::Enter | KeyCode::Char('o') => {
            if let Some(id) = app.selected_tab() {
                app.dispatch(Intent::SelectTab(id));
            }
        }
        KeyCode::Char('p') => {
            if let Some(tab) = app.selected_tab().and_then(|id| app.browser.tab(&id).cloned()) {
                app.dispatch(Intent::SetPinned {
                    id: tab.id,
                    pinned: !tab.pinned,
                });
            }
        }
        KeyCode::Char('x') => {
            if let Some(id) = app.selected_tab() {
                app.dispatch(Intent::CloseTab(id));
            }
        }
        KeyCode::Char('n') => app.dispatch(Intent::CreateTab { url: None }),
        KeyCode::Char('e') => {
            app.focus = Focus::Address;
        }
        KeyCode::Char('N') => app.dispatch(Intent::CreateSpace),
        KeyCode::Char('D') => {
            let id = app.browser.active_space_id().clone();
            if app.browser.spaces().len() <= 1 {
                app.set_output("The last space cannot be deleted.".to_string());
                return;
            }
            app.dispatch(Intent::DeleteSpace(id));
        }
        KeyCode::Char('R') => {
            let space = app.browser.active_space();
            app.rename_draft = space.name.clone();
            app.focus = Focus::Rename(space.id.clone());
        }
        KeyCode::Char('m') => {
            if let Some(id) = app.selected_tab() {
                let (x, y) = app
                    .hits
                    .tab_rows
                    .iter()
                    .find(|(_, tab)| tab == &id)
                    .map(|(rect, _)| (rect.x, rect.y))
                    .unwrap_or((0, 0));
                let target = MenuTarget::Tab(id);
                open_menu(app, ContextMenu { x, y, target });
            }
        }
        KeyCode::Char('M') => {
            let target = MenuTarget::Space(app.browser.active_space_id().clone());
            let (x, y) = app
                .hits
                .space_header
                .map(|rect| (rect.x, rect.y))
                .unwrap_or((0, 0));
            open_menu(app, ContextMenu { x, y, target });
        }
        KeyCode::Char('c') => app.dispatch(Intent::ToggleChat),
        KeyCode::Char('a') => {
            if !app.browser.ui().chat_open {
                app.dispatch(Intent::ToggleChat);
            }
            app.focus = Focus::Chat;
        }
        KeyCode::Char('t') => app.dispatch(Intent::ToggleTheme),
        KeyCode::Char('[') => step_width(app, Panel::Sidebar, -WIDTH_STEP_PX),
        KeyCode::Char(']') => step_width(app, Panel::Sidebar, WIDTH_STEP_PX),
        KeyCode::Char('{') => step_width(app, Panel::Chat, -WIDTH_STEP_PX),
        KeyCode::Char('}') => step_width(app, Panel::Chat, WIDTH_STEP_PX),
        KeyCode::Char('=') => {
            app.dispatch(Intent::ResetPanel(Panel::Sidebar));
            app.dispatch(Intent::ResetPanel(Panel::Chat));
        }
        KeyCode::Char('r') => app.reload(),
        KeyCode::Char(digit @ '1'..='9') => {
            let index = digit as usize - '1' as usize;
            if let Some(space) = app.browser.spaces().get(index) {
                let id = space.id.clone();
                app.dispatch(Intent::SwitchSpace(SpaceSwitch::To(id)));
            }
        }
        KeyCode::Tab => cycle_focus(app),
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

fn handle_address_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            let draft = app.address_draft.trim().to_string();
            app.focus = Focus::Sidebar;
            match app.browser.active_tab_id().cloned() {
                Some(id) => {
                    let generation = app.surface.generation();
                    app.dispatch(Intent::UpdateUrl { id, url: draft });
                    // Committing the URL already shown still loads it again.
                    if app.surface.generation() == generation {
                        app.reload();
                    }
                }
                None if !draft.is_empty() => app.dispatch(Intent::CreateTab { url: Some(draft) }),
                None => app.address_draft.clear(),
            }
        }
        KeyCode::Esc => {
            app.focus = Focus::Sidebar;
            app.address_draft = app
                .browser
                .active_tab()
                .map(|tab| tab.url.clone())
                .unwrap_or_default();
        }
        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => app.reload(),
        KeyCode::Tab => cycle_focus(app),
        _ => {
            edit_text(&mut app.address_draft, &key);
        }
    }
}

fn handle_chat_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.focus = Focus::Sidebar,
        KeyCode::Enter => {
            if let Some(message) = app.chat.take() {
                tracing::debug!(chars = message.chars().count(), "assistant message drafted");
                app.set_output("The assistant is not connected.".to_string());
            }
        }
        KeyCode::Char(digit @ '1'..='4') if key.modifiers.contains(KeyModifiers::ALT) => {
            app.chat.apply_suggestion(digit as usize - '1' as usize);
        }
        KeyCode::Tab => cycle_focus(app),
        KeyCode::Backspace => app.chat.backspace(),
        KeyCode::Char(ch) if plain(&key) => app.chat.push(ch),
        _ => {}
    }
}

fn handle_rename_key(app: &mut App, key: KeyEvent, id: SpaceId) {
    match key.code {
        KeyCode::Enter => {
            app.focus = Focus::Sidebar;
            let name = std::mem::take(&mut app.rename_draft);
            app.dispatch(Intent::RenameSpace { id, name });
        }
        KeyCode::Esc => {
            app.focus = Focus::Sidebar;
            app.rename_draft.clear();
        }
        _ => {
            edit_text(&mut app.rename_draft, &key);
        }
    }
}

fn move_selection(app: &mut App, delta: isize) {
    let len = app.browser.visible_tabs().len();
    if len == 0 {
        return;
    }
    let len = len as isize;
    let mut next = app.selected as isize + delta;
    if next < 0 {
        next = len - 1;
    } else if next >= len {
        next = 0;
    }
    app.selected = next as usize;
}

/// Move the selected tab one slot within its own bucket.
fn move_selected_tab(app: &mut App, delta: isize) {
    let Some(selected) = app.selected_tab() else {
        return;
    };
    let visible = app.browser.visible_tabs();
    let Some(tab) = visible.get(app.selected) else {
        return;
    };
    let neighbor_index = app.selected as isize + delta;
    if neighbor_index < 0 {
        return;
    }
    let Some(neighbor) = visible.get(neighbor_index as usize) else {
        return;
    };
    if neighbor.bucket() != tab.bucket() {
        return;
    }
    let neighbor = neighbor.id.clone();
    let intent = if delta < 0 {
        Intent::Reorder {
            dragged: selected,
            target: neighbor,
        }
    } else {
        Intent::Reorder {
            dragged: neighbor,
            target: selected,
        }
    };
    app.dispatch(intent);
    app.selected = neighbor_index as usize;
}

fn step_width(app: &mut App, panel: Panel, delta: i32) {
    let width = i32::from(app.browser.ui().panel_width(panel)) + delta;
    app.dispatch(Intent::ResizePanel { panel, width });
}

fn cycle_focus(app: &mut App) {
    app.focus = match app.focus {
        Focus::Sidebar => Focus::Address,
        Focus::Address if app.browser.ui().chat_open => Focus::Chat,
        _ => Focus::Sidebar,
    };
}
