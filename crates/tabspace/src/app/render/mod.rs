//! UI rendering methods.
//!
//! Handles all drawing for the TUI:
//! - Main layout (sidebar, browser view, assistant panel, status bar)
//! - Overlays (command palette, context menu)
//!
//! Rendering also records the screen regions the mouse handlers hit-test
//! against, so it takes the app mutably.

mod browser_view;
mod chat;
mod overlays;
mod sidebar;
mod status;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Clear};

use crate::resize::px_to_cols;
use crate::ui::{hex_color, theme_colors, ThemeColors};

use super::state::{App, HitMap};

/// Columns the browser view keeps even when both panels are wide.
const MIN_VIEW_COLS: u16 = 20;

/// Main render entry point. Called each frame by the event loop.
pub fn render(app: &mut App, frame: &mut ratatui::Frame) {
    let area = frame.area();
    let colors = theme_colors(app.browser.ui().theme);
    let accent = accent_color(app);
    app.hits = HitMap::default();

    frame.render_widget(
        Block::default().style(Style::default().bg(colors.bg).fg(colors.fg)),
        area,
    );

    // Vertical layout: panels | status bar
    let split_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);
    let main = split_chunks[0];

    let ui = app.browser.ui();
    let sidebar_cols = px_to_cols(ui.sidebar_width);
    let chat_cols = px_to_cols(ui.chat_width);
    let (sidebar_docked, sidebar_shown, chat_open) =
        (ui.sidebar_visible, ui.sidebar_shown(), ui.chat_open);

    let mut constraints = Vec::with_capacity(3);
    if sidebar_docked {
        constraints.push(Constraint::Length(sidebar_cols));
    }
    constraints.push(Constraint::Min(MIN_VIEW_COLS));
    if chat_open {
        constraints.push(Constraint::Length(chat_cols));
    }
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(main);

    let mut index = 0;
    if sidebar_docked {
        sidebar::render_sidebar(app, frame, columns[index], &colors, accent);
        index += 1;
    }
    browser_view::render_browser_view(app, frame, columns[index], &colors, accent);
    index += 1;
    if chat_open {
        chat::render_chat(app, frame, columns[index], &colors, accent);
    }

    if !sidebar_docked && sidebar_shown {
        let rect = Rect {
            width: sidebar_cols.min(main.width),
            ..main
        };
        frame.render_widget(Clear, rect);
        sidebar::render_sidebar(app, frame, rect, &colors, accent);
    }

    status::render_status_bar(app, frame, split_chunks[1], &colors);

    if app.browser.ui().palette_open {
        overlays::render_palette(app, frame, area, &colors, accent);
    }
    if app.browser.ui().context_menu.is_some() {
        overlays::render_context_menu(app, frame, area, &colors, accent);
    }
}

fn accent_color(app: &App) -> Color {
    hex_color(&app.browser.active_space().color).unwrap_or(Color::Magenta)
}

/// Base style for a themed panel.
fn panel_style(colors: &ThemeColors) -> Style {
    Style::default().bg(colors.bg).fg(colors.fg)
}

/// One-row rect at `y` inside `area`.
fn row_rect(area: Rect, y: u16) -> Rect {
    Rect::new(area.x, y, area.width, 1)
}
