use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::state::{App, Focus};
use crate::ui::{inset_horizontal, ThemeColors};

const STATUS_HORIZONTAL_PADDING: u16 = 1;

/// Render status bar (last message or key hints, active space on the right).
pub(super) fn render_status_bar(
    app: &App,
    frame: &mut ratatui::Frame,
    area: Rect,
    colors: &ThemeColors,
) {
    let area = inset_horizontal(area, STATUS_HORIZONTAL_PADDING);
    let dim_style = Style::default().fg(colors.muted).add_modifier(Modifier::DIM);
    let version = env!("CARGO_PKG_VERSION");
    let label_text = format!("{} | v{version}", app.browser.active_space().name);
    let width = area.width as usize;
    let label_len = label_text.chars().count();

    let left = match &app.output {
        Some(message) => Line::from(Span::styled(message.clone(), Style::default().fg(colors.fg))),
        None => Line::from(Span::styled(hint(app), dim_style)),
    };

    if width > label_len + 1 {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(1),
                Constraint::Length((label_len + 1) as u16),
            ])
            .split(area);
        frame.render_widget(Paragraph::new(left), chunks[0]);
        let label = Paragraph::new(Line::from(Span::styled(label_text, dim_style)))
            .alignment(Alignment::Right);
        frame.render_widget(label, chunks[1]);
        return;
    }

    frame.render_widget(Paragraph::new(left), area);
}

fn hint(app: &App) -> &'static str {
    if app.browser.ui().context_menu.is_some() {
        return "enter choose · esc close";
    }
    if app.browser.ui().palette_open {
        return "type to filter · enter open · esc close";
    }
    match app.focus {
        Focus::Sidebar => "j/k move · enter open · e address · p pin · x close · ctrl+l palette · q quit",
        Focus::Address => "enter go · esc cancel · ctrl+r reload",
        Focus::Chat => "enter send · alt+1..4 suggestion · esc back",
        Focus::Rename(_) => "enter rename · esc cancel",
    }
}
