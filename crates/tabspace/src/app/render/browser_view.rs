use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::state::{App, Focus};
use crate::browser::url::is_secure;
use crate::ui::{inset_horizontal, ThemeColors};

use super::panel_style;

const ADDRESS_PADDING: u16 = 1;

/// Render the center view: address bar on top, page preview below.
pub(super) fn render_browser_view(
    app: &mut App,
    frame: &mut ratatui::Frame,
    area: Rect,
    colors: &ThemeColors,
    accent: Color,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(area);

    let address_block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(colors.border))
        .style(panel_style(colors));
    let address_area = inset_horizontal(address_block.inner(chunks[0]), ADDRESS_PADDING);
    frame.render_widget(address_block, chunks[0]);
    app.hits.address = Some(address_area);
    frame.render_widget(Paragraph::new(address_line(app, colors, accent)), address_area);

    let body = inset_horizontal(chunks[1], 2);
    let lines = match app.browser.active_tab() {
        Some(tab) => {
            let status = if app.surface.is_loading() {
                Span::styled("Loading…", Style::default().fg(accent))
            } else {
                Span::styled("Loaded", Style::default().fg(colors.muted))
            };
            vec![
                Line::raw(""),
                Line::from(Span::styled(
                    tab.title.clone(),
                    Style::default().fg(colors.fg).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(tab.url.clone(), Style::default().fg(colors.muted))),
                Line::raw(""),
                Line::from(status),
            ]
        }
        None => vec![
            Line::raw(""),
            Line::from(Span::styled(
                "No tab open",
                Style::default().fg(colors.fg).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Open a new tab or type an address above.",
                Style::default().fg(colors.muted),
            )),
        ],
    };
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(panel_style(colors)),
        body,
    );
}

fn address_line(app: &App, colors: &ThemeColors, accent: Color) -> Line<'static> {
    let editing = app.focus == Focus::Address;
    let url = if editing {
        app.address_draft.clone()
    } else {
        app.browser
            .active_tab()
            .map(|tab| tab.url.clone())
            .unwrap_or_default()
    };
    let (badge, badge_style) = if url.is_empty() {
        ("  ", Style::default())
    } else if is_secure(&url) {
        ("🔒 ", Style::default().fg(colors.muted))
    } else {
        ("⚠ ", Style::default().fg(Color::Yellow))
    };

    let mut spans = vec![Span::styled(badge, badge_style)];
    if url.is_empty() && !editing {
        spans.push(Span::styled(
            "Search or enter address",
            Style::default().fg(colors.muted),
        ));
    } else {
        spans.push(Span::styled(url, Style::default().fg(colors.fg)));
    }
    if editing {
        spans.push(Span::styled(" ", Style::default().bg(accent)));
    } else if app.surface.is_loading() {
        spans.push(Span::styled("  ◌", Style::default().fg(accent)));
    }
    Line::from(spans)
}
