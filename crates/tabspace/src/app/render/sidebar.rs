use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::state::{App, Focus};
use crate::browser::Tab;
use crate::ui::{hex_color, list_line, ThemeColors};

use super::{panel_style, row_rect};

/// Render the left panel: space header, pinned and today buckets, and the
/// space switcher. Records hit regions for every interactive row.
pub(super) fn render_sidebar(
    app: &mut App,
    frame: &mut ratatui::Frame,
    area: Rect,
    colors: &ThemeColors,
    accent: Color,
) {
    if area.width < 3 || area.height < 4 {
        return;
    }
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(accent))
        .style(panel_style(colors));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    app.hits.sidebar = Some(area);
    app.hits.sidebar_edge = Some(Rect::new(area.x + area.width - 1, area.y, 1, area.height));

    let width = inner.width.saturating_sub(1) as usize;
    // Last row belongs to the space switcher.
    let list_bottom = inner.y + inner.height - 1;
    let mut y = inner.y;
    let mut lines: Vec<(Rect, Line<'static>)> = Vec::new();

    let header = row_rect(inner, y);
    app.hits.space_header = Some(header);
    lines.push((header, space_header_line(app, accent, colors)));
    y += 2;

    let pinned: Vec<Tab> = app.browser.pinned_tabs().into_iter().cloned().collect();
    let today: Vec<Tab> = app.browser.today_tabs().into_iter().cloned().collect();
    let cursor = app
        .browser
        .visible_tabs()
        .get(app.selected)
        .map(|tab| tab.id.clone());
    let show_cursor = app.focus == Focus::Sidebar;

    let pinned_start = y;
    if y < list_bottom {
        lines.push((row_rect(inner, y), section_line("PINNED", colors)));
        y += 1;
    }
    if pinned.is_empty() && y < list_bottom {
        let hint = Line::from(Span::styled(
            "  Drag tabs here to pin",
            Style::default().fg(colors.muted).add_modifier(Modifier::ITALIC),
        ));
        lines.push((row_rect(inner, y), hint));
        y += 1;
    }
    for tab in &pinned {
        if y >= list_bottom {
            break;
        }
        let rect = row_rect(inner, y);
        let marked = show_cursor && cursor.as_ref() == Some(&tab.id);
        lines.push((rect, tab_line(app, tab, marked, width, colors, accent)));
        app.hits.tab_rows.push((rect, tab.id.clone()));
        y += 1;
    }
    app.hits.pinned_region = Some(Rect::new(inner.x, pinned_start, inner.width, y - pinned_start));

    y += 1;
    let today_start = y.min(list_bottom);
    if y < list_bottom {
        lines.push((row_rect(inner, y), section_line("TODAY", colors)));
        y += 1;
    }
    if y < list_bottom {
        let rect = row_rect(inner, y);
        app.hits.new_tab = Some(rect);
        lines.push((
            rect,
            Line::from(Span::styled("  + New Tab", Style::default().fg(colors.muted))),
        ));
        y += 1;
    }
    for tab in &today {
        if y >= list_bottom {
            break;
        }
        let rect = row_rect(inner, y);
        let marked = show_cursor && cursor.as_ref() == Some(&tab.id);
        lines.push((rect, tab_line(app, tab, marked, width, colors, accent)));
        app.hits.tab_rows.push((rect, tab.id.clone()));
        y += 1;
    }
    app.hits.today_region = Some(Rect::new(
        inner.x,
        today_start,
        inner.width,
        list_bottom - today_start,
    ));

    for (rect, line) in lines {
        frame.render_widget(Paragraph::new(line), rect);
    }

    render_space_switcher(app, frame, row_rect(inner, list_bottom), colors);
}

fn space_header_line(app: &App, accent: Color, colors: &ThemeColors) -> Line<'static> {
    let space = app.browser.active_space();
    let name = match &app.focus {
        Focus::Rename(id) if id == &space.id => {
            return Line::from(vec![
                Span::styled("✎ ", Style::default().fg(accent)),
                Span::styled(app.rename_draft.clone(), Style::default().fg(colors.fg)),
                Span::styled(" ", Style::default().bg(colors.fg)),
            ]);
        }
        _ => space.name.clone(),
    };
    Line::from(vec![
        Span::styled("● ", Style::default().fg(accent)),
        Span::styled(
            name,
            Style::default().fg(colors.fg).add_modifier(Modifier::BOLD),
        ),
    ])
}

fn section_line(label: &'static str, colors: &ThemeColors) -> Line<'static> {
    Line::from(Span::styled(
        label,
        Style::default().fg(colors.muted).add_modifier(Modifier::DIM),
    ))
}

fn tab_line(
    app: &App,
    tab: &Tab,
    marked: bool,
    width: usize,
    colors: &ThemeColors,
    accent: Color,
) -> Line<'static> {
    let active = app.browser.active_tab_id() == Some(&tab.id);
    let loading = active && app.surface.is_loading();
    let dragging = app
        .drag
        .as_ref()
        .is_some_and(|payload| payload.tab() == &tab.id && app.drag_hover.is_some());
    let prefix = if marked { "›" } else { " " };
    let icon = if loading {
        "◌"
    } else if tab.pinned {
        "◆"
    } else {
        "·"
    };
    let mut label = format!("{prefix}{icon} {}", tab.title);
    if dragging {
        label.push_str("  ⇅");
    }
    list_line(&label, width, active, colors, accent)
}

fn render_space_switcher(
    app: &mut App,
    frame: &mut ratatui::Frame,
    area: Rect,
    colors: &ThemeColors,
) {
    let mut spans = Vec::new();
    let mut x = area.x;
    for space in app.browser.spaces() {
        if x + 2 > area.x + area.width {
            break;
        }
        let color = hex_color(&space.color).unwrap_or(colors.muted);
        let active = &space.id == app.browser.active_space_id();
        let dot = if active { "● " } else { "○ " };
        spans.push(Span::styled(dot, Style::default().fg(color)));
        app.hits
            .space_dots
            .push((Rect::new(x, area.y, 2, 1), space.id.clone()));
        x += 2;
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
