use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::state::App;
use crate::menu::menu_items;
use crate::palette::palette_entries;
use crate::ui::{anchored_rect, centered_rect, hex_color, list_line, ThemeColors};

use super::{panel_style, row_rect};

const MENU_MIN_WIDTH: u16 = 18;

/// Render the command palette: query input and matching entries.
pub(super) fn render_palette(
    app: &mut App,
    frame: &mut ratatui::Frame,
    area: Rect,
    colors: &ThemeColors,
    accent: Color,
) {
    let overlay_rect = centered_rect(60, 50, area);
    frame.render_widget(Clear, overlay_rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .title(" Go to tab ")
        .style(panel_style(colors));
    let inner = block.inner(overlay_rect);
    frame.render_widget(block, overlay_rect);
    if inner.height < 3 {
        return;
    }

    let input = Line::from(vec![
        Span::styled("› ", Style::default().fg(accent)),
        Span::styled(app.palette.query.clone(), Style::default().fg(colors.fg)),
        Span::styled(" ", Style::default().bg(accent)),
    ]);
    frame.render_widget(Paragraph::new(input), row_rect(inner, inner.y));

    let entries = palette_entries(&app.browser, &app.palette.query);
    let list_top = inner.y + 2;
    let bottom = inner.y + inner.height;
    if entries.is_empty() {
        let empty = Line::from(Span::styled(
            "No matching tabs",
            Style::default().fg(colors.muted),
        ));
        frame.render_widget(Paragraph::new(empty), row_rect(inner, list_top));
        return;
    }

    let width = inner.width.saturating_sub(1) as usize;
    for (index, entry) in entries.iter().enumerate() {
        let y = list_top + index as u16;
        if y >= bottom {
            break;
        }
        let rect = row_rect(inner, y);
        let label = entry.label(&app.browser);
        let line = list_line(&label, width, index == app.palette.selected, colors, accent);
        frame.render_widget(Paragraph::new(line), rect);
        app.hits.palette_rows.push(rect);
    }
}

/// Render the open context menu anchored at its pointer position.
pub(super) fn render_context_menu(
    app: &mut App,
    frame: &mut ratatui::Frame,
    area: Rect,
    colors: &ThemeColors,
    accent: Color,
) {
    let Some(menu) = app.browser.ui().context_menu.clone() else {
        return;
    };
    let items = menu_items(&app.browser, &menu.target);
    if items.is_empty() {
        return;
    }
    let labels: Vec<String> = items.iter().map(|item| item.label()).collect();
    let widest = labels
        .iter()
        .map(|label| label.chars().count() as u16)
        .max()
        .unwrap_or(0);
    let width = (widest + 6).max(MENU_MIN_WIDTH);
    let height = items.len() as u16 + 2;
    let rect = anchored_rect(menu.x, menu.y, width, height, area);
    frame.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(panel_style(colors));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);
    app.hits.menu = Some(rect);

    let row_width = inner.width.saturating_sub(3) as usize;
    for (index, (item, label)) in items.iter().zip(&labels).enumerate() {
        let y = inner.y + index as u16;
        if y >= inner.y + inner.height {
            break;
        }
        let row = row_rect(inner, y);
        let swatch = item
            .swatch()
            .and_then(hex_color)
            .map(|color| Span::styled("■ ", Style::default().fg(color)))
            .unwrap_or_else(|| Span::raw("  "));
        let mut line = list_line(label, row_width, index == app.menu_selected, colors, accent);
        line.spans.insert(1, swatch);
        frame.render_widget(Paragraph::new(line), row);
        app.hits.menu_rows.push(row);
    }
}
