use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::state::{App, Focus};
use crate::chat::SUGGESTIONS;
use crate::ui::ThemeColors;

use super::{panel_style, row_rect};

/// Render the assistant panel: intro text, suggestion chips, draft input.
pub(super) fn render_chat(
    app: &mut App,
    frame: &mut ratatui::Frame,
    area: Rect,
    colors: &ThemeColors,
    accent: Color,
) {
    if area.width < 4 || area.height < 7 {
        return;
    }
    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(Style::default().fg(colors.border))
        .title(Span::styled(
            " Assistant ",
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ))
        .style(panel_style(colors));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    app.hits.chat_edge = Some(Rect::new(area.x, area.y, 1, area.height));

    let intro = Paragraph::new(vec![
        Line::raw(""),
        Line::from(Span::styled(
            "How can I help with this page?",
            Style::default().fg(colors.muted),
        )),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(intro, Rect { height: inner.height.saturating_sub(4), ..inner });

    // Chips flow over the two rows above the input.
    let first_chip_row = inner.y + inner.height - 4;
    let mut rows: Vec<Vec<Span<'static>>> = vec![Vec::new(), Vec::new()];
    let (mut x, mut line) = (inner.x, 0usize);
    for (index, label) in SUGGESTIONS.iter().enumerate() {
        let text = format!("[{label}]");
        let width = text.chars().count() as u16;
        if x + width > inner.x + inner.width {
            line += 1;
            x = inner.x;
        }
        if line >= rows.len() || width > inner.width {
            break;
        }
        app.hits
            .chips
            .push((Rect::new(x, first_chip_row + line as u16, width, 1), index));
        rows[line].push(Span::styled(text, Style::default().fg(accent)));
        rows[line].push(Span::raw(" "));
        x += width + 1;
    }
    for (offset, spans) in rows.into_iter().enumerate() {
        let row = row_rect(inner, first_chip_row + offset as u16);
        frame.render_widget(Paragraph::new(Line::from(spans)), row);
    }

    let input_row = row_rect(inner, inner.y + inner.height - 1);
    app.hits.chat_input = Some(input_row);
    let focused = app.focus == Focus::Chat;
    let mut input = vec![Span::styled("> ", Style::default().fg(accent))];
    if app.chat.text().is_empty() && !focused {
        input.push(Span::styled(
            "Ask anything…",
            Style::default().fg(colors.muted),
        ));
    } else {
        input.push(Span::styled(
            app.chat.text().to_string(),
            Style::default().fg(colors.fg),
        ));
    }
    if focused {
        input.push(Span::styled(" ", Style::default().bg(accent)));
    }
    frame.render_widget(Paragraph::new(Line::from(input)), input_row);
}
