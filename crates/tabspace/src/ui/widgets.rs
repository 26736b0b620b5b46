//! Theme colors and reusable line builders.
//!
//! Pure functions that produce ratatui styles and lines from data.
//! No state mutation happens here.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::browser::Theme;

/// Fixed terminal palette for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub border: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
}

pub fn theme_colors(theme: Theme) -> ThemeColors {
    match theme {
        Theme::Light => ThemeColors {
            bg: Color::Rgb(250, 250, 250),
            fg: Color::Rgb(24, 24, 27),
            muted: Color::Rgb(113, 113, 122),
            border: Color::Rgb(212, 212, 216),
            selection_bg: Color::Rgb(228, 228, 231),
            selection_fg: Color::Rgb(9, 9, 11),
        },
        Theme::Dark => ThemeColors {
            bg: Color::Rgb(9, 9, 11),
            fg: Color::Rgb(228, 228, 231),
            muted: Color::Rgb(113, 113, 122),
            border: Color::Rgb(39, 39, 42),
            selection_bg: Color::Rgb(39, 39, 42),
            selection_fg: Color::White,
        },
    }
}

/// Parse a `#RRGGBB` string into a terminal color.
pub fn hex_color(value: &str) -> Option<Color> {
    let hex = value.trim().strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// One row of a selectable list, padded to `width` so the highlight spans
/// the whole row.
pub fn list_line(
    label: &str,
    width: usize,
    selected: bool,
    colors: &ThemeColors,
    accent: Color,
) -> Line<'static> {
    let mut text: String = label.chars().take(width).collect();
    let len = text.chars().count();
    if len < width {
        text.push_str(&" ".repeat(width - len));
    }
    let style = if selected {
        Style::default()
            .fg(colors.selection_fg)
            .bg(colors.selection_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.fg)
    };
    let marker = if selected {
        Span::styled("▌", Style::default().fg(accent).bg(colors.selection_bg))
    } else {
        Span::raw(" ")
    };
    Line::from(vec![marker, Span::styled(text, style)])
}
