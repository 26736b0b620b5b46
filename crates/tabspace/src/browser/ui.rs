use serde::{Deserialize, Serialize};

use super::{BrowserState, Changes, Slice, SpaceId, TabId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Resizable side panels. Widths are kept in pixels so stored values stay
/// meaningful for any host; the terminal host divides by its cell width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Sidebar,
    Chat,
}

impl Panel {
    pub fn min_width(self) -> u16 {
        match self {
            Panel::Sidebar => 200,
            Panel::Chat => 300,
        }
    }

    pub fn max_width(self) -> u16 {
        match self {
            Panel::Sidebar => 480,
            Panel::Chat => 600,
        }
    }

    pub fn default_width(self) -> u16 {
        match self {
            Panel::Sidebar => 240,
            Panel::Chat => 360,
        }
    }

    pub fn clamp(self, width: i32) -> u16 {
        width.clamp(i32::from(self.min_width()), i32::from(self.max_width())) as u16
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuTarget {
    Tab(TabId),
    Space(SpaceId),
}

/// An open context menu anchored at a screen position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextMenu {
    pub x: u16,
    pub y: u16,
    pub target: MenuTarget,
}

/// Scalar UI state. Theme, sidebar visibility and both panel widths are
/// persisted; everything else lives only for the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiFlags {
    pub theme: Theme,
    pub sidebar_visible: bool,
    pub sidebar_width: u16,
    pub chat_open: bool,
    pub chat_width: u16,
    pub palette_open: bool,
    pub context_menu: Option<ContextMenu>,
    pub peeking: bool,
}

impl Default for UiFlags {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            sidebar_visible: true,
            sidebar_width: Panel::Sidebar.default_width(),
            chat_open: false,
            chat_width: Panel::Chat.default_width(),
            palette_open: false,
            context_menu: None,
            peeking: false,
        }
    }
}

impl UiFlags {
    pub fn persisted(theme: Theme, sidebar_visible: bool, sidebar_width: u16, chat_width: u16) -> Self {
        Self {
            theme,
            sidebar_visible,
            sidebar_width: Panel::Sidebar.clamp(i32::from(sidebar_width)),
            chat_width: Panel::Chat.clamp(i32::from(chat_width)),
            ..Self::default()
        }
    }

    pub fn panel_width(&self, panel: Panel) -> u16 {
        match panel {
            Panel::Sidebar => self.sidebar_width,
            Panel::Chat => self.chat_width,
        }
    }

    /// Whether the sidebar occupies the screen, either docked or peeking.
    pub fn sidebar_shown(&self) -> bool {
        self.sidebar_visible || self.peeking
    }
}

impl BrowserState {
    pub(super) fn toggle_theme(&mut self) -> Changes {
        self.ui.theme = self.ui.theme.toggled();
        Changes::of(&[Slice::Theme])
    }

    pub(super) fn toggle_sidebar(&mut self) -> Changes {
        self.ui.sidebar_visible = !self.ui.sidebar_visible;
        self.ui.peeking = false;
        Changes::of(&[Slice::SidebarVisible])
    }

    pub(super) fn resize_panel(&mut self, panel: Panel, width: i32) -> Changes {
        let width = panel.clamp(width);
        let (slot, slice) = match panel {
            Panel::Sidebar => (&mut self.ui.sidebar_width, Slice::SidebarWidth),
            Panel::Chat => (&mut self.ui.chat_width, Slice::ChatWidth),
        };
        if *slot == width {
            return Changes::none();
        }
        *slot = width;
        Changes::of(&[slice])
    }

    pub(super) fn set_peek(&mut self, peeking: bool) -> Changes {
        // Peeking only makes sense while the sidebar is hidden.
        self.ui.peeking = peeking && !self.ui.sidebar_visible;
        Changes::none()
    }
}
