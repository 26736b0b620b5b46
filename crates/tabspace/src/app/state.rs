//! Application state types and core data structures.
//!
//! Defines the App struct which holds the browser state, its store, and all
//! transient view state (drafts, selection, gestures in progress).

use std::time::Instant;

use ratatui::layout::Rect;

use crate::browser::{BrowserState, Bucket, Intent, SpaceId, TabId};
use crate::chat::ChatDraft;
use crate::config::Config;
use crate::drag::DragPayload;
use crate::keymap::ShortcutTable;
use crate::resize::ResizeGesture;
use crate::state::{persist_changes, KeyValueStore};
use crate::surface::{ContentSurface, SurfaceHost};

/// Which text input (if any) receives plain keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Address,
    Chat,
    Rename(SpaceId),
}

#[derive(Debug, Default)]
pub struct PaletteState {
    pub query: String,
    pub selected: usize,
}

/// Screen regions recorded during the last render, used for mouse hit tests.
#[derive(Debug, Default)]
pub struct HitMap {
    pub sidebar: Option<Rect>,
    pub sidebar_edge: Option<Rect>,
    pub chat_edge: Option<Rect>,
    pub space_header: Option<Rect>,
    pub address: Option<Rect>,
    pub new_tab: Option<Rect>,
    pub pinned_region: Option<Rect>,
    pub today_region: Option<Rect>,
    pub tab_rows: Vec<(Rect, TabId)>,
    pub space_dots: Vec<(Rect, SpaceId)>,
    pub chips: Vec<(Rect, usize)>,
    pub chat_input: Option<Rect>,
    pub palette_rows: Vec<Rect>,
    pub menu: Option<Rect>,
    pub menu_rows: Vec<Rect>,
}

impl HitMap {
    pub fn tab_at(&self, column: u16, row: u16) -> Option<&TabId> {
        self.tab_rows
            .iter()
            .find(|(rect, _)| contains(*rect, column, row))
            .map(|(_, id)| id)
    }

    pub fn bucket_at(&self, column: u16, row: u16) -> Option<Bucket> {
        if self.pinned_region.is_some_and(|rect| contains(rect, column, row)) {
            return Some(Bucket::Pinned);
        }
        if self.today_region.is_some_and(|rect| contains(rect, column, row)) {
            return Some(Bucket::Today);
        }
        None
    }
}

pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Main application state container.
///
/// Methods are split across input (event handling) and render (drawing).
/// Every state change goes through `dispatch`.
pub struct App {
    pub browser: BrowserState,
    pub store: Box<dyn KeyValueStore>,
    pub config: Config,
    pub shortcuts: ShortcutTable,
    pub focus: Focus,
    pub selected: usize,
    pub address_draft: String,
    pub rename_draft: String,
    pub palette: PaletteState,
    pub menu_selected: usize,
    pub chat: ChatDraft,
    pub surface: ContentSurface,
    pub surface_host: Box<dyn SurfaceHost>,
    pub resize: Option<ResizeGesture>,
    pub drag: Option<DragPayload>,
    pub drag_hover: Option<(u16, u16)>,
    pub hits: HitMap,
    pub last_click: Option<(Instant, u16, u16)>,
    pub output: Option<String>,
    pub should_quit: bool,
    shown_active: Option<TabId>,
}

impl App {
    pub fn new(
        browser: BrowserState,
        store: Box<dyn KeyValueStore>,
        config: Config,
        surface_host: Box<dyn SurfaceHost>,
    ) -> Self {
        let shortcuts = ShortcutTable::from_config(&config.keymap);
        let mut app = Self {
            browser,
            store,
            config,
            shortcuts,
            focus: Focus::Sidebar,
            selected: 0,
            address_draft: String::new(),
            rename_draft: String::new(),
            palette: PaletteState::default(),
            menu_selected: 0,
            chat: ChatDraft::default(),
            surface: ContentSurface::new(),
            surface_host,
            resize: None,
            drag: None,
            drag_hover: None,
            hits: HitMap::default(),
            last_click: None,
            output: None,
            should_quit: false,
            shown_active: None,
        };
        app.sync_view();
        app
    }

    /// Apply an intent, persist the slices it touched, and bring the view
    /// state back in line with the browser state.
    pub fn dispatch(&mut self, intent: Intent) {
        let changes = self.browser.apply(intent);
        if let Err(err) = persist_changes(self.store.as_mut(), &self.browser, &changes) {
            tracing::warn!(%err, "failed to persist state");
            self.set_output(format!("Could not save state: {err}"));
        }
        self.sync_view();
    }

    pub fn reload(&mut self) {
        let Some(generation) = self.surface.reload() else {
            return;
        };
        if let Some(url) = self.surface.url() {
            self.surface_host.load(url, generation);
        }
    }

    fn sync_view(&mut self) {
        let active_changed = self.browser.active_tab_id() != self.shown_active.as_ref();
        if active_changed && self.focus == Focus::Address && self.browser.active_tab().is_none() {
            self.focus = Focus::Sidebar;
        }
        // An in-progress address edit belongs to the tab it was started on.
        let keep_draft = self.focus == Focus::Address && !active_changed;
        match self.browser.active_tab() {
            Some(tab) => {
                if let Some(generation) = self.surface.show(&tab.id, &tab.url) {
                    self.surface_host.load(&tab.url, generation);
                }
                if !keep_draft {
                    self.address_draft = tab.url.clone();
                }
            }
            None => {
                self.surface.clear();
                if !keep_draft {
                    self.address_draft.clear();
                }
            }
        }

        // The sidebar cursor follows the active tab only when it changes.
        let visible = self.browser.visible_tabs();
        let active = self.browser.active_tab_id();
        match visible.iter().position(|tab| Some(&tab.id) == active) {
            Some(index) if active_changed => self.selected = index,
            _ if self.selected >= visible.len() => {
                self.selected = visible.len().saturating_sub(1);
            }
            _ => {}
        }
        self.shown_active = active.cloned();

        let renaming_gone =
            matches!(&self.focus, Focus::Rename(id) if self.browser.space(id).is_none());
        if renaming_gone || (self.focus == Focus::Chat && !self.browser.ui().chat_open) {
            self.focus = Focus::Sidebar;
        }
    }

    pub fn selected_tab(&self) -> Option<TabId> {
        self.browser
            .visible_tabs()
            .get(self.selected)
            .map(|tab| tab.id.clone())
    }

    /// Set the output message shown in the status bar.
    pub fn set_output(&mut self, message: String) {
        let trimmed = message.trim().to_string();
        if trimmed.is_empty() {
            self.output = None;
        } else {
            self.output = Some(trimmed);
        }
    }
}
