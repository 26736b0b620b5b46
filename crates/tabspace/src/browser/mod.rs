//! Browsing state model.
//!
//! `BrowserState` owns every `Space` and `Tab` record plus the small UI-mode
//! flags that drive the shell. All mutation goes through `apply`, which takes
//! an `Intent` and reports which persisted slices changed so the host can
//! mirror them into a key-value store.
//!
//! Submodules:
//! - ids: opaque space/tab identifiers
//! - url: address normalization and title derivation
//! - space: space records and the space directory operations
//! - tab: tab records and the tab directory operations
//! - ui: theme, panel, palette, menu and peek flags
//! - intent: the intent enum and reducer entry point
//! - seed: first-launch spaces and tabs

mod ids;
mod intent;
mod seed;
mod space;
mod tab;
mod ui;
pub mod url;

#[cfg(test)]
mod tests;

use std::collections::BTreeSet;

pub use ids::{SpaceId, TabId};
#[cfg(test)]
pub use intent::reduce;
pub use intent::Intent;
pub use space::{Space, SpaceSwitch, DEFAULT_SPACE_COLOR, DEFAULT_SPACE_NAME, PRESET_COLORS};
pub use tab::{Bucket, Tab};
pub use ui::{ContextMenu, MenuTarget, Panel, Theme, UiFlags};

/// A persisted slice of browser state. Each slice is stored under its own key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slice {
    Spaces,
    Tabs,
    ActiveSpace,
    ActiveTab,
    Theme,
    SidebarVisible,
    SidebarWidth,
    ChatWidth,
}

/// Set of slices touched by one committed transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Changes(BTreeSet<Slice>);

impl Changes {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn of(slices: &[Slice]) -> Self {
        Self(slices.iter().copied().collect())
    }

    pub fn insert(&mut self, slice: Slice) {
        self.0.insert(slice);
    }

    #[cfg(test)]
    pub fn contains(&self, slice: Slice) -> bool {
        self.0.contains(&slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Slice> + '_ {
        self.0.iter().copied()
    }
}

/// The whole browsing state: spaces, tabs, active pointers, UI flags.
///
/// Invariants upheld by every operation:
/// - `spaces` is never empty and `active_space` names one of them.
/// - every tab's `space_id` names an existing space.
/// - `active_tab`, when set, names an existing tab.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserState {
    spaces: Vec<Space>,
    tabs: Vec<Tab>,
    active_space: SpaceId,
    active_tab: Option<TabId>,
    ui: UiFlags,
}

impl BrowserState {
    /// Build state from independently loaded slices, repairing anything that
    /// would break the invariants (empty spaces, dangling pointers, orphans).
    pub fn from_parts(
        spaces: Vec<Space>,
        tabs: Vec<Tab>,
        active_space: SpaceId,
        active_tab: Option<TabId>,
        ui: UiFlags,
    ) -> Self {
        let spaces = if spaces.is_empty() {
            tracing::warn!("no spaces available, restoring defaults");
            seed::spaces()
        } else {
            spaces
        };
        let mut state = Self {
            active_space: spaces[0].id.clone(),
            spaces,
            tabs,
            active_tab: None,
            ui,
        };
        if state.space(&active_space).is_some() {
            state.active_space = active_space;
        }

        let before = state.tabs.len();
        let spaces = &state.spaces;
        state
            .tabs
            .retain(|tab| spaces.iter().any(|space| space.id == tab.space_id));
        let dropped = before - state.tabs.len();
        if dropped > 0 {
            tracing::warn!(dropped, "dropped tabs referencing unknown spaces");
        }

        state.active_tab = active_tab.filter(|id| state.tab(id).is_some());
        state
    }

    /// First-launch state: three sample spaces with a handful of tabs.
    /// The active tab is the first tab of the active space, so the first
    /// screen never shows a tab from a space that is not selected.
    pub fn seeded() -> Self {
        let spaces = seed::spaces();
        let tabs = seed::tabs();
        let active_space = spaces[0].id.clone();
        let active_tab = tabs
            .iter()
            .find(|tab| tab.space_id == active_space)
            .map(|tab| tab.id.clone());
        Self::from_parts(spaces, tabs, active_space, active_tab, UiFlags::default())
    }

    pub fn spaces(&self) -> &[Space] {
        &self.spaces
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn ui(&self) -> &UiFlags {
        &self.ui
    }

    pub fn active_space_id(&self) -> &SpaceId {
        &self.active_space
    }

    pub fn active_tab_id(&self) -> Option<&TabId> {
        self.active_tab.as_ref()
    }

    pub fn active_space(&self) -> &Space {
        self.space(&self.active_space).unwrap_or(&self.spaces[0])
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.active_tab.as_ref().and_then(|id| self.tab(id))
    }

    pub fn space(&self, id: &SpaceId) -> Option<&Space> {
        self.spaces.iter().find(|space| &space.id == id)
    }

    pub fn tab(&self, id: &TabId) -> Option<&Tab> {
        self.tabs.iter().find(|tab| &tab.id == id)
    }

    /// Tabs of the active space in the given bucket, in collection order.
    pub fn bucket_tabs(&self, bucket: Bucket) -> Vec<&Tab> {
        self.tabs
            .iter()
            .filter(|tab| tab.space_id == self.active_space && tab.bucket() == bucket)
            .collect()
    }

    pub fn pinned_tabs(&self) -> Vec<&Tab> {
        self.bucket_tabs(Bucket::Pinned)
    }

    pub fn today_tabs(&self) -> Vec<&Tab> {
        self.bucket_tabs(Bucket::Today)
    }

    /// Tabs of the active space in sidebar order: pinned first, then today.
    pub fn visible_tabs(&self) -> Vec<&Tab> {
        let mut tabs = self.pinned_tabs();
        tabs.extend(self.today_tabs());
        tabs
    }

    fn space_index(&self, id: &SpaceId) -> Option<usize> {
        self.spaces.iter().position(|space| &space.id == id)
    }

    fn tab_index(&self, id: &TabId) -> Option<usize> {
        self.tabs.iter().position(|tab| &tab.id == id)
    }

    fn tab_mut(&mut self, id: &TabId) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|tab| &tab.id == id)
    }

    fn space_mut(&mut self, id: &SpaceId) -> Option<&mut Space> {
        self.spaces.iter_mut().find(|space| &space.id == id)
    }
}
