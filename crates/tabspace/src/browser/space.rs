use serde::{Deserialize, Serialize};

use super::{BrowserState, Changes, Slice, SpaceId};

pub const DEFAULT_SPACE_NAME: &str = "New Space";
pub const DEFAULT_SPACE_COLOR: &str = "#6366F1";

/// Swatches offered by the space menu.
pub const PRESET_COLORS: [&str; 10] = [
    "#F87171", "#FB923C", "#FACC15", "#4ADE80", "#60A5FA", "#818CF8", "#C084FC", "#F472B6",
    "#18181B", "#6B6B9C",
];

/// A named, colored workspace that owns a subset of tabs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    pub id: SpaceId,
    pub name: String,
    pub color: String,
}

impl Space {
    pub fn new(id: SpaceId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceSwitch {
    Next,
    Prev,
    To(SpaceId),
}

impl BrowserState {
    pub(super) fn create_space(&mut self) -> Changes {
        let space = Space::new(SpaceId::mint(), DEFAULT_SPACE_NAME, DEFAULT_SPACE_COLOR);
        tracing::info!(space = %space.id, "created space");
        self.active_space = space.id.clone();
        self.spaces.push(space);
        Changes::of(&[Slice::Spaces, Slice::ActiveSpace])
    }

    pub(super) fn delete_space(&mut self, id: &SpaceId) -> Changes {
        if self.spaces.len() <= 1 {
            tracing::debug!(space = %id, "refusing to delete the last space");
            return Changes::none();
        }
        let Some(index) = self.space_index(id) else {
            return Changes::none();
        };
        self.spaces.remove(index);
        let mut changes = Changes::of(&[Slice::Spaces]);

        let before = self.tabs.len();
        self.tabs.retain(|tab| &tab.space_id != id);
        let removed = before - self.tabs.len();
        if removed > 0 {
            changes.insert(Slice::Tabs);
        }
        tracing::info!(space = %id, removed_tabs = removed, "deleted space");

        if &self.active_space == id {
            self.active_space = self.spaces[0].id.clone();
            changes.insert(Slice::ActiveSpace);
        }
        let dangling = self
            .active_tab
            .as_ref()
            .is_some_and(|tab| self.tab(tab).is_none());
        if dangling {
            self.active_tab = None;
            changes.insert(Slice::ActiveTab);
        }
        changes
    }

    pub(super) fn rename_space(&mut self, id: &SpaceId, name: &str) -> Changes {
        let name = name.trim();
        if name.is_empty() {
            return Changes::none();
        }
        match self.space_mut(id) {
            Some(space) if space.name != name => {
                space.name = name.to_string();
                Changes::of(&[Slice::Spaces])
            }
            _ => Changes::none(),
        }
    }

    pub(super) fn recolor_space(&mut self, id: &SpaceId, color: &str) -> Changes {
        match self.space_mut(id) {
            Some(space) if space.color != color => {
                space.color = color.to_string();
                Changes::of(&[Slice::Spaces])
            }
            _ => Changes::none(),
        }
    }

    pub(super) fn switch_space(&mut self, switch: SpaceSwitch) -> Changes {
        let len = self.spaces.len();
        let current = self.space_index(&self.active_space).unwrap_or(0);
        let next = match switch {
            SpaceSwitch::Next => self.spaces[(current + 1) % len].id.clone(),
            SpaceSwitch::Prev => self.spaces[(current + len - 1) % len].id.clone(),
            SpaceSwitch::To(id) => {
                if self.space(&id).is_none() {
                    return Changes::none();
                }
                id
            }
        };
        if next == self.active_space {
            return Changes::none();
        }
        self.active_space = next;
        Changes::of(&[Slice::ActiveSpace])
    }
}
