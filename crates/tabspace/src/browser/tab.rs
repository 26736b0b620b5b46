use serde::{Deserialize, Serialize};

use super::url::{derive_title, normalize_url, DEFAULT_TAB_TITLE, DEFAULT_TAB_URL};
use super::{BrowserState, Changes, Slice, SpaceId, TabId};

/// A single browsing entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    pub id: TabId,
    pub space_id: SpaceId,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
}

impl Tab {
    pub fn bucket(&self) -> Bucket {
        if self.pinned {
            Bucket::Pinned
        } else {
            Bucket::Today
        }
    }
}

/// Display partition of a space's tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    Pinned,
    Today,
}

impl BrowserState {
    pub(super) fn create_tab(&mut self, url: Option<&str>) -> Changes {
        let (url, title) = match url.and_then(normalize_url) {
            Some(url) => {
                let title = derive_title(&url);
                (url, title)
            }
            None => (DEFAULT_TAB_URL.to_string(), DEFAULT_TAB_TITLE.to_string()),
        };
        let tab = Tab {
            id: TabId::mint(),
            space_id: self.active_space.clone(),
            title,
            url,
            pinned: false,
            favicon: None,
        };
        self.active_tab = Some(tab.id.clone());
        self.tabs.push(tab);
        Changes::of(&[Slice::Tabs, Slice::ActiveTab])
    }

    pub(super) fn select_tab(&mut self, id: &TabId) -> Changes {
        if self.tab(id).is_none() || self.active_tab.as_ref() == Some(id) {
            return Changes::none();
        }
        self.active_tab = Some(id.clone());
        Changes::of(&[Slice::ActiveTab])
    }

    pub(super) fn close_tab(&mut self, id: &TabId) -> Changes {
        let Some(index) = self.tab_index(id) else {
            return Changes::none();
        };
        let closed = self.tabs.remove(index);
        let mut changes = Changes::of(&[Slice::Tabs]);
        if self.active_tab.as_ref() == Some(id) {
            self.active_tab = self
                .tabs
                .iter()
                .rev()
                .find(|tab| tab.space_id == closed.space_id)
                .map(|tab| tab.id.clone());
            changes.insert(Slice::ActiveTab);
        }
        changes
    }

    pub(super) fn update_url(&mut self, id: &TabId, url: &str) -> Changes {
        let Some(url) = normalize_url(url) else {
            return Changes::none();
        };
        let Some(tab) = self.tab_mut(id) else {
            return Changes::none();
        };
        tab.title = derive_title(&url);
        tab.url = url;
        Changes::of(&[Slice::Tabs])
    }

    pub(super) fn set_pinned(&mut self, id: &TabId, pinned: bool) -> Changes {
        match self.tab_mut(id) {
            Some(tab) if tab.pinned != pinned => {
                tab.pinned = pinned;
                Changes::of(&[Slice::Tabs])
            }
            _ => Changes::none(),
        }
    }

    /// Drop targets only exist for the visible space; drops of tabs owned by
    /// other spaces are ignored.
    pub(super) fn drop_on_bucket(&mut self, id: &TabId, bucket: Bucket) -> Changes {
        let in_active_space = self
            .tab(id)
            .is_some_and(|tab| tab.space_id == self.active_space);
        if !in_active_space {
            return Changes::none();
        }
        self.set_pinned(id, bucket == Bucket::Pinned)
    }

    /// Move `dragged` to just before `target`, measured after `dragged` has
    /// been taken out. The dragged tab takes on the target's pinned flag.
    pub(super) fn reorder(&mut self, dragged: &TabId, target: &TabId) -> Changes {
        if dragged == target {
            return Changes::none();
        }
        let (Some(from), Some(target_index)) = (self.tab_index(dragged), self.tab_index(target))
        else {
            return Changes::none();
        };
        let target_pinned = self.tabs[target_index].pinned;
        let mut moved = self.tabs.remove(from);
        moved.pinned = target_pinned;
        let to = self.tab_index(target).unwrap_or(self.tabs.len());
        self.tabs.insert(to, moved);
        Changes::of(&[Slice::Tabs])
    }

    pub(super) fn move_to_space(&mut self, id: &TabId, space: &SpaceId) -> Changes {
        if self.space(space).is_none() {
            return Changes::none();
        }
        let Some(tab) = self.tab_mut(id) else {
            return Changes::none();
        };
        tab.space_id = space.clone();
        tab.pinned = false;
        let mut changes = Changes::of(&[Slice::Tabs]);
        if self.active_tab.as_ref() == Some(id) {
            self.active_tab = None;
            changes.insert(Slice::ActiveTab);
        }
        changes
    }
}
