//! Context menu items for tabs and spaces.

use crate::browser::{BrowserState, Intent, MenuTarget, SpaceId, TabId, PRESET_COLORS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem {
    SetPinned { tab: TabId, pinned: bool },
    MoveToSpace { tab: TabId, space: SpaceId, name: String },
    CloseTab(TabId),
    RenameSpace(SpaceId),
    Recolor { space: SpaceId, color: &'static str },
    DeleteSpace(SpaceId),
}

/// What choosing a menu item does: either a direct state change or opening
/// the inline rename editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    Apply(Intent),
    BeginRename(SpaceId),
}

impl MenuItem {
    pub fn label(&self) -> String {
        match self {
            MenuItem::SetPinned { pinned: true, .. } => "Pin tab".to_string(),
            MenuItem::SetPinned { pinned: false, .. } => "Unpin tab".to_string(),
            MenuItem::MoveToSpace { name, .. } => format!("Move to {name}"),
            MenuItem::CloseTab(_) => "Close tab".to_string(),
            MenuItem::RenameSpace(_) => "Rename space".to_string(),
            MenuItem::Recolor { color, .. } => format!("Color {color}"),
            MenuItem::DeleteSpace(_) => "Delete space".to_string(),
        }
    }

    pub fn swatch(&self) -> Option<&'static str> {
        match self {
            MenuItem::Recolor { color, .. } => Some(*color),
            _ => None,
        }
    }

    pub fn action(&self) -> MenuAction {
        match self {
            MenuItem::SetPinned { tab, pinned } => MenuAction::Apply(Intent::SetPinned {
                id: tab.clone(),
                pinned: *pinned,
            }),
            MenuItem::MoveToSpace { tab, space, .. } => MenuAction::Apply(Intent::MoveToSpace {
                id: tab.clone(),
                space: space.clone(),
            }),
            MenuItem::CloseTab(tab) => MenuAction::Apply(Intent::CloseTab(tab.clone())),
            MenuItem::RenameSpace(space) => MenuAction::BeginRename(space.clone()),
            MenuItem::Recolor { space, color } => MenuAction::Apply(Intent::RecolorSpace {
                id: space.clone(),
                color: (*color).to_string(),
            }),
            MenuItem::DeleteSpace(space) => MenuAction::Apply(Intent::DeleteSpace(space.clone())),
        }
    }
}

pub fn menu_items(state: &BrowserState, target: &MenuTarget) -> Vec<MenuItem> {
    match target {
        MenuTarget::Tab(id) => {
            let Some(tab) = state.tab(id) else {
                return Vec::new();
            };
            let mut items = vec![MenuItem::SetPinned {
                tab: id.clone(),
                pinned: !tab.pinned,
            }];
            items.extend(
                state
                    .spaces()
                    .iter()
                    .filter(|space| space.id != tab.space_id)
                    .map(|space| MenuItem::MoveToSpace {
                        tab: id.clone(),
                        space: space.id.clone(),
                        name: space.name.clone(),
                    }),
            );
            items.push(MenuItem::CloseTab(id.clone()));
            items
        }
        MenuTarget::Space(id) => {
            if state.space(id).is_none() {
                return Vec::new();
            }
            let mut items = vec![MenuItem::RenameSpace(id.clone())];
            items.extend(PRESET_COLORS.iter().map(|color| MenuItem::Recolor {
                space: id.clone(),
                color: *color,
            }));
            items.push(MenuItem::DeleteSpace(id.clone()));
            items
        }
    }
}
