//! User intents and the reducer that applies them.

use super::{
    Bucket, BrowserState, Changes, ContextMenu, Panel, SpaceId, SpaceSwitch, TabId,
};

/// Everything the view layer can ask the state store to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    CreateSpace,
    DeleteSpace(SpaceId),
    RenameSpace { id: SpaceId, name: String },
    RecolorSpace { id: SpaceId, color: String },
    SwitchSpace(SpaceSwitch),

    CreateTab { url: Option<String> },
    SelectTab(TabId),
    CloseTab(TabId),
    UpdateUrl { id: TabId, url: String },
    SetPinned { id: TabId, pinned: bool },
    DropOnBucket { id: TabId, bucket: Bucket },
    Reorder { dragged: TabId, target: TabId },
    MoveToSpace { id: TabId, space: SpaceId },

    ToggleTheme,
    ToggleSidebar,
    ResizePanel { panel: Panel, width: i32 },
    ResetPanel(Panel),
    ToggleChat,
    OpenPalette,
    ClosePalette,
    OpenContextMenu(ContextMenu),
    CloseContextMenu,
    SetPeek(bool),
}

impl BrowserState {
    /// Apply one intent and report the persisted slices it changed.
    ///
    /// Every intent is total: unknown ids and rejected inputs leave the
    /// state untouched and return no changes.
    pub fn apply(&mut self, intent: Intent) -> Changes {
        tracing::debug!(?intent, "apply");
        match intent {
            Intent::CreateSpace => self.create_space(),
            Intent::DeleteSpace(id) => self.delete_space(&id),
            Intent::RenameSpace { id, name } => self.rename_space(&id, &name),
            Intent::RecolorSpace { id, color } => self.recolor_space(&id, &color),
            Intent::SwitchSpace(switch) => self.switch_space(switch),

            Intent::CreateTab { url } => self.create_tab(url.as_deref()),
            Intent::SelectTab(id) => self.select_tab(&id),
            Intent::CloseTab(id) => self.close_tab(&id),
            Intent::UpdateUrl { id, url } => self.update_url(&id, &url),
            Intent::SetPinned { id, pinned } => self.set_pinned(&id, pinned),
            Intent::DropOnBucket { id, bucket } => self.drop_on_bucket(&id, bucket),
            Intent::Reorder { dragged, target } => self.reorder(&dragged, &target),
            Intent::MoveToSpace { id, space } => self.move_to_space(&id, &space),

            Intent::ToggleTheme => self.toggle_theme(),
            Intent::ToggleSidebar => self.toggle_sidebar(),
            Intent::ResizePanel { panel, width } => self.resize_panel(panel, width),
            Intent::ResetPanel(panel) => self.resize_panel(panel, i32::from(panel.default_width())),
            Intent::ToggleChat => {
                self.ui.chat_open = !self.ui.chat_open;
                Changes::none()
            }
            Intent::OpenPalette => {
                self.ui.palette_open = true;
                Changes::none()
            }
            Intent::ClosePalette => {
                self.ui.palette_open = false;
                Changes::none()
            }
            Intent::OpenContextMenu(menu) => {
                self.ui.context_menu = Some(menu);
                Changes::none()
            }
            Intent::CloseContextMenu => {
                self.ui.context_menu = None;
                Changes::none()
            }
            Intent::SetPeek(peeking) => self.set_peek(peeking),
        }
    }
}

/// Reducer form of [`BrowserState::apply`]: old state + intent -> new state.
#[cfg(test)]
pub fn reduce(mut state: BrowserState, intent: Intent) -> (BrowserState, Changes) {
    let changes = state.apply(intent);
    (state, changes)
}
