//! Persistent browser state.
//!
//! Every slice of `BrowserState` is stored as a JSON string under its own
//! fixed key in a key-value store. The default store is a single JSON object
//! file at `~/.config/tabspace/state.json`, overridable with
//! `TABSPACE_STATE_PATH` or `[store] path` in the config.
//!
//! Loading never fails: a missing or malformed slice falls back to its
//! default value. There is no versioning between stored shapes.

use std::collections::{BTreeMap, HashMap};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::browser::{BrowserState, Changes, Slice, UiFlags};
use crate::config::StoreConfig;
use crate::error::StoreError;

pub const STATE_PATH_ENV: &str = "TABSPACE_STATE_PATH";

/// Generic "read key, write key" substrate.
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: String) -> Result<(), StoreError>;
}

/// Volatile store used when no state path can be resolved.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// JSON object file holding one string value per key. Rewritten on every
/// write so the file always mirrors the latest committed transition.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|err| {
                tracing::warn!(path = %path.display(), %err, "state file is malformed, starting fresh");
                BTreeMap::new()
            }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "state file is unreadable, starting fresh");
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| StoreError::io(parent, err))?;
        }
        let contents = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, contents).map_err(|err| StoreError::io(&self.path, err))
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }
}

pub fn state_path(config: &StoreConfig) -> Option<PathBuf> {
    if let Ok(path) = env::var(STATE_PATH_ENV) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    if let Some(path) = &config.path {
        return Some(path.clone());
    }
    let base = dirs::config_dir()?;
    Some(base.join("tabspace").join("state.json"))
}

pub fn slice_key(slice: Slice) -> &'static str {
    match slice {
        Slice::Spaces => "tabspace.spaces",
        Slice::Tabs => "tabspace.tabs",
        Slice::ActiveSpace => "tabspace.active-space",
        Slice::ActiveTab => "tabspace.active-tab",
        Slice::Theme => "tabspace.theme",
        Slice::SidebarVisible => "tabspace.sidebar-visible",
        Slice::SidebarWidth => "tabspace.sidebar-width",
        Slice::ChatWidth => "tabspace.chat-width",
    }
}

/// Rehydrate browser state, slice by slice, with first-launch defaults.
pub fn load_browser_state(store: &dyn KeyValueStore) -> BrowserState {
    let defaults = BrowserState::seeded();
    let ui = defaults.ui();

    let spaces = read_slice(store, Slice::Spaces, defaults.spaces().to_vec());
    let tabs = read_slice(store, Slice::Tabs, defaults.tabs().to_vec());
    let active_space = read_slice(store, Slice::ActiveSpace, defaults.active_space_id().clone());
    let active_tab = read_slice(store, Slice::ActiveTab, defaults.active_tab_id().cloned());
    let theme = read_slice(store, Slice::Theme, ui.theme);
    let sidebar_visible = read_slice(store, Slice::SidebarVisible, ui.sidebar_visible);
    let sidebar_width = read_slice(store, Slice::SidebarWidth, ui.sidebar_width);
    let chat_width = read_slice(store, Slice::ChatWidth, ui.chat_width);

    BrowserState::from_parts(
        spaces,
        tabs,
        active_space,
        active_tab,
        UiFlags::persisted(theme, sidebar_visible, sidebar_width, chat_width),
    )
}

fn read_slice<T: DeserializeOwned>(store: &dyn KeyValueStore, slice: Slice, default: T) -> T {
    let key = slice_key(slice);
    let Some(raw) = store.read(key) else {
        return default;
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(key, %err, "malformed stored value, using default");
            default
        }
    }
}

/// Write every slice named in `changes`.
pub fn persist_changes(
    store: &mut dyn KeyValueStore,
    state: &BrowserState,
    changes: &Changes,
) -> Result<(), StoreError> {
    for slice in changes.iter() {
        let value = encode_slice(state, slice)?;
        store.write(slice_key(slice), value)?;
    }
    Ok(())
}

fn encode_slice(state: &BrowserState, slice: Slice) -> Result<String, serde_json::Error> {
    let ui = state.ui();
    match slice {
        Slice::Spaces => serde_json::to_string(state.spaces()),
        Slice::Tabs => serde_json::to_string(state.tabs()),
        Slice::ActiveSpace => serde_json::to_string(state.active_space_id()),
        Slice::ActiveTab => serde_json::to_string(&state.active_tab_id()),
        Slice::Theme => serde_json::to_string(&ui.theme),
        Slice::SidebarVisible => serde_json::to_string(&ui.sidebar_visible),
        Slice::SidebarWidth => serde_json::to_string(&ui.sidebar_width),
        Slice::ChatWidth => serde_json::to_string(&ui.chat_width),
    }
}
