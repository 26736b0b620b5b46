//! Configuration loading and merging.
//!
//! Config is loaded from two sources with the project taking precedence:
//! 1. User-level: `~/.tabspace/config.toml`
//! 2. Project-level: `<cwd>/.tabspace/config.toml`
//!
//! Supports keymap customization, the state file location, the web search
//! URL used by the command palette, and the log filter. Uses TOML format
//! with serde.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_TOGGLE_SIDEBAR: &str = "ctrl+s";
const DEFAULT_NEW_TAB: &str = "ctrl+t";
const DEFAULT_CLOSE_TAB: &str = "ctrl+w";
const DEFAULT_COMMAND_PALETTE: &str = "ctrl+l";
const DEFAULT_COMMAND_PALETTE_ALT: &str = "ctrl+k";
const DEFAULT_NEXT_SPACE: &str = "ctrl+right";
const DEFAULT_PREV_SPACE: &str = "ctrl+left";
const DEFAULT_QUIT: &str = "ctrl+q";
const DEFAULT_SEARCH_URL: &str = "https://www.google.com/search?q=";
pub const DEFAULT_LOG_FILTER: &str = "tabspace=info";

#[derive(Debug, Clone)]
pub struct Config {
    pub keymap: KeymapConfig,
    pub store: StoreConfig,
    pub search: SearchConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone)]
pub struct KeymapConfig {
    pub toggle_sidebar: String,
    pub new_tab: String,
    pub close_tab: String,
    pub command_palette: String,
    pub command_palette_alt: String,
    pub next_space: String,
    pub prev_space: String,
    pub quit: String,
}

#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub filter: String,
}

impl Default for Config {
    fn default() -> Self {
        merge_config(None, None)
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    keymap: Option<RawKeymap>,
    store: Option<RawStore>,
    search: Option<RawSearch>,
    log: Option<RawLog>,
}

#[derive(Debug, Default, Deserialize)]
struct RawKeymap {
    #[serde(alias = "toggleSidebar")]
    toggle_sidebar: Option<String>,
    #[serde(alias = "newTab")]
    new_tab: Option<String>,
    #[serde(alias = "closeTab")]
    close_tab: Option<String>,
    #[serde(alias = "commandPalette")]
    command_palette: Option<String>,
    #[serde(alias = "commandPaletteAlt")]
    command_palette_alt: Option<String>,
    #[serde(alias = "nextSpace")]
    next_space: Option<String>,
    #[serde(alias = "prevSpace")]
    prev_space: Option<String>,
    quit: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawStore {
    path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawSearch {
    url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawLog {
    filter: Option<String>,
}

fn read_toml(path: &Path) -> Option<RawConfig> {
    let contents = fs::read_to_string(path).ok()?;
    if contents.trim().is_empty() {
        return None;
    }
    match toml::from_str::<RawConfig>(&contents) {
        Ok(config) => Some(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "ignoring unparsable config");
            None
        }
    }
}

/// Project value if set, else user value.
fn pick<S, T>(project: Option<&S>, user: Option<&S>, field: impl Fn(&S) -> Option<T>) -> Option<T> {
    project.and_then(&field).or_else(|| user.and_then(&field))
}

fn merge_config(user: Option<RawConfig>, project: Option<RawConfig>) -> Config {
    let project_keymap = project.as_ref().and_then(|c| c.keymap.as_ref());
    let user_keymap = user.as_ref().and_then(|c| c.keymap.as_ref());
    let chord = |field: fn(&RawKeymap) -> Option<String>, default: &str| {
        pick(project_keymap, user_keymap, field).unwrap_or_else(|| default.to_string())
    };

    let keymap = KeymapConfig {
        toggle_sidebar: chord(|k| k.toggle_sidebar.clone(), DEFAULT_TOGGLE_SIDEBAR),
        new_tab: chord(|k| k.new_tab.clone(), DEFAULT_NEW_TAB),
        close_tab: chord(|k| k.close_tab.clone(), DEFAULT_CLOSE_TAB),
        command_palette: chord(|k| k.command_palette.clone(), DEFAULT_COMMAND_PALETTE),
        command_palette_alt: chord(|k| k.command_palette_alt.clone(), DEFAULT_COMMAND_PALETTE_ALT),
        next_space: chord(|k| k.next_space.clone(), DEFAULT_NEXT_SPACE),
        prev_space: chord(|k| k.prev_space.clone(), DEFAULT_PREV_SPACE),
        quit: chord(|k| k.quit.clone(), DEFAULT_QUIT),
    };

    let store_path = pick(
        project.as_ref().and_then(|c| c.store.as_ref()),
        user.as_ref().and_then(|c| c.store.as_ref()),
        |s| s.path.clone(),
    );
    let search_url = pick(
        project.as_ref().and_then(|c| c.search.as_ref()),
        user.as_ref().and_then(|c| c.search.as_ref()),
        |s| s.url.clone(),
    )
    .unwrap_or_else(|| DEFAULT_SEARCH_URL.to_string());
    let log_filter = pick(
        project.as_ref().and_then(|c| c.log.as_ref()),
        user.as_ref().and_then(|c| c.log.as_ref()),
        |l| l.filter.clone(),
    )
    .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    Config {
        keymap,
        store: StoreConfig {
            path: store_path.map(PathBuf::from),
        },
        search: SearchConfig { url: search_url },
        log: LogConfig { filter: log_filter },
    }
}

fn config_path_from_root(root: &Path) -> PathBuf {
    root.join(".tabspace").join("config.toml")
}

fn user_config_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(config_path_from_root(&home))
}

pub fn load_config(root: &Path) -> Config {
    let project_path = config_path_from_root(root);
    let user_path = user_config_path();

    let project_config = read_toml(&project_path);
    let user_config = user_path.and_then(|path| read_toml(&path));

    merge_config(user_config, project_config)
}

#[cfg(test)]
mod tests;
