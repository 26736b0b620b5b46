use super::{load_config, Config, DEFAULT_LOG_FILTER};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::test_utils::{env_lock, EnvVarGuard};

fn write_config(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create config dir");
    }
    fs::write(path, contents).expect("write config");
}

#[test]
fn load_config_uses_defaults_when_empty() {
    let _guard = env_lock();
    let home = TempDir::new().expect("temp home");
    let _home = EnvVarGuard::set("HOME", home.path());

    let project = TempDir::new().expect("temp project");
    let config = load_config(project.path());

    assert_eq!(config.keymap.toggle_sidebar, "ctrl+s");
    assert_eq!(config.keymap.new_tab, "ctrl+t");
    assert_eq!(config.keymap.close_tab, "ctrl+w");
    assert_eq!(config.keymap.command_palette, "ctrl+l");
    assert_eq!(config.keymap.command_palette_alt, "ctrl+k");
    assert_eq!(config.keymap.next_space, "ctrl+right");
    assert_eq!(config.keymap.prev_space, "ctrl+left");
    assert_eq!(config.keymap.quit, "ctrl+q");
    assert_eq!(config.store.path, None);
    assert_eq!(config.search.url, "https://www.google.com/search?q=");
    assert_eq!(config.log.filter, DEFAULT_LOG_FILTER);
}

#[test]
fn load_config_merges_user_and_project() {
    let _guard = env_lock();
    let home = TempDir::new().expect("temp home");
    let _home = EnvVarGuard::set("HOME", home.path());

    write_config(
        &home.path().join(".tabspace").join("config.toml"),
        r#"
[keymap]
new_tab = "alt+t"
closeTab = "alt+w"

[store]
path = "/tmp/user-state.json"

[search]
url = "https://duckduckgo.com/?q="
"#,
    );

    let project = TempDir::new().expect("temp project");
    write_config(
        &project.path().join(".tabspace").join("config.toml"),
        r#"
[keymap]
new_tab = "ctrl+n"

[log]
filter = "tabspace=debug"
"#,
    );

    let config = load_config(project.path());

    assert_eq!(config.keymap.new_tab, "ctrl+n");
    assert_eq!(config.keymap.close_tab, "alt+w");
    assert_eq!(config.keymap.toggle_sidebar, "ctrl+s");
    assert_eq!(
        config.store.path.as_deref(),
        Some(Path::new("/tmp/user-state.json"))
    );
    assert_eq!(config.search.url, "https://duckduckgo.com/?q=");
    assert_eq!(config.log.filter, "tabspace=debug");
}

#[test]
fn unparsable_project_config_falls_back_to_user() {
    let _guard = env_lock();
    let home = TempDir::new().expect("temp home");
    let _home = EnvVarGuard::set("HOME", home.path());

    write_config(
        &home.path().join(".tabspace").join("config.toml"),
        "[keymap]\nquit = \"ctrl+x\"\n",
    );
    let project = TempDir::new().expect("temp project");
    write_config(
        &project.path().join(".tabspace").join("config.toml"),
        "[keymap\nquit = ",
    );

    let config = load_config(project.path());
    assert_eq!(config.keymap.quit, "ctrl+x");
}

#[test]
fn default_config_matches_empty_sources() {
    let config = Config::default();
    assert_eq!(config.keymap.command_palette, "ctrl+l");
    assert!(config.store.path.is_none());
}
