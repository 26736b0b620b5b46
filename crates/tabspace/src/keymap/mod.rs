//! Key chord parsing and the shortcut dispatch table.
//!
//! Parses key chord strings like "ctrl+t" or "ctrl+right" from config and
//! matches them against crossterm KeyEvents at runtime. Each shortcut maps
//! to exactly one browser operation; a matched chord is always consumed.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::browser::{BrowserState, Intent, SpaceSwitch};
use crate::config::KeymapConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyChord {
    pub key: KeyCode,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

pub fn parse_key_chord(input: &str) -> Option<KeyChord> {
    let trimmed = input.trim().to_lowercase();
    if trimmed.is_empty() {
        return None;
    }

    let parts: Vec<&str> = trimmed
        .split('+')
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect();
    if parts.is_empty() {
        return None;
    }

    let mut chord = KeyChord {
        key: KeyCode::Null,
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    for part in parts {
        match part {
            "ctrl" | "control" => chord.ctrl = true,
            "alt" | "option" => chord.alt = true,
            "shift" => chord.shift = true,
            "meta" | "cmd" | "super" => chord.meta = true,
            key => {
                if chord.key != KeyCode::Null {
                    return None;
                }
                chord.key = parse_key(key)?;
            }
        }
    }

    if chord.key == KeyCode::Null {
        return None;
    }

    Some(chord)
}

fn parse_key(key: &str) -> Option<KeyCode> {
    match key {
        "esc" | "escape" => Some(KeyCode::Esc),
        "enter" | "return" => Some(KeyCode::Enter),
        "tab" => Some(KeyCode::Tab),
        "space" | "spacebar" => Some(KeyCode::Char(' ')),
        "left" | "arrowleft" => Some(KeyCode::Left),
        "right" | "arrowright" => Some(KeyCode::Right),
        "up" | "arrowup" => Some(KeyCode::Up),
        "down" | "arrowdown" => Some(KeyCode::Down),
        _ => {
            let mut chars = key.chars();
            let first = chars.next()?;
            if chars.next().is_none() {
                Some(KeyCode::Char(first))
            } else {
                None
            }
        }
    }
}

pub fn matches_chord(event: &KeyEvent, chord: &KeyChord) -> bool {
    let code = match event.code {
        KeyCode::Char(ch) => KeyCode::Char(ch.to_ascii_lowercase()),
        other => other,
    };
    if code != chord.key {
        return false;
    }

    let modifiers = event.modifiers;
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let alt = modifiers.contains(KeyModifiers::ALT);
    let shift = modifiers.contains(KeyModifiers::SHIFT);
    let meta = modifiers.contains(KeyModifiers::SUPER) || modifiers.contains(KeyModifiers::META);

    ctrl == chord.ctrl && alt == chord.alt && shift == chord.shift && meta == chord.meta
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    ToggleSidebar,
    NewTab,
    CloseTab,
    CommandPalette,
    NextSpace,
    PrevSpace,
    Quit,
}

impl Shortcut {
    /// The browser operation this shortcut invokes. `None` when there is
    /// nothing to act on (no active tab to close) or for host-level actions.
    pub fn intent(self, state: &BrowserState) -> Option<Intent> {
        match self {
            Shortcut::ToggleSidebar => Some(Intent::ToggleSidebar),
            Shortcut::NewTab => Some(Intent::CreateTab { url: None }),
            Shortcut::CloseTab => state.active_tab_id().cloned().map(Intent::CloseTab),
            Shortcut::CommandPalette => Some(Intent::OpenPalette),
            Shortcut::NextSpace => Some(Intent::SwitchSpace(SpaceSwitch::Next)),
            Shortcut::PrevSpace => Some(Intent::SwitchSpace(SpaceSwitch::Prev)),
            Shortcut::Quit => None,
        }
    }
}

/// Chord to shortcut table built from the keymap config.
#[derive(Debug, Clone, Default)]
pub struct ShortcutTable {
    bindings: Vec<(KeyChord, Shortcut)>,
}

impl ShortcutTable {
    pub fn from_config(keymap: &KeymapConfig) -> Self {
        let entries = [
            (&keymap.toggle_sidebar, Shortcut::ToggleSidebar),
            (&keymap.new_tab, Shortcut::NewTab),
            (&keymap.close_tab, Shortcut::CloseTab),
            (&keymap.command_palette, Shortcut::CommandPalette),
            (&keymap.command_palette_alt, Shortcut::CommandPalette),
            (&keymap.next_space, Shortcut::NextSpace),
            (&keymap.prev_space, Shortcut::PrevSpace),
            (&keymap.quit, Shortcut::Quit),
        ];
        let mut bindings = Vec::with_capacity(entries.len());
        for (raw, shortcut) in entries {
            match parse_key_chord(raw) {
                Some(chord) => bindings.push((chord, shortcut)),
                None => tracing::warn!(chord = %raw, ?shortcut, "ignoring invalid key chord"),
            }
        }
        Self { bindings }
    }

    pub fn lookup(&self, event: &KeyEvent) -> Option<Shortcut> {
        self.bindings
            .iter()
            .find(|(chord, _)| matches_chord(event, chord))
            .map(|(_, shortcut)| *shortcut)
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_key_chord, Shortcut, ShortcutTable};
    use crate::browser::{BrowserState, Intent, SpaceSwitch};
    use crate::config::Config;
    use crate::test_utils::{ctrl, key};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn parse_key_chord_accepts_arrows_and_modifiers() {
        let chord = parse_key_chord("Ctrl+Right").expect("chord");
        assert_eq!(chord.key, KeyCode::Right);
        assert!(chord.ctrl && !chord.alt && !chord.shift && !chord.meta);

        let chord = parse_key_chord("cmd+shift+t").expect("chord");
        assert_eq!(chord.key, KeyCode::Char('t'));
        assert!(chord.meta && chord.shift);
    }

    #[test]
    fn parse_key_chord_rejects_garbage() {
        assert!(parse_key_chord("").is_none());
        assert!(parse_key_chord("ctrl+").is_none());
        assert!(parse_key_chord("ctrl+a+b").is_none());
        assert!(parse_key_chord("ctrl+pagedownish").is_none());
    }

    #[test]
    fn default_table_covers_every_shortcut() {
        let table = ShortcutTable::from_config(&Config::default().keymap);
        assert_eq!(table.lookup(&ctrl(KeyCode::Char('s'))), Some(Shortcut::ToggleSidebar));
        assert_eq!(table.lookup(&ctrl(KeyCode::Char('t'))), Some(Shortcut::NewTab));
        assert_eq!(table.lookup(&ctrl(KeyCode::Char('w'))), Some(Shortcut::CloseTab));
        assert_eq!(table.lookup(&ctrl(KeyCode::Char('l'))), Some(Shortcut::CommandPalette));
        assert_eq!(table.lookup(&ctrl(KeyCode::Char('k'))), Some(Shortcut::CommandPalette));
        assert_eq!(table.lookup(&ctrl(KeyCode::Right)), Some(Shortcut::NextSpace));
        assert_eq!(table.lookup(&ctrl(KeyCode::Left)), Some(Shortcut::PrevSpace));
        assert_eq!(table.lookup(&ctrl(KeyCode::Char('q'))), Some(Shortcut::Quit));
        assert_eq!(table.lookup(&key(KeyCode::Char('t'))), None);
    }

    #[test]
    fn modifiers_must_match_exactly() {
        let table = ShortcutTable::from_config(&Config::default().keymap);
        let event = KeyEvent::new(
            KeyCode::Char('T'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
        );
        assert_eq!(table.lookup(&event), None);
    }

    #[test]
    fn shortcuts_map_to_single_intents() {
        let state = BrowserState::seeded();
        assert_eq!(
            Shortcut::NextSpace.intent(&state),
            Some(Intent::SwitchSpace(SpaceSwitch::Next))
        );
        let active = state.active_tab_id().cloned().expect("seeded active tab");
        assert_eq!(Shortcut::CloseTab.intent(&state), Some(Intent::CloseTab(active)));
        assert_eq!(Shortcut::Quit.intent(&state), None);
    }

    #[test]
    fn close_shortcut_needs_an_active_tab() {
        let mut state = BrowserState::seeded();
        while let Some(id) = state.active_tab_id().cloned() {
            state.apply(Intent::CloseTab(id));
        }
        assert_eq!(Shortcut::CloseTab.intent(&state), None);
    }
}
