//! Shared helpers for unit tests.

use std::env;
use std::ffi::{OsStr, OsString};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::surface::SurfaceHost;

/// Serializes tests that touch process-wide environment variables.
pub fn env_lock() -> MutexGuard<'static, ()> {
    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Restores an environment variable to its previous value on drop.
pub struct EnvVarGuard {
    key: &'static str,
    original: Option<OsString>,
}

impl EnvVarGuard {
    pub fn set(key: &'static str, value: impl AsRef<OsStr>) -> Self {
        let original = env::var_os(key);
        env::set_var(key, value);
        Self { key, original }
    }

    pub fn unset(key: &'static str) -> Self {
        let original = env::var_os(key);
        env::remove_var(key);
        Self { key, original }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        match &self.original {
            Some(value) => env::set_var(self.key, value),
            None => env::remove_var(self.key),
        }
    }
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::CONTROL)
}

pub fn typed(text: &str) -> Vec<KeyEvent> {
    text.chars().map(|ch| key(KeyCode::Char(ch))).collect()
}

/// Surface host that records load requests instead of showing pages.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    loads: Arc<Mutex<Vec<(String, u64)>>>,
}

impl RecordingHost {
    pub fn loads(&self) -> Vec<(String, u64)> {
        self.loads
            .lock()
            .map(|loads| loads.clone())
            .unwrap_or_default()
    }
}

impl SurfaceHost for RecordingHost {
    fn load(&self, url: &str, generation: u64) {
        if let Ok(mut loads) = self.loads.lock() {
            loads.push((url.to_string(), generation));
        }
    }
}
