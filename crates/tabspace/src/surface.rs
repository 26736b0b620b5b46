//! Content surface bookkeeping.
//!
//! The shell never renders pages itself. It tells a `SurfaceHost` which URL
//! to show and tracks a loading flag until the host signals back. Every
//! navigation bumps a generation counter; a signal carrying an older
//! generation belongs to a superseded navigation and is ignored.

use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

use crate::browser::TabId;
use crate::events::AppEvent;

/// Host primitive that actually loads a URL. It must eventually report the
/// outcome with the generation it was given.
pub trait SurfaceHost {
    fn load(&self, url: &str, generation: u64);
}

#[derive(Debug, Default)]
pub struct ContentSurface {
    tab: Option<TabId>,
    url: Option<String>,
    loading: bool,
    generation: u64,
}

impl ContentSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the surface at a tab's URL. Returns the new generation when
    /// this is a navigation, `None` when the surface already shows it.
    pub fn show(&mut self, tab: &TabId, url: &str) -> Option<u64> {
        if self.tab.as_ref() == Some(tab) && self.url.as_deref() == Some(url) {
            return None;
        }
        self.tab = Some(tab.clone());
        self.url = Some(url.to_string());
        Some(self.begin_load())
    }

    pub fn reload(&mut self) -> Option<u64> {
        self.url.as_ref()?;
        Some(self.begin_load())
    }

    /// Handle a loaded/error signal. Returns whether it cleared the flag.
    pub fn settle(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.loading {
            tracing::debug!(generation, current = self.generation, "ignoring stale surface signal");
            return false;
        }
        self.loading = false;
        true
    }

    pub fn clear(&mut self) {
        self.tab = None;
        self.url = None;
        self.loading = false;
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }
}

const PREVIEW_LOAD_DELAY: Duration = Duration::from_millis(400);

/// Terminal stand-in for a page renderer: it shows the address as text and
/// reports "loaded" after a short delay on a worker thread.
#[derive(Debug, Clone)]
pub struct PreviewHost {
    tx: Sender<AppEvent>,
}

impl PreviewHost {
    pub fn new(tx: Sender<AppEvent>) -> Self {
        Self { tx }
    }
}

impl SurfaceHost for PreviewHost {
    fn load(&self, url: &str, generation: u64) {
        tracing::debug!(url, generation, "loading surface");
        let tx = self.tx.clone();
        thread::spawn(move || {
            thread::sleep(PREVIEW_LOAD_DELAY);
            let _ = tx.send(AppEvent::SurfaceSettled { generation });
        });
    }
}
