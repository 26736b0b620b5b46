//! Application runner and event loop.
//!
//! Handles terminal setup/teardown and the main event loop.
//! Events are read from an mpsc channel and dispatched to handlers.

use std::io;
use std::path::PathBuf;
use std::sync::mpsc::{self, Sender};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::config::load_config;
use crate::events::AppEvent;
use crate::state::{load_browser_state, state_path, FileStore, KeyValueStore, MemoryStore};
use crate::surface::PreviewHost;

use super::state::App;

/// Entry point: set up terminal and run the event loop.
pub fn run() -> io::Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    stdout.execute(PushKeyboardEnhancementFlags(
        KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES,
    ))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal);

    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal
        .backend_mut()
        .execute(PopKeyboardEnhancementFlags)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("tabspace stopped");
    result
}

/// Main event loop: process events until quit.
fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    spawn_input_thread(event_tx.clone());

    let mut app = App::from_env(event_tx);
    terminal.clear()?;
    terminal.draw(|frame| super::render::render(&mut app, frame))?;

    while !app.should_quit {
        let event = match event_rx.recv() {
            Ok(event) => event,
            Err(_) => break,
        };
        super::input::handle_event(&mut app, event);
        // Drain any pending events before redraw
        while let Ok(event) = event_rx.try_recv() {
            super::input::handle_event(&mut app, event);
        }

        terminal.draw(|frame| super::render::render(&mut app, frame))?;
    }
    Ok(())
}

/// Spawn a thread to read terminal input events.
fn spawn_input_thread(sender: Sender<AppEvent>) {
    std::thread::spawn(move || loop {
        let event = match event::read() {
            Ok(Event::Key(key)) => AppEvent::Input(key),
            Ok(Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
            Ok(Event::Resize(_, _)) => AppEvent::Resize,
            Ok(_) => continue,
            Err(_) => break,
        };
        if sender.send(event).is_err() {
            break;
        }
    });
}

impl App {
    /// Create an App from config files, the persisted state file, and a
    /// preview surface that reports back over `event_tx`.
    pub fn from_env(event_tx: Sender<AppEvent>) -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let config = load_config(&cwd);
        let log_path = crate::logging::init(&config.log);
        tracing::info!(version = env!("CARGO_PKG_VERSION"), "tabspace starting");

        let store: Box<dyn KeyValueStore> = match state_path(&config.store) {
            Some(path) => {
                let store = FileStore::open(path);
                tracing::info!(path = %store.path().display(), "using state file");
                Box::new(store)
            }
            None => {
                tracing::warn!("no state path available, state will not survive a restart");
                Box::new(MemoryStore::new())
            }
        };
        let browser = load_browser_state(store.as_ref());

        let mut app = Self::new(browser, store, config, Box::new(PreviewHost::new(event_tx)));
        if log_path.is_none() {
            app.set_output("Logging is disabled.".to_string());
        }
        app
    }
}
