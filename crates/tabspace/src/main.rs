mod app;
mod browser;
mod chat;
mod config;
mod drag;
mod error;
mod events;
mod keymap;
mod logging;
mod menu;
mod palette;
mod resize;
mod state;
mod surface;
mod ui;

#[cfg(test)]
mod test_utils;

fn main() -> std::io::Result<()> {
    app::run()
}
