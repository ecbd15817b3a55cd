//! # TUI Adapter
//!
//! The ratatui-specific layer. Acquires the terminal, renders the row,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Frame Loop
//!
//! Each frame is: draw → wait up to the refresh interval for one key →
//! apply it → advance the marker → sleep out whatever is left of the
//! interval. The interval is measured from the start of the frame, so a
//! key arriving early does not speed the marker up. At most one key is
//! consumed per frame; the rest stay queued for the following frames.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::time::Instant;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::event::poll_event_timeout;

/// Owns the terminal for the lifetime of the loop.
///
/// Raw mode, the alternate screen and the hidden cursor are undone on drop,
/// including when the loop exits early through `?`.
struct TerminalSession {
    terminal: DefaultTerminal,
}

impl TerminalSession {
    fn new() -> std::io::Result<Self> {
        let terminal = ratatui::try_init()?;
        let session = Self { terminal };
        execute!(stdout(), Hide)?;
        info!("Terminal acquired (raw mode, alternate screen, cursor hidden)");
        Ok(session)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
        if let Err(e) = ratatui::try_restore() {
            warn!("Failed to restore terminal: {}", e);
        } else {
            info!("Terminal restored");
        }
    }
}

pub fn run(config: &ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::new(config.box_count, config.refresh_ms);
    info!(
        "Starting animation with {} boxes at {}ms",
        app.box_count(),
        app.refresh_interval_ms
    );

    let mut session = TerminalSession::new()?;

    loop {
        let frame_start = Instant::now();
        let interval = app.refresh_interval();

        session.terminal.draw(|f| ui::draw_ui(f, &app))?;

        if let Some(event) = poll_event_timeout(interval)? {
            debug!("Decoded key: {:?}", event);
            if update(&mut app, event.into_action()) == Effect::Quit {
                break;
            }
        }

        update(&mut app, Action::Tick);

        if let Some(remaining) = interval.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    drop(session);
    info!("Animation stopped");
    Ok(())
}
