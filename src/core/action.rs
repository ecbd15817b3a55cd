//! # Actions
//!
//! Everything that can happen to the animation becomes an `Action`.
//! User presses `3`? That's `Action::ToggleBox(3)`.
//! A frame elapses? That's `Action::Tick`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state in place and returns an `Effect` for the loop to act on.
//! No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::state::{App, MIN_REFRESH_MS, REFRESH_STEP_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Flip one box. Indices past the end of the row are ignored.
    ToggleBox(usize),
    ClearAll,
    /// Shorten the refresh interval (up-arrow).
    SpeedUp,
    /// Lengthen the refresh interval (down-arrow).
    SlowDown,
    /// Advance the marker one cell.
    Tick,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Quit => {
            info!("Quit requested");
            return Effect::Quit;
        }
        Action::ToggleBox(index) => {
            let Some(cell) = app.boxes.get_mut(index) else {
                debug!("Ignoring toggle for out-of-range box {}", index);
                return Effect::None;
            };
            cell.toggled = !cell.toggled;
            let verb = if cell.toggled { "toggled" } else { "untoggled" };
            app.message = format!("Box {index} {verb}");
            debug!("{}", app.message);
        }
        Action::ClearAll => {
            app.boxes.iter_mut().for_each(|b| b.toggled = false);
            app.message = String::from("Cleared all boxes");
            debug!("All boxes cleared");
        }
        Action::SpeedUp => {
            app.refresh_interval_ms = app
                .refresh_interval_ms
                .saturating_sub(REFRESH_STEP_MS)
                .max(MIN_REFRESH_MS);
            if app.refresh_interval_ms == MIN_REFRESH_MS {
                app.message = format!("Refresh rate at minimum ({MIN_REFRESH_MS}ms)");
            }
            info!("Refresh interval now {}ms", app.refresh_interval_ms);
        }
        Action::SlowDown => {
            app.refresh_interval_ms = app.refresh_interval_ms.saturating_add(REFRESH_STEP_MS);
            info!("Refresh interval now {}ms", app.refresh_interval_ms);
        }
        Action::Tick => advance_marker(app),
    }
    Effect::None
}

/// Moves the marker one cell, then reverses if the *next* cell is toggled.
///
/// The look-ahead happens after the move, so the marker turns around one
/// cell before a toggled box rather than on it.
fn advance_marker(app: &mut App) {
    let len = app.boxes.len();
    app.position = app.direction.step(app.position, len);

    let ahead = app.direction.step(app.position, len);
    if app.boxes[ahead].toggled {
        app.direction = app.direction.reversed();
        debug!("Marker at {} bounced off box {}", app.position, ahead);
    }
}
