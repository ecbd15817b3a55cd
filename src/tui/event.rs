use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::core::action::Action;

/// Logical keys, decoded once from raw terminal events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    Digit(u8),
    Clear,
    Faster,
    Slower,
}

impl TuiEvent {
    pub fn into_action(self) -> Action {
        match self {
            TuiEvent::Quit => Action::Quit,
            TuiEvent::Digit(d) => Action::ToggleBox(usize::from(d)),
            TuiEvent::Clear => Action::ClearAll,
            TuiEvent::Faster => Action::SpeedUp,
            TuiEvent::Slower => Action::SlowDown,
        }
    }
}

/// Wait up to `timeout` for a terminal event.
///
/// Returns `Ok(None)` on timeout or when the event is not a key we act on.
pub fn poll_event_timeout(timeout: Duration) -> std::io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    match event::read()? {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            Ok(decode_key(key_event))
        }
        _ => Ok(None),
    }
}

pub fn decode_key(key_event: KeyEvent) -> Option<TuiEvent> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    match (key_event.modifiers, key_event.code) {
        // Raw mode swallows SIGINT, so Ctrl+C arrives as a key
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        (_, KeyCode::Enter | KeyCode::Esc) => Some(TuiEvent::Quit),
        (_, KeyCode::Char('q' | 'Q')) => Some(TuiEvent::Quit),
        (_, KeyCode::Char('c' | 'C')) => Some(TuiEvent::Clear),
        (_, KeyCode::Char(c @ '0'..='9')) => Some(TuiEvent::Digit(c as u8 - b'0')),
        (_, KeyCode::Up) => Some(TuiEvent::Faster),
        (_, KeyCode::Down) => Some(TuiEvent::Slower),
        _ => None,
    }
}
