//! # Animation State
//!
//! Core state for bouncebox. Domain data only, no terminal types.
//! Presentation lives in the `tui` module.
//!
//! ```text
//! App
//! ├── boxes: Vec<BoxCell>          // fixed-length row, never resized
//! ├── position: usize              // marker cell, always < boxes.len()
//! ├── direction: Direction         // Forward (+1) or Backward (-1)
//! ├── message: String              // status line text
//! └── refresh_interval_ms: u64     // frame length, never below MIN_REFRESH_MS
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

/// Lowest refresh interval the up-arrow can reach.
pub const MIN_REFRESH_MS: u64 = 10;
/// Amount one up/down press changes the refresh interval by.
pub const REFRESH_STEP_MS: u64 = 10;

pub const INITIAL_MESSAGE: &str = "Press a button";

/// A single toggleable cell in the row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoxCell {
    pub toggled: bool,
}

impl BoxCell {
    pub fn glyph(&self) -> &'static str {
        if self.toggled { "[*]" } else { "[ ]" }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    /// Signed step, +1 or -1.
    pub fn delta(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }

    /// One step from `index` in this direction, wrapping within `len` cells.
    pub fn step(self, index: usize, len: usize) -> usize {
        match self {
            Direction::Forward => (index + 1) % len,
            Direction::Backward => (index + len - 1) % len,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    pub boxes: Vec<BoxCell>,
    pub position: usize,
    pub direction: Direction,
    pub message: String,
    pub refresh_interval_ms: u64,
}

impl App {
    /// Builds the initial state. `box_count` is raised to 1 and the refresh
    /// interval to `MIN_REFRESH_MS` if either is below its minimum.
    pub fn new(box_count: usize, refresh_interval_ms: u64) -> Self {
        Self {
            boxes: vec![BoxCell::default(); box_count.max(1)],
            position: 0,
            direction: Direction::default(),
            message: String::from(INITIAL_MESSAGE),
            refresh_interval_ms: refresh_interval_ms.max(MIN_REFRESH_MS),
        }
    }

    pub fn box_count(&self) -> usize {
        self.boxes.len()
    }

    pub fn refresh_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.refresh_interval_ms)
    }

    pub fn toggled_count(&self) -> usize {
        self.boxes.iter().filter(|b| b.toggled).count()
    }
}
