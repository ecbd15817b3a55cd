//! # Core Animation Logic
//!
//! Everything bouncebox knows about boxes, the marker and the refresh rate.
//! It knows nothing about terminals.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (boxes, marker)│
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, boxes, marker position and direction
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: Box count and refresh rate from defaults, file and CLI

pub mod action;
pub mod config;
pub mod state;
