//! # TUI Components
//!
//! Both components are stateless and props-based: they borrow what they
//! draw from the core `App` and hold nothing between frames.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── status_line.rs   (message at the top-left)
//! └── box_row.rs       (indices, boxes and marker)
//! ```

mod box_row;
mod status_line;

pub use box_row::BoxRow;
pub use status_line::StatusLine;
