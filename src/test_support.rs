//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::action::{Action, update};
use crate::core::state::App;

/// Creates a test App with ten boxes at 100ms.
pub fn test_app() -> App {
    App::new(10, 100)
}

/// Creates an App of `box_count` boxes with the given indices toggled.
pub fn app_with_toggled(box_count: usize, toggled: &[usize]) -> App {
    let mut app = App::new(box_count, 100);
    for &i in toggled {
        update(&mut app, Action::ToggleBox(i));
    }
    app
}
