//! # StatusLine Component
//!
//! Single line at the top-left showing the latest message
//! ("Box 3 toggled", "Cleared all boxes", ...).
//!
//! Stateless: it receives the message as a prop and renders it as a plain
//! `Span`. No borders, since the line is always height 1.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

pub struct StatusLine<'a> {
    pub message: &'a str,
}

impl<'a> StatusLine<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl Component for StatusLine<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::raw(self.message), area);
    }
}
