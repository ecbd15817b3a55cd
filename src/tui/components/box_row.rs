//! # BoxRow Component
//!
//! The row of boxes with their indices above and the marker drawn inside
//! the box it currently occupies:
//!
//! ```text
//!  0  1  2  3  4
//! [ ][*][o][ ][ ]
//! ```
//!
//! Each cell is three columns wide. The row is centred horizontally in the
//! given area; on a narrow terminal it is clipped at the right edge.
//! With a two-line area the index labels go on the first line and the boxes
//! on the second. With a one-line area only the boxes are drawn.

use crate::core::state::BoxCell;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub const CELL_WIDTH: u16 = 3;
pub const MARKER: &str = "o";

pub struct BoxRow<'a> {
    pub boxes: &'a [BoxCell],
    pub position: usize,
}

impl<'a> BoxRow<'a> {
    pub fn new(boxes: &'a [BoxCell], position: usize) -> Self {
        Self { boxes, position }
    }

    pub fn row_width(&self) -> u16 {
        u16::try_from(self.boxes.len())
            .unwrap_or(u16::MAX)
            .saturating_mul(CELL_WIDTH)
    }

    fn index_line(&self) -> Line<'static> {
        let labels: String = (0..self.boxes.len()).map(|i| format!(" {i:<2}")).collect();
        Line::from(Span::styled(labels, Style::default().fg(Color::DarkGray)))
    }

    fn box_line(&self) -> Line<'static> {
        let toggled_style = Style::default().fg(Color::Yellow);
        let marker_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

        let mut spans = Vec::with_capacity(self.boxes.len() + 2);
        for (i, cell) in self.boxes.iter().enumerate() {
            let style = if cell.toggled {
                toggled_style
            } else {
                Style::default()
            };
            if i == self.position {
                spans.push(Span::styled("[", style));
                spans.push(Span::styled(MARKER, marker_style));
                spans.push(Span::styled("]", style));
            } else {
                spans.push(Span::styled(cell.glyph(), style));
            }
        }
        Line::from(spans)
    }
}

impl Component for BoxRow<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if area.is_empty() {
            return;
        }
        let width = self.row_width().min(area.width);
        let x = area.x + (area.width - width) / 2;
        let row_area = Rect::new(x, area.y, width, area.height.min(2));

        let lines = if row_area.height >= 2 {
            vec![self.index_line(), self.box_line()]
        } else {
            vec![self.box_line()]
        };
        frame.render_widget(Paragraph::new(lines), row_area);
    }
}
