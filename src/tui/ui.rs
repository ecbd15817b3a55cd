use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{BoxRow, StatusLine};

use ratatui::Frame;
use ratatui::layout::Rect;

pub fn draw_ui(frame: &mut Frame, app: &App) {
    let area = frame.area();
    if area.is_empty() {
        return;
    }

    let message_area = Rect::new(area.x, area.y, area.width, 1);
    StatusLine::new(&app.message).render(frame, message_area);

    BoxRow::new(&app.boxes, app.position).render(frame, box_row_area(area));
}

/// Boxes sit on the middle row with their indices on the row above.
pub fn box_row_area(area: Rect) -> Rect {
    let middle = area.height / 2;
    let top = middle.saturating_sub(1);
    Rect::new(area.x, area.y + top, area.width, middle - top + 1)
}
