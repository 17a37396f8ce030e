//! Reusable UI widget helpers

use ratatui::{
    layout::Rect,
    widgets::{List, ListState},
    Frame,
};

/// Render a list that scrolls to keep `selected_index` in view.
pub fn render_scrollable_list(frame: &mut Frame, area: Rect, list: List, selected_index: usize) {
    let mut list_state = ListState::default().with_selected(Some(selected_index));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// First row to draw so that a target ending at row `end` stays inside a
/// window of `height` rows over `total` rows.
pub fn scroll_offset(end: u16, height: u16, total: u16) -> u16 {
    if total <= height || end <= height {
        return 0;
    }
    (end - height).min(total - height)
}
