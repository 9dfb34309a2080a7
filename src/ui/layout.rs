//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::constants::STATUS_BAR_PERCENT;

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Calculate the main layout areas (panes on top, status bar below)
    #[must_use]
    pub fn main_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(100 - STATUS_BAR_PERCENT),
                Constraint::Percentage(STATUS_BAR_PERCENT),
            ])
            .split(area)
            .to_vec()
    }

    /// Calculate the body layout (category sidebar on the left, the
    /// task column on the right)
    #[must_use]
    pub fn body_layout(area: Rect, sidebar_percent: u16) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(sidebar_percent),
                Constraint::Percentage(100 - sidebar_percent),
            ])
            .split(area)
            .to_vec()
    }

    /// Calculate the right column layout (task list above, description
    /// panel below)
    #[must_use]
    pub fn right_column_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area)
            .to_vec()
    }
}
