//! Layout definitions for the TUI
//!
//! The form is a header, the two entry lists side by side, a summary panel
//! and a one-line status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the form
pub struct FormLayout {
    /// Chart title and output path
    pub header: Rect,
    /// Income sources list
    pub incomes: Rect,
    /// Expense categories list
    pub expenses: Rect,
    /// Totals and consistency
    pub summary: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl FormLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(6),    // Lists
                Constraint::Length(7), // Summary
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let lists = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(vertical[1]);

        Self {
            header: vertical[0],
            incomes: lists[0],
            expenses: lists[1],
            summary: vertical[2],
            status_bar: vertical[3],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

/// Area for a toast in the top-right corner, stacked below `offset` rows
pub fn toast_rect(width: u16, height: u16, offset: u16, r: Rect) -> Option<Rect> {
    let width = width.min(r.width);
    let y = r.y + 1 + offset;
    if y + height > r.y + r.height {
        return None;
    }
    Some(Rect::new(r.x + r.width - width, y, width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_layout_fills_area() {
        let layout = FormLayout::new(Rect::new(0, 0, 100, 40));
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.status_bar.y, 39);
        assert_eq!(layout.incomes.width + layout.expenses.width, 100);
    }

    #[test]
    fn test_centered_rect_fixed_clamps() {
        let r = centered_rect_fixed(50, 10, Rect::new(0, 0, 30, 8));
        assert_eq!(r, Rect::new(0, 0, 30, 8));
        let r = centered_rect_fixed(10, 4, Rect::new(0, 0, 30, 8));
        assert_eq!(r, Rect::new(10, 2, 10, 4));
    }

    #[test]
    fn test_toast_rect_stacks_and_clips() {
        let area = Rect::new(0, 0, 80, 10);
        assert_eq!(toast_rect(40, 4, 0, area), Some(Rect::new(40, 1, 40, 4)));
        assert_eq!(toast_rect(40, 4, 4, area), Some(Rect::new(40, 5, 40, 4)));
        assert_eq!(toast_rect(40, 4, 6, area), None);
    }
}
