//! Status bar view
//!
//! Shows row counts for the focused side and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, MAX_ROWS};

const HINTS: &str = " a:Add  e:Edit  d:Delete  t:Appearance  g:Generate  ?:Help  q:Quit ";

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let side = app.focused;
    let left = format!(
        " {}: {}/{} rows ",
        side.title(),
        app.rows(side).len(),
        MAX_ROWS
    );

    let left_len = left.chars().count();
    let hints_len = HINTS.chars().count();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints_len);

    let line = Line::from(vec![
        Span::styled(left, Style::default().fg(Color::Cyan)),
        Span::raw(" ".repeat(padding_len.max(1))),
        Span::styled(HINTS, Style::default().fg(Color::White)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
