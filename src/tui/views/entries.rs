//! Entry list view
//!
//! One table per side of the budget, with the selected row highlighted in
//! the focused table.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::models::entry::total;
use crate::tui::app::{App, Side};

/// Render the rows of one side
pub fn render(frame: &mut Frame, app: &App, side: Side, area: Rect) {
    let is_focused = app.focused == side;
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::White
    };
    let symbol = app.settings.currency_symbol.as_str();
    let rows = app.rows(side);

    let block = Block::default()
        .title(format!(
            " {} ({}) ",
            side.title(),
            total(rows).format_grouped(symbol)
        ))
        .title_style(
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let widths = [
        Constraint::Length(4),  // Index
        Constraint::Min(12),    // Name
        Constraint::Length(16), // Amount
    ];

    let header = Row::new(vec![
        Cell::from("#").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Name").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Amount").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let table_rows: Vec<Row> = rows
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let name = if entry.label.trim().is_empty() {
                Cell::from("(no name, skipped)").style(Style::default().fg(Color::DarkGray))
            } else {
                Cell::from(entry.label.clone())
            };
            Row::new(vec![
                Cell::from(format!("{}", i + 1)),
                name,
                Cell::from(format!("{:>15}", entry.amount.format_grouped(symbol))),
            ])
        })
        .collect();

    let mut table = Table::new(table_rows, widths).header(header).block(block);
    if is_focused {
        table = table
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
    }

    let mut state = TableState::default();
    if !rows.is_empty() {
        state.select(Some(app.selected(side)));
    }

    frame.render_stateful_widget(table, area, &mut state);
}
