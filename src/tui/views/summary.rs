//! Header and summary panels
//!
//! The header shows the chart title and where it will be written; the
//! summary shows live totals for the rows that would be charted.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::flow::Consistency;
use crate::tui::app::App;

/// Render the header
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Budget Sankey Diagram ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let line = Line::from(vec![
        Span::styled(
            app.appearance.title.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  →  "),
        Span::styled(
            app.output.display().to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Render live totals and the consistency result
pub fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let symbol = app.settings.currency_symbol.as_str();
    let block = Block::default()
        .title(" Summary ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let (income, expenses, status, status_color) = match app.live_totals() {
        Some(totals) => {
            let (status, color) = match totals.consistency() {
                Consistency::Balanced => ("Balanced".to_string(), Color::Green),
                Consistency::Surplus(gap) => (
                    format!("Unallocated {}", gap.format_grouped(symbol)),
                    Color::Green,
                ),
                Consistency::Deficit(gap) => (
                    format!("Over budget by {}", gap.format_grouped(symbol)),
                    Color::Red,
                ),
            };
            (
                totals.income.format_grouped(symbol),
                totals.expenses.format_grouped(symbol),
                status,
                color,
            )
        }
        None => (
            "-".to_string(),
            "-".to_string(),
            "Totals too large".to_string(),
            Color::Red,
        ),
    };

    let appearance = &app.appearance;
    let lines = vec![
        amount_line("Total Income:  ", income),
        amount_line("Total Expenses:", expenses),
        Line::from(vec![
            Span::styled("Status:         ", Style::default().fg(Color::Yellow)),
            Span::styled(
                status,
                Style::default()
                    .fg(status_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Colors:         ", Style::default().fg(Color::Yellow)),
            Span::raw(format!(
                "title {}  paper {}  plot {}",
                appearance.title_color, appearance.paper_bgcolor, appearance.plot_bgcolor
            )),
        ]),
        Line::from(vec![
            Span::styled("Last chart:     ", Style::default().fg(Color::Yellow)),
            Span::raw(
                app.last_graph
                    .as_ref()
                    .map(crate::display::format_shape)
                    .unwrap_or_else(|| "not generated yet (press g)".to_string()),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn amount_line(label: &'static str, amount: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(Color::Yellow)),
        Span::raw(" "),
        Span::styled(amount, Style::default().fg(Color::White)),
    ])
}
