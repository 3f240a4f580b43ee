//! Help dialog
//!
//! Lists the form's keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines())
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        section("Navigation"),
        Line::from(""),
        key_line("Tab / h / l", "Switch between incomes and expenses"),
        key_line("j / k", "Move selection down/up"),
        key_line("J / K", "Move selected row down/up"),
        Line::from(""),
        section("Rows"),
        Line::from(""),
        key_line("a / n", "Add a row"),
        key_line("e / Enter", "Edit selected row"),
        key_line("d / Del", "Delete selected row"),
        Line::from(""),
        section("Chart"),
        Line::from(""),
        key_line("t", "Edit title and colors"),
        key_line("g", "Generate the chart"),
        key_line("s", "Save the budget as YAML"),
        key_line("q", "Quit"),
        key_line("?", "Show/hide help"),
        Line::from(""),
        Line::from(Span::styled(
            "Rows without a name are left out of the chart.",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    ))
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
