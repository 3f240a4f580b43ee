//! Chart appearance dialog
//!
//! Edits the chart title, title color and the paper/plot backgrounds.
//! Colors are passed to Plotly as typed, so names and hex codes both work.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::app::{App, Appearance};
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

const FIELD_COUNT: usize = 4;

/// State for the appearance dialog
#[derive(Debug, Clone, Default)]
pub struct AppearanceFormState {
    /// Title, title color, paper background, plot background
    pub fields: [TextInput; FIELD_COUNT],
    pub focus: usize,
    pub error_message: Option<String>,
}

impl AppearanceFormState {
    pub fn from_appearance(appearance: &Appearance) -> Self {
        let values = [
            ("Title", &appearance.title),
            ("Title color", &appearance.title_color),
            ("Paper background", &appearance.paper_bgcolor),
            ("Plot background", &appearance.plot_bgcolor),
        ];
        let fields = values.map(|(label, value)| {
            let mut input = TextInput::new(label);
            input.set_value(value.as_str());
            input
        });

        Self {
            fields,
            focus: 0,
            error_message: None,
        }
    }

    pub fn next_field(&mut self) {
        self.focus = (self.focus + 1) % FIELD_COUNT;
    }

    pub fn prev_field(&mut self) {
        self.focus = (self.focus + FIELD_COUNT - 1) % FIELD_COUNT;
    }

    fn focused_input(&mut self) -> &mut TextInput {
        &mut self.fields[self.focus]
    }

    /// Validate the fields; only the title is required
    pub fn to_appearance(&self) -> Result<Appearance, String> {
        let [title, title_color, paper, plot] = &self.fields;
        if title.value().trim().is_empty() {
            return Err("Title cannot be empty".to_string());
        }
        Ok(Appearance {
            title: title.value().trim().to_string(),
            title_color: title_color.value().trim().to_string(),
            paper_bgcolor: paper.value().trim().to_string(),
            plot_bgcolor: plot.value().trim().to_string(),
        })
    }
}

/// Render the appearance dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(60, 13, frame.area());
    frame.render_widget(Clear, area);

    let state = &app.appearance_form;

    let block = Block::default()
        .title(" Diagram Appearance ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Title
            Constraint::Length(1), // Title color
            Constraint::Length(1), // Paper background
            Constraint::Length(1), // Plot background
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Instructions
            Constraint::Min(0),
        ])
        .split(inner);

    for (i, field) in state.fields.iter().enumerate() {
        frame.render_widget(field.widget(i == state.focus), chunks[i + 1]);
    }

    if let Some(ref error) = state.error_message {
        let error_line = Line::from(Span::styled(error.as_str(), Style::default().fg(Color::Red)));
        frame.render_widget(Paragraph::new(error_line), chunks[6]);
    }

    let instructions = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Tab]", Style::default().fg(Color::Cyan)),
        Span::raw(" Next field  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(instructions), chunks[7]);
}

/// Handle key events for the appearance dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let state = &mut app.appearance_form;
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter => match state.to_appearance() {
            Ok(appearance) => {
                app.appearance = appearance;
                app.close_dialog();
            }
            Err(e) => state.error_message = Some(e),
        },
        KeyCode::Tab | KeyCode::Down => state.next_field(),
        KeyCode::BackTab | KeyCode::Up => state.prev_field(),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.focused_input().clear();
        }
        KeyCode::Char(c) if !c.is_control() => {
            state.focused_input().insert(c);
            state.error_message = None;
        }
        KeyCode::Backspace => state.focused_input().backspace(),
        KeyCode::Delete => state.focused_input().delete(),
        KeyCode::Left => state.focused_input().move_left(),
        KeyCode::Right => state.focused_input().move_right(),
        KeyCode::Home => state.focused_input().move_start(),
        KeyCode::End => state.focused_input().move_end(),
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_appearance() {
        let appearance = Appearance::default();
        let state = AppearanceFormState::from_appearance(&appearance);
        assert_eq!(state.fields[0].value(), "Annual Budget Overview");
        assert_eq!(state.to_appearance().unwrap(), appearance);
    }

    #[test]
    fn test_field_cycling() {
        let mut state = AppearanceFormState::from_appearance(&Appearance::default());
        state.prev_field();
        assert_eq!(state.focus, 3);
        state.next_field();
        state.next_field();
        assert_eq!(state.focus, 1);
    }

    #[test]
    fn test_blank_title_rejected() {
        let mut state = AppearanceFormState::from_appearance(&Appearance::default());
        state.fields[0].clear();
        assert!(state.to_appearance().is_err());
    }
}
