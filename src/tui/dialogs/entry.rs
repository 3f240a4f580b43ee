//! Entry dialog
//!
//! Adds or edits one income source or expense category. Rows may be saved
//! without a label; they stay in the form but are left out of the chart.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{Money, NamedAmount};
use crate::tui::app::{App, Side};
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// Which field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryField {
    #[default]
    Label,
    Amount,
}

/// State for the entry dialog
#[derive(Debug, Clone, Default)]
pub struct EntryFormState {
    pub side: Side,
    /// Row being edited; `None` adds a new row
    pub index: Option<usize>,
    pub label: TextInput,
    pub amount: TextInput,
    pub focus: EntryField,
    pub error_message: Option<String>,
}

impl EntryFormState {
    /// Blank row with the side's starting amount
    pub fn for_new(side: Side) -> Self {
        Self::with_values(side, None, "", side.new_row_amount())
    }

    pub fn for_existing(side: Side, index: usize, entry: &NamedAmount) -> Self {
        Self::with_values(side, Some(index), &entry.label, entry.amount)
    }

    fn with_values(side: Side, index: Option<usize>, label: &str, amount: Money) -> Self {
        let mut label_input = TextInput::new("Name").placeholder("(blank rows are skipped)");
        label_input.set_value(label);
        let mut amount_input = TextInput::new("Amount");
        amount_input.set_value(format!("{:.2}", amount.as_f64()));

        Self {
            side,
            index,
            label: label_input,
            amount: amount_input,
            focus: EntryField::Label,
            error_message: None,
        }
    }

    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            EntryField::Label => EntryField::Amount,
            EntryField::Amount => EntryField::Label,
        };
    }

    fn focused_input(&mut self) -> &mut TextInput {
        match self.focus {
            EntryField::Label => &mut self.label,
            EntryField::Amount => &mut self.amount,
        }
    }

    /// Type a character into the focused field
    ///
    /// The amount field only takes characters a money amount can contain.
    pub fn insert_char(&mut self, c: char) {
        let accepted = match self.focus {
            EntryField::Label => !c.is_control(),
            EntryField::Amount => c.is_ascii_digit() || matches!(c, '.' | ',' | '$'),
        };
        if accepted {
            self.focused_input().insert(c);
            self.error_message = None;
        }
    }

    pub fn backspace(&mut self) {
        self.focused_input().backspace();
        self.error_message = None;
    }

    /// Validate the fields into a row
    pub fn parse(&self) -> Result<NamedAmount, String> {
        let amount = Money::parse(self.amount.value())
            .map_err(|_| format!("Invalid amount: '{}'", self.amount.value()))?;
        if amount.is_negative() {
            return Err("Amount cannot be negative".to_string());
        }
        Ok(NamedAmount::new(self.label.value().trim(), amount))
    }
}

/// Render the entry dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(56, 10, frame.area());
    frame.render_widget(Clear, area);

    let state = &app.entry_form;
    let verb = if state.index.is_some() { "Edit" } else { "Add" };
    let title = format!(" {} {} ", verb, state.side.noun());

    let block = Block::default()
        .title(title)
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
            Constraint::Length(1), // Label
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Instructions
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        state.label.widget(state.focus == EntryField::Label),
        chunks[1],
    );
    frame.render_widget(
        state.amount.widget(state.focus == EntryField::Amount),
        chunks[3],
    );

    if let Some(ref error) = state.error_message {
        let error_line = Line::from(Span::styled(error.as_str(), Style::default().fg(Color::Red)));
        frame.render_widget(Paragraph::new(error_line), chunks[5]);
    }

    let instructions = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Tab]", Style::default().fg(Color::Cyan)),
        Span::raw(" Next field  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(instructions), chunks[6]);
}

/// Handle key events for the entry dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let state = &mut app.entry_form;
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
        }
        KeyCode::Enter => match state.parse() {
            Ok(entry) => {
                let (side, index) = (state.side, state.index);
                app.apply_entry(side, index, entry);
                app.close_dialog();
            }
            Err(e) => state.error_message = Some(e),
        },
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => state.next_field(),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.focused_input().clear();
        }
        KeyCode::Char(c) => state.insert_char(c),
        KeyCode::Backspace => state.backspace(),
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
    fn test_new_row_defaults() {
        let state = EntryFormState::for_new(Side::Expenses);
        assert_eq!(state.amount.value(), "500.00");
        assert_eq!(state.label.value(), "");
        assert_eq!(state.parse().unwrap(), NamedAmount::new("", Money::from_dollars(500)));
    }

    #[test]
    fn test_amount_field_filters_input() {
        let mut state = EntryFormState::for_new(Side::Incomes);
        state.focus = EntryField::Amount;
        state.amount.clear();
        for c in "$1,2a00.5x".chars() {
            state.insert_char(c);
        }
        assert_eq!(state.amount.value(), "$1,200.5");
        assert_eq!(state.parse().unwrap().amount, Money::from_cents(120_050));
    }

    #[test]
    fn test_parse_trims_label_and_rejects_bad_amount() {
        let entry = NamedAmount::new("  Rent ", Money::from_dollars(900));
        let mut state = EntryFormState::for_existing(Side::Expenses, 2, &entry);
        assert_eq!(state.index, Some(2));
        assert_eq!(state.parse().unwrap().label, "Rent");

        state.amount.set_value("1.2.3");
        assert!(state.parse().is_err());
    }
}
