//! Event handler for the TUI
//!
//! Routes keyboard events to the open dialog or to the form.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, key),
        Event::Tick => app.notifications.remove_expired(),
        Event::Key(_) | Event::Resize(_, _) => {}
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    match app.active_dialog {
        ActiveDialog::None => handle_form_key(app, key),
        // Any key closes help
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::Entry => {
            dialogs::entry::handle_key(app, key);
        }
        ActiveDialog::Appearance => {
            dialogs::appearance::handle_key(app, key);
        }
        ActiveDialog::ConfirmDelete => {
            dialogs::confirm::handle_key(app, key);
        }
    }
}

/// Handle keys when no dialog is open
fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        KeyCode::Tab | KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Char('l') => {
            app.toggle_focus()
        }
        KeyCode::Left | KeyCode::Right => app.toggle_focus(),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('J') => app.shift_selected(false),
        KeyCode::Char('K') => app.shift_selected(true),

        KeyCode::Char('a') | KeyCode::Char('n') => app.start_add(),
        KeyCode::Char('e') | KeyCode::Enter => app.start_edit(),
        KeyCode::Char('d') | KeyCode::Delete => app.open_dialog(ActiveDialog::ConfirmDelete),

        KeyCode::Char('t') => app.open_dialog(ActiveDialog::Appearance),
        KeyCode::Char('g') => app.generate(),
        KeyCode::Char('s') => app.save_document(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::models::{BudgetDocument, Money, NamedAmount};
    use crate::tui::app::Side;
    use tempfile::TempDir;

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_add_row_with_keys() {
        let settings = Settings::default();
        let dir = TempDir::new().unwrap();
        let doc = BudgetDocument::new(
            vec![NamedAmount::dollars("Salary", 1000)],
            vec![NamedAmount::dollars("Rent", 800)],
        );
        let mut app = App::new(&settings, doc, dir.path().join("chart.html"));

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused, Side::Expenses);

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.active_dialog, ActiveDialog::Entry);
        type_text(&mut app, "Food");
        press(&mut app, KeyCode::Tab);
        for _ in 0..6 {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "250.75");
        press(&mut app, KeyCode::Enter);

        assert!(!app.has_dialog());
        assert_eq!(
            app.expenses[1],
            NamedAmount::new("Food", Money::from_cents(25_075))
        );
        assert_eq!(app.selected_expense, 1);
    }

    #[test]
    fn test_invalid_amount_keeps_dialog_open() {
        let settings = Settings::default();
        let dir = TempDir::new().unwrap();
        let mut app = App::new(&settings, BudgetDocument::default(), dir.path().join("c.html"));

        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, ".5");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.active_dialog, ActiveDialog::Entry);
        assert!(app.entry_form.error_message.is_some());

        press(&mut app, KeyCode::Esc);
        assert!(!app.has_dialog());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_delete_needs_confirmation() {
        let settings = Settings::default();
        let dir = TempDir::new().unwrap();
        let mut app = App::new(&settings, BudgetDocument::sample(), dir.path().join("c.html"));

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.incomes.len(), 4);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.incomes.len(), 3);
        assert_eq!(app.incomes[0].label, "Miranda");
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let settings = Settings::default();
        let dir = TempDir::new().unwrap();
        let mut app = App::new(&settings, BudgetDocument::default(), dir.path().join("c.html"));

        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.active_dialog, ActiveDialog::Help);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.has_dialog());
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_generate_key_writes_chart() {
        let settings = Settings::default();
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out").join("chart.html");
        let mut app = App::new(&settings, BudgetDocument::sample(), output.clone());

        press(&mut app, KeyCode::Char('g'));
        assert!(output.exists());
    }
}
