//! TUI Views module
//!
//! Contains the entry lists, the header and summary panels and the status
//! bar, plus the dialog and notification overlays.

pub mod entries;
pub mod status_bar;
pub mod summary;

use ratatui::Frame;

use super::app::{ActiveDialog, App, Side};
use super::dialogs;
use super::layout::{toast_rect, FormLayout};
use super::widgets::NotificationWidget;

const TOAST_WIDTH: u16 = 64;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = FormLayout::new(frame.area());

    summary::render_header(frame, app, layout.header);
    entries::render(frame, app, Side::Incomes, layout.incomes);
    entries::render(frame, app, Side::Expenses, layout.expenses);
    summary::render_summary(frame, app, layout.summary);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }

    render_notifications(frame, app);
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::Entry => dialogs::entry::render(frame, app),
        ActiveDialog::Appearance => dialogs::appearance::render(frame, app),
        ActiveDialog::ConfirmDelete => {
            let message = dialogs::confirm::delete_message(app);
            dialogs::confirm::render(frame, &message);
        }
        ActiveDialog::None => {}
    }
}

/// Stack pending notifications in the top-right corner
fn render_notifications(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let mut offset = 0;
    for notification in app.notifications.iter() {
        let height = notification.height();
        match toast_rect(TOAST_WIDTH, height, offset, area) {
            Some(rect) => frame.render_widget(NotificationWidget::new(notification), rect),
            None => break,
        }
        offset += height;
    }
}
