//! Application state for the budget form
//!
//! The App struct holds all state needed for rendering and handling events:
//! the rows on each side, the chart appearance, the open dialog and pending
//! notifications.

use std::path::PathBuf;

use chrono::Utc;
use serde_json::{Map, Value};

use crate::config::settings::Settings;
use crate::error::{SankeyError, SankeyResult};
use crate::export::write_atomic;
use crate::flow::{ConsistencyReporter, FlowGraph, Totals};
use crate::models::entry::checked_total;
use crate::models::{BudgetDocument, Money, NamedAmount};
use crate::render::{HtmlRenderer, Renderer};

use super::dialogs::appearance::AppearanceFormState;
use super::dialogs::entry::EntryFormState;
use super::widgets::{Notification, NotificationQueue, NotificationReporter};

/// Most rows allowed on one side of the form
pub const MAX_ROWS: usize = 20;

/// Title used by a blank form
pub const FORM_TITLE: &str = "Annual Budget Overview";

const NEW_INCOME_AMOUNT: Money = Money::from_dollars(1_000);
const NEW_EXPENSE_AMOUNT: Money = Money::from_dollars(500);
const BLANK_INCOME_ROWS: usize = 2;
const BLANK_EXPENSE_ROWS: usize = 3;

/// Which side of the budget has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    #[default]
    Incomes,
    Expenses,
}

impl Side {
    pub fn toggle(self) -> Self {
        match self {
            Self::Incomes => Self::Expenses,
            Self::Expenses => Self::Incomes,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Incomes => "Income Sources",
            Self::Expenses => "Expense Categories",
        }
    }

    /// Singular noun for messages
    pub fn noun(self) -> &'static str {
        match self {
            Self::Incomes => "income",
            Self::Expenses => "expense",
        }
    }

    /// Amount a freshly added row starts with
    pub fn new_row_amount(self) -> Money {
        match self {
            Self::Incomes => NEW_INCOME_AMOUNT,
            Self::Expenses => NEW_EXPENSE_AMOUNT,
        }
    }
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    Entry,
    Appearance,
    ConfirmDelete,
}

/// Title, colors and backgrounds of the generated chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appearance {
    pub title: String,
    pub title_color: String,
    pub paper_bgcolor: String,
    pub plot_bgcolor: String,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            title: FORM_TITLE.to_string(),
            title_color: "#000000".to_string(),
            paper_bgcolor: "#FFFFFF".to_string(),
            plot_bgcolor: "#FFFFFF".to_string(),
        }
    }
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// Where generated charts are written
    pub output: PathBuf,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Which side has focus
    pub focused: Side,

    pub incomes: Vec<NamedAmount>,
    pub expenses: Vec<NamedAmount>,

    /// Selected row index on each side
    pub selected_income: usize,
    pub selected_expense: usize,

    pub appearance: Appearance,

    /// Layout keys carried over from a loaded document
    pub extra_layout: Map<String, Value>,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    pub entry_form: EntryFormState,
    pub appearance_form: AppearanceFormState,

    pub notifications: NotificationQueue,

    /// The most recently written graph
    pub last_graph: Option<FlowGraph>,
}

impl<'a> App<'a> {
    /// Create the form, prefilled from a document
    ///
    /// An empty document gives the blank rows a new form starts with.
    pub fn new(settings: &'a Settings, document: BudgetDocument, output: PathBuf) -> Self {
        let mut appearance = Appearance::default();
        if let Some(title) = document.title {
            appearance.title = title;
        }
        if let Some(color) = document.title_color {
            appearance.title_color = color;
        }

        let mut extra_layout = document.layout;
        if let Some(Value::String(color)) = extra_layout.remove("paper_bgcolor") {
            appearance.paper_bgcolor = color;
        }
        if let Some(Value::String(color)) = extra_layout.remove("plot_bgcolor") {
            appearance.plot_bgcolor = color;
        }

        let incomes = if document.incomes.is_empty() {
            blank_rows(BLANK_INCOME_ROWS, NEW_INCOME_AMOUNT)
        } else {
            document.incomes
        };
        let expenses = if document.expenses.is_empty() {
            blank_rows(BLANK_EXPENSE_ROWS, NEW_EXPENSE_AMOUNT)
        } else {
            document.expenses
        };

        Self {
            settings,
            output,
            should_quit: false,
            focused: Side::default(),
            incomes,
            expenses,
            selected_income: 0,
            selected_expense: 0,
            appearance,
            extra_layout,
            active_dialog: ActiveDialog::default(),
            entry_form: EntryFormState::default(),
            appearance_form: AppearanceFormState::default(),
            notifications: NotificationQueue::new(),
            last_graph: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn rows(&self, side: Side) -> &[NamedAmount] {
        match side {
            Side::Incomes => &self.incomes,
            Side::Expenses => &self.expenses,
        }
    }

    pub fn rows_mut(&mut self, side: Side) -> &mut Vec<NamedAmount> {
        match side {
            Side::Incomes => &mut self.incomes,
            Side::Expenses => &mut self.expenses,
        }
    }

    pub fn selected(&self, side: Side) -> usize {
        match side {
            Side::Incomes => self.selected_income,
            Side::Expenses => self.selected_expense,
        }
    }

    fn set_selected(&mut self, side: Side, index: usize) {
        match side {
            Side::Incomes => self.selected_income = index,
            Side::Expenses => self.selected_expense = index,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focused = self.focused.toggle();
    }

    pub fn move_up(&mut self) {
        let index = self.selected(self.focused);
        self.set_selected(self.focused, index.saturating_sub(1));
    }

    pub fn move_down(&mut self) {
        let side = self.focused;
        let last = self.rows(side).len().saturating_sub(1);
        let index = (self.selected(side) + 1).min(last);
        self.set_selected(side, index);
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        match dialog {
            ActiveDialog::Appearance => {
                self.appearance_form = AppearanceFormState::from_appearance(&self.appearance);
            }
            ActiveDialog::ConfirmDelete if self.rows(self.focused).is_empty() => return,
            _ => {}
        }
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Open the entry dialog for a new row on the focused side
    pub fn start_add(&mut self) {
        let side = self.focused;
        if self.rows(side).len() >= MAX_ROWS {
            self.notifications.push(Notification::warning(format!(
                "At most {} {} rows",
                MAX_ROWS,
                side.noun()
            )));
            return;
        }
        self.entry_form = EntryFormState::for_new(side);
        self.open_dialog(ActiveDialog::Entry);
    }

    /// Open the entry dialog for the selected row on the focused side
    pub fn start_edit(&mut self) {
        let side = self.focused;
        let index = self.selected(side);
        if let Some(entry) = self.rows(side).get(index) {
            self.entry_form = EntryFormState::for_existing(side, index, entry);
            self.open_dialog(ActiveDialog::Entry);
        }
    }

    /// Store a row from the entry dialog, adding or replacing
    pub fn apply_entry(&mut self, side: Side, index: Option<usize>, entry: NamedAmount) {
        let rows = self.rows_mut(side);
        let selected = match index {
            Some(i) if i < rows.len() => {
                rows[i] = entry;
                i
            }
            _ => {
                rows.push(entry);
                rows.len() - 1
            }
        };
        self.set_selected(side, selected);
    }

    /// Remove the selected row on the focused side
    pub fn delete_selected(&mut self) {
        let side = self.focused;
        let index = self.selected(side);
        let rows = self.rows_mut(side);
        if index < rows.len() {
            rows.remove(index);
            let last = rows.len().saturating_sub(1);
            self.set_selected(side, index.min(last));
        }
    }

    /// Move the selected row one place up or down
    pub fn shift_selected(&mut self, up: bool) {
        let side = self.focused;
        let index = self.selected(side);
        let len = self.rows(side).len();
        let target = if up {
            index.checked_sub(1)
        } else {
            Some(index + 1).filter(|&t| t < len)
        };
        if let Some(target) = target {
            self.rows_mut(side).swap(index, target);
            self.set_selected(side, target);
        }
    }

    /// The budget as it would be charted: blank-label rows dropped
    pub fn to_document(&self) -> BudgetDocument {
        let keep = |rows: &[NamedAmount]| -> Vec<NamedAmount> {
            rows.iter()
                .filter(|e| !e.label.trim().is_empty())
                .map(|e| NamedAmount::new(e.label.trim(), e.amount))
                .collect()
        };

        let mut layout = self.extra_layout.clone();
        for (key, color) in [
            ("paper_bgcolor", &self.appearance.paper_bgcolor),
            ("plot_bgcolor", &self.appearance.plot_bgcolor),
        ] {
            if !color.trim().is_empty() {
                layout.insert(key.to_string(), Value::from(color.trim()));
            }
        }

        BudgetDocument {
            title: Some(self.appearance.title.clone()),
            title_color: Some(self.appearance.title_color.clone()),
            layout,
            incomes: keep(&self.incomes),
            expenses: keep(&self.expenses),
        }
    }

    /// Totals of the rows that would be charted
    ///
    /// `None` when a side's total does not fit in `Money`.
    pub fn live_totals(&self) -> Option<Totals> {
        let document = self.to_document();
        Some(Totals::new(
            checked_total(&document.incomes)?,
            checked_total(&document.expenses)?,
        ))
    }

    /// Build the chart, report consistency and write the HTML file
    ///
    /// Problems are shown as notifications rather than returned.
    pub fn generate(&mut self) {
        match self.try_generate() {
            Ok(()) => self.notifications.push(Notification::info(format!(
                "Chart saved to {}",
                self.output.display()
            ))),
            Err(e) => self.notifications.push(Notification::error(e.to_string())),
        }
    }

    fn try_generate(&mut self) -> SankeyResult<()> {
        let document = self.to_document();
        let options = self.settings.chart_options(&document);
        let graph = self
            .settings
            .builder()?
            .build(&document.incomes, &document.expenses, &options)?;

        NotificationReporter::new(&mut self.notifications, &self.settings.currency_symbol)
            .report(&graph.totals, &graph.consistency);

        let html = HtmlRenderer::new(self.settings.currency_symbol.as_str())
            .generated_at(Utc::now())
            .render(&graph)?;
        write_atomic(&self.output, &html)?;
        self.last_graph = Some(graph);
        Ok(())
    }

    /// Save the form as a YAML budget document next to the chart
    pub fn save_document(&mut self) {
        let path = self.output.with_extension("yaml");
        let saved = serde_yaml::to_string(&self.to_document())
            .map_err(SankeyError::from)
            .and_then(|yaml| write_atomic(&path, &yaml));
        match saved {
            Ok(()) => self
                .notifications
                .push(Notification::info(format!("Budget saved to {}", path.display()))),
            Err(e) => self.notifications.push(Notification::error(e.to_string())),
        }
    }
}

fn blank_rows(count: usize, amount: Money) -> Vec<NamedAmount> {
    (0..count).map(|_| NamedAmount::new("", amount)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::Consistency;
    use crate::import::load_budget;
    use crate::tui::widgets::NotificationType;
    use tempfile::TempDir;

    fn app_with<'a>(settings: &'a Settings, document: BudgetDocument, dir: &TempDir) -> App<'a> {
        App::new(settings, document, dir.path().join("chart.html"))
    }

    #[test]
    fn test_blank_form_rows() {
        let settings = Settings::default();
        let dir = TempDir::new().unwrap();
        let app = app_with(&settings, BudgetDocument::default(), &dir);

        assert_eq!(app.incomes.len(), 2);
        assert_eq!(app.expenses.len(), 3);
        assert!(app.incomes.iter().all(|e| e.label.is_empty()));
        assert_eq!(app.appearance.title, "Annual Budget Overview");
        // Blank rows are never charted
        assert!(app.to_document().incomes.is_empty());
    }

    #[test]
    fn test_generate_empty_form_reports_error() {
        let settings = Settings::default();
        let dir = TempDir::new().unwrap();
        let mut app = app_with(&settings, BudgetDocument::default(), &dir);

        app.generate();

        let n = app.notifications.current().unwrap();
        assert_eq!(n.notification_type, NotificationType::Error);
        assert_eq!(n.lines[0], "Please enter at least one income source.");
        assert!(!app.output.exists());
    }

    #[test]
    fn test_generate_writes_chart() {
        let settings = Settings::default();
        let dir = TempDir::new().unwrap();
        let mut app = app_with(&settings, BudgetDocument::default(), &dir);
        app.incomes[0].label = "Salary".into();
        app.expenses[1].label = "Rent".into();

        app.generate();

        let html = std::fs::read_to_string(&app.output).unwrap();
        assert!(html.contains("Annual Budget Overview"));
        let graph = app.last_graph.as_ref().unwrap();
        assert_eq!(graph.nodes.len(), 3);
        assert_eq!(
            graph.consistency,
            Consistency::Surplus(Money::from_dollars(500))
        );

        let kinds: Vec<NotificationType> =
            app.notifications.iter().map(|n| n.notification_type).collect();
        assert_eq!(kinds, vec![NotificationType::Success, NotificationType::Info]);
    }

    #[test]
    fn test_generate_deficit_warns() {
        let settings = Settings::default();
        let dir = TempDir::new().unwrap();
        let doc = BudgetDocument::new(
            vec![NamedAmount::dollars("Job", 100)],
            vec![NamedAmount::dollars("Rent", 150)],
        );
        let mut app = app_with(&settings, doc, &dir);

        app.generate();

        let first = app.notifications.current().unwrap();
        assert_eq!(first.notification_type, NotificationType::Warning);
        assert_eq!(first.lines[1], "Discrepancy: $50.00");
        assert!(app.output.exists());
    }

    #[test]
    fn test_failed_write_keeps_no_graph() {
        let settings = Settings::default();
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        let mut app = App::new(&settings, BudgetDocument::sample(), blocker.join("chart.html"));

        app.generate();

        assert!(app.last_graph.is_none());
        assert_eq!(
            app.notifications.iter().last().unwrap().notification_type,
            NotificationType::Error
        );
    }

    #[test]
    fn test_live_totals_past_money_range() {
        let settings = Settings::default();
        let dir = TempDir::new().unwrap();
        let doc = BudgetDocument::new(
            vec![
                NamedAmount::new("A", Money::from_cents(i64::MAX)),
                NamedAmount::dollars("B", 1),
            ],
            vec![NamedAmount::dollars("Rent", 1)],
        );
        let mut app = app_with(&settings, doc, &dir);
        assert!(app.live_totals().is_none());

        app.generate();
        assert!(app.last_graph.is_none());
        assert_eq!(
            app.notifications.current().unwrap().lines[0],
            "Validation error: Total income is too large to represent"
        );

        app.delete_selected();
        let totals = app.live_totals().unwrap();
        assert_eq!(totals.income, Money::from_dollars(1));
    }

    #[test]
    fn test_document_backgrounds_prefill_appearance() {
        let settings = Settings::default();
        let dir = TempDir::new().unwrap();
        let mut app = app_with(&settings, BudgetDocument::sample(), &dir);

        assert_eq!(app.appearance.paper_bgcolor, "white");
        assert!(app.extra_layout.is_empty());

        app.appearance.plot_bgcolor = "#eeeeee".into();
        let doc = app.to_document();
        assert_eq!(doc.layout["plot_bgcolor"], "#eeeeee");
        assert_eq!(doc.incomes.len(), 4);
    }

    #[test]
    fn test_edit_delete_and_shift_rows() {
        let settings = Settings::default();
        let dir = TempDir::new().unwrap();
        let doc = BudgetDocument::new(
            vec![NamedAmount::dollars("A", 1), NamedAmount::dollars("B", 2)],
            vec![NamedAmount::dollars("X", 1)],
        );
        let mut app = app_with(&settings, doc, &dir);

        app.apply_entry(Side::Incomes, None, NamedAmount::dollars("C", 3));
        assert_eq!(app.selected_income, 2);

        app.shift_selected(true);
        let labels: Vec<&str> = app.incomes.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "C", "B"]);
        assert_eq!(app.selected_income, 1);

        app.delete_selected();
        assert_eq!(app.incomes.len(), 2);
        assert_eq!(app.incomes[1].label, "B");

        app.toggle_focus();
        app.delete_selected();
        assert!(app.expenses.is_empty());
        app.open_dialog(ActiveDialog::ConfirmDelete);
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_row_limit() {
        let settings = Settings::default();
        let dir = TempDir::new().unwrap();
        let mut app = app_with(&settings, BudgetDocument::default(), &dir);
        for i in 0..MAX_ROWS {
            app.apply_entry(Side::Incomes, None, NamedAmount::dollars(format!("I{}", i), 1));
        }

        app.start_add();
        assert!(!app.has_dialog());
        assert_eq!(
            app.notifications.current().unwrap().notification_type,
            NotificationType::Warning
        );
    }

    #[test]
    fn test_save_document_round_trips() {
        let settings = Settings::default();
        let dir = TempDir::new().unwrap();
        let mut app = app_with(&settings, BudgetDocument::sample(), &dir);

        app.save_document();

        let saved = load_budget(dir.path().join("chart.yaml")).unwrap();
        assert_eq!(saved.incomes, BudgetDocument::sample().incomes);
        assert_eq!(saved.title.as_deref(), Some("Annual Budget Overview"));
    }
}
