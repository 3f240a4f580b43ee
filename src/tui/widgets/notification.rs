//! Toast notifications
//!
//! Short-lived messages shown over the form: consistency results after a
//! chart is generated, validation errors, and where the chart was saved.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::flow::{ConsistencyReporter, Consistency, Severity, Totals};

/// Kind of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationType {
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "i",
            Self::Success => "+",
            Self::Warning => "!",
            Self::Error => "x",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }

    /// How long a notification of this kind stays up
    pub fn default_duration(&self) -> Duration {
        match self {
            Self::Info | Self::Success => Duration::from_secs(4),
            Self::Warning | Self::Error => Duration::from_secs(8),
        }
    }
}

impl From<Severity> for NotificationType {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Success => Self::Success,
            Severity::Warning => Self::Warning,
        }
    }
}

/// A toast notification, possibly spanning several lines
#[derive(Debug, Clone)]
pub struct Notification {
    pub lines: Vec<String>,
    pub notification_type: NotificationType,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, notification_type: NotificationType) -> Self {
        Self::with_lines(vec![message.into()], notification_type)
    }

    pub fn with_lines(lines: Vec<String>, notification_type: NotificationType) -> Self {
        Self {
            lines,
            notification_type,
            created_at: Instant::now(),
            duration: notification_type.default_duration(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Error)
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Height needed to draw this notification with borders
    pub fn height(&self) -> u16 {
        self.lines.len() as u16 + 2
    }
}

/// Widget for rendering a notification
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationWidget<'a> {
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }
}

impl Widget for NotificationWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let kind = self.notification.notification_type;
        let color = kind.color();

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} {} ", kind.icon(), kind.title()))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        let lines: Vec<Line> = self
            .notification
            .lines
            .iter()
            .map(|l| Line::from(l.as_str()))
            .collect();

        Paragraph::new(lines)
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

/// Notifications waiting to be shown, oldest first
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn remove_expired(&mut self) {
        self.notifications.retain(|n| !n.is_expired());
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    pub fn current(&self) -> Option<&Notification> {
        self.notifications.first()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn clear(&mut self) {
        self.notifications.clear();
    }
}

/// Surfaces consistency results as form notifications
///
/// A deficit becomes a warning, a surplus or balanced budget a success.
pub struct NotificationReporter<'a> {
    queue: &'a mut NotificationQueue,
    symbol: &'a str,
}

impl<'a> NotificationReporter<'a> {
    pub fn new(queue: &'a mut NotificationQueue, symbol: &'a str) -> Self {
        Self { queue, symbol }
    }
}

impl ConsistencyReporter for NotificationReporter<'_> {
    fn report(&mut self, totals: &Totals, consistency: &Consistency) {
        let kind = NotificationType::from(consistency.severity());
        self.queue.push(Notification::with_lines(
            consistency.messages(totals, self.symbol),
            kind,
        ));
    }
}
