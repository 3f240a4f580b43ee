//! Event handling for the TUI
//!
//! A background thread polls crossterm for key presses and resizes and
//! forwards them, plus a periodic tick, over a channel.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// Terminal events
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick event for expiring notifications
    Tick,
}

/// Event handler for terminal events
pub struct EventHandler {
    receiver: mpsc::Receiver<io::Result<Event>>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::ZERO);

                let polled = match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(CrosstermEvent::Key(key)) => Some(Ok(Event::Key(key))),
                        Ok(CrosstermEvent::Resize(width, height)) => {
                            Some(Ok(Event::Resize(width, height)))
                        }
                        Ok(_) => None,
                        Err(e) => Some(Err(e)),
                    },
                    Ok(false) => None,
                    Err(e) => Some(Err(e)),
                };

                if let Some(result) = polled {
                    let failed = result.is_err();
                    // Receiver gone means the form has exited
                    if sender.send(result).is_err() || failed {
                        return;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if sender.send(Ok(Event::Tick)).is_err() {
                        return;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { receiver }
    }

    /// Get the next event (blocking)
    pub fn next(&self) -> io::Result<Event> {
        self.receiver
            .recv()
            .map_err(|e| io::Error::new(io::ErrorKind::BrokenPipe, e))?
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}
