//! Console session handling
//!
//! Puts the terminal into the state an interactive surface needs (raw
//! input, alternate screen, hidden cursor, mouse reporting) and reads
//! events from it.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor::{Hide, Show},
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use super::config::Config;
use super::event_loop::{EventSource, Polled};
use crate::input::console::translate;

/// Terminal state guard. Restores the terminal when dropped.
pub struct ConsoleSession {
    key_release: bool,
}

impl ConsoleSession {
    /// Enter raw mode and the alternate screen
    pub fn start() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut session = Self { key_release: false };

        let mut out = io::stdout();
        execute!(out, EnterAlternateScreen, Hide, EnableMouseCapture)?;

        // Key releases are only reported by terminals with the enhanced protocol
        if terminal::supports_keyboard_enhancement().unwrap_or(false) {
            execute!(
                out,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
            session.key_release = true;
        }
        tracing::debug!(key_release = session.key_release, "console session started");

        Ok(session)
    }

    /// Whether the terminal reports key releases
    pub fn reports_key_release(&self) -> bool {
        self.key_release
    }
}

impl Drop for ConsoleSession {
    fn drop(&mut self) {
        let mut out = io::stdout();
        if self.key_release {
            let _ = execute!(out, PopKeyboardEnhancementFlags);
        }
        let _ = execute!(out, DisableMouseCapture, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        let _ = out.flush();
    }
}

/// Shrink the configured surface to the terminal window.
/// Returns true if either dimension changed.
pub fn fit_to_terminal(config: &mut Config) -> io::Result<bool> {
    let (cols, rows) = terminal::size()?;
    let (cols, rows) = (usize::from(cols).max(1), usize::from(rows).max(1));
    if config.width <= cols && config.height <= rows {
        return Ok(false);
    }

    tracing::warn!(
        "Surface {}x{} does not fit the terminal, using {}x{}",
        config.width,
        config.height,
        config.width.min(cols),
        config.height.min(rows)
    );
    config.width = config.width.min(cols);
    config.height = config.height.min(rows);
    Ok(true)
}

/// Input events read from the terminal. Resizes are reported as
/// [`Polled::Resize`] so the loop can repaint.
#[derive(Debug, Default)]
pub struct ConsoleEvents;

impl EventSource for ConsoleEvents {
    fn poll_event(&mut self, timeout: Duration) -> io::Result<Polled> {
        if !event::poll(timeout)? {
            return Ok(Polled::Timeout);
        }
        let event = event::read()?;
        if let Event::Resize(cols, rows) = event {
            tracing::debug!(cols, rows, "terminal resized");
            return Ok(Polled::Resize);
        }
        Ok(match translate(event) {
            Some(event) => Polled::Event(event),
            None => Polled::Timeout,
        })
    }
}
