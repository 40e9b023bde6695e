//! Raw mode RAII guard and key reading.

use crossterm::event::{Event, KeyEvent, KeyEventKind, read};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io;

/// Raw mode for as long as the guard lives.
pub struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self { active: true })
    }

    /// Leave raw mode early, e.g. before printing a trailing newline.
    pub fn release(&mut self) {
        if std::mem::take(&mut self.active) {
            let _ = disable_raw_mode();
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.release();
    }
}

/// Block until the next key press. Release events are skipped.
pub fn read_key() -> io::Result<KeyEvent> {
    loop {
        if let Event::Key(key) = read()?
            && key.kind != KeyEventKind::Release
        {
            return Ok(key);
        }
    }
}
