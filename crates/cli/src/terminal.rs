//! Crossterm-backed terminal access for the editing session.

use std::io::{stdout, Write};
use std::time::Duration;

use crossterm::cursor::{self, MoveTo};
use crossterm::event;
use crossterm::style::Print;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{queue, ExecutableCommand};
use run_builder_core::error::Result;
use run_builder_core::keys::Key;
use run_builder_core::session::{KeySource, Screen};

/// Holds the terminal in raw mode on the alternate screen until dropped.
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn acquire() -> Result<Self> {
        enable_raw_mode()?;
        // From here on, dropping the guard restores the terminal
        let guard = RawModeGuard;

        let mut stdout = stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(cursor::Hide)?;

        Ok(guard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = stdout();
        let _ = stdout.execute(cursor::Show);
        let _ = stdout.execute(LeaveAlternateScreen);
    }
}

/// Reads key presses from the terminal.
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn next_key(&mut self, timeout: Duration) -> std::io::Result<Option<Key>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        Ok(Key::from_event(&event::read()?))
    }
}

/// Redraws whole frames onto a writer, one terminal row per line.
pub struct TerminalScreen<W: Write> {
    out: W,
}

impl<W: Write> TerminalScreen<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Screen for TerminalScreen<W> {
    fn draw(&mut self, frame: &str) -> std::io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;

        // Raw mode does not return the carriage on `\n`
        for line in frame.lines() {
            queue!(self.out, Print(line), cursor::MoveToNextLine(1))?;
        }

        self.out.flush()
    }
}
