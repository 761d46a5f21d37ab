use std::io::{Stdout, Write, stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyEvent, KeyEventKind, read, poll};

/// Where key presses come from.
pub trait KeySource {
    /// Waits at most `timeout` for a key press.
    fn poll_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>>;
}

/// Character sink the game draws its frames to.
pub trait Screen {
    fn clear_screen(&mut self) -> Result<()>;
    fn draw_cell(&mut self, ch: char) -> Result<()>;
    fn end_row(&mut self) -> Result<()>;
    fn draw_text(&mut self, text: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
}

/// A terminal that has to be put into game mode and handed back afterwards.
pub trait Session: KeySource + Screen {
    fn setup(&mut self) -> Result<()>;
    fn restore(&mut self) -> Result<()>;
}

pub struct TermManager {
    stdout: Stdout,
}

impl TermManager {
    pub fn new() -> Self {
        TermManager { stdout: stdout() }
    }
}

impl Session for TermManager {
    fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking).context("failed to hide cursor")?;
        Ok(())
    }

    fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode().context("failed to disable raw mode")?;
        execute!(self.stdout, cursor::Show, cursor::EnableBlinking).context("failed to show cursor")?;
        execute!(self.stdout, LeaveAlternateScreen).context("failed to leave alternate screen")?;
        Ok(())
    }
}

impl Default for TermManager {
    fn default() -> Self {
        Self::new()
    }
}

impl KeySource for TermManager {
    fn poll_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>> {
        let deadline = Instant::now() + timeout;

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !poll(remaining).context("failed to poll terminal events")? {
                return Ok(None);
            }

            // Releases and repeats show up on some platforms, only presses count
            if let Event::Key(ev) = read().context("failed to read terminal event")? {
                if ev.kind == KeyEventKind::Press {
                    return Ok(Some(ev));
                }
            }
        }
    }
}

impl Screen for TermManager {
    fn clear_screen(&mut self) -> Result<()> {
        queue!(self.stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))
            .context("failed to clear screen")?;
        Ok(())
    }

    fn draw_cell(&mut self, ch: char) -> Result<()> {
        queue!(self.stdout, style::Print(ch)).context("failed to draw cell")?;
        Ok(())
    }

    fn end_row(&mut self) -> Result<()> {
        // Raw mode does not translate \n into a carriage return
        queue!(self.stdout, style::Print("\r\n")).context("failed to end row")?;
        Ok(())
    }

    fn draw_text(&mut self, text: &str) -> Result<()> {
        queue!(self.stdout, style::Print(text.replace('\n', "\r\n"))).context("failed to draw text")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.flush().context("failed to flush stdout")
    }
}
