//! Raw-mode terminal ownership for the game loop.
use std::io::{self, Stdout};

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Holds the alternate screen while the game runs.
///
/// Dropping it (normal exit, `?` propagation or a panic unwind) hands the
/// terminal back in cooked mode with the cursor visible. A failure halfway
/// through [`TerminalSession::enter`] undoes the steps already taken.
pub struct TerminalSession {
    tui: Tui,
    restored: bool,
}

impl TerminalSession {
    pub fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;

        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(error).context("Failed to enter the alternate screen");
        }

        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(tui) => Ok(Self {
                tui,
                restored: false,
            }),
            Err(error) => {
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                let _ = disable_raw_mode();
                Err(error).context("Failed to attach ratatui to the terminal")
            }
        }
    }

    pub fn tui(&mut self) -> &mut Tui {
        &mut self.tui
    }

    /// Restores the terminal and reports any failure, unlike the drop path.
    pub fn leave(mut self) -> Result<()> {
        self.restored = true;
        self.restore().context("Failed to restore the terminal")
    }

    fn restore(&mut self) -> io::Result<()> {
        execute!(self.tui.backend_mut(), LeaveAlternateScreen)?;
        disable_raw_mode()?;
        self.tui.show_cursor()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if self.restored {
            return;
        }
        if let Err(error) = self.restore() {
            tracing::warn!("Failed to restore terminal: {error}");
        }
    }
}
