/// Terminal setup and teardown around the game
use std::io::stdout;

use anyhow::{Context, Result};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

/// Raw mode, alternate screen and mouse reporting. Failing here is fatal:
/// there's nothing to play on without a terminal.
pub fn init() -> Result<DefaultTerminal> {
    let terminal = ratatui::try_init().context("couldn't set up the terminal")?;
    if let Err(e) = execute!(stdout(), EnableMouseCapture) {
        ratatui::restore();
        return Err(e).context("couldn't enable mouse capture");
    }
    Ok(terminal)
}

/// Undo everything `init` did. Safe to call more than once.
pub fn restore() {
    let _ = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();
}
