//! Terminal setup and teardown.
//!
//! Low-level functions for entering and leaving TUI mode, plus a panic
//! hook that restores the terminal before the panic message prints.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Enter TUI mode.
///
/// Enables raw mode, switches to the alternate screen (preserving the
/// original terminal content), and captures mouse events for scroll-wheel
/// input.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    enable_raw_mode()?;
    execute!(writer, EnterAlternateScreen, EnableMouseCapture)
}

/// Leave TUI mode and restore the terminal to its normal state.
///
/// Safe to call multiple times; errors are ignored so cleanup always runs
/// to completion.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, DisableMouseCapture, LeaveAlternateScreen);
    let _ = execute!(writer, Show);
    let _ = writer.flush();
}

/// Install a panic hook that restores the terminal first.
///
/// Without this, a panic inside the draw loop leaves the user's shell in
/// raw mode with the alternate screen active.
pub fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let mut stdout = io::stdout();
        leave_tui_mode(&mut stdout);
        original(info);
    }));
}
