//! Terminal setup and teardown.
//!
//! Raw mode and the alternate screen must be undone on every exit path: a
//! failed setup, a normal return, an error, or a panic.

use std::io::{self, Stdout, Write};

use color_eyre::config::HookBuilder;
use color_eyre::Result;
use crossterm::{cursor, execute, terminal};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

/// The terminal the board is drawn on.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Install color-eyre's hooks, restoring the terminal before a panic report.
pub fn install_hooks() -> Result<()> {
    let (panic_hook, eyre_hook) = HookBuilder::default().into_hooks();
    eyre_hook.install()?;

    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        eprintln!("{}", panic_hook.panic_report(panic_info));
    }));

    Ok(())
}

/// Enter raw mode and the alternate screen on stdout.
pub fn setup() -> Result<Tui> {
    enter(&mut io::stdout())?;

    let mut tui = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    tui.clear()?;
    Ok(tui)
}

/// Leave the alternate screen and raw mode.
pub fn restore() -> io::Result<()> {
    leave(&mut io::stdout())
}

/// Raw mode is switched back off if `out` rejects the screen commands.
fn enter<W: Write>(out: &mut W) -> io::Result<()> {
    terminal::enable_raw_mode()?;

    if let Err(e) = execute!(out, terminal::EnterAlternateScreen, cursor::Hide) {
        let _ = terminal::disable_raw_mode();
        return Err(e);
    }
    Ok(())
}

fn leave<W: Write>(out: &mut W) -> io::Result<()> {
    let screen = execute!(out, terminal::LeaveAlternateScreen, cursor::Show);
    terminal::disable_raw_mode()?;
    screen
}
