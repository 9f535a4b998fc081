//! Terminal setup, teardown and measurement.
//!
//! This module initializes and restores the terminal, installs a panic hook
//! that restores it on panic, and estimates the viewport width in pixels.

use std::io::{self, Stdout};

use crossterm::{
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode, size,
        window_size,
    },
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// The terminal type used by the application.
pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Error type for terminal operations.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    /// Failed to initialize the terminal.
    #[error("failed to setup terminal: {0}")]
    Setup(#[source] io::Error),

    /// Failed to restore the terminal.
    #[error("failed to restore terminal: {0}")]
    Restore(#[source] io::Error),

    /// Failed to query the terminal size.
    #[error("failed to measure terminal: {0}")]
    Measure(#[source] io::Error),
}

/// Sets up the terminal for TUI rendering.
///
/// Enables raw mode, enters the alternate screen and creates the Ratatui
/// terminal.
///
/// # Errors
///
/// Returns an error if any terminal operation fails.
///
/// # Examples
///
/// ```no_run
/// use minesettings_tui::terminal;
///
/// let mut terminal = terminal::setup_terminal().expect("failed to setup terminal");
/// // Use terminal...
/// terminal::restore_terminal(&mut terminal).expect("failed to restore terminal");
/// ```
pub fn setup_terminal() -> Result<AppTerminal, TerminalError> {
    enable_raw_mode().map_err(TerminalError::Setup)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(TerminalError::Setup)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(TerminalError::Setup)
}

/// Restores the terminal to its original state.
///
/// # Errors
///
/// Returns an error if any terminal operation fails.
pub fn restore_terminal(terminal: &mut AppTerminal) -> Result<(), TerminalError> {
    disable_raw_mode().map_err(TerminalError::Restore)?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(TerminalError::Restore)?;
    terminal.show_cursor().map_err(TerminalError::Restore)?;
    Ok(())
}

/// Installs a panic hook that restores the terminal before panicking.
///
/// Call this once at startup, before [`setup_terminal`]. The previous hook
/// still runs after the terminal has been restored.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

/// Estimates the viewport width in pixels.
///
/// Uses the pixel width reported by the terminal. Terminals that report
/// none get `columns × cell_width_px`.
///
/// # Errors
///
/// Returns an error if the terminal size cannot be queried at all.
pub fn viewport_width_px(cell_width_px: u16) -> Result<u32, TerminalError> {
    match window_size() {
        Ok(window) => Ok(width_from_window(window.width, window.columns, cell_width_px)),
        Err(err) => {
            tracing::debug!(error = %err, "window size unavailable, using columns");
            let (columns, _) = size().map_err(TerminalError::Measure)?;
            Ok(width_from_window(0, columns, cell_width_px))
        }
    }
}

/// Picks the reported pixel width, or derives one from the column count.
#[must_use]
pub fn width_from_window(pixel_width: u16, columns: u16, cell_width_px: u16) -> u32 {
    if pixel_width > 0 {
        u32::from(pixel_width)
    } else {
        u32::from(columns) * u32::from(cell_width_px)
    }
}
