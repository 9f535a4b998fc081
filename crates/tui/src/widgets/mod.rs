//! Widget components for the settings form.
//!
//! Each widget is a function rendering state into a `Buffer`, which keeps
//! them easy to test without a terminal.
//!
//! # Modules
//!
//! - [`form`]: The form panel and the status line
//! - [`help`]: The keybinding overlay
//!
//! # Example
//!
//! ```
//! use minesettings_config::Config;
//! use minesettings_tui::FormState;
//! use minesettings_tui::document::Document;
//! use minesettings_tui::handlers::SettingsForm;
//! use minesettings_tui::widgets;
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//!
//! let config = Config::default();
//! let form = SettingsForm::new(Document::settings_form(&config.default_mines_checkbox), &config);
//!
//! let area = Rect::new(0, 0, 80, 24);
//! let mut buf = Buffer::empty(area);
//! widgets::render_form(&form, &FormState::new(), area, &mut buf);
//! ```

use ratatui::layout::Rect;

pub mod form;
pub mod help;

pub use form::{render_form, render_status_line};
pub use help::render_help_overlay;

/// Creates a centered rectangle within a given area, clamped to fit.
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    Rect::new(x, y, popup_width, popup_height)
}
