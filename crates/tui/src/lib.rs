//! Terminal front end for the minesweeper settings form.
//!
//! The crate has two layers. The adapter layer ([`document`], [`handlers`])
//! binds the constraint engine to a tree of form elements addressed by id
//! and reacts to load, change and input events. The terminal layer
//! ([`app`], [`event`], [`widgets`]) turns key presses into those events and
//! draws the tree with Ratatui.
//!
//! # Overview
//!
//! - [`document`]: Element tree and the [`UiTree`](document::UiTree) seam
//! - [`handlers`]: Form event handlers
//! - [`app`]: Main application struct and run loop
//! - [`state`]: Focus, help and status line state
//! - [`event`]: Event polling and key mappings
//! - [`terminal`]: Terminal setup, teardown, panic handling and measurement
//! - [`widgets`]: Rendering functions
//!
//! # Example
//!
//! ```no_run
//! use minesettings_config::Config;
//! use minesettings_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     terminal::install_panic_hook();
//!     let width = terminal::viewport_width_px(config.cell_width_px)?;
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let mut app = App::new(&config, width)?;
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod document;
pub mod error;
pub mod event;
pub mod handlers;
pub mod layout;
pub mod message;
pub mod state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

pub use app::App;
pub use error::{Result, UiError};
pub use message::Message;
pub use state::{Field, FormState, Status};
