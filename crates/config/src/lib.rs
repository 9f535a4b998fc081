//! Configuration management for the minesweeper settings form.
//!
//! This crate handles loading, validating, and persisting the knobs that
//! shape the form: viewport breakpoints, whether ticking "use default mines"
//! clears the mines field, how a non-numeric grid size is treated, and the
//! bounds applied on submission.
//!
//! # Overview
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`breakpoints`]: Breakpoints serialization (preset name or object)
//! - [`env`]: `MINESETTINGS_*` environment overrides
//! - [`persistence`]: Config file discovery, reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! 1. Environment variables (`MINESETTINGS_*`)
//! 2. Local config (`./minesettings.json5` or `./minesettings.json`)
//! 3. User config (`~/.config/minesettings/config.json5` or `config.json`)
//! 4. Built-in defaults
//!
//! # Example
//!
//! ```json5
//! {
//!   // "compact" (10/22), "wide" (15/50), or an object
//!   breakpoints: { width_px: 768, small_max: 12, large_max: 30 },
//!   clear_value_on_default: true,
//!   validation: "fallback",
//!   limits: { min_grid_size: 2, max_grid_size: 22 },
//! }
//! ```
//!
//! ```no_run
//! use minesettings_config::Config;
//!
//! # fn example() -> minesettings_config::Result<()> {
//! let config = Config::load()?;
//! let options = config.field_options();
//! # Ok(())
//! # }
//! ```

pub mod breakpoints;
pub mod config;
pub mod env;
pub mod error;
pub mod persistence;

pub use config::Config;
pub use error::{ConfigError, Result};
