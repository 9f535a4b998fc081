//! Derived field constraints for the minesettings form.
//!
//! The settings form has three inputs: a grid size, a "use default mines"
//! checkbox and a mines amount. This crate computes everything that depends
//! on them, without touching any UI:
//!
//! - the allowed range and placeholder of the mines field,
//! - the grid-size cap for a viewport width,
//! - the visibility and reset behavior of the mines field,
//! - the validation of a submitted form.
//!
//! # Overview
//!
//! - [`grid_size`]: Classification of raw grid-size text
//! - [`range`]: Mines range computation
//! - [`viewport`]: Breakpoints and the grid-size cap
//! - [`field`]: Mines field state machine
//! - [`submission`]: Validation of a submitted form
//! - [`error`]: Error types
//!
//! # Examples
//!
//! ```
//! use minesettings_constraints::{
//!     Breakpoints, FieldOptions, MineLimit, MinesField, compute_max_grid_size,
//! };
//!
//! // Load: cap the grid size for a narrow viewport
//! assert_eq!(compute_max_grid_size(500, &Breakpoints::COMPACT), 10);
//!
//! // The mines field follows the grid size
//! let options = FieldOptions::default();
//! let mut mines = MinesField::initial("", &options);
//! mines.recompute("10", options.validation);
//! assert_eq!(mines.range().max, MineLimit::Count(80));
//!
//! // Using the default amount clears and hides the field
//! mines.set_value("25");
//! mines.toggle_default(true, "10", &options);
//! assert!(mines.is_hidden());
//! assert_eq!(mines.value(), "");
//! ```

pub mod error;
pub mod field;
pub mod grid_size;
pub mod range;
pub mod submission;
pub mod viewport;

// Re-export primary types at crate root for convenience
pub use error::{ConstraintError, Result, SubmissionError};
pub use field::{FieldOptions, FieldValidity, MinesField, Visibility};
pub use grid_size::GridSizeValue;
pub use range::{
    FALLBACK_MAX_MINES, FALLBACK_PLACEHOLDER, MAX_MINES_RATIO, MIN_MINES, MineLimit, MinesRange,
    ValidationMode, compute_mines_range, max_mines, range_for,
};
pub use submission::{GameSettings, SettingsSubmission, SubmissionLimits, validate_submission};
pub use viewport::{Breakpoints, DEFAULT_BREAKPOINT_PX, MIN_GRID_SIZE, compute_max_grid_size};
