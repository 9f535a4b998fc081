//! Error types for the constraints crate.
//!
//! Engine computations are total; errors only arise when validating
//! configuration values or a submitted settings form.

use thiserror::Error;

/// Errors raised when constraint parameters are inconsistent.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstraintError {
    /// The breakpoint pair cannot produce a usable grid-size cap.
    #[error("invalid breakpoints: {reason}")]
    InvalidBreakpoints {
        /// Why the breakpoints were rejected.
        reason: String,
    },

    /// The submission limits are inconsistent.
    #[error("invalid submission limits: {reason}")]
    InvalidLimits {
        /// Why the limits were rejected.
        reason: String,
    },
}

/// Errors raised when a submitted settings form is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// The grid size is not an integer.
    #[error("invalid grid size: must be a proper grid size number, got '{0}'")]
    InvalidGridSize(String),

    /// The grid size is outside the accepted bounds.
    #[error("grid size must be between {min} and {max}, got {value}")]
    GridSizeOutOfRange {
        /// The rejected grid size.
        value: i64,
        /// Smallest accepted grid size.
        min: u32,
        /// Largest accepted grid size.
        max: u32,
    },

    /// The mines amount is not an integer.
    #[error("invalid mines amount: must be a number, got '{0}'")]
    InvalidMineCount(String),

    /// The mines amount is outside `1..=max`.
    #[error("mines amount must be between 1 and {max} for a {grid_size}x{grid_size} grid, got {value}")]
    MineCountOutOfRange {
        /// The rejected mines amount.
        value: i64,
        /// Largest accepted mines amount for the grid.
        max: u64,
        /// The grid size the bound was derived from.
        grid_size: u32,
    },

    /// The mines ratio leaves no cell for a single mine on this grid.
    #[error("a {grid_size}x{grid_size} grid has no room for mines")]
    NoRoomForMines {
        /// The grid size that was too small.
        grid_size: u32,
    },
}

/// A specialized Result type for constraint configuration checks.
pub type Result<T> = std::result::Result<T, ConstraintError>;
