//! Mines range derived from the grid size.
//!
//! The mines field accepts at most 80% of the board's cells. When no usable
//! grid size is present, a fixed fallback cap applies instead.
//!
//! # Examples
//!
//! ```
//! use minesettings_constraints::{MineLimit, ValidationMode, compute_mines_range};
//!
//! let range = compute_mines_range("10", ValidationMode::Fallback);
//! assert_eq!(range.min, 1);
//! assert_eq!(range.max, MineLimit::Count(80));
//! assert_eq!(range.placeholder, "Enter number of mines (max: 80)");
//!
//! let range = compute_mines_range("", ValidationMode::Fallback);
//! assert_eq!(range.max, MineLimit::Count(350));
//! assert_eq!(range.placeholder, "Enter number of mines");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::grid_size::GridSizeValue;

/// Share of the board's cells that may hold a mine.
pub const MAX_MINES_RATIO: f64 = 0.8;

/// Smallest accepted mines amount.
pub const MIN_MINES: u64 = 1;

/// Mines cap used when the grid size is empty or zero.
pub const FALLBACK_MAX_MINES: u64 = 350;

/// Placeholder shown when the fallback cap applies.
pub const FALLBACK_PLACEHOLDER: &str = "Enter number of mines";

/// Upper bound of the mines field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MineLimit {
    /// A concrete maximum.
    Count(u64),
    /// The maximum could not be computed (non-numeric grid size).
    NotANumber,
}

impl MineLimit {
    /// Returns the concrete maximum, if any.
    #[must_use]
    pub fn count(self) -> Option<u64> {
        match self {
            Self::Count(n) => Some(n),
            Self::NotANumber => None,
        }
    }
}

impl fmt::Display for MineLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::NotANumber => f.write_str("NaN"),
        }
    }
}

/// How a non-numeric grid size is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Apply the fallback bounds, as for an empty field.
    #[default]
    Fallback,
    /// Let the maximum become `NaN` for text that is not a decimal number.
    Propagate,
}

/// The allowed range and placeholder text of the mines field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinesRange {
    /// Smallest accepted mines amount.
    pub min: u64,
    /// Largest accepted mines amount.
    pub max: MineLimit,
    /// Hint text for the empty field.
    pub placeholder: String,
}

impl MinesRange {
    /// The range used when no usable grid size is present.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            min: MIN_MINES,
            max: MineLimit::Count(FALLBACK_MAX_MINES),
            placeholder: FALLBACK_PLACEHOLDER.to_string(),
        }
    }

    fn derived(max: MineLimit) -> Self {
        Self {
            min: MIN_MINES,
            max,
            placeholder: format!("Enter number of mines (max: {max})"),
        }
    }

    /// Returns `true` if `count` lies within the range.
    ///
    /// Nothing is contained in a range whose maximum is `NaN`.
    #[must_use]
    pub fn contains(&self, count: u64) -> bool {
        match self.max {
            MineLimit::Count(max) => (self.min..=max).contains(&count),
            MineLimit::NotANumber => false,
        }
    }
}

impl Default for MinesRange {
    fn default() -> Self {
        Self::fallback()
    }
}

/// Returns `floor(size² × 0.8)`, saturating at `u64::MAX`.
///
/// # Examples
///
/// ```
/// use minesettings_constraints::max_mines;
///
/// assert_eq!(max_mines(10.0), 80);
/// assert_eq!(max_mines(3.0), 7);
/// assert_eq!(max_mines(2.5), 5);
/// ```
#[must_use]
pub fn max_mines(size: f64) -> u64 {
    // `as` saturates for out-of-range floats
    (size * size * MAX_MINES_RATIO).floor() as u64
}

/// Computes the mines range from the raw grid-size field text.
///
/// Empty or zero grid sizes yield [`MinesRange::fallback`]. Numbers yield
/// `(1, floor(g² × 0.8))`. Non-numeric text follows `mode`.
#[must_use]
pub fn compute_mines_range(grid_size: &str, mode: ValidationMode) -> MinesRange {
    range_for(&GridSizeValue::parse(grid_size), mode)
}

/// Computes the mines range from an already classified grid size.
#[must_use]
pub fn range_for(grid_size: &GridSizeValue, mode: ValidationMode) -> MinesRange {
    match grid_size {
        GridSizeValue::Absent | GridSizeValue::Zero => MinesRange::fallback(),
        GridSizeValue::Number(size) => MinesRange::derived(MineLimit::Count(max_mines(*size))),
        GridSizeValue::Invalid(_) => match mode {
            ValidationMode::Fallback => MinesRange::fallback(),
            ValidationMode::Propagate => MinesRange::derived(MineLimit::NotANumber),
        },
    }
}
