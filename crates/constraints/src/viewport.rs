//! Grid-size cap derived from the viewport width.
//!
//! Narrow viewports cannot display large boards, so the grid-size field gets
//! a smaller maximum below a width breakpoint. The cap is computed once, when
//! the form loads.
//!
//! Two breakpoint pairs are known:
//!
//! | Preset | Breakpoint | Below | At or above |
//! |--------|------------|-------|-------------|
//! | [`Breakpoints::COMPACT`] | 768 px | 10 | 22 |
//! | [`Breakpoints::WIDE`] | 768 px | 15 | 50 |

use serde::{Deserialize, Serialize};

use crate::error::{ConstraintError, Result};

/// Viewport width separating small from large displays, in pixels.
pub const DEFAULT_BREAKPOINT_PX: u32 = 768;

/// Smallest grid size a breakpoint may cap to.
pub const MIN_GRID_SIZE: u32 = 2;

/// A viewport breakpoint and the grid-size caps on either side of it.
///
/// # Examples
///
/// ```
/// use minesettings_constraints::{Breakpoints, compute_max_grid_size};
///
/// let breakpoints = Breakpoints::WIDE;
/// assert_eq!(compute_max_grid_size(500, &breakpoints), 15);
/// assert_eq!(compute_max_grid_size(1024, &breakpoints), 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Breakpoints {
    /// Viewport width at which the large cap starts to apply.
    pub width_px: u32,
    /// Grid-size cap below the breakpoint.
    pub small_max: u32,
    /// Grid-size cap at or above the breakpoint.
    pub large_max: u32,
}

impl Breakpoints {
    /// Caps matching the server-side grid-size limit of 22.
    pub const COMPACT: Self = Self {
        width_px: DEFAULT_BREAKPOINT_PX,
        small_max: 10,
        large_max: 22,
    };

    /// Caps for boards of up to 50 cells per side.
    pub const WIDE: Self = Self {
        width_px: DEFAULT_BREAKPOINT_PX,
        small_max: 15,
        large_max: 50,
    };

    /// Creates a breakpoint pair.
    #[must_use]
    pub const fn new(width_px: u32, small_max: u32, large_max: u32) -> Self {
        Self {
            width_px,
            small_max,
            large_max,
        }
    }

    /// Looks up a named preset (`"compact"` or `"wide"`, case-insensitive).
    #[must_use]
    pub fn preset(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "compact" => Some(Self::COMPACT),
            "wide" => Some(Self::WIDE),
            _ => None,
        }
    }

    /// Returns the preset name for these breakpoints, if they match one.
    #[must_use]
    pub fn preset_name(&self) -> Option<&'static str> {
        if *self == Self::COMPACT {
            Some("compact")
        } else if *self == Self::WIDE {
            Some("wide")
        } else {
            None
        }
    }

    /// Checks that the breakpoints can produce a usable cap.
    ///
    /// # Errors
    ///
    /// Returns an error if the width is zero, a cap is below
    /// [`MIN_GRID_SIZE`], or the small cap exceeds the large one.
    pub fn validate(&self) -> Result<()> {
        if self.width_px == 0 {
            return Err(ConstraintError::InvalidBreakpoints {
                reason: "width_px must be positive".to_string(),
            });
        }

        if self.small_max < MIN_GRID_SIZE {
            return Err(ConstraintError::InvalidBreakpoints {
                reason: format!(
                    "small_max {} is below the minimum grid size of {MIN_GRID_SIZE}",
                    self.small_max
                ),
            });
        }

        if self.small_max > self.large_max {
            return Err(ConstraintError::InvalidBreakpoints {
                reason: format!(
                    "small_max {} exceeds large_max {}",
                    self.small_max, self.large_max
                ),
            });
        }

        Ok(())
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::COMPACT
    }
}

/// Returns the grid-size cap for a viewport width.
///
/// Widths strictly below `breakpoints.width_px` get the small cap.
#[must_use]
pub fn compute_max_grid_size(viewport_width_px: u32, breakpoints: &Breakpoints) -> u32 {
    if viewport_width_px < breakpoints.width_px {
        breakpoints.small_max
    } else {
        breakpoints.large_max
    }
}
