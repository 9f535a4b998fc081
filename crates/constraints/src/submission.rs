//! Validation of a submitted settings form.
//!
//! The form posts the grid-size text, the mines text and two flags asking
//! for a random grid size or the default (random) mines amount. This module
//! turns that submission into validated [`GameSettings`].

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{ConstraintError, SubmissionError};
use crate::range::MAX_MINES_RATIO;

/// Share of the board's cells that a default mines amount covers at least.
pub const MIN_MINES_RATIO: f64 = 0.1;

/// Smallest accepted grid size.
pub const MIN_SUBMITTED_GRID_SIZE: u32 = 2;

/// Largest accepted grid size.
pub const MAX_SUBMITTED_GRID_SIZE: u32 = 22;

/// Bounds applied to a submitted form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubmissionLimits {
    /// Smallest accepted grid size.
    #[serde(default = "default_min_grid_size")]
    pub min_grid_size: u32,
    /// Largest accepted grid size.
    #[serde(default = "default_max_grid_size")]
    pub max_grid_size: u32,
    /// Lower share of cells used for default mines amounts.
    #[serde(default = "default_min_mines_ratio")]
    pub min_mines_ratio: f64,
    /// Upper share of cells a mines amount may reach.
    #[serde(default = "default_max_mines_ratio")]
    pub max_mines_ratio: f64,
}

fn default_min_grid_size() -> u32 {
    MIN_SUBMITTED_GRID_SIZE
}

fn default_max_grid_size() -> u32 {
    MAX_SUBMITTED_GRID_SIZE
}

fn default_min_mines_ratio() -> f64 {
    MIN_MINES_RATIO
}

fn default_max_mines_ratio() -> f64 {
    MAX_MINES_RATIO
}

impl Default for SubmissionLimits {
    fn default() -> Self {
        Self {
            min_grid_size: MIN_SUBMITTED_GRID_SIZE,
            max_grid_size: MAX_SUBMITTED_GRID_SIZE,
            min_mines_ratio: MIN_MINES_RATIO,
            max_mines_ratio: MAX_MINES_RATIO,
        }
    }
}

impl SubmissionLimits {
    /// Checks that the limits describe a non-empty range.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid-size bounds are inverted or below 1, if
    /// the ratios are not in `0.0..=1.0` with `min <= max`, or if the
    /// smallest grid cannot hold a single mine.
    pub fn validate(&self) -> crate::Result<()> {
        if self.min_grid_size == 0 || self.min_grid_size > self.max_grid_size {
            return Err(ConstraintError::InvalidLimits {
                reason: format!(
                    "grid size bounds {}..={} are empty",
                    self.min_grid_size, self.max_grid_size
                ),
            });
        }

        let ratio_ok = |r: f64| (0.0..=1.0).contains(&r);
        if !ratio_ok(self.min_mines_ratio)
            || !ratio_ok(self.max_mines_ratio)
            || self.min_mines_ratio > self.max_mines_ratio
        {
            return Err(ConstraintError::InvalidLimits {
                reason: format!(
                    "mines ratios {}..={} must lie within 0..=1",
                    self.min_mines_ratio, self.max_mines_ratio
                ),
            });
        }

        if self.max_mines(self.min_grid_size) == 0 {
            return Err(ConstraintError::InvalidLimits {
                reason: format!(
                    "a {size}x{size} grid holds no mines at ratio {ratio}",
                    size = self.min_grid_size,
                    ratio = self.max_mines_ratio
                ),
            });
        }

        Ok(())
    }

    /// Largest accepted mines amount for a grid size.
    #[must_use]
    pub fn max_mines(&self, grid_size: u32) -> u64 {
        cells_times(grid_size, self.max_mines_ratio)
    }

    /// Smallest mines amount picked when the default is requested.
    #[must_use]
    pub fn min_default_mines(&self, grid_size: u32) -> u64 {
        cells_times(grid_size, self.min_mines_ratio).max(1)
    }
}

fn cells_times(grid_size: u32, ratio: f64) -> u64 {
    let size = f64::from(grid_size);
    (size * size * ratio).floor() as u64
}

/// Raw values posted by the settings form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsSubmission {
    /// Text of the grid-size field.
    #[serde(default)]
    pub grid_size: String,
    /// Text of the mines field. Ignored when `use_default_mines` is set.
    #[serde(default)]
    pub mines_amount: String,
    /// Pick a random grid size instead of reading `grid_size`.
    #[serde(default)]
    pub random_grid_size: bool,
    /// Pick a default mines amount instead of reading `mines_amount`.
    #[serde(default)]
    pub use_default_mines: bool,
}

/// Validated settings for a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSettings {
    /// Edge length of the square board.
    pub grid_size: u32,
    /// Number of mines to place.
    pub mines_amount: u64,
}

/// Validates a submitted form and resolves random choices.
///
/// # Errors
///
/// Returns a [`SubmissionError`] if a field that must be read is not an
/// integer or lies outside `limits`, or if the grid is too small for a
/// single mine.
///
/// # Examples
///
/// ```
/// use minesettings_constraints::{SettingsSubmission, SubmissionLimits, validate_submission};
///
/// let submission = SettingsSubmission {
///     grid_size: "10".to_string(),
///     mines_amount: "15".to_string(),
///     ..Default::default()
/// };
/// let settings =
///     validate_submission(&submission, &SubmissionLimits::default(), &mut rand::thread_rng())
///         .unwrap();
/// assert_eq!(settings.grid_size, 10);
/// assert_eq!(settings.mines_amount, 15);
/// ```
pub fn validate_submission<R: Rng + ?Sized>(
    submission: &SettingsSubmission,
    limits: &SubmissionLimits,
    rng: &mut R,
) -> Result<GameSettings, SubmissionError> {
    let grid_size = if submission.random_grid_size {
        rng.gen_range(limits.min_grid_size..=limits.max_grid_size)
    } else {
        parse_grid_size(&submission.grid_size, limits)?
    };

    let max = limits.max_mines(grid_size);
    if max == 0 {
        return Err(SubmissionError::NoRoomForMines { grid_size });
    }

    let mines_amount = if submission.use_default_mines {
        let min = limits.min_default_mines(grid_size).min(max);
        rng.gen_range(min..=max)
    } else {
        parse_mines_amount(&submission.mines_amount, grid_size, max)?
    };

    Ok(GameSettings {
        grid_size,
        mines_amount,
    })
}

fn parse_grid_size(raw: &str, limits: &SubmissionLimits) -> Result<u32, SubmissionError> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| SubmissionError::InvalidGridSize(raw.to_string()))?;

    let bounds = i64::from(limits.min_grid_size)..=i64::from(limits.max_grid_size);
    if !bounds.contains(&value) {
        return Err(SubmissionError::GridSizeOutOfRange {
            value,
            min: limits.min_grid_size,
            max: limits.max_grid_size,
        });
    }

    u32::try_from(value).map_err(|_| SubmissionError::InvalidGridSize(raw.to_string()))
}

fn parse_mines_amount(raw: &str, grid_size: u32, max: u64) -> Result<u64, SubmissionError> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| SubmissionError::InvalidMineCount(raw.to_string()))?;

    match u64::try_from(value) {
        Ok(count) if (1..=max).contains(&count) => Ok(count),
        _ => Err(SubmissionError::MineCountOutOfRange {
            value,
            max,
            grid_size,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn submit(grid_size: &str, mines_amount: &str) -> Result<GameSettings, SubmissionError> {
        let submission = SettingsSubmission {
            grid_size: grid_size.to_string(),
            mines_amount: mines_amount.to_string(),
            ..Default::default()
        };
        validate_submission(&submission, &SubmissionLimits::default(), &mut rng())
    }

    #[test]
    fn accepts_explicit_values() {
        assert_eq!(
            submit("10", "80"),
            Ok(GameSettings {
                grid_size: 10,
                mines_amount: 80
            })
        );
        assert_eq!(
            submit(" 2 ", "1"),
            Ok(GameSettings {
                grid_size: 2,
                mines_amount: 1
            })
        );
    }

    #[test]
    fn rejects_non_numeric_grid_size() {
        assert_eq!(
            submit("ten", "5"),
            Err(SubmissionError::InvalidGridSize("ten".to_string()))
        );
        assert!(matches!(
            submit("", "5"),
            Err(SubmissionError::InvalidGridSize(_))
        ));
    }

    #[test]
    fn rejects_grid_size_out_of_range() {
        assert_eq!(
            submit("23", "5"),
            Err(SubmissionError::GridSizeOutOfRange {
                value: 23,
                min: 2,
                max: 22
            })
        );
        assert!(matches!(
            submit("1", "1"),
            Err(SubmissionError::GridSizeOutOfRange { .. })
        ));
    }

    #[test]
    fn rejects_bad_mines_amount() {
        assert_eq!(
            submit("10", "lots"),
            Err(SubmissionError::InvalidMineCount("lots".to_string()))
        );
        assert_eq!(
            submit("10", "81"),
            Err(SubmissionError::MineCountOutOfRange {
                value: 81,
                max: 80,
                grid_size: 10
            })
        );
        assert!(matches!(
            submit("10", "0"),
            Err(SubmissionError::MineCountOutOfRange { .. })
        ));
        assert!(matches!(
            submit("10", "-3"),
            Err(SubmissionError::MineCountOutOfRange { .. })
        ));
    }

    #[test]
    fn default_mines_ignore_mines_text() {
        let submission = SettingsSubmission {
            grid_size: "10".to_string(),
            mines_amount: "not a number".to_string(),
            use_default_mines: true,
            ..Default::default()
        };
        let settings =
            validate_submission(&submission, &SubmissionLimits::default(), &mut rng()).unwrap();
        assert_eq!(settings.grid_size, 10);
        assert!((10..=80).contains(&settings.mines_amount));
    }

    #[test]
    fn default_mines_on_smallest_grid_is_at_least_one() {
        let submission = SettingsSubmission {
            grid_size: "2".to_string(),
            use_default_mines: true,
            ..Default::default()
        };
        let limits = SubmissionLimits::default();
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let settings = validate_submission(&submission, &limits, &mut rng).unwrap();
            assert!((1..=3).contains(&settings.mines_amount));
        }
    }

    #[test]
    fn random_grid_size_ignores_grid_text() {
        let submission = SettingsSubmission {
            grid_size: "garbage".to_string(),
            random_grid_size: true,
            use_default_mines: true,
            ..Default::default()
        };
        let limits = SubmissionLimits::default();
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let settings = validate_submission(&submission, &limits, &mut rng).unwrap();
            assert!((2..=22).contains(&settings.grid_size));
            assert!(settings.mines_amount >= 1);
            assert!(settings.mines_amount <= limits.max_mines(settings.grid_size));
        }
    }

    #[test]
    fn limits_validation() {
        assert!(SubmissionLimits::default().validate().is_ok());

        let inverted = SubmissionLimits {
            min_grid_size: 30,
            ..Default::default()
        };
        assert!(inverted.validate().is_err());

        let bad_ratio = SubmissionLimits {
            max_mines_ratio: 1.5,
            ..Default::default()
        };
        assert!(bad_ratio.validate().is_err());
    }

    #[test]
    fn limits_must_leave_room_for_a_mine() {
        let one_cell = SubmissionLimits {
            min_grid_size: 1,
            ..Default::default()
        };
        assert!(one_cell.validate().is_err());

        let sparse = SubmissionLimits {
            min_mines_ratio: 0.0,
            max_mines_ratio: 0.2,
            ..Default::default()
        };
        assert!(sparse.validate().is_err());

        let three_cells = SubmissionLimits {
            min_grid_size: 3,
            ..sparse
        };
        assert!(three_cells.validate().is_ok());
    }

    #[test]
    fn single_cell_grid_never_yields_zero_mines() {
        let limits = SubmissionLimits {
            min_grid_size: 1,
            ..Default::default()
        };
        let default_mines = SettingsSubmission {
            grid_size: "1".to_string(),
            use_default_mines: true,
            ..Default::default()
        };
        assert_eq!(
            validate_submission(&default_mines, &limits, &mut rng()),
            Err(SubmissionError::NoRoomForMines { grid_size: 1 })
        );

        let explicit = SettingsSubmission {
            grid_size: "1".to_string(),
            mines_amount: "1".to_string(),
            ..Default::default()
        };
        assert_eq!(
            validate_submission(&explicit, &limits, &mut rng()),
            Err(SubmissionError::NoRoomForMines { grid_size: 1 })
        );
    }

    #[test]
    fn max_mines_matches_range_formula() {
        let limits = SubmissionLimits::default();
        assert_eq!(limits.max_mines(10), 80);
        assert_eq!(limits.max_mines(3), 7);
        assert_eq!(limits.min_default_mines(10), 10);
        assert_eq!(limits.min_default_mines(2), 1);
    }
}
