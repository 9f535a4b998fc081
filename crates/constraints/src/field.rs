//! Mines field state machine.
//!
//! The mines field is either visible, holding whatever the user typed, or
//! hidden because the "use default mines" checkbox is ticked. Hiding clears
//! the value so a stale count cannot be submitted alongside the default.
//!
//! ```text
//!            toggle_default(true): recompute, clear, hide
//!   Visible ─────────────────────────────────────────────▶ Hidden
//!      ▲                                                     │
//!      └──────────────── toggle_default(false) ──────────────┘
//!                        (no recompute)
//! ```

use serde::{Deserialize, Serialize};

use crate::grid_size::GridSizeValue;
use crate::range::{MinesRange, ValidationMode, range_for};

/// Options controlling how the mines field reacts to the checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOptions {
    /// Clear the value and recompute the range when the field is hidden.
    ///
    /// When `false`, ticking the checkbox only hides the field.
    #[serde(default = "default_clear_value_on_default")]
    pub clear_value_on_default: bool,

    /// How a non-numeric grid size is treated.
    #[serde(default)]
    pub validation: ValidationMode,
}

fn default_clear_value_on_default() -> bool {
    true
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            clear_value_on_default: true,
            validation: ValidationMode::default(),
        }
    }
}

/// Whether the mines field is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Shown and editable.
    #[default]
    Visible,
    /// Hidden because the default mines amount is used.
    Hidden,
}

/// Outcome of checking the mines value against the current range.
///
/// Mirrors the constraint validation a browser applies to a numeric input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValidity {
    /// No value entered.
    Empty,
    /// The value is an integer within range.
    Valid(u64),
    /// The value is below the minimum.
    RangeUnderflow,
    /// The value is above the maximum, or the maximum is `NaN`.
    RangeOverflow,
    /// The value is not an integer.
    BadInput,
}

impl FieldValidity {
    /// Returns `true` if the field would be accepted by the form.
    ///
    /// Empty fields are accepted; whether a value is required is the
    /// submitter's concern.
    #[must_use]
    pub fn is_acceptable(self) -> bool {
        matches!(self, Self::Empty | Self::Valid(_))
    }
}

/// Presentation state of the mines field.
///
/// # Examples
///
/// ```
/// use minesettings_constraints::{FieldOptions, MinesField, Visibility};
///
/// let options = FieldOptions::default();
/// let mut field = MinesField::initial("10", &options);
/// field.set_value("12");
///
/// field.toggle_default(true, "10", &options);
/// assert_eq!(field.visibility(), Visibility::Hidden);
/// assert_eq!(field.value(), "");
///
/// field.toggle_default(false, "10", &options);
/// assert_eq!(field.visibility(), Visibility::Visible);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MinesField {
    value: String,
    range: MinesRange,
    visibility: Visibility,
}

impl MinesField {
    /// Creates the field as it appears on load: visible, empty, with a range
    /// computed from the grid-size value present at that time.
    #[must_use]
    pub fn initial(grid_size: &str, options: &FieldOptions) -> Self {
        Self {
            value: String::new(),
            range: range_for(&GridSizeValue::parse(grid_size), options.validation),
            visibility: Visibility::Visible,
        }
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the current value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Returns the range last computed for the field.
    #[must_use]
    pub fn range(&self) -> &MinesRange {
        &self.range
    }

    /// Returns whether the field is shown.
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Returns `true` if the field is hidden.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.visibility == Visibility::Hidden
    }

    /// Recomputes the range from the grid-size field text.
    ///
    /// Returns the new range.
    pub fn recompute(&mut self, grid_size: &str, mode: ValidationMode) -> &MinesRange {
        self.range = range_for(&GridSizeValue::parse(grid_size), mode);
        &self.range
    }

    /// Reacts to the "use default mines" checkbox.
    ///
    /// Ticking it clears the value, recomputes the range against the current
    /// grid size and hides the field (only hides it when
    /// `clear_value_on_default` is off). Unticking it shows the field again
    /// without recomputing anything.
    pub fn toggle_default(&mut self, use_default: bool, grid_size: &str, options: &FieldOptions) {
        if use_default {
            if options.clear_value_on_default {
                self.value.clear();
                self.recompute(grid_size, options.validation);
            }
            self.visibility = Visibility::Hidden;
        } else {
            self.visibility = Visibility::Visible;
        }
    }

    /// Checks the current value against the current range.
    #[must_use]
    pub fn validity(&self) -> FieldValidity {
        let raw = self.value.trim();
        if raw.is_empty() {
            return FieldValidity::Empty;
        }

        let Ok(count) = raw.parse::<i64>() else {
            return FieldValidity::BadInput;
        };

        if count < 0 || (count as u64) < self.range.min {
            return FieldValidity::RangeUnderflow;
        }

        let count = count as u64;
        match self.range.max.count() {
            Some(max) if count <= max => FieldValidity::Valid(count),
            _ => FieldValidity::RangeOverflow,
        }
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Ticking the checkbox always leaves an empty, hidden field.
        #[test]
        fn tick_always_clears(prior in ".{0,6}", grid in "[0-9]{0,3}") {
            let options = FieldOptions::default();
            let mut field = MinesField::initial(&grid, &options);
            field.set_value(prior);
            field.toggle_default(true, &grid, &options);
            prop_assert!(field.is_hidden());
            prop_assert_eq!(field.value(), "");
        }

        /// Unticking never touches the value.
        #[test]
        fn untick_never_clears(prior in ".{0,6}", grid in "[0-9]{0,3}") {
            let options = FieldOptions::default();
            let mut field = MinesField::initial(&grid, &options);
            field.set_value(prior.clone());
            field.toggle_default(false, &grid, &options);
            prop_assert!(!field.is_hidden());
            prop_assert_eq!(field.value(), prior.as_str());
        }
    }
}
