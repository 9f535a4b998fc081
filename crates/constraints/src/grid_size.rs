//! Classification of raw grid-size field text.
//!
//! The grid-size field is free text as far as the engine is concerned. It is
//! classified once into a [`GridSizeValue`], which decides whether the mines
//! range uses the derived or the fallback bounds.

/// A grid-size field value, classified for range computation.
///
/// # Examples
///
/// ```
/// use minesettings_constraints::GridSizeValue;
///
/// assert_eq!(GridSizeValue::parse(""), GridSizeValue::Absent);
/// assert_eq!(GridSizeValue::parse("0"), GridSizeValue::Zero);
/// assert_eq!(GridSizeValue::parse("10"), GridSizeValue::Number(10.0));
/// assert!(matches!(GridSizeValue::parse("ten"), GridSizeValue::Invalid(_)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum GridSizeValue {
    /// The field is empty.
    Absent,
    /// The field holds a number equal to zero.
    Zero,
    /// The field holds a finite, non-zero number.
    Number(f64),
    /// The field holds text that is not a finite number.
    Invalid(String),
}

impl GridSizeValue {
    /// Classifies the raw text of a grid-size field.
    ///
    /// Surrounding whitespace is ignored. Values such as `"0.0"` or `"-0"`
    /// are [`Zero`](Self::Zero); `"inf"` and `"NaN"` are
    /// [`Invalid`](Self::Invalid).
    ///
    /// Only decimal notation counts as a number. Unlike script `Number()`
    /// coercion, hex (`"0x10"`), binary, octal and `"Infinity"` are
    /// [`Invalid`](Self::Invalid) rather than numbers.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Absent;
        }

        match trimmed.parse::<f64>() {
            Ok(v) if !v.is_finite() => Self::Invalid(trimmed.to_string()),
            Ok(v) if v == 0.0 => Self::Zero,
            Ok(v) => Self::Number(v),
            Err(_) => Self::Invalid(trimmed.to_string()),
        }
    }

    /// Returns `true` if the value selects the derived mines bounds.
    ///
    /// Empty and zero values are falsy. Invalid text is truthy, which is
    /// why it needs a [`ValidationMode`](crate::ValidationMode) decision.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Self::Absent | Self::Zero)
    }
}

impl From<u32> for GridSizeValue {
    fn from(size: u32) -> Self {
        if size == 0 {
            Self::Zero
        } else {
            Self::Number(f64::from(size))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_whitespace_are_absent() {
        assert_eq!(GridSizeValue::parse(""), GridSizeValue::Absent);
        assert_eq!(GridSizeValue::parse("   "), GridSizeValue::Absent);
    }

    #[test]
    fn zero_spellings() {
        assert_eq!(GridSizeValue::parse("0"), GridSizeValue::Zero);
        assert_eq!(GridSizeValue::parse("0.0"), GridSizeValue::Zero);
        assert_eq!(GridSizeValue::parse("-0"), GridSizeValue::Zero);
    }

    #[test]
    fn numbers_keep_their_value() {
        assert_eq!(GridSizeValue::parse(" 12 "), GridSizeValue::Number(12.0));
        assert_eq!(GridSizeValue::parse("2.5"), GridSizeValue::Number(2.5));
        assert_eq!(GridSizeValue::parse("-3"), GridSizeValue::Number(-3.0));
    }

    #[test]
    fn non_numbers_are_invalid() {
        assert_eq!(
            GridSizeValue::parse("abc"),
            GridSizeValue::Invalid("abc".to_string())
        );
        assert!(matches!(GridSizeValue::parse("inf"), GridSizeValue::Invalid(_)));
        assert!(matches!(GridSizeValue::parse("NaN"), GridSizeValue::Invalid(_)));
    }

    #[test]
    fn only_decimal_notation_is_numeric() {
        assert_eq!(GridSizeValue::parse("1e1"), GridSizeValue::Number(10.0));
        assert_eq!(GridSizeValue::parse(".5"), GridSizeValue::Number(0.5));
        for raw in ["0x10", "0b11", "0o7", "Infinity", "-Infinity"] {
            assert!(
                matches!(GridSizeValue::parse(raw), GridSizeValue::Invalid(_)),
                "input {raw:?}"
            );
        }
    }

    #[test]
    fn truthiness() {
        assert!(!GridSizeValue::Absent.is_truthy());
        assert!(!GridSizeValue::Zero.is_truthy());
        assert!(GridSizeValue::Number(4.0).is_truthy());
        assert!(GridSizeValue::Invalid("x".to_string()).is_truthy());
    }

    #[test]
    fn from_integer() {
        assert_eq!(GridSizeValue::from(0), GridSizeValue::Zero);
        assert_eq!(GridSizeValue::from(7), GridSizeValue::Number(7.0));
    }
}
