//! Environment variable overrides.
//!
//! Environment variables take precedence over any configuration file:
//!
//! | Variable | Value |
//! |----------|-------|
//! | `MINESETTINGS_BREAKPOINTS` | `compact` or `wide` |
//! | `MINESETTINGS_BREAKPOINT_PX` | breakpoint width in pixels |
//! | `MINESETTINGS_SMALL_MAX` | grid-size cap below the breakpoint |
//! | `MINESETTINGS_LARGE_MAX` | grid-size cap at or above the breakpoint |
//! | `MINESETTINGS_CLEAR_ON_DEFAULT` | `true`/`false` (also `1`/`0`, `yes`/`no`, `on`/`off`) |
//! | `MINESETTINGS_VALIDATION` | `fallback` or `propagate` |
//!
//! The preset is applied before the individual caps, so
//! `MINESETTINGS_BREAKPOINTS=wide MINESETTINGS_SMALL_MAX=12` yields 12/50.

use std::ffi::OsString;

use minesettings_constraints::{Breakpoints, ValidationMode};

use crate::Config;
use crate::error::{ConfigError, Result};

/// Prefix shared by all override variables.
pub const ENV_PREFIX: &str = "MINESETTINGS_";

/// Selects a breakpoints preset.
pub const BREAKPOINTS: &str = "MINESETTINGS_BREAKPOINTS";

/// Overrides the breakpoint width.
pub const BREAKPOINT_PX: &str = "MINESETTINGS_BREAKPOINT_PX";

/// Overrides the small grid-size cap.
pub const SMALL_MAX: &str = "MINESETTINGS_SMALL_MAX";

/// Overrides the large grid-size cap.
pub const LARGE_MAX: &str = "MINESETTINGS_LARGE_MAX";

/// Overrides `clear_value_on_default`.
pub const CLEAR_ON_DEFAULT: &str = "MINESETTINGS_CLEAR_ON_DEFAULT";

/// Overrides the validation mode.
pub const VALIDATION: &str = "MINESETTINGS_VALIDATION";

/// Applies overrides from the process environment.
///
/// # Errors
///
/// Returns an error if a recognized variable holds an unparsable value.
pub fn apply_env_overrides(config: &mut Config) -> Result<()> {
    apply_overrides(config, std::env::vars_os())
}

/// Applies overrides from an explicit list of variables.
///
/// Variables without the [`ENV_PREFIX`] are ignored whatever their encoding;
/// unknown variables with the prefix are logged and ignored.
///
/// # Errors
///
/// Returns an error if a prefixed variable is not valid UTF-8, or if a
/// recognized variable holds an unparsable value.
///
/// # Examples
///
/// ```
/// use minesettings_config::{Config, env::apply_overrides};
/// use minesettings_constraints::Breakpoints;
///
/// let mut config = Config::default();
/// apply_overrides(
///     &mut config,
///     [("MINESETTINGS_BREAKPOINTS".to_string(), "wide".to_string())],
/// )
/// .unwrap();
/// assert_eq!(config.breakpoints, Breakpoints::WIDE);
/// ```
pub fn apply_overrides<I, K, V>(config: &mut Config, vars: I) -> Result<()>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<OsString>,
    V: Into<OsString>,
{
    let mut overrides = Vec::new();
    for (name, value) in vars {
        let (name, value): (OsString, OsString) = (name.into(), value.into());
        if name.as_encoded_bytes().starts_with(ENV_PREFIX.as_bytes()) {
            overrides.push(decode(name, value)?);
        }
    }

    // The preset must land before the individual caps
    overrides.sort_by_key(|(name, _)| name != BREAKPOINTS);

    for (name, value) in overrides {
        match name.as_str() {
            BREAKPOINTS => {
                config.breakpoints = Breakpoints::preset(&value)
                    .ok_or_else(|| invalid(&name, &value, "expected 'compact' or 'wide'"))?;
            }
            BREAKPOINT_PX => config.breakpoints.width_px = parse_u32(&name, &value)?,
            SMALL_MAX => config.breakpoints.small_max = parse_u32(&name, &value)?,
            LARGE_MAX => config.breakpoints.large_max = parse_u32(&name, &value)?,
            CLEAR_ON_DEFAULT => config.clear_value_on_default = parse_bool(&name, &value)?,
            VALIDATION => {
                config.validation = match value.trim().to_ascii_lowercase().as_str() {
                    "fallback" => ValidationMode::Fallback,
                    "propagate" => ValidationMode::Propagate,
                    _ => return Err(invalid(&name, &value, "expected 'fallback' or 'propagate'")),
                };
            }
            _ => {
                tracing::warn!(variable = %name, "ignoring unknown configuration variable");
                continue;
            }
        }
        tracing::debug!(variable = %name, value = %value, "applied configuration override");
    }

    Ok(())
}

fn decode(name: OsString, value: OsString) -> Result<(String, String)> {
    let name = name.into_string().map_err(|raw| {
        invalid(
            &raw.to_string_lossy(),
            &value.to_string_lossy(),
            "variable name is not valid UTF-8",
        )
    })?;
    let value = value
        .into_string()
        .map_err(|raw| invalid(&name, &raw.to_string_lossy(), "expected valid UTF-8"))?;
    Ok((name, value))
}

fn parse_u32(name: &str, value: &str) -> Result<u32> {
    value
        .trim()
        .parse()
        .map_err(|_| invalid(name, value, "expected a non-negative integer"))
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(name, value, "expected a boolean")),
    }
}

fn invalid(name: &str, value: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
