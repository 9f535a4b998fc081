//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the settings form.

use std::path::{Path, PathBuf};

use minesettings_constraints::{Breakpoints, FieldOptions, SubmissionLimits, ValidationMode};
use serde::{Deserialize, Serialize};

use crate::env::apply_env_overrides;
use crate::error::{ConfigError, Result};
use crate::persistence::{find_config_file, read_config_file, write_config_file};

/// Default id of the "use default mines" checkbox.
pub const DEFAULT_MINES_CHECKBOX_ID: &str = "use-default-mines";

/// Pixel width assumed per terminal column when the terminal reports none.
pub const DEFAULT_CELL_WIDTH_PX: u16 = 8;

/// The main configuration struct for the settings form.
///
/// # Examples
///
/// ```
/// use minesettings_config::Config;
/// use minesettings_constraints::{Breakpoints, ValidationMode};
///
/// let config = Config::default();
/// assert_eq!(config.breakpoints, Breakpoints::COMPACT);
/// assert!(config.clear_value_on_default);
/// assert_eq!(config.validation, ValidationMode::Fallback);
///
/// let config = Config {
///     breakpoints: Breakpoints::WIDE,
///     clear_value_on_default: false,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Viewport breakpoint and grid-size caps.
    ///
    /// Either a preset name (`"compact"`, `"wide"`) or an object.
    #[serde(default, with = "crate::breakpoints")]
    pub breakpoints: Breakpoints,

    /// Clear and recompute the mines field when it gets hidden.
    #[serde(default = "default_clear_value_on_default")]
    pub clear_value_on_default: bool,

    /// How a non-numeric grid size is treated.
    #[serde(default)]
    pub validation: ValidationMode,

    /// Element id of the "use default mines" checkbox.
    #[serde(default = "default_mines_checkbox")]
    pub default_mines_checkbox: String,

    /// Pixel width of a terminal column, used to estimate the viewport width.
    #[serde(default = "default_cell_width_px")]
    pub cell_width_px: u16,

    /// Bounds applied when the form is submitted.
    #[serde(default)]
    pub limits: SubmissionLimits,
}

fn default_clear_value_on_default() -> bool {
    true
}

fn default_mines_checkbox() -> String {
    DEFAULT_MINES_CHECKBOX_ID.to_string()
}

fn default_cell_width_px() -> u16 {
    DEFAULT_CELL_WIDTH_PX
}

impl Default for Config {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::default(),
            clear_value_on_default: true,
            validation: ValidationMode::default(),
            default_mines_checkbox: default_mines_checkbox(),
            cell_width_px: DEFAULT_CELL_WIDTH_PX,
            limits: SubmissionLimits::default(),
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    ///
    /// This is equivalent to `Config::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations, then applies
    /// environment overrides.
    ///
    /// Searches for configuration files in the following order:
    ///
    /// 1. Local: `./minesettings.json5` or `./minesettings.json`
    /// 2. User: `~/.config/minesettings/config.json5` or `config.json`
    ///
    /// If no configuration file is found, starts from the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read or parsed, if an override is malformed, or if the result does
    /// not validate.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use minesettings_config::Config;
    ///
    /// # fn example() -> minesettings_config::Result<()> {
    /// let config = Config::load()?;
    /// println!("Grid caps: {}/{}", config.breakpoints.small_max, config.breakpoints.large_max);
    /// # Ok(())
    /// # }
    /// ```
    pub fn load() -> Result<Self> {
        Self::load_with_source().map(|(config, _)| config)
    }

    /// Like [`Config::load`], also returning the file the configuration was
    /// read from, if any.
    ///
    /// # Errors
    ///
    /// See [`Config::load`].
    pub fn load_with_source() -> Result<(Self, Option<PathBuf>)> {
        let source = find_config_file();
        let mut config = match &source {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading configuration");
                read_config_file(path)?
            }
            None => {
                tracing::info!("no configuration file found, using defaults");
                Self::default()
            }
        };

        apply_env_overrides(&mut config)?;
        config.validate()?;
        Ok((config, source))
    }

    /// Loads configuration from a specific file.
    ///
    /// Environment overrides are not applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// configuration does not validate.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the breakpoints or submission limits are
    /// inconsistent, or the checkbox id is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use minesettings_config::Config;
    /// use minesettings_constraints::Breakpoints;
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.breakpoints = Breakpoints::new(768, 30, 20);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        self.breakpoints.validate()?;
        self.limits.validate()?;
        if self.default_mines_checkbox.trim().is_empty() {
            return Err(ConfigError::EmptyCheckboxId);
        }
        Ok(())
    }

    /// Returns the options that drive the mines field.
    #[must_use]
    pub fn field_options(&self) -> FieldOptions {
        FieldOptions {
            clear_value_on_default: self.clear_value_on_default,
            validation: self.validation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.breakpoints, Breakpoints::COMPACT);
        assert!(config.clear_value_on_default);
        assert_eq!(config.default_mines_checkbox, "use-default-mines");
        assert_eq!(config.cell_width_px, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn new_config() {
        assert_eq!(Config::new(), Config::default());
    }

    #[test]
    fn field_options_follow_config() {
        let config = Config {
            clear_value_on_default: false,
            validation: ValidationMode::Propagate,
            ..Default::default()
        };
        let options = config.field_options();
        assert!(!options.clear_value_on_default);
        assert_eq!(options.validation, ValidationMode::Propagate);
    }

    #[test]
    fn validate_invalid_breakpoints() {
        let config = Config {
            breakpoints: Breakpoints::new(0, 10, 22),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Constraint(_))
        ));
    }

    #[test]
    fn validate_invalid_limits() {
        let config = Config {
            limits: SubmissionLimits {
                min_grid_size: 40,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_empty_checkbox_id() {
        let config = Config {
            default_mines_checkbox: "  ".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::EmptyCheckboxId)));
    }

    #[test]
    fn serialize_deserialize_roundtrip() {
        let config = Config {
            breakpoints: Breakpoints::new(1024, 12, 30),
            clear_value_on_default: false,
            validation: ValidationMode::Propagate,
            default_mines_checkbox: "random-mines".to_string(),
            cell_width_px: 10,
            limits: SubmissionLimits::default(),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn deserialize_partial() {
        let json = r#"{"breakpoints": "wide", "validation": "propagate"}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.breakpoints, Breakpoints::WIDE);
        assert_eq!(config.validation, ValidationMode::Propagate);
        assert!(config.clear_value_on_default);
    }

    #[test]
    fn load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json5");
        std::fs::write(
            &path,
            r#"
            {
                // Older script revision
                breakpoints: "wide",
                clear_value_on_default: false,
                limits: { max_grid_size: 50 },
            }
            "#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.breakpoints, Breakpoints::WIDE);
        assert!(!config.clear_value_on_default);
        assert_eq!(config.limits.max_grid_size, 50);
        assert_eq!(config.limits.min_grid_size, 2);
    }

    #[test]
    fn load_from_rejects_invalid_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json5");
        std::fs::write(
            &path,
            r#"{ breakpoints: { small_max: 40, large_max: 20 } }"#,
        )
        .unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let original = Config {
            breakpoints: Breakpoints::WIDE,
            ..Default::default()
        };

        original.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();

        assert_eq!(original, loaded);
    }
}
