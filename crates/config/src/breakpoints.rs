//! Breakpoint configuration with flexible parsing.
//!
//! Breakpoints can be written in two formats:
//!
//! - Preset name: `"compact"` (10/22) or `"wide"` (15/50)
//! - Full object: `{ "width_px": 768, "small_max": 12, "large_max": 30 }`
//!
//! Breakpoints matching a preset serialize back to the preset name.
//!
//! # Examples
//!
//! ```
//! use minesettings_config::Config;
//! use minesettings_constraints::Breakpoints;
//!
//! let config: Config = serde_json::from_str(r#"{"breakpoints": "wide"}"#).unwrap();
//! assert_eq!(config.breakpoints, Breakpoints::WIDE);
//!
//! let config: Config =
//!     serde_json::from_str(r#"{"breakpoints": {"small_max": 12, "large_max": 30}}"#).unwrap();
//! assert_eq!(config.breakpoints, Breakpoints::new(768, 12, 30));
//! ```

use minesettings_constraints::{Breakpoints, DEFAULT_BREAKPOINT_PX};
use serde::{Deserializer, Serializer};

/// Serializes breakpoints as a preset name when possible.
///
/// # Errors
///
/// Propagates serializer errors.
pub fn serialize<S>(breakpoints: &Breakpoints, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if let Some(name) = breakpoints.preset_name() {
        return serializer.serialize_str(name);
    }

    use serde::ser::SerializeStruct;
    let mut state = serializer.serialize_struct("Breakpoints", 3)?;
    state.serialize_field("width_px", &breakpoints.width_px)?;
    state.serialize_field("small_max", &breakpoints.small_max)?;
    state.serialize_field("large_max", &breakpoints.large_max)?;
    state.end()
}

/// Deserializes breakpoints from a preset name or an object.
///
/// A missing `width_px` defaults to 768. Both caps are required.
///
/// # Errors
///
/// Returns an error for unknown preset names, missing caps, or duplicate
/// fields.
pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<Breakpoints, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, MapAccess, Visitor};

    struct BreakpointsVisitor;

    impl<'de> Visitor<'de> for BreakpointsVisitor {
        type Value = Breakpoints;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str(
                "a preset name ('compact' or 'wide') or an object with small_max, large_max, and optional width_px",
            )
        }

        fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Breakpoints::preset(v).ok_or_else(|| {
                de::Error::custom(format!(
                    "unknown breakpoints preset '{v}', expected 'compact' or 'wide'"
                ))
            })
        }

        fn visit_map<M>(self, mut map: M) -> std::result::Result<Self::Value, M::Error>
        where
            M: MapAccess<'de>,
        {
            let mut width_px: Option<u32> = None;
            let mut small_max: Option<u32> = None;
            let mut large_max: Option<u32> = None;

            while let Some(key) = map.next_key::<String>()? {
                let slot = match key.as_str() {
                    "width_px" => &mut width_px,
                    "small_max" => &mut small_max,
                    "large_max" => &mut large_max,
                    _ => {
                        let _: de::IgnoredAny = map.next_value()?;
                        continue;
                    }
                };
                if slot.is_some() {
                    return Err(de::Error::custom(format!("duplicate field `{key}`")));
                }
                *slot = Some(map.next_value()?);
            }

            let small_max = small_max.ok_or_else(|| de::Error::missing_field("small_max"))?;
            let large_max = large_max.ok_or_else(|| de::Error::missing_field("large_max"))?;

            Ok(Breakpoints::new(
                width_px.unwrap_or(DEFAULT_BREAKPOINT_PX),
                small_max,
                large_max,
            ))
        }
    }

    deserializer.deserialize_any(BreakpointsVisitor)
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Wrapper {
        #[serde(with = "crate::breakpoints")]
        breakpoints: Breakpoints,
    }

    fn parse(json: &str) -> serde_json::Result<Breakpoints> {
        serde_json::from_str::<Wrapper>(json).map(|w| w.breakpoints)
    }

    #[test]
    fn parse_presets() {
        assert_eq!(
            parse(r#"{"breakpoints": "compact"}"#).unwrap(),
            Breakpoints::COMPACT
        );
        assert_eq!(parse(r#"{"breakpoints": "Wide"}"#).unwrap(), Breakpoints::WIDE);
    }

    #[test]
    fn parse_unknown_preset() {
        let err = parse(r#"{"breakpoints": "huge"}"#).unwrap_err();
        assert!(err.to_string().contains("unknown breakpoints preset"));
    }

    #[test]
    fn parse_full_object() {
        let parsed =
            parse(r#"{"breakpoints": {"width_px": 1024, "small_max": 12, "large_max": 30}}"#)
                .unwrap();
        assert_eq!(parsed, Breakpoints::new(1024, 12, 30));
    }

    #[test]
    fn parse_object_defaults_width() {
        let parsed = parse(r#"{"breakpoints": {"small_max": 12, "large_max": 30}}"#).unwrap();
        assert_eq!(parsed.width_px, 768);
    }

    #[test]
    fn parse_object_requires_caps() {
        assert!(parse(r#"{"breakpoints": {"small_max": 12}}"#).is_err());
        assert!(parse(r#"{"breakpoints": {"large_max": 12}}"#).is_err());
    }

    #[test]
    fn parse_object_ignores_unknown_fields() {
        let parsed =
            parse(r#"{"breakpoints": {"small_max": 15, "large_max": 50, "label": "x"}}"#).unwrap();
        assert_eq!(parsed, Breakpoints::WIDE);
    }

    #[test]
    fn serialize_preset_as_name() {
        let json = serde_json::to_string(&Wrapper {
            breakpoints: Breakpoints::WIDE,
        })
        .unwrap();
        assert_eq!(json, r#"{"breakpoints":"wide"}"#);
    }

    #[test]
    fn serialize_custom_as_object() {
        let original = Wrapper {
            breakpoints: Breakpoints::new(900, 12, 30),
        };
        let json = serde_json::to_string(&original).unwrap();
        assert!(json.contains(r#""width_px":900"#));
        let parsed: Wrapper = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }
}
