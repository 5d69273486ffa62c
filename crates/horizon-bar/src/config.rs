//! Declarative bar configuration.
//!
//! [`BarConfig`] mirrors the bar's host-visible properties in a form that can
//! be read from TOML. Every field is optional in the document; missing fields
//! take the widget defaults.
//!
//! ```
//! use horizon_bar::BarConfig;
//!
//! let config = BarConfig::from_toml_str(r#"
//! value = 40.0
//! orientation = "lr"
//! animation = "out_quad"
//! animation_duration = 0.25
//! "#).unwrap();
//!
//! assert_eq!(config.value, 40.0);
//! assert!(config.animated);
//! ```
//!
//! Names are kept as strings here and validated when a bar is built with
//! [`Bar::from_config`](crate::Bar::from_config).

use std::path::Path;

use horizon_bar_core::logging::targets;
use horizon_bar_core::{BarError, Result};
use serde::{Deserialize, Serialize};

/// Serializable bar properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarConfig {
    /// Target value, 0-100. Out-of-range values are clamped when applied.
    pub value: f32,
    /// Fill direction: `lr`, `rl`, `bt` or `tb` (or the long snake-case names).
    pub orientation: String,
    /// Fill color as straight RGBA.
    pub color: [f32; 4],
    /// Background color as straight RGBA.
    pub background_color: [f32; 4],
    /// Whether value changes are animated.
    pub animated: bool,
    /// Easing curve name, e.g. `linear` or `in_out_cubic`.
    pub animation: String,
    /// Transition duration in seconds.
    pub animation_duration: f32,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            value: 0.0,
            orientation: "bt".to_string(),
            color: [1.0, 1.0, 1.0, 1.0],
            background_color: [0.0, 0.0, 0.0, 1.0],
            animated: true,
            animation: "linear".to_string(),
            animation_duration: 0.5,
        }
    }
}

impl BarConfig {
    /// Parse a configuration from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| {
            let err = BarError::config(e);
            tracing::warn!(target: targets::CONFIG, error = %err, "failed to parse bar config");
            err
        })
    }

    /// Read and parse a configuration file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| BarError::config(format!("{}: {e}", path.display())))?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "loading bar config");
        Self::from_toml_str(&source)
    }

    /// Serialize this configuration to a TOML document.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(BarError::config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_document() {
        let config = BarConfig::from_toml_str("").unwrap();
        assert_eq!(config, BarConfig::default());
        assert_eq!(config.orientation, "bt");
        assert_eq!(config.animation, "linear");
        assert!((config.animation_duration - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_partial_document() {
        let config = BarConfig::from_toml_str(
            r#"
            value = 75.0
            color = [0.2, 0.4, 0.6, 1.0]
            animated = false
            "#,
        )
        .unwrap();

        assert_eq!(config.value, 75.0);
        assert_eq!(config.color, [0.2, 0.4, 0.6, 1.0]);
        assert!(!config.animated);
        assert_eq!(config.background_color, [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_parse_error_is_config_error() {
        let err = BarConfig::from_toml_str("value = \"lots\"").unwrap_err();
        assert!(matches!(err, BarError::Config(_)));

        let err = BarConfig::from_toml_str("value = ").unwrap_err();
        assert!(matches!(err, BarError::Config(_)));
    }

    #[test]
    fn test_names_are_not_validated_here() {
        let config = BarConfig::from_toml_str("orientation = \"sideways\"").unwrap();
        assert_eq!(config.orientation, "sideways");
    }

    #[test]
    fn test_serialize_and_reload() {
        let config = BarConfig {
            value: 30.0,
            orientation: "rl".into(),
            animation: "in_out_sine".into(),
            ..BarConfig::default()
        };
        let text = config.to_toml_string().unwrap();
        assert!(text.contains("orientation = \"rl\""));
        assert_eq!(BarConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_missing_file() {
        let err = BarConfig::from_toml_file("/nonexistent/horizon-bar.toml").unwrap_err();
        assert!(matches!(err, BarError::Config(_)));
    }
}
