//! Tunable positioning constants.

use std::path::Path;

use flyout_api::EdgeInset;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Distance between the overlay and its trigger along the flip axis.
pub const GAP: f32 = 10.0;

/// Horizontal edge margin below [`WIDE_VIEWPORT_BREAKPOINT`].
pub const COMPACT_EDGE_MARGIN: f32 = 16.0;

/// Horizontal edge margin at or above [`WIDE_VIEWPORT_BREAKPOINT`].
pub const WIDE_EDGE_MARGIN: f32 = 24.0;

/// Viewport width at which the wide edge margin applies.
pub const WIDE_VIEWPORT_BREAKPOINT: f32 = 768.0;

/// Responsive horizontal margin kept between the overlay and the band edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeMargin {
    pub compact: f32,
    pub wide: f32,
    pub wide_breakpoint: f32,
}

impl Default for EdgeMargin {
    fn default() -> Self {
        Self {
            compact: COMPACT_EDGE_MARGIN,
            wide: WIDE_EDGE_MARGIN,
            wide_breakpoint: WIDE_VIEWPORT_BREAKPOINT,
        }
    }
}

impl EdgeMargin {
    /// Margin for a viewport of the given width.
    #[inline]
    pub fn for_viewport(&self, viewport_width: f32) -> f32 {
        if viewport_width >= self.wide_breakpoint {
            self.wide
        } else {
            self.compact
        }
    }
}

/// Configuration for the positioning pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionConfig {
    /// Gap between trigger and overlay.
    pub gap: f32,

    /// Horizontal edge margin.
    pub edge_margin: EdgeMargin,

    /// Vertical inset used by the controller.
    pub inset: EdgeInset,
}

impl Default for PositionConfig {
    fn default() -> Self {
        Self {
            gap: GAP,
            edge_margin: EdgeMargin::default(),
            inset: EdgeInset::ZERO,
        }
    }
}

impl PositionConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    pub fn with_inset(mut self, inset: EdgeInset) -> Self {
        self.inset = inset;
        self
    }

    /// Reject values that would make placement meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("gap", self.gap),
            ("edge_margin.compact", self.edge_margin.compact),
            ("edge_margin.wide", self.edge_margin.wide),
            ("edge_margin.wide_breakpoint", self.edge_margin.wide_breakpoint),
            ("inset.top", self.inset.top),
            ("inset.bottom", self.inset.bottom),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!("{name} must be finite")));
            }
        }
        for (name, value) in &fields[..3] {
            if *value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margin_switches_at_breakpoint() {
        let m = EdgeMargin::default();
        assert_eq!(m.for_viewport(500.0), 16.0);
        assert_eq!(m.for_viewport(767.0), 16.0);
        assert_eq!(m.for_viewport(768.0), 24.0);
        assert_eq!(m.for_viewport(1000.0), 24.0);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = PositionConfig::from_json_str(r#"{"gap": 4, "edge_margin": {"wide": 32}}"#)
            .unwrap();
        assert_eq!(config.gap, 4.0);
        assert_eq!(config.edge_margin.wide, 32.0);
        assert_eq!(config.edge_margin.compact, COMPACT_EDGE_MARGIN);
        assert_eq!(config.inset, EdgeInset::ZERO);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(
            PositionConfig::from_json_str("{}").unwrap(),
            PositionConfig::default()
        );
    }

    #[test]
    fn negative_gap_rejected() {
        let err = PositionConfig::from_json_str(r#"{"gap": -1}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn negative_inset_allowed() {
        let config =
            PositionConfig::from_json_str(r#"{"inset": {"top": -5, "bottom": 8}}"#).unwrap();
        assert_eq!(config.inset, EdgeInset::new(-5.0, 8.0));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = PositionConfig::from_json_str("{gap: 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("popover.json");
        std::fs::write(&path, r#"{"inset": {"top": 64}}"#).unwrap();

        let config = PositionConfig::load(&path).unwrap();
        assert_eq!(config.inset.top, 64.0);
        assert_eq!(config.inset.bottom, 0.0);

        let missing = PositionConfig::load(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io(_)));
    }
}
