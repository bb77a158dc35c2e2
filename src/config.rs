//! Editor configuration.
//!
//! Every field has a default (see [`crate::constants`]), so a partial JSON
//! document only needs to name the values it overrides.

use crate::constants::*;
use crate::editor::{ClearNotification, GraphOperation};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable parameters of the graph editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Hit radius in screen pixels
    pub hit_precision_px: f64,
    /// Drawn vertex radius in screen pixels
    pub vertex_radius_px: f32,
    /// Margin kept around the graph by fit-to-content, in pixels
    pub fit_margin_px: i32,
    /// Zoom multiplier for one wheel step away from the user
    pub zoom_in_step: f64,
    /// Zoom multiplier for one wheel step toward the user
    pub zoom_out_step: f64,
    /// Operations enabled when the editor starts
    pub enabled_operations: Vec<GraphOperation>,
    /// Which observer callback reports a dropped vertex selection
    pub clear_notification: ClearNotification,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            hit_precision_px: HIT_PRECISION_PX,
            vertex_radius_px: VERTEX_RADIUS_PX,
            fit_margin_px: FIT_MARGIN_PX,
            zoom_in_step: ZOOM_IN_STEP,
            zoom_out_step: ZOOM_OUT_STEP,
            enabled_operations: GraphOperation::ALL.to_vec(),
            clear_notification: ClearNotification::default(),
        }
    }
}

impl EditorConfig {
    /// Serializes the configuration to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parses and validates a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Checks that every numeric field is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.hit_precision_px.is_finite() && self.hit_precision_px >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "hit_precision_px",
                reason: format!("must be a non-negative number, got {}", self.hit_precision_px),
            });
        }
        if !(self.vertex_radius_px.is_finite() && self.vertex_radius_px > 0.0) {
            return Err(ConfigError::Invalid {
                field: "vertex_radius_px",
                reason: format!("must be positive, got {}", self.vertex_radius_px),
            });
        }
        if self.fit_margin_px < 0 {
            return Err(ConfigError::Invalid {
                field: "fit_margin_px",
                reason: format!("must not be negative, got {}", self.fit_margin_px),
            });
        }
        for (field, step) in [
            ("zoom_in_step", self.zoom_in_step),
            ("zoom_out_step", self.zoom_out_step),
        ] {
            if !(step.is_finite() && step > 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be a positive number, got {step}"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = EditorConfig::from_json(&json!({"hit_precision_px": 12.0}).to_string()).unwrap();
        assert_eq!(config.hit_precision_px, 12.0);
        assert_eq!(config.fit_margin_px, FIT_MARGIN_PX);
        assert_eq!(config.enabled_operations.len(), GraphOperation::ALL.len());
        assert_eq!(config.clear_notification, ClearNotification::Legacy);
    }

    #[test]
    fn test_operations_and_policy_parse() {
        let config = EditorConfig::from_json(
            &json!({
                "enabled_operations": ["SelectVertex", "MoveVertex"],
                "clear_notification": "PerKind"
            })
            .to_string(),
        )
        .unwrap();
        assert_eq!(
            config.enabled_operations,
            vec![GraphOperation::SelectVertex, GraphOperation::MoveVertex]
        );
        assert_eq!(config.clear_notification, ClearNotification::PerKind);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = EditorConfig::from_json(&json!({"zoom_in_step": 0.0}).to_string()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "zoom_in_step", .. }));

        let err = EditorConfig::from_json(&json!({"fit_margin_px": -1}).to_string()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "fit_margin_px", .. }));

        let err = EditorConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = EditorConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }

    #[test]
    fn test_json_round_trip_preserves_config() {
        let config = EditorConfig {
            fit_margin_px: 5,
            ..Default::default()
        };
        let back = EditorConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(back, config);
        assert_eq!(back.zoom_in_step.to_bits(), ZOOM_IN_STEP.to_bits());

        // Saving again after a reload must not drift
        let again = EditorConfig::from_json(&back.to_json().unwrap()).unwrap();
        assert_eq!(again, config);
    }
}
