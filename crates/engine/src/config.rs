//! Engine configuration.
//!
//! Every tunable of the scoring model in one serde-friendly struct. The
//! defaults are the published constants; a JSON file may override any
//! subset of them.

use crate::error::{EngineError, Result};
use pipeline::rules::short_window::DEFAULT_SHORT_WINDOW_HOURS;
use pipeline::rules::sleep_dominates::DEFAULT_MIN_DOMINANT_SLEEP_HOURS;
use scenarios::max_sleep::DEFAULT_ROUTINE_BUFFER_HOURS;
use scenarios::strategic_split::{DEFAULT_MAX_STUDY_HOURS, DEFAULT_MIN_SLEEP_HOURS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tunables for the recommendation engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Hours reserved for winding down and waking up (default: 1.0)
    pub routine_buffer_hours: f64,

    /// Sleep the split plan always protects (default: 6.0)
    pub min_sleep_hours: f64,

    /// Cap on productive study hours (default: 3.0)
    pub max_study_hours: f64,

    /// Below this many available hours, always sleep (default: 5.0)
    pub short_window_hours: f64,

    /// Max Sleep must reach this much sleep to win on score (default: 6.0)
    pub dominant_sleep_hours: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            routine_buffer_hours: DEFAULT_ROUTINE_BUFFER_HOURS,
            min_sleep_hours: DEFAULT_MIN_SLEEP_HOURS,
            max_study_hours: DEFAULT_MAX_STUDY_HOURS,
            short_window_hours: DEFAULT_SHORT_WINDOW_HOURS,
            dominant_sleep_hours: DEFAULT_MIN_DOMINANT_SLEEP_HOURS,
        }
    }
}

impl EngineConfig {
    /// Parse a configuration from JSON; missing keys keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| EngineError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Every value must be finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("routine_buffer_hours", self.routine_buffer_hours),
            ("min_sleep_hours", self.min_sleep_hours),
            ("max_study_hours", self.max_study_hours),
            ("short_window_hours", self.short_window_hours),
            ("dominant_sleep_hours", self.dominant_sleep_hours),
        ];

        for (key, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(EngineError::InvalidConfig {
                    key,
                    message: format!("expected a non-negative number of hours, got {}", value),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_published_constants() {
        let config = EngineConfig::default();
        assert_eq!(config.routine_buffer_hours, 1.0);
        assert_eq!(config.min_sleep_hours, 6.0);
        assert_eq!(config.max_study_hours, 3.0);
        assert_eq!(config.short_window_hours, 5.0);
        assert_eq!(config.dominant_sleep_hours, 6.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = EngineConfig::from_json_str(r#"{ "max_study_hours": 2.0 }"#).unwrap();
        assert_eq!(config.max_study_hours, 2.0);
        assert_eq!(config.min_sleep_hours, 6.0);
    }

    #[test]
    fn test_rejects_negative_values() {
        let err = EngineConfig::from_json_str(r#"{ "routine_buffer_hours": -1.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidConfig {
                key: "routine_buffer_hours",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = EngineConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, EngineError::ConfigParse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = EngineConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, EngineError::ConfigRead { .. }));
    }
}
