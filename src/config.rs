//! Engine configuration.
//!
//! The original app kept these values in a process-wide settings store;
//! here they are an explicit value injected at the boundary, loaded from
//! a TOML document. Every field has a default so an empty document is a
//! valid configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};
use crate::services::palette::SubjectColor;

/// Boundary configuration for the schedule engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Repetitions applied when an ingested document omits the field.
    /// 5 repetitions of the two-week cycle is a 10-week term.
    #[serde(default = "default_repetitions")]
    pub default_repetitions: usize,
    /// Fallback color for subject names no palette alias matches.
    #[serde(default = "default_accent")]
    pub accent_color: SubjectColor,
}

fn default_repetitions() -> usize {
    5
}

fn default_accent() -> SubjectColor {
    SubjectColor::Accent
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_repetitions: default_repetitions(),
            accent_color: default_accent(),
        }
    }
}

impl EngineConfig {
    /// Parse a configuration from a TOML string.
    pub fn from_toml_str(toml_str: &str) -> ScheduleResult<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load a configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ScheduleResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ScheduleError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::EngineConfig;
    use crate::services::palette::SubjectColor;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.default_repetitions, 5);
        assert_eq!(config.accent_color, SubjectColor::Accent);
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let config = EngineConfig::from_toml_str("default_repetitions = 8").unwrap();
        assert_eq!(config.default_repetitions, 8);
        assert_eq!(config.accent_color, SubjectColor::Accent);
    }

    #[test]
    fn test_accent_override() {
        let config = EngineConfig::from_toml_str(r#"accent_color = "indigo""#).unwrap();
        assert_eq!(config.accent_color, SubjectColor::Indigo);
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        assert!(EngineConfig::from_toml_str("default_repetitions = ").is_err());
        assert!(EngineConfig::from_toml_str(r#"accent_color = "chartreuse""#).is_err());
    }

    #[test]
    fn test_missing_file_is_rejected() {
        let result = EngineConfig::from_file("/nonexistent/engine.toml");
        assert!(result.is_err());
    }
}
