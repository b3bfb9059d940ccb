//! Grid settings

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// How the grid reacts to projection and configuration failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Surface the error to the caller
    Strict,
    /// Render a placeholder cell and log a warning
    Lenient,
}

impl Default for ErrorPolicy {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::Strict
        } else {
            Self::Lenient
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    pub default_page_size: usize,
    /// Choices offered by the page size selector
    pub available_page_sizes: Vec<usize>,
    /// Cell text used when a value cannot be rendered
    pub placeholder: String,
    pub error_policy: ErrorPolicy,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            available_page_sizes: vec![10, 25, 50, 100],
            placeholder: "-".to_string(),
            error_policy: ErrorPolicy::default(),
        }
    }
}

impl GridSettings {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self =
            serde_json::from_str(json).context("Failed to parse grid settings JSON")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from `path`, falling back to defaults when the file
    /// does not exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(?path, "grid settings file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read grid settings from {:?}", path))?;
        Self::from_json_str(&content).with_context(|| format!("Invalid grid settings in {:?}", path))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_page_size == 0 {
            return Err(ConfigError::InvalidSettings(
                "default_page_size must be greater than zero".to_string(),
            ));
        }
        if self.available_page_sizes.contains(&0) {
            return Err(ConfigError::InvalidSettings(
                "available_page_sizes must not contain zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.default_page_size = page_size;
        self
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let settings = GridSettings::default();

        assert_eq!(settings.default_page_size, 10);
        assert_eq!(settings.available_page_sizes, vec![10, 25, 50, 100]);
        assert_eq!(settings.placeholder, "-");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings =
            GridSettings::from_json_str(r#"{"default_page_size": 25, "error_policy": "lenient"}"#)
                .unwrap();

        assert_eq!(settings.default_page_size, 25);
        assert_eq!(settings.error_policy, ErrorPolicy::Lenient);
        assert_eq!(settings.placeholder, "-");
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let err = GridSettings::from_json_str(r#"{"default_page_size": 0}"#).unwrap_err();

        let config = err.downcast_ref::<ConfigError>().unwrap();
        assert!(matches!(config, ConfigError::InvalidSettings(_)));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();

        let settings = GridSettings::load(dir.path().join("grid.json")).unwrap();

        assert_eq!(settings, GridSettings::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"placeholder": "n/a", "available_page_sizes": [5, 10]}}"#).unwrap();

        let settings = GridSettings::load(file.path()).unwrap();

        assert_eq!(settings.placeholder, "n/a");
        assert_eq!(settings.available_page_sizes, vec![5, 10]);
    }

    #[test]
    fn test_load_malformed_file_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = GridSettings::load(file.path()).unwrap_err();

        assert!(format!("{err:#}").contains("Invalid grid settings"));
    }
}
