//! Pipeline settings.

use std::path::Path;

use hotel_transform::DEFAULT_CITY;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Stage prefixes and the city constant.
///
/// Immutable once built; the `with_*` methods return a new value. Missing
/// fields in a settings file take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    raw_prefix: String,
    processed_prefix: String,
    rejected_prefix: String,
    city: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            raw_prefix: "raw/".to_string(),
            processed_prefix: "processed/".to_string(),
            rejected_prefix: "rejected/".to_string(),
            city: DEFAULT_CITY.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| CoreError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&text).map_err(|e| CoreError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Prefix of staged CSV objects.
    pub fn raw_prefix(&self) -> &str {
        &self.raw_prefix
    }

    /// Prefix of valid-row payloads.
    pub fn processed_prefix(&self) -> &str {
        &self.processed_prefix
    }

    /// Prefix of invalid-row payloads.
    pub fn rejected_prefix(&self) -> &str {
        &self.rejected_prefix
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn with_raw_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.raw_prefix = prefix.into();
        self
    }

    pub fn with_processed_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.processed_prefix = prefix.into();
        self
    }

    pub fn with_rejected_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.rejected_prefix = prefix.into();
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.raw_prefix(), "raw/");
        assert_eq!(settings.processed_prefix(), "processed/");
        assert_eq!(settings.rejected_prefix(), "rejected/");
        assert_eq!(settings.city(), "Buenos Aires");
    }

    #[test]
    fn test_builders() {
        let settings = Settings::default()
            .with_city("Rosario")
            .with_rejected_prefix("quarantine/");
        assert_eq!(settings.city(), "Rosario");
        assert_eq!(settings.rejected_prefix(), "quarantine/");
        assert_eq!(settings.raw_prefix(), "raw/");
    }

    #[test]
    fn test_partial_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"city": "Mendoza", "processed_prefix": "curated/"}}"#).unwrap();

        let settings = Settings::from_json_file(file.path()).unwrap();
        assert_eq!(settings.city(), "Mendoza");
        assert_eq!(settings.processed_prefix(), "curated/");
        assert_eq!(settings.raw_prefix(), "raw/");
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"bucket": "x"}}"#).unwrap();

        let err = Settings::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, CoreError::Config { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::from_json_file(Path::new("/nonexistent/settings.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/settings.json"));
    }
}
