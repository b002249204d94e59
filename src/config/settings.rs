//! User settings for the expense tracker
//!
//! Settings live in `config.json` next to the database. The file is
//! optional; missing fields fall back to their defaults.

use std::fmt::Write;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for the settings file
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Date format used when printing expenses (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Ask before `delete_all` wipes the store
    #[serde(default)]
    pub confirm_delete_all: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_date_format() -> String {
    "%d-%m-%Y".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            date_format: default_date_format(),
            confirm_delete_all: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| ExpenseError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)?;

        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings that would fail at print time
    ///
    /// `date_format` must render a plain calendar date, so time-of-day
    /// specifiers are refused along with malformed ones.
    pub fn validate(&self) -> Result<(), ExpenseError> {
        let mut rendered = String::new();
        if write!(rendered, "{}", NaiveDate::MIN.format(&self.date_format)).is_err() {
            return Err(ExpenseError::Config(format!(
                "Invalid date_format '{}'",
                self.date_format
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.date_format, "%d-%m-%Y");
        assert!(!settings.confirm_delete_all);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.schema_version, 1);
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_load_written_settings() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.confirm_delete_all = true;
        settings.date_format = "%Y/%m/%d".into();
        std::fs::write(
            paths.settings_file(),
            serde_json::to_string_pretty(&settings).unwrap(),
        )
        .unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(loaded.confirm_delete_all);
        assert_eq!(loaded.date_format, "%Y/%m/%d");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"confirm_delete_all": true}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(loaded.confirm_delete_all);
        assert_eq!(loaded.date_format, "%d-%m-%Y");
    }

    #[test]
    fn test_invalid_date_format_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"date_format": "%Q-%m"}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ExpenseError::Config(_)));
    }

    #[test]
    fn test_time_of_day_format_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"date_format": "%d-%m-%Y %H:%M"}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ExpenseError::Config(_)));
        assert!(err.to_string().contains("%H:%M"));
    }

    #[test]
    fn test_date_only_formats_accepted() {
        for format in ["%d-%m-%Y", "%Y/%m/%d", "%e %B %Y", "%a %d %b"] {
            let settings = Settings {
                date_format: format.into(),
                ..Settings::default()
            };
            assert!(settings.validate().is_ok(), "rejected {}", format);
        }
    }

    #[test]
    fn test_malformed_file_is_json_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ExpenseError::Json(_)));
    }
}
