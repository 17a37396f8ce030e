//! Configuration handling for the TUI

use crate::state::{ContactPreference, FormDefaults};
use crate::store::{DEFAULT_ADDRESS, DEFAULT_TIMEOUT};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding the store address
pub const STORE_ADDRESS_ENV: &str = "EMPLOYEE_STORE_ADDRESS";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TuiConfig {
    /// Base address of the employee store
    pub store_address: Option<String>,
    /// Per-request timeout in seconds
    pub request_timeout_secs: Option<u64>,
    /// Contact preference preselected on new employees
    pub default_contact_preference: Option<ContactPreference>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("dev", "employee-tui", "employee-tui")
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Get the log file path
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().join("employee-tui.log"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// Store address by precedence: flag, environment, config file, default
    pub fn resolve_store_address(&self, flag: Option<&str>, env: Option<String>) -> String {
        flag.map(str::to_string)
            .or(env.filter(|v| !v.is_empty()))
            .or_else(|| self.store_address.clone())
            .unwrap_or_else(|| DEFAULT_ADDRESS.to_string())
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT)
    }

    /// Starting values for the create flow
    pub fn form_defaults(&self) -> FormDefaults {
        FormDefaults {
            contact_preference: self.default_contact_preference.unwrap_or_default(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.store_address.is_none());
        assert!(config.request_timeout_secs.is_none());
        assert!(config.default_contact_preference.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            store_address: Some("http://store:3000".to_string()),
            request_timeout_secs: Some(3),
            default_contact_preference: Some(ContactPreference::Phone),
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"phone\""));
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, TuiConfig::default());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"store_address": "http://x", "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.store_address.as_deref(), Some("http://x"));
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let path = std::env::temp_dir().join("employee-tui-does-not-exist.json");
        assert_eq!(TuiConfig::load_from(&path).unwrap(), TuiConfig::default());
    }

    #[test]
    fn test_load_written_file() {
        let dir = std::env::temp_dir().join(format!("employee-tui-test-{}", std::process::id()));
        let path = dir.join("config.json");
        let config = TuiConfig {
            request_timeout_secs: Some(30),
            ..Default::default()
        };

        fs::create_dir_all(&dir).unwrap();
        fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
        assert_eq!(TuiConfig::load_from(&path).unwrap(), config);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let dir = std::env::temp_dir().join(format!("employee-tui-bad-{}", std::process::id()));
        let path = dir.join("config.json");
        fs::create_dir_all(&dir).unwrap();
        fs::write(&path, "{not json").unwrap();

        assert!(TuiConfig::load_from(&path).is_err());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_store_address_precedence() {
        let config = TuiConfig {
            store_address: Some("http://file".to_string()),
            ..Default::default()
        };

        assert_eq!(
            config.resolve_store_address(Some("http://flag"), Some("http://env".to_string())),
            "http://flag"
        );
        assert_eq!(
            config.resolve_store_address(None, Some("http://env".to_string())),
            "http://env"
        );
        assert_eq!(config.resolve_store_address(None, Some(String::new())), "http://file");
        assert_eq!(config.resolve_store_address(None, None), "http://file");
        assert_eq!(
            TuiConfig::default().resolve_store_address(None, None),
            DEFAULT_ADDRESS
        );
    }

    #[test]
    fn test_request_timeout() {
        assert_eq!(TuiConfig::default().request_timeout(), DEFAULT_TIMEOUT);
        let config = TuiConfig {
            request_timeout_secs: Some(2),
            ..Default::default()
        };
        assert_eq!(config.request_timeout(), Duration::from_secs(2));
    }

    #[test]
    fn test_form_defaults_use_configured_preference() {
        let config = TuiConfig {
            default_contact_preference: Some(ContactPreference::Phone),
            ..Default::default()
        };
        assert_eq!(
            config.form_defaults().contact_preference,
            ContactPreference::Phone
        );
    }
}
