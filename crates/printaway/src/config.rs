//! Client configuration.
//!
//! Configuration is a small JSON file under the platform config directory,
//! with the backend URL overridable through `PRINTAWAY_API_URL`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5024";

/// Default connect timeout for backend requests (seconds).
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default request timeout for backend requests (seconds).
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientConfig {
    /// Base URL of the print-shop REST backend.
    pub api_base_url: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Loads configuration from the default location, falling back to
    /// defaults when no config file exists. The `PRINTAWAY_API_URL`
    /// environment variable overrides the configured base URL.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        let mut config = match default_config_path() {
            Some(path) if path.exists() => load_config(&path)?,
            _ => Self::default(),
        };

        if let Ok(url) = std::env::var("PRINTAWAY_API_URL") {
            if !url.trim().is_empty() {
                config.api_base_url = url;
            }
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://")
        {
            return Err(ConfigError::Validation {
                message: format!("apiBaseUrl must be an http(s) URL: '{}'", self.api_base_url),
            });
        }
        if self.connect_timeout_secs == 0 || self.request_timeout_secs == 0 {
            return Err(ConfigError::Validation {
                message: "Timeouts must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

/// Platform config file location, e.g. `~/.config/printaway/config.json`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("printaway").join("config.json"))
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ClientConfig, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    load_config_from_str(&content)
}

pub fn load_config_from_str(content: &str) -> Result<ClientConfig, ConfigError> {
    let config: ClientConfig = serde_json::from_str(content)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_valid_config() {
        let config_json = r#"
        {
            "apiBaseUrl": "https://print.example.com",
            "connectTimeoutSecs": 5,
            "requestTimeoutSecs": 20
        }
        "#;

        let config = load_config_from_str(config_json).unwrap();
        assert_eq!(config.api_base_url, "https://print.example.com");
        assert_eq!(config.connect_timeout_secs, 5);
        assert_eq!(config.request_timeout_secs, 20);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = load_config_from_str(r#"{"apiBaseUrl": "http://10.0.0.2:5024"}"#).unwrap();
        assert_eq!(config.api_base_url, "http://10.0.0.2:5024");
        assert_eq!(config.connect_timeout_secs, DEFAULT_CONNECT_TIMEOUT_SECS);
        assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn test_non_http_url_rejected() {
        let result = load_config_from_str(r#"{"apiBaseUrl": "ftp://print.example.com"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = load_config_from_str(
            r#"{"apiBaseUrl": "http://localhost:5024", "requestTimeoutSecs": 0}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"apiBaseUrl": "http://localhost:9000"}}"#).unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:9000");
    }

    #[test]
    fn test_load_missing_file_errors() {
        let result = load_config("/nonexistent/printaway/config.json");
        assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
    }
}
