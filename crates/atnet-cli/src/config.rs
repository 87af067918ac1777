//! Configuration file management.
//!
//! Values given on the command line (or through their environment variables)
//! always win over the config file, which in turn wins over built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use atnet_core::client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use atnet_core::{ClientOptions, Credentials};
use serde::{Deserialize, Serialize};

use crate::cli::{CredentialArgs, OutputFormat};

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Client ID of the Netatmo app registration
    #[serde(default)]
    pub client_id: Option<String>,

    /// Client secret of the Netatmo app registration
    #[serde(default)]
    pub client_secret: Option<String>,

    /// Netatmo login name
    #[serde(default)]
    pub username: Option<String>,

    /// Default station filter
    #[serde(default)]
    pub station: Option<String>,

    /// API base URL
    #[serde(default)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[serde(default)]
    pub timeout: Option<u64>,

    /// Output format used when no subcommand is given
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

impl Config {
    /// Get the config file path
    pub fn path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("atnet")
            .join("config.toml")
    }

    /// Load config from the default path, or return default if not found
    pub fn load() -> Self {
        Self::load_from(&Self::path())
    }

    /// Load config from `path`; a missing or broken file yields the default.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(path = %path.display(), "Failed to parse config: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), "Failed to read config: {}", e);
                Self::default()
            }
        }
    }

    /// Save config to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path())
    }

    /// Save config to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }
}

fn pick(arg: Option<&String>, config: Option<&String>) -> String {
    arg.or(config).cloned().unwrap_or_default()
}

/// Resolve credentials from args/env, then config.
///
/// The password is never read from the config file.
pub fn resolve_credentials(args: &CredentialArgs, config: &Config) -> Credentials {
    Credentials {
        client_id: pick(args.client_id.as_ref(), config.client_id.as_ref()),
        client_secret: pick(args.client_secret.as_ref(), config.client_secret.as_ref()),
        username: pick(args.user.as_ref(), config.username.as_ref()),
        password: args.password.clone().unwrap_or_default(),
    }
}

/// Resolve connection options: args/env, then config, then defaults.
pub fn resolve_client_options(args: &CredentialArgs, config: &Config) -> ClientOptions {
    ClientOptions {
        base_url: args
            .base_url
            .clone()
            .or_else(|| config.base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        timeout: args
            .timeout
            .or(config.timeout)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT),
    }
}

/// Resolve the station filter; empty means no filtering.
pub fn resolve_station(args: &CredentialArgs, config: &Config) -> String {
    pick(args.station.as_ref(), config.station.as_ref())
}

/// Resolve the output format: subcommand, then config, then `list`.
pub fn resolve_format(command: Option<OutputFormat>, config: &Config) -> OutputFormat {
    command.or(config.format).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> CredentialArgs {
        CredentialArgs::default()
    }

    fn config() -> Config {
        Config {
            client_id: Some("config-id".to_string()),
            client_secret: Some("config-secret".to_string()),
            username: Some("config-user".to_string()),
            station: Some("Cabin".to_string()),
            base_url: Some("http://localhost:9000".to_string()),
            timeout: Some(30),
            format: Some(OutputFormat::Pretty),
        }
    }

    #[test]
    fn test_resolve_credentials_prefers_args() {
        let args = CredentialArgs {
            user: Some("arg-user".to_string()),
            password: Some("secret".to_string()),
            client_id: Some("arg-id".to_string()),
            ..args()
        };
        let creds = resolve_credentials(&args, &config());
        assert_eq!(creds.username, "arg-user");
        assert_eq!(creds.password, "secret");
        assert_eq!(creds.client_id, "arg-id");
        assert_eq!(creds.client_secret, "config-secret");
    }

    #[test]
    fn test_resolve_credentials_empty_when_unset() {
        let creds = resolve_credentials(&args(), &Config::default());
        assert!(creds.username.is_empty());
        assert!(creds.password.is_empty());
        assert!(creds.validate().is_err());
    }

    #[test]
    fn test_resolve_client_options_defaults() {
        let options = resolve_client_options(&args(), &Config::default());
        assert_eq!(options.base_url, DEFAULT_BASE_URL);
        assert_eq!(options.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_resolve_client_options_from_config() {
        let options = resolve_client_options(&args(), &config());
        assert_eq!(options.base_url, "http://localhost:9000");
        assert_eq!(options.timeout, Duration::from_secs(30));

        let args = CredentialArgs {
            timeout: Some(5),
            ..args()
        };
        assert_eq!(
            resolve_client_options(&args, &config()).timeout,
            Duration::from_secs(5)
        );
    }

    #[test]
    fn test_resolve_station() {
        assert_eq!(resolve_station(&args(), &Config::default()), "");
        assert_eq!(resolve_station(&args(), &config()), "Cabin");

        let args = CredentialArgs {
            station: Some("Home".to_string()),
            ..args()
        };
        assert_eq!(resolve_station(&args, &config()), "Home");
    }

    #[test]
    fn test_resolve_format() {
        assert_eq!(resolve_format(None, &Config::default()), OutputFormat::List);
        assert_eq!(resolve_format(None, &config()), OutputFormat::Pretty);
        assert_eq!(
            resolve_format(Some(OutputFormat::Influx), &config()),
            OutputFormat::Influx
        );
    }

    #[test]
    fn test_config_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        config().save_to(&path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("format = \"pretty\""));

        assert_eq!(Config::load_from(&path), config());
    }

    #[test]
    fn test_config_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_load_invalid_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "station = [not valid").unwrap();
        assert_eq!(Config::load_from(&path), Config::default());
    }
}
