use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ClientConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    /// Base URL of the jobs service; `/jobs` is appended to it.
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// Default tracing filter when RUST_LOG is not set
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl ClientConfig {
    pub fn load() -> Result<(Self, PathBuf), ConfigError> {
        let config_path = get_config_path();
        let config = Self::load_from(&config_path)?;
        Ok((config, config_path))
    }

    /// Read `config_path`, writing a default file there first if it is missing.
    /// `JOBTRACK_SERVER__BASE_URL` style variables override the file.
    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        if !config_path.exists() {
            let body = toml::to_string_pretty(&ClientConfig::default()).map_err(|e| {
                ConfigError::Message(format!("Failed to render default config: {e}"))
            })?;
            let default_config = format!(
                "# jobtrack client configuration\n# Environment overrides: JOBTRACK_SERVER__BASE_URL, JOBTRACK_LOGGING__LEVEL\n\n{body}"
            );
            std::fs::write(config_path, default_config).map_err(|e| {
                ConfigError::Message(format!("Failed to write default config: {e}"))
            })?;
        }

        let builder = Config::builder()
            .add_source(File::from(config_path.to_path_buf()))
            .add_source(
                Environment::with_prefix("JOBTRACK")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        builder.try_deserialize()
    }
}

pub fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("jobtrack").join("client.toml")
    } else {
        PathBuf::from("client.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_default_config_on_first_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("client.toml");

        let config = ClientConfig::load_from(&path).unwrap();

        assert!(path.exists());
        assert_eq!(config.server.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.logging.level, "info");

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("[server]"));
        assert!(written.contains("base_url = \"http://localhost:8080\""));
    }

    #[test]
    fn test_reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("client.toml");
        std::fs::write(
            &path,
            "[server]\nbase_url = \"http://jobs.internal:9000\"\n\n[logging]\nlevel = \"debug\"\n",
        )
        .unwrap();

        let config = ClientConfig::load_from(&path).unwrap();

        assert_eq!(config.server.base_url, "http://jobs.internal:9000");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("client.toml");
        std::fs::write(&path, "[logging]\nlevel = \"warn\"\n").unwrap();

        let config = ClientConfig::load_from(&path).unwrap();

        assert_eq!(config.server.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.logging.level, "warn");
    }
}
