//! Load — config loading from file and environment variables.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

use super::model::SidecarConfig;

const DEFAULT_CONFIG_PATH: &str = "/etc/sidecar/sidecar.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl SidecarConfig {
    /// Path the configuration is read from. `SIDECAR_CONFIG_FILE` overrides
    /// the default location.
    pub fn config_path() -> String {
        std::env::var("SIDECAR_CONFIG_FILE").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
    }

    /// Load configuration from file or environment variables
    /// Priority: Environment Variables > Config File > Defaults
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();

        let mut config = if Path::new(&config_path).exists() {
            tracing::info!("Loading configuration from: {}", config_path);
            Self::from_file(&config_path)?
        } else {
            tracing::info!("Config file not found at {}, using environment variables", config_path);
            Self::from_env()
        };

        // Environment variables override file config for critical settings
        if let Ok(node) = std::env::var("SIDECAR_NODE_NAME") {
            config.node_name = node;
        }
        if let Ok(interval) = std::env::var("SIDECAR_UPDATE_INTERVAL") {
            if let Ok(interval) = interval.parse() {
                config.update_interval_secs = interval;
            }
        }

        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: SidecarConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from environment variables with sensible defaults.
    /// The backend list cannot come from the environment; it stays empty.
    pub fn from_env() -> Self {
        Self {
            node_name: std::env::var("SIDECAR_NODE_NAME").unwrap_or_default(),
            update_interval_secs: std::env::var("SIDECAR_UPDATE_INTERVAL")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            backends: Vec::new(),
        }
    }
}
