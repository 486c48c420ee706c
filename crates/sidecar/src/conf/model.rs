//! Model — SidecarConfig and the per-backend entries.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SidecarConfig {
    pub node_name: String,
    pub update_interval_secs: u64,
    pub backends: Vec<BackendConfig>,
}

/// One managed log-processing daemon.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub name: String,
    pub enabled: bool,
    pub binary_path: PathBuf,
    pub configuration_path: PathBuf,
}

impl Default for SidecarConfig {
    fn default() -> Self {
        Self {
            node_name: String::new(),
            update_interval_secs: 10,
            backends: Vec::new(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            enabled: true,
            binary_path: PathBuf::new(),
            configuration_path: PathBuf::new(),
        }
    }
}

impl SidecarConfig {
    /// Position of the backend with the given name, or `None` if it is not
    /// configured. First match wins.
    pub fn backend_index(&self, name: &str) -> Option<usize> {
        self.backends.iter().position(|backend| backend.name == name)
    }

    /// Validate configuration values (no I/O).
    pub fn validate(&self) -> Result<(), String> {
        if self.update_interval_secs == 0 {
            return Err("update_interval_secs must be > 0".to_string());
        }
        for backend in &self.backends {
            if backend.name.is_empty() {
                return Err("backend name must not be empty".to_string());
            }
            if backend.binary_path.as_os_str().is_empty() {
                return Err(format!(
                    "backend {} has no binary_path configured",
                    backend.name
                ));
            }
        }
        for (index, backend) in self.backends.iter().enumerate() {
            if self.backends[..index].iter().any(|b| b.name == backend.name) {
                return Err(format!("duplicate backend name: {}", backend.name));
            }
        }
        Ok(())
    }
}
