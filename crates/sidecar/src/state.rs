//! Sidecar state — resolved user configuration shared across reconciliation cycles.

use crate::conf::SidecarConfig;

/// Ambient execution context. Owned by the orchestrator; each backend
/// configuration snapshot borrows it for the duration of one cycle.
#[derive(Debug)]
pub struct SidecarState {
    /// Path the user configuration was loaded from.
    pub config_file: String,
    pub user_config: SidecarConfig,
}

impl SidecarState {
    pub fn new(config_file: String, user_config: SidecarConfig) -> Self {
        Self {
            config_file,
            user_config,
        }
    }
}
