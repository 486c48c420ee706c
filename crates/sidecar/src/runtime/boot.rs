//! Boot — logging init, config load, state creation.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::conf::{ConfigError, SidecarConfig};
use crate::state::SidecarState;

/// Initialise the tracing / logging subsystem.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sidecar=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Load and validate the user configuration, and build the state
/// that reconciliation cycles borrow.
pub fn boot() -> Result<SidecarState, ConfigError> {
    info!("Starting Sidecar v0.0.1");

    let config_file = SidecarConfig::config_path();
    let config = SidecarConfig::load()?;
    config.validate().map_err(ConfigError::Invalid)?;

    info!(
        "Loaded configuration: node_name={}, backends={}",
        config.node_name,
        config.backends.len()
    );

    Ok(SidecarState::new(config_file, config))
}
