use sidecar::nxlog::{self, Configuration};
use sidecar::runtime::boot;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    boot::init_logging();
    let state = boot::boot()?;

    // Dry-run assembly: report what a reconciliation cycle would build.
    let config = Configuration::new(&state);
    match config.backend {
        Some(backend) => tracing::info!(
            backend = nxlog::BACKEND_NAME,
            binary = %backend.binary_path.display(),
            definitions = config.definitions.len(),
            extensions = config.extensions.len(),
            "assembled backend configuration"
        ),
        None => tracing::info!(
            backend = nxlog::BACKEND_NAME,
            "backend not configured; nothing to assemble"
        ),
    }

    Ok(())
}
