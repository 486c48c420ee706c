// Module structure for the Sidecar log-shipping agent.

// Core infrastructure
pub mod conf;
pub mod state;

// Domain modules
pub mod nxlog;
pub mod runtime;
