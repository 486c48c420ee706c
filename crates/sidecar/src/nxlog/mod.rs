//! Nxlog module — configuration model for the nxlog backend.

pub mod model;
pub mod configuration;

pub use configuration::{Configuration, BACKEND_NAME};
pub use model::{CannedKind, Entry, Properties};
