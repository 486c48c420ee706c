//! Runtime module — boot sequence.

pub mod boot;
