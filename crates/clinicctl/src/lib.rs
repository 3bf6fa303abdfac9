//! Orchestrator-side dispatch library - exposes modules for testing.

pub mod plan;
pub mod registry;
pub mod router;
pub mod transport;
