//! Clinic daemon library - exposes modules for testing.

pub mod config;
pub mod handlers;
pub mod routes;
pub mod seed;
pub mod server;
pub mod store;
