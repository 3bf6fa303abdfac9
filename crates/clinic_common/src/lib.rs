//! Shared types for the federated clinic mesh.
//!
//! Used by both the clinic daemon (`clinicd`) and the orchestrator CLI
//! (`clinicctl`): the JSON-RPC envelope, the slot model, the closed tool
//! surface, and the tool error taxonomy.

pub mod error;
pub mod fsio;
pub mod rpc;
pub mod slot;
pub mod tools;

pub use error::ToolError;
pub use rpc::{McpRequest, McpResponse, RpcError};
pub use slot::Slot;
