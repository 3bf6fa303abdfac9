//! Error taxonomy for tool handlers.

use crate::rpc::{CODE_INVALID_PARAMS, CODE_NOT_FOUND, CODE_STORAGE};

/// Failures a tool handler can raise. The silo endpoint translates these
/// into the RPC envelope's error object; they never cross the process
/// boundary as transport-level faults. None of them is retried.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// Missing or empty required argument. Reported verbatim to the caller.
    #[error("{0}")]
    Validation(String),

    /// No slot in the required state matches the given coordinates.
    /// Guarantees zero mutation of the store.
    #[error("{0}")]
    NotFound(String),

    /// Backing file unreadable or corrupt. Not recoverable by a single
    /// request.
    #[error("storage failure: {0}")]
    Storage(String),
}

impl ToolError {
    /// JSON-RPC error code used when this failure crosses the wire.
    pub fn code(&self) -> i64 {
        match self {
            ToolError::Validation(_) => CODE_INVALID_PARAMS,
            ToolError::NotFound(_) => CODE_NOT_FOUND,
            ToolError::Storage(_) => CODE_STORAGE,
        }
    }
}
