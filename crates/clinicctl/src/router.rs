//! Federated dispatch: route one instruction to the correct clinic endpoint
//! and normalize every failure mode into the JSON-RPC error shape.
//!
//! Each request targets a single clinic; no cross-clinic patient data ever
//! transits the router in one payload.

use crate::registry::Registry;
use crate::transport::{Transport, TransportError};
use clinic_common::rpc::{self, McpRequest, McpResponse};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{info, warn};
use uuid::Uuid;

/// One unit of dispatchable work, produced by an external planner and
/// consumed exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instruction {
    /// Target clinic identifier.
    pub clinic: String,
    /// Tool name to invoke.
    pub action: String,
    #[serde(default)]
    pub arguments: Map<String, Value>,
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The remote reply broke the envelope contract (result and error both
    /// set, or both absent). Fails the dispatch loudly instead of passing
    /// through an empty result.
    #[error("malformed reply from '{clinic}': {reason}")]
    MalformedReply { clinic: String, reason: String },
}

pub struct Router<T: Transport> {
    registry: Registry,
    transport: T,
}

impl<T: Transport> Router<T> {
    pub fn new(registry: Registry, transport: T) -> Self {
        Self { registry, transport }
    }

    /// Dispatch a single instruction. Unknown targets and transport
    /// failures come back as error envelopes; only a malformed remote reply
    /// fails the dispatch itself.
    ///
    /// At-most-once delivery: nothing is retried. A booking whose timeout
    /// raced a remote success will observe "slot unavailable" on a manual
    /// retry instead of double-booking; the decision is left to the caller.
    pub async fn dispatch(&self, instruction: &Instruction) -> Result<McpResponse, DispatchError> {
        let Some(url) = self.registry.resolve(&instruction.clinic) else {
            warn!("clinic '{}' not in registry", instruction.clinic);
            return Ok(McpResponse::error(
                Uuid::new_v4().to_string(),
                rpc::CODE_METHOD_NOT_FOUND,
                format!("clinic '{}' not found in registry", instruction.clinic),
            ));
        };

        let request = McpRequest::tool_call(
            Uuid::new_v4().to_string(),
            &instruction.action,
            instruction.arguments.clone(),
        );
        info!("dispatching {} to {}", instruction.action, instruction.clinic);

        let response = match self.transport.post(url, &request).await {
            Ok(response) => response,
            // A reply that does not even parse as an envelope is a
            // caller-level fault, not a network one.
            Err(TransportError::Body(reason)) => {
                return Err(DispatchError::MalformedReply {
                    clinic: instruction.clinic.clone(),
                    reason,
                });
            }
            Err(e) => {
                warn!("transport failure for {}: {e}", instruction.clinic);
                return Ok(McpResponse::error(
                    request.id,
                    rpc::CODE_TRANSPORT,
                    format!("network error contacting {}: {e}", instruction.clinic),
                ));
            }
        };

        if let Err(reason) = response.check() {
            return Err(DispatchError::MalformedReply {
                clinic: instruction.clinic.clone(),
                reason: reason.to_string(),
            });
        }
        Ok(response)
    }
}
