//! JSON-RPC 2.0 envelope types for orchestrator <-> clinic communication.
//!
//! Every message is self-contained: clinic daemons never share raw patient
//! data with each other. The orchestrator forwards discrete requests to one
//! clinic at a time and only aggregates the returned results.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const JSONRPC_VERSION: &str = "2.0";

/// The single supported method for tool invocation.
pub const METHOD_TOOLS_CALL: &str = "tools/call";

/// Unsupported method, or target clinic absent from the registry.
pub const CODE_METHOD_NOT_FOUND: i64 = -32601;
/// Unknown tool, or invalid/missing tool arguments.
pub const CODE_INVALID_PARAMS: i64 = -32602;
/// Backing store unreadable or corrupt inside a clinic daemon.
pub const CODE_STORAGE: i64 = -32603;
/// Network failure between router and clinic.
pub const CODE_TRANSPORT: i64 = -32000;
/// No slot matching the requested coordinates and state.
pub const CODE_NOT_FOUND: i64 = -32001;

/// Parameters of a `tools/call` request: the tool name and its named
/// argument mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallParams {
    pub name: String,
    #[serde(default)]
    pub arguments: Map<String, Value>,
}

/// Request envelope sent by the orchestrator to invoke a tool on a remote
/// clinic daemon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpRequest {
    pub jsonrpc: String,
    /// Unique correlation identifier for this request.
    pub id: String,
    pub method: String,
    /// Method-specific parameters. For `tools/call` this deserializes into
    /// [`ToolCallParams`].
    #[serde(default)]
    pub params: Value,
}

impl McpRequest {
    /// Build a `tools/call` request.
    pub fn tool_call(id: impl Into<String>, tool: &str, arguments: Map<String, Value>) -> Self {
        let params = ToolCallParams {
            name: tool.to_string(),
            arguments,
        };
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: id.into(),
            method: METHOD_TOOLS_CALL.to_string(),
            params: serde_json::to_value(params).unwrap_or(Value::Null),
        }
    }
}

/// Error object carried in a response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

/// Violations of the exactly-one-of result/error contract.
#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    #[error("response carries both result and error")]
    BothPopulated,
    #[error("response carries neither result nor error")]
    NeitherPopulated,
}

/// Response envelope returned by a clinic daemon. Exactly one of `result`
/// or `error` is populated; both keys are always present on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpResponse {
    pub jsonrpc: String,
    /// Must match the id of the request.
    pub id: String,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<RpcError>,
}

impl McpResponse {
    /// Successful response carrying a result payload.
    pub fn result(id: impl Into<String>, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: id.into(),
            result: Some(result),
            error: None,
        }
    }

    /// Error response carrying a code and message.
    pub fn error(id: impl Into<String>, code: i64, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: id.into(),
            result: None,
            error: Some(RpcError {
                code,
                message: message.into(),
            }),
        }
    }

    /// Enforce the exactly-one-of contract. Used by the router to reject
    /// malformed remote replies instead of passing them through.
    pub fn check(&self) -> Result<(), EnvelopeError> {
        match (&self.result, &self.error) {
            (Some(_), Some(_)) => Err(EnvelopeError::BothPopulated),
            (None, None) => Err(EnvelopeError::NeitherPopulated),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tool_call_request_shape() {
        let mut arguments = Map::new();
        arguments.insert("doctor".to_string(), json!("Dr. Ricardo Lopes"));

        let request = McpRequest::tool_call("req-1", "list_available_slots", arguments);
        let wire = serde_json::to_value(&request).unwrap();

        assert_eq!(wire["jsonrpc"], "2.0");
        assert_eq!(wire["id"], "req-1");
        assert_eq!(wire["method"], "tools/call");
        assert_eq!(wire["params"]["name"], "list_available_slots");
        assert_eq!(wire["params"]["arguments"]["doctor"], "Dr. Ricardo Lopes");
    }

    #[test]
    fn response_wire_shape_has_both_keys() {
        let response = McpResponse::result("req-2", json!({"ok": true}));
        let wire = serde_json::to_string(&response).unwrap();

        // Both keys are always present, one of them null.
        assert!(wire.contains("\"result\""));
        assert!(wire.contains("\"error\":null"));
    }

    #[test]
    fn check_accepts_exactly_one_of_result_error() {
        assert!(McpResponse::result("a", json!(1)).check().is_ok());
        assert!(McpResponse::error("b", CODE_NOT_FOUND, "missing").check().is_ok());
    }

    #[test]
    fn check_rejects_both_and_neither() {
        let mut both = McpResponse::result("a", json!(1));
        both.error = Some(RpcError {
            code: CODE_TRANSPORT,
            message: "boom".to_string(),
        });
        assert!(matches!(both.check(), Err(EnvelopeError::BothPopulated)));

        let neither = McpResponse {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: "c".to_string(),
            result: None,
            error: None,
        };
        assert!(matches!(neither.check(), Err(EnvelopeError::NeitherPopulated)));
    }

    #[test]
    fn response_roundtrips_missing_fields_as_none() {
        let raw = r#"{"jsonrpc":"2.0","id":"x","result":{"ok":1}}"#;
        let response: McpResponse = serde_json::from_str(raw).unwrap();
        assert!(response.error.is_none());
        assert!(response.check().is_ok());
    }
}
