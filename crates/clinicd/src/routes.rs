//! The /mcp JSON-RPC endpoint for a clinic daemon.
//!
//! Stateless per request: parse the envelope, resolve the tool, invoke the
//! handler, wrap the outcome back into the same envelope shape. Handler
//! failures become the envelope's error object, never a transport-level
//! fault — every well-formed envelope gets HTTP 200 back.

use crate::server::AppState;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use clinic_common::rpc::{self, McpRequest, McpResponse, ToolCallParams};
use clinic_common::tools::ToolName;
use std::sync::Arc;
use tracing::{info, warn};

pub fn mcp_routes() -> Router<Arc<AppState>> {
    Router::new().route("/mcp", post(mcp_endpoint))
}

/// JSON-RPC 2.0 entry point. Expects method="tools/call" with params.name
/// identifying the tool and params.arguments carrying its named arguments.
async fn mcp_endpoint(
    State(state): State<Arc<AppState>>,
    Json(request): Json<McpRequest>,
) -> Json<McpResponse> {
    if request.method != rpc::METHOD_TOOLS_CALL {
        return Json(McpResponse::error(
            request.id,
            rpc::CODE_METHOD_NOT_FOUND,
            format!(
                "method '{}' not supported; use '{}'",
                request.method,
                rpc::METHOD_TOOLS_CALL
            ),
        ));
    }

    let params: ToolCallParams = match serde_json::from_value(request.params) {
        Ok(params) => params,
        Err(e) => {
            return Json(McpResponse::error(
                request.id,
                rpc::CODE_INVALID_PARAMS,
                format!("malformed params: {e}"),
            ));
        }
    };

    let Some(tool) = ToolName::parse(&params.name) else {
        return Json(McpResponse::error(
            request.id,
            rpc::CODE_INVALID_PARAMS,
            format!(
                "unknown tool '{}'; available: {}",
                params.name,
                ToolName::known_names()
            ),
        ));
    };

    info!("tool call: {tool}");
    match state.handlers.call(tool, params.arguments) {
        Ok(result) => Json(McpResponse::result(request.id, result)),
        Err(e) => {
            warn!("tool {tool} failed: {e}");
            Json(McpResponse::error(request.id, e.code(), e.to_string()))
        }
    }
}
