//! Batch tool definition.
//!
//! The MCP surface over the batch engine: decodes a `BatchRequest`, runs it,
//! and returns the serialized `BatchResponse` as text content plus
//! structured content.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use tracing::info;

use super::common::tool_meta;
use crate::domains::tools::batch::{BatchRequest, BatchResponse, run_batch};

/// Batch tool - runs several operations in one call.
pub struct BatchTool;

impl BatchTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "batch";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = concat!(
        "Run multiple operations in one call. Use when you need several actions at once.\n",
        "Input:\n",
        "{\n",
        "  \"mode\": \"parallel\" | \"sequential\",\n",
        "  \"ops\": [\n",
        "    {\"name\":\"sum\",\"arguments\":{\"nums\": [1.0,2.0,3.0,4.0]},\"id\":\"sum1\"},\n",
        "    {\"name\":\"subtract\",\"arguments\":{\"num_1\": 5.0, \"num_2\": 1.0}}\n",
        "  ]\n",
        "}\n",
        "Returns results in the same order; each item has {id?, name, ok, result?, error?}."
    );

    /// Execute the batch (for STDIO transport via rmcp).
    pub async fn execute(request: BatchRequest) -> BatchResponse {
        info!("Batch tool called with {} operations", request.ops.len());
        run_batch(request).await
    }

    /// HTTP handler for this tool (for HTTP transport).
    ///
    /// A malformed request body is the only request-level failure; item
    /// failures stay inside the response payload.
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
    ) -> crate::core::Result<serde_json::Value> {
        let request: BatchRequest = serde_json::from_value(arguments)?;

        let response = Self::execute(request).await;
        let payload = serde_json::to_value(&response)?;

        Ok(serde_json::json!({
            "content": [Content::text(payload.to_string())],
            "isError": false,
            "structuredContent": payload
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        tool_meta(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<BatchRequest>(),
        )
    }

    /// Create a ToolRoute for STDIO transport.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let request: BatchRequest =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                let response = Self::execute(request).await;
                let payload = serde_json::to_value(&response)
                    .map_err(|e| McpError::internal_error(e.to_string(), None))?;

                let mut result = CallToolResult::success(vec![Content::text(payload.to_string())]);
                result.structured_content = Some(payload);
                Ok(result)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_execute_echoes_mode() {
        let request: BatchRequest = serde_json::from_value(json!({
            "mode": "sequential",
            "ops": [{ "name": "negate", "arguments": { "num": 1 } }]
        }))
        .unwrap();

        let response = BatchTool::execute(request).await;
        let payload = serde_json::to_value(&response).unwrap();
        assert_eq!(payload["mode"], json!("sequential"));
        assert_eq!(payload["results"][0]["result"], json!(-1));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_http_handler_rejects_malformed_request() {
        let result = BatchTool::http_handler(json!({ "mode": "both", "ops": [] })).await;
        assert!(result.is_err());

        let result = BatchTool::http_handler(json!({ "ops": [], "extra": true })).await;
        assert!(result.is_err());
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_http_handler_returns_structured_content() {
        let result = BatchTool::http_handler(json!({
            "ops": [{ "name": "sum", "arguments": { "nums": [1, 2] } }]
        }))
        .await
        .unwrap();

        assert_eq!(result["isError"], json!(false));
        assert_eq!(
            result["structuredContent"]["results"][0]["result"],
            json!(3)
        );
    }
}
