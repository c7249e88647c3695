//! Common utilities shared across operation tools.
//!
//! This module provides the result-rendering policy and the generic
//! `ToolRoute` constructor used by every numeric operation.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, Content, JsonObject, Tool},
};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::domains::tools::error::MathError;

/// Largest integer magnitude exactly representable in an f64.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Render an operation result as a JSON number.
///
/// Integral values inside the safe range serialize as JSON integers
/// (`10`, not `10.0`); NaN and infinities have no JSON encoding and are
/// reported as a domain error.
pub fn render_number(value: f64) -> Result<serde_json::Value, MathError> {
    if !value.is_finite() {
        return Err(MathError::NotRepresentable);
    }
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        return Ok(serde_json::Value::from(value as i64));
    }
    serde_json::Number::from_f64(value)
        .map(serde_json::Value::Number)
        .ok_or(MathError::NotRepresentable)
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Create a Tool model from name, description and input schema.
pub fn tool_meta(
    name: &'static str,
    description: &'static str,
    input_schema: Arc<JsonObject>,
) -> Tool {
    Tool {
        name: name.into(),
        description: Some(description.into()),
        input_schema,
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Create a ToolRoute for a numeric operation.
///
/// Decodes the argument map into the operation's typed params (rejecting
/// unknown, missing and mistyped fields), runs the operation, and renders
/// the outcome the way the transport expects: decode failures become
/// invalid-params protocol errors, domain failures become error results.
pub fn operation_route<S, P, F>(tool: Tool, run: F) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
    P: DeserializeOwned + Send + 'static,
    F: Fn(&P) -> Result<f64, MathError> + Send + Sync + Clone + 'static,
{
    ToolRoute::new_dyn(tool, move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let run = run.clone();
        async move {
            let params: P = serde_json::from_value(serde_json::Value::Object(args))
                .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
            Ok(match run(&params).and_then(render_number) {
                Ok(value) => success_result(value.to_string()),
                Err(e) => error_result(&e.to_string()),
            })
        }
        .boxed()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_integral_as_integer() {
        assert_eq!(render_number(10.0).unwrap(), serde_json::json!(10));
        assert_eq!(render_number(-3.0).unwrap(), serde_json::json!(-3));
        assert_eq!(render_number(0.0).unwrap(), serde_json::json!(0));
    }

    #[test]
    fn test_render_fractional_as_float() {
        assert_eq!(render_number(2.5).unwrap(), serde_json::json!(2.5));
    }

    #[test]
    fn test_render_rejects_non_finite() {
        assert_eq!(
            render_number(f64::NAN).unwrap_err(),
            MathError::NotRepresentable
        );
        assert_eq!(
            render_number(f64::INFINITY).unwrap_err(),
            MathError::NotRepresentable
        );
    }

    #[test]
    fn test_render_huge_integral_stays_float() {
        // Beyond 2^53 an f64 no longer holds exact integers
        let value = 1.0e300;
        assert!(render_number(value).unwrap().is_f64());
    }
}
