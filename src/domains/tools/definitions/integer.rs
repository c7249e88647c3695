//! Integer operations.
//!
//! factorial is the one operation with an integer-typed argument: `num` must
//! be a JSON integer literal. A floating literal is rejected at decode time
//! even when its fractional part is zero.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::Tool,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::common::{error_result, success_result, tool_meta};
use crate::domains::tools::error::MathError;

/// Parameters for operations taking a single integer.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct IntegerParams {
    /// The operand. Must be an integer literal.
    pub num: i64,
}

/// Factorial tool - iterative product 2..n.
pub struct FactorialTool;

impl FactorialTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "factorial";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Return num factorial (num must be a non-negative integer no larger than 20).";

    pub fn execute(params: &IntegerParams) -> Result<u64, MathError> {
        if params.num < 0 {
            return Err(MathError::NegativeFactorial);
        }
        let mut result: u64 = 1;
        for i in 2..=params.num as u64 {
            result = result
                .checked_mul(i)
                .ok_or(MathError::FactorialOverflow(params.num))?;
        }
        Ok(result)
    }

    pub fn to_tool() -> Tool {
        tool_meta(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<IntegerParams>(),
        )
    }

    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: IntegerParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(match Self::execute(&params) {
                    Ok(value) => success_result(value.to_string()),
                    Err(e) => error_result(&e.to_string()),
                })
            }
            .boxed()
        })
    }
}
