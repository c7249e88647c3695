//! Aggregate operations over a list of numbers.
//!
//! sum, average, max_value and min_value all take the same `nums` argument.
//! sum of an empty list is 0; the other three reject empty input.

use rmcp::{handler::server::tool::{ToolRoute, cached_schema_for_type}, model::Tool};
use schemars::JsonSchema;
use serde::Deserialize;

use super::common::{operation_route, tool_meta};
use crate::domains::tools::error::MathError;

/// Parameters for the aggregate operations.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct NumsParams {
    /// The numbers to aggregate.
    pub nums: Vec<f64>,
}

/// Sum tool - adds a list of numbers.
pub struct SumTool;

impl SumTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "sum";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Add a list of numbers. Returns 0 for an empty list.";

    pub fn execute(params: &NumsParams) -> Result<f64, MathError> {
        Ok(params.nums.iter().sum())
    }

    pub fn to_tool() -> Tool {
        tool_meta(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<NumsParams>(),
        )
    }

    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        operation_route(Self::to_tool(), Self::execute)
    }
}

/// Average tool - arithmetic mean of a list of numbers.
pub struct AverageTool;

impl AverageTool {
    pub const NAME: &'static str = "average";

    pub const DESCRIPTION: &'static str =
        "Compute the arithmetic mean of a list of numbers. Fails on an empty list.";

    pub fn execute(params: &NumsParams) -> Result<f64, MathError> {
        if params.nums.is_empty() {
            return Err(MathError::EmptyInput);
        }
        Ok(params.nums.iter().sum::<f64>() / params.nums.len() as f64)
    }

    pub fn to_tool() -> Tool {
        tool_meta(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<NumsParams>(),
        )
    }

    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        operation_route(Self::to_tool(), Self::execute)
    }
}

/// Max value tool - largest element of a list of numbers.
pub struct MaxValueTool;

impl MaxValueTool {
    pub const NAME: &'static str = "max_value";

    pub const DESCRIPTION: &'static str =
        "Return the largest number in a list. Fails on an empty list.";

    pub fn execute(params: &NumsParams) -> Result<f64, MathError> {
        params
            .nums
            .iter()
            .copied()
            .reduce(f64::max)
            .ok_or(MathError::EmptyInput)
    }

    pub fn to_tool() -> Tool {
        tool_meta(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<NumsParams>(),
        )
    }

    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        operation_route(Self::to_tool(), Self::execute)
    }
}

/// Min value tool - smallest element of a list of numbers.
pub struct MinValueTool;

impl MinValueTool {
    pub const NAME: &'static str = "min_value";

    pub const DESCRIPTION: &'static str =
        "Return the smallest number in a list. Fails on an empty list.";

    pub fn execute(params: &NumsParams) -> Result<f64, MathError> {
        params
            .nums
            .iter()
            .copied()
            .reduce(f64::min)
            .ok_or(MathError::EmptyInput)
    }

    pub fn to_tool() -> Tool {
        tool_meta(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<NumsParams>(),
        )
    }

    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        operation_route(Self::to_tool(), Self::execute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nums(values: &[f64]) -> NumsParams {
        NumsParams {
            nums: values.to_vec(),
        }
    }

    #[test]
    fn test_sum_empty_is_zero() {
        assert_eq!(SumTool::execute(&nums(&[])).unwrap(), 0.0);
    }

    #[test]
    fn test_sum_values() {
        assert_eq!(SumTool::execute(&nums(&[1.0, 2.0, 3.0, 4.0])).unwrap(), 10.0);
        assert_eq!(SumTool::execute(&nums(&[-1.5, 1.5])).unwrap(), 0.0);
    }

    #[test]
    fn test_average_empty_fails() {
        assert_eq!(
            AverageTool::execute(&nums(&[])).unwrap_err(),
            MathError::EmptyInput
        );
    }

    #[test]
    fn test_average_values() {
        assert_eq!(AverageTool::execute(&nums(&[1.0, 2.0, 3.0])).unwrap(), 2.0);
        assert_eq!(AverageTool::execute(&nums(&[2.5])).unwrap(), 2.5);
    }

    #[test]
    fn test_max_value() {
        assert_eq!(
            MaxValueTool::execute(&nums(&[3.0, -7.0, 12.5, 0.0])).unwrap(),
            12.5
        );
        assert_eq!(
            MaxValueTool::execute(&nums(&[])).unwrap_err(),
            MathError::EmptyInput
        );
    }

    #[test]
    fn test_min_value() {
        assert_eq!(
            MinValueTool::execute(&nums(&[3.0, -7.0, 12.5, 0.0])).unwrap(),
            -7.0
        );
        assert_eq!(
            MinValueTool::execute(&nums(&[])).unwrap_err(),
            MathError::EmptyInput
        );
    }
}
