//! Single-operand operations.
//!
//! absolute, negate, square, square_root and complement all take one `num`
//! argument.

use rmcp::{handler::server::tool::{ToolRoute, cached_schema_for_type}, model::Tool};
use schemars::JsonSchema;
use serde::Deserialize;

use super::common::{operation_route, tool_meta};
use crate::domains::tools::error::MathError;

/// Parameters for operations taking a single number.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct NumParams {
    /// The operand.
    pub num: f64,
}

/// Absolute tool - magnitude of a number.
pub struct AbsoluteTool;

impl AbsoluteTool {
    pub const NAME: &'static str = "absolute";

    pub const DESCRIPTION: &'static str = "Return the absolute value of num.";

    pub fn execute(params: &NumParams) -> Result<f64, MathError> {
        Ok(params.num.abs())
    }

    pub fn to_tool() -> Tool {
        tool_meta(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<NumParams>(),
        )
    }

    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        operation_route(Self::to_tool(), Self::execute)
    }
}

/// Negate tool - additive inverse.
pub struct NegateTool;

impl NegateTool {
    pub const NAME: &'static str = "negate";

    pub const DESCRIPTION: &'static str = "Return num with its sign flipped.";

    pub fn execute(params: &NumParams) -> Result<f64, MathError> {
        Ok(-params.num)
    }

    pub fn to_tool() -> Tool {
        tool_meta(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<NumParams>(),
        )
    }

    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        operation_route(Self::to_tool(), Self::execute)
    }
}

/// Square tool - a number multiplied by itself.
pub struct SquareTool;

impl SquareTool {
    pub const NAME: &'static str = "square";

    pub const DESCRIPTION: &'static str = "Return num multiplied by itself.";

    pub fn execute(params: &NumParams) -> Result<f64, MathError> {
        Ok(params.num * params.num)
    }

    pub fn to_tool() -> Tool {
        tool_meta(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<NumParams>(),
        )
    }

    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        operation_route(Self::to_tool(), Self::execute)
    }
}

/// Square root tool - principal square root.
pub struct SquareRootTool;

impl SquareRootTool {
    pub const NAME: &'static str = "square_root";

    pub const DESCRIPTION: &'static str =
        "Return the square root of num. Fails for negative input.";

    pub fn execute(params: &NumParams) -> Result<f64, MathError> {
        if params.num < 0.0 {
            return Err(MathError::NegativeSquareRoot);
        }
        Ok(params.num.sqrt())
    }

    pub fn to_tool() -> Tool {
        tool_meta(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<NumParams>(),
        )
    }

    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        operation_route(Self::to_tool(), Self::execute)
    }
}

/// Complement tool - one minus the number.
pub struct ComplementTool;

impl ComplementTool {
    pub const NAME: &'static str = "complement";

    pub const DESCRIPTION: &'static str = "Return 1 - num.";

    pub fn execute(params: &NumParams) -> Result<f64, MathError> {
        Ok(1.0 - params.num)
    }

    pub fn to_tool() -> Tool {
        tool_meta(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<NumParams>(),
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

    fn num(value: f64) -> NumParams {
        NumParams { num: value }
    }

    #[test]
    fn test_absolute() {
        assert_eq!(AbsoluteTool::execute(&num(-3.5)).unwrap(), 3.5);
        assert_eq!(AbsoluteTool::execute(&num(3.5)).unwrap(), 3.5);
        assert_eq!(AbsoluteTool::execute(&num(0.0)).unwrap(), 0.0);
    }

    #[test]
    fn test_negate() {
        assert_eq!(NegateTool::execute(&num(4.0)).unwrap(), -4.0);
        assert_eq!(NegateTool::execute(&num(-4.0)).unwrap(), 4.0);
    }

    #[test]
    fn test_square() {
        assert_eq!(SquareTool::execute(&num(3.0)).unwrap(), 9.0);
        assert_eq!(SquareTool::execute(&num(-3.0)).unwrap(), 9.0);
        assert_eq!(SquareTool::execute(&num(0.5)).unwrap(), 0.25);
    }

    #[test]
    fn test_square_root() {
        assert_eq!(SquareRootTool::execute(&num(4.0)).unwrap(), 2.0);
        assert_eq!(SquareRootTool::execute(&num(0.0)).unwrap(), 0.0);
    }

    #[test]
    fn test_square_root_negative_fails() {
        assert_eq!(
            SquareRootTool::execute(&num(-1.0)).unwrap_err(),
            MathError::NegativeSquareRoot
        );
    }

    #[test]
    fn test_complement() {
        assert_eq!(ComplementTool::execute(&num(0.25)).unwrap(), 0.75);
        assert_eq!(ComplementTool::execute(&num(1.0)).unwrap(), 0.0);
        assert_eq!(ComplementTool::execute(&num(-1.0)).unwrap(), 2.0);
    }
}
