//! Two-operand operations.
//!
//! subtract, multiply, divide, modulus and floor_divide share the
//! `num_1`/`num_2` argument pair; power takes `base`/`exponent`.
//!
//! modulus and floor_divide keep floor-division semantics: the remainder's
//! sign follows the divisor, and the quotient rounds toward negative
//! infinity. Rust's native `%` truncates, so the remainder is computed as
//! `a - b * floor(a / b)`.

use rmcp::{handler::server::tool::{ToolRoute, cached_schema_for_type}, model::Tool};
use schemars::JsonSchema;
use serde::Deserialize;

use super::common::{operation_route, tool_meta};
use crate::domains::tools::error::MathError;

/// Parameters for operations taking two numbers.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PairParams {
    /// The first operand.
    pub num_1: f64,

    /// The second operand.
    pub num_2: f64,
}

/// Parameters for the power operation.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PowerParams {
    /// The base.
    pub base: f64,

    /// The exponent.
    pub exponent: f64,
}

/// Subtract tool - difference of two numbers.
pub struct SubtractTool;

impl SubtractTool {
    pub const NAME: &'static str = "subtract";

    pub const DESCRIPTION: &'static str = "Subtract num_2 from num_1.";

    pub fn execute(params: &PairParams) -> Result<f64, MathError> {
        Ok(params.num_1 - params.num_2)
    }

    pub fn to_tool() -> Tool {
        tool_meta(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<PairParams>(),
        )
    }

    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        operation_route(Self::to_tool(), Self::execute)
    }
}

/// Multiply tool - product of two numbers.
pub struct MultiplyTool;

impl MultiplyTool {
    pub const NAME: &'static str = "multiply";

    pub const DESCRIPTION: &'static str = "Multiply num_1 by num_2.";

    pub fn execute(params: &PairParams) -> Result<f64, MathError> {
        Ok(params.num_1 * params.num_2)
    }

    pub fn to_tool() -> Tool {
        tool_meta(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<PairParams>(),
        )
    }

    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        operation_route(Self::to_tool(), Self::execute)
    }
}

/// Divide tool - quotient of two numbers.
pub struct DivideTool;

impl DivideTool {
    pub const NAME: &'static str = "divide";

    pub const DESCRIPTION: &'static str =
        "Divide num_1 by num_2. Fails when num_2 is zero.";

    pub fn execute(params: &PairParams) -> Result<f64, MathError> {
        if params.num_2 == 0.0 {
            return Err(MathError::DivisionByZero);
        }
        Ok(params.num_1 / params.num_2)
    }

    pub fn to_tool() -> Tool {
        tool_meta(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<PairParams>(),
        )
    }

    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        operation_route(Self::to_tool(), Self::execute)
    }
}

/// Power tool - base raised to an exponent.
pub struct PowerTool;

impl PowerTool {
    pub const NAME: &'static str = "power";

    pub const DESCRIPTION: &'static str =
        "Raise base to the given exponent. A negative base with a fractional exponent has no real result and fails.";

    pub fn execute(params: &PowerParams) -> Result<f64, MathError> {
        Ok(params.base.powf(params.exponent))
    }

    pub fn to_tool() -> Tool {
        tool_meta(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<PowerParams>(),
        )
    }

    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        operation_route(Self::to_tool(), Self::execute)
    }
}

/// Modulus tool - floor-division remainder.
pub struct ModulusTool;

impl ModulusTool {
    pub const NAME: &'static str = "modulus";

    pub const DESCRIPTION: &'static str =
        "Remainder of num_1 divided by num_2; the sign follows num_2. Fails when num_2 is zero.";

    pub fn execute(params: &PairParams) -> Result<f64, MathError> {
        if params.num_2 == 0.0 {
            return Err(MathError::DivisionByZero);
        }
        let (a, b) = (params.num_1, params.num_2);
        Ok(a - b * (a / b).floor())
    }

    pub fn to_tool() -> Tool {
        tool_meta(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<PairParams>(),
        )
    }

    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        operation_route(Self::to_tool(), Self::execute)
    }
}

/// Floor divide tool - quotient rounded toward negative infinity.
pub struct FloorDivideTool;

impl FloorDivideTool {
    pub const NAME: &'static str = "floor_divide";

    pub const DESCRIPTION: &'static str =
        "Divide num_1 by num_2 and round toward negative infinity. Fails when num_2 is zero.";

    pub fn execute(params: &PairParams) -> Result<f64, MathError> {
        if params.num_2 == 0.0 {
            return Err(MathError::DivisionByZero);
        }
        Ok((params.num_1 / params.num_2).floor())
    }

    pub fn to_tool() -> Tool {
        tool_meta(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<PairParams>(),
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

    fn pair(num_1: f64, num_2: f64) -> PairParams {
        PairParams { num_1, num_2 }
    }

    #[test]
    fn test_subtract() {
        assert_eq!(SubtractTool::execute(&pair(5.0, 1.0)).unwrap(), 4.0);
        assert_eq!(SubtractTool::execute(&pair(1.0, 5.0)).unwrap(), -4.0);
    }

    #[test]
    fn test_multiply() {
        assert_eq!(MultiplyTool::execute(&pair(3.0, 4.0)).unwrap(), 12.0);
        assert_eq!(MultiplyTool::execute(&pair(-2.0, 0.5)).unwrap(), -1.0);
    }

    #[test]
    fn test_divide() {
        assert_eq!(DivideTool::execute(&pair(10.0, 4.0)).unwrap(), 2.5);
    }

    #[test]
    fn test_divide_by_zero_fails() {
        assert_eq!(
            DivideTool::execute(&pair(5.0, 0.0)).unwrap_err(),
            MathError::DivisionByZero
        );
        assert_eq!(
            DivideTool::execute(&pair(0.0, 0.0)).unwrap_err(),
            MathError::DivisionByZero
        );
    }

    #[test]
    fn test_power() {
        assert_eq!(
            PowerTool::execute(&PowerParams {
                base: 2.0,
                exponent: 10.0
            })
            .unwrap(),
            1024.0
        );
        assert_eq!(
            PowerTool::execute(&PowerParams {
                base: 9.0,
                exponent: 0.5
            })
            .unwrap(),
            3.0
        );
    }

    #[test]
    fn test_power_negative_base_fractional_exponent_is_nan() {
        // No real result; render_number turns this into a domain error
        let value = PowerTool::execute(&PowerParams {
            base: -8.0,
            exponent: 0.5,
        })
        .unwrap();
        assert!(value.is_nan());
    }

    #[test]
    fn test_modulus_sign_follows_divisor() {
        assert_eq!(ModulusTool::execute(&pair(7.0, 3.0)).unwrap(), 1.0);
        assert_eq!(ModulusTool::execute(&pair(-7.0, 3.0)).unwrap(), 2.0);
        assert_eq!(ModulusTool::execute(&pair(7.0, -3.0)).unwrap(), -2.0);
        assert_eq!(ModulusTool::execute(&pair(-7.0, -3.0)).unwrap(), -1.0);
    }

    #[test]
    fn test_modulus_zero_divisor_fails() {
        assert_eq!(
            ModulusTool::execute(&pair(7.0, 0.0)).unwrap_err(),
            MathError::DivisionByZero
        );
    }

    #[test]
    fn test_floor_divide() {
        assert_eq!(FloorDivideTool::execute(&pair(7.0, 2.0)).unwrap(), 3.0);
        assert_eq!(FloorDivideTool::execute(&pair(-7.0, 2.0)).unwrap(), -4.0);
        assert_eq!(FloorDivideTool::execute(&pair(7.0, -2.0)).unwrap(), -4.0);
    }

    #[test]
    fn test_floor_divide_zero_divisor_fails() {
        assert_eq!(
            FloorDivideTool::execute(&pair(1.0, 0.0)).unwrap_err(),
            MathError::DivisionByZero
        );
    }
}
