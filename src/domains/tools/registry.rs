//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The closed catalog of operation names
//! - Typed dispatch from an operation name and argument map to a result
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

use serde::de::DeserializeOwned;

use rmcp::model::Tool;

use super::definitions::{
    AbsoluteTool, AverageTool, BatchTool, ComplementTool, DivideTool, FactorialTool,
    FloorDivideTool, IntegerParams, MaxValueTool, MinValueTool, ModulusTool, MultiplyTool,
    NegateTool, PowerTool, SquareRootTool, SquareTool, SubtractTool, SumTool,
    common::render_number,
};
use super::error::{MathError, ToolError};

#[cfg(feature = "http")]
use rmcp::model::Content;
#[cfg(feature = "http")]
use tracing::warn;

// ============================================================================
// Operation catalog
// ============================================================================

/// The closed set of arithmetic operations.
///
/// One variant per operation; the mapping to argument shape and
/// implementation in [`invoke`] is exhaustive, so a registry gap is a
/// compile error. The runtime "unknown operation" path exists only for
/// malformed input, via [`OperationName::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationName {
    Sum,
    Subtract,
    Multiply,
    Divide,
    Power,
    Modulus,
    FloorDivide,
    Absolute,
    Negate,
    Square,
    SquareRoot,
    Average,
    MaxValue,
    MinValue,
    Factorial,
    Complement,
}

impl OperationName {
    /// Every operation, in catalog order.
    pub const ALL: [OperationName; 16] = [
        Self::Sum,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Power,
        Self::Modulus,
        Self::FloorDivide,
        Self::Absolute,
        Self::Negate,
        Self::Square,
        Self::SquareRoot,
        Self::Average,
        Self::MaxValue,
        Self::MinValue,
        Self::Factorial,
        Self::Complement,
    ];

    /// The wire name of the operation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sum => SumTool::NAME,
            Self::Subtract => SubtractTool::NAME,
            Self::Multiply => MultiplyTool::NAME,
            Self::Divide => DivideTool::NAME,
            Self::Power => PowerTool::NAME,
            Self::Modulus => ModulusTool::NAME,
            Self::FloorDivide => FloorDivideTool::NAME,
            Self::Absolute => AbsoluteTool::NAME,
            Self::Negate => NegateTool::NAME,
            Self::Square => SquareTool::NAME,
            Self::SquareRoot => SquareRootTool::NAME,
            Self::Average => AverageTool::NAME,
            Self::MaxValue => MaxValueTool::NAME,
            Self::MinValue => MinValueTool::NAME,
            Self::Factorial => FactorialTool::NAME,
            Self::Complement => ComplementTool::NAME,
        }
    }

    /// Resolve a wire name to an operation, or None if unknown.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.as_str() == name)
    }

    /// The Tool model (metadata) for this operation.
    pub fn to_tool(&self) -> Tool {
        match self {
            Self::Sum => SumTool::to_tool(),
            Self::Subtract => SubtractTool::to_tool(),
            Self::Multiply => MultiplyTool::to_tool(),
            Self::Divide => DivideTool::to_tool(),
            Self::Power => PowerTool::to_tool(),
            Self::Modulus => ModulusTool::to_tool(),
            Self::FloorDivide => FloorDivideTool::to_tool(),
            Self::Absolute => AbsoluteTool::to_tool(),
            Self::Negate => NegateTool::to_tool(),
            Self::Square => SquareTool::to_tool(),
            Self::SquareRoot => SquareRootTool::to_tool(),
            Self::Average => AverageTool::to_tool(),
            Self::MaxValue => MaxValueTool::to_tool(),
            Self::MinValue => MinValueTool::to_tool(),
            Self::Factorial => FactorialTool::to_tool(),
            Self::Complement => ComplementTool::to_tool(),
        }
    }
}

impl std::fmt::Display for OperationName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Typed dispatch
// ============================================================================

fn decode<P: DeserializeOwned>(arguments: serde_json::Value) -> Result<P, ToolError> {
    serde_json::from_value(arguments).map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

fn run_numeric<P, F>(arguments: serde_json::Value, run: F) -> Result<serde_json::Value, ToolError>
where
    P: DeserializeOwned,
    F: Fn(&P) -> Result<f64, MathError>,
{
    let params = decode::<P>(arguments)?;
    let value = run(&params)?;
    Ok(render_number(value)?)
}

/// Validate the argument map against the operation's schema and run it.
///
/// Returns the result as a JSON number, or the validation/domain failure.
pub fn invoke(op: OperationName, arguments: serde_json::Value) -> Result<serde_json::Value, ToolError> {
    match op {
        OperationName::Sum => run_numeric(arguments, SumTool::execute),
        OperationName::Subtract => run_numeric(arguments, SubtractTool::execute),
        OperationName::Multiply => run_numeric(arguments, MultiplyTool::execute),
        OperationName::Divide => run_numeric(arguments, DivideTool::execute),
        OperationName::Power => run_numeric(arguments, PowerTool::execute),
        OperationName::Modulus => run_numeric(arguments, ModulusTool::execute),
        OperationName::FloorDivide => run_numeric(arguments, FloorDivideTool::execute),
        OperationName::Absolute => run_numeric(arguments, AbsoluteTool::execute),
        OperationName::Negate => run_numeric(arguments, NegateTool::execute),
        OperationName::Square => run_numeric(arguments, SquareTool::execute),
        OperationName::SquareRoot => run_numeric(arguments, SquareRootTool::execute),
        OperationName::Average => run_numeric(arguments, AverageTool::execute),
        OperationName::MaxValue => run_numeric(arguments, MaxValueTool::execute),
        OperationName::MinValue => run_numeric(arguments, MinValueTool::execute),
        OperationName::Factorial => {
            let params = decode::<IntegerParams>(arguments)?;
            Ok(serde_json::Value::from(FactorialTool::execute(&params)?))
        }
        OperationName::Complement => run_numeric(arguments, ComplementTool::execute),
    }
}

/// Resolve a wire name and run the operation.
pub fn invoke_named(name: &str, arguments: serde_json::Value) -> Result<serde_json::Value, ToolError> {
    let op = OperationName::parse(name).ok_or_else(|| ToolError::unknown_operation(name))?;
    invoke(op, arguments)
}

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// This struct provides a central point for:
/// - Listing all available tools
/// - Dispatching HTTP tool calls (when http feature is enabled)
pub struct ToolRegistry;

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new() -> Self {
        Self
    }

    /// Get all tool names (sixteen operations plus batch).
    pub fn tool_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = OperationName::ALL.iter().map(|op| op.as_str()).collect();
        names.push(BatchTool::NAME);
        names
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    /// Both HTTP and STDIO transports use this to get tool metadata.
    pub fn get_all_tools() -> Vec<Tool> {
        let mut tools: Vec<Tool> = OperationName::ALL.iter().map(|op| op.to_tool()).collect();
        tools.push(BatchTool::to_tool());
        tools
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    ///
    /// Single-operation failures (unknown operation, validation, domain)
    /// surface as the request-level Err for the transport to translate;
    /// batch item failures stay contained inside the response payload.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> crate::core::Result<serde_json::Value> {
        if name == BatchTool::NAME {
            return BatchTool::http_handler(arguments).await;
        }
        match invoke_named(name, arguments) {
            Ok(value) => Ok(serde_json::json!({
                "content": [Content::text(value.to_string())],
                "isError": false
            })),
            Err(e) => {
                warn!("Tool call '{}' failed: {}", name, e);
                Err(e.into())
            }
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::new();
        let names = registry.tool_names();
        assert_eq!(names.len(), 17);
        assert!(names.contains(&"sum"));
        assert!(names.contains(&"subtract"));
        assert!(names.contains(&"multiply"));
        assert!(names.contains(&"divide"));
        assert!(names.contains(&"power"));
        assert!(names.contains(&"modulus"));
        assert!(names.contains(&"floor_divide"));
        assert!(names.contains(&"absolute"));
        assert!(names.contains(&"negate"));
        assert!(names.contains(&"square"));
        assert!(names.contains(&"square_root"));
        assert!(names.contains(&"average"));
        assert!(names.contains(&"max_value"));
        assert!(names.contains(&"min_value"));
        assert!(names.contains(&"factorial"));
        assert!(names.contains(&"complement"));
        assert!(names.contains(&"batch"));
    }

    #[test]
    fn test_parse_round_trips_every_operation() {
        for op in OperationName::ALL {
            assert_eq!(OperationName::parse(op.as_str()), Some(op));
        }
        assert_eq!(OperationName::parse("cube"), None);
        assert_eq!(OperationName::parse(""), None);
    }

    #[test]
    fn test_invoke_named_sum() {
        let value = invoke_named("sum", json!({ "nums": [1, 2, 3, 4] })).unwrap();
        assert_eq!(value, json!(10));
    }

    #[test]
    fn test_invoke_named_divide_renders_fraction() {
        let value = invoke_named("divide", json!({ "num_1": 5, "num_2": 2 })).unwrap();
        assert_eq!(value, json!(2.5));
    }

    #[test]
    fn test_invoke_named_factorial_is_integer() {
        let value = invoke_named("factorial", json!({ "num": 5 })).unwrap();
        assert_eq!(value, json!(120));
    }

    #[test]
    fn test_invoke_named_unknown_operation() {
        let err = invoke_named("cube", json!({ "num": 2 })).unwrap_err();
        assert!(err.to_string().contains("Unknown operation"));
    }

    #[test]
    fn test_invoke_rejects_extra_field() {
        let err = invoke_named("divide", json!({ "num_1": 1, "num_2": 2, "num_3": 3 })).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[test]
    fn test_invoke_rejects_missing_field() {
        let err = invoke_named("divide", json!({ "num_1": 1 })).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[test]
    fn test_invoke_rejects_mistyped_field() {
        let err = invoke_named("sum", json!({ "nums": "1,2,3" })).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[test]
    fn test_invoke_accepts_integer_literals_for_floats() {
        let value = invoke_named("subtract", json!({ "num_1": 5, "num_2": 1 })).unwrap();
        assert_eq!(value, json!(4));
    }

    #[test]
    fn test_invoke_power_nan_is_domain_error() {
        let err = invoke_named("power", json!({ "base": -8, "exponent": 0.5 })).unwrap_err();
        assert!(matches!(err, ToolError::Math(MathError::NotRepresentable)));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_sum() {
        let registry = ToolRegistry::new();
        let result = tokio_test::block_on(
            registry.call_tool("sum", json!({ "nums": [1.0, 2.0] })),
        );
        assert!(result.is_ok());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_unknown() {
        let registry = ToolRegistry::new();
        let result = tokio_test::block_on(registry.call_tool("unknown", json!({})));
        assert!(result.is_err());
    }
}
