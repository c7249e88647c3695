//! Tool-specific error types.

use thiserror::Error;

/// Domain failures of the arithmetic operations themselves.
///
/// Messages are part of the wire contract: batch item results and JSON-RPC
/// error responses carry them verbatim.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MathError {
    /// Divisor was zero (divide, modulus, floor_divide).
    #[error("Division by zero is not allowed.")]
    DivisionByZero,

    /// Square root of a negative number.
    #[error("Square root of negative number is not allowed.")]
    NegativeSquareRoot,

    /// An aggregate operation received an empty list.
    #[error("The list is empty.")]
    EmptyInput,

    /// Factorial of a negative number.
    #[error("Factorial of negative number is not allowed.")]
    NegativeFactorial,

    /// Factorial result does not fit in a 64-bit integer (n > 20).
    #[error("Factorial of {0} does not fit in a 64-bit integer.")]
    FactorialOverflow(i64),

    /// The computation produced NaN or an infinity, which JSON cannot carry.
    #[error("Result is not a representable number.")]
    NotRepresentable,
}

/// Errors that can occur while dispatching a tool call.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested operation name is not in the catalog.
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// The argument map did not match the operation's schema.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The operation itself failed.
    #[error(transparent)]
    Math(#[from] MathError),
}

impl ToolError {
    /// Create a new "unknown operation" error.
    pub fn unknown_operation(name: impl Into<String>) -> Self {
        Self::UnknownOperation(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}
