//! Tool definitions module.
//!
//! This module exports all available tool definitions, grouped by argument
//! shape:
//! - `aggregate`: operations over a list of numbers
//! - `binary`: two-operand operations
//! - `unary`: single-operand operations
//! - `integer`: integer-typed operations
//! - `batch_tool`: the batch execution tool

pub mod aggregate;
pub mod batch_tool;
pub mod binary;
pub mod common;
pub mod integer;
pub mod unary;

pub use aggregate::{AverageTool, MaxValueTool, MinValueTool, NumsParams, SumTool};
pub use batch_tool::BatchTool;
pub use binary::{
    DivideTool, FloorDivideTool, ModulusTool, MultiplyTool, PairParams, PowerParams, PowerTool,
    SubtractTool,
};
pub use integer::{FactorialTool, IntegerParams};
pub use unary::{AbsoluteTool, ComplementTool, NegateTool, NumParams, SquareRootTool, SquareTool};
