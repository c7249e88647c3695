//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are executable functions that can be called by MCP clients; here
//! they are the fixed catalog of arithmetic operations plus the batch tool
//! that runs several of them in one call.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations, grouped by argument shape
//! - `batch.rs` - Batch execution engine (modes, per-item containment, ordering)
//! - `registry.rs` - Operation catalog, typed dispatch and HTTP dispatch
//! - `router.rs` - Dynamic ToolRouter builder for the STDIO transport
//! - `error.rs` - Tool-specific error types

pub mod batch;
pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use batch::{BatchItem, BatchItemResult, BatchMode, BatchRequest, BatchResponse, run_batch};
pub use error::{MathError, ToolError};
pub use registry::{OperationName, ToolRegistry, invoke, invoke_named};
pub use router::build_tool_router;
