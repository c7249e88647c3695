//! Math Operations MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server exposing a
//! fixed catalog of arithmetic operations as tools, plus a batch tool that
//! runs several operations in one call, either concurrently or sequentially
//! with optional early termination on error.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   authentication, and the transport layer (STDIO and HTTP)
//! - **domains**: Business logic
//!   - **tools**: the operation catalog, typed argument validation, and the
//!     batch execution engine
//!
//! # Example
//!
//! ```rust,no_run
//! use math_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
