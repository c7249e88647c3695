//! Batch execution engine.
//!
//! Runs an ordered list of operation requests under a parallel or sequential
//! mode and collects per-item outcomes. A failing item never aborts its
//! siblings in parallel mode; in sequential mode it stops the rest only when
//! `break_on_error` is set. Results always come back in input order.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::registry::invoke_named;

// ============================================================================
// Wire models
// ============================================================================

/// Batch execution mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum BatchMode {
    /// Every item runs concurrently; all items run to completion.
    #[default]
    Parallel,
    /// Items run one at a time in input order, optionally stopping at the
    /// first failure.
    Sequential,
}

/// One operation request within a batch.
///
/// `name` stays a string on the wire so an unknown operation becomes a
/// per-item failure instead of a request-level decode failure.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct BatchItem {
    /// The operation to run.
    pub name: String,

    /// The operation's argument map.
    #[serde(default = "empty_arguments")]
    pub arguments: serde_json::Value,

    /// Client-supplied correlation id. Falls back to the item's zero-based
    /// input index when absent.
    #[serde(default)]
    pub id: Option<String>,
}

fn empty_arguments() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

/// A batch of operation requests.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct BatchRequest {
    /// Execution mode. Defaults to parallel.
    #[serde(default)]
    pub mode: BatchMode,

    /// Stop at the first failing item (sequential mode only; inert in
    /// parallel mode). Defaults to true.
    #[serde(default = "default_break_on_error")]
    pub break_on_error: bool,

    /// The operations to run, in order. An empty list is legal and yields
    /// an empty result list.
    #[serde(default)]
    pub ops: Vec<BatchItem>,
}

fn default_break_on_error() -> bool {
    true
}

/// The per-item outcome within a batch response.
///
/// Exactly one of `result`/`error` is populated, gated by `ok`.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct BatchItemResult {
    /// Echo of the item's id, or its input index as a string.
    pub id: String,

    /// Echo of the requested operation name.
    pub name: String,

    /// Whether the item succeeded.
    pub ok: bool,

    /// The numeric result, when ok.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,

    /// The failure message, when not ok.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchItemResult {
    /// Create a successful item result.
    pub fn success(id: String, name: String, result: serde_json::Value) -> Self {
        Self {
            id,
            name,
            ok: true,
            result: Some(result),
            error: None,
        }
    }

    /// Create a failed item result.
    pub fn failure(id: String, name: String, error: impl Into<String>) -> Self {
        Self {
            id,
            name,
            ok: false,
            result: None,
            error: Some(error.into()),
        }
    }
}

/// The ordered outcome of a batch, echoing the execution mode.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct BatchResponse {
    /// The mode the batch ran under.
    pub mode: BatchMode,

    /// Per-item outcomes in input order.
    pub results: Vec<BatchItemResult>,
}

// ============================================================================
// Dispatcher
// ============================================================================

/// Run one batch item: resolve the operation, validate its arguments and
/// execute it. Every failure kind is contained in the returned item result.
fn run_one(index: usize, item: BatchItem) -> BatchItemResult {
    let id = item.id.unwrap_or_else(|| index.to_string());
    match invoke_named(&item.name, item.arguments) {
        Ok(value) => BatchItemResult::success(id, item.name, value),
        Err(e) => BatchItemResult::failure(id, item.name, e.to_string()),
    }
}

/// Execute a batch request and aggregate the ordered response.
#[instrument(skip_all, fields(mode = ?request.mode, ops = request.ops.len()))]
pub async fn run_batch(request: BatchRequest) -> BatchResponse {
    debug!("Running batch of {} operations", request.ops.len());

    let results = match request.mode {
        BatchMode::Parallel => run_parallel(request.ops).await,
        BatchMode::Sequential => run_sequential(request.ops, request.break_on_error),
    };

    BatchResponse {
        mode: request.mode,
        results,
    }
}

/// Fan out one task per item and join the handles in input order.
///
/// Each handle owns a fixed output slot, so result order never depends on
/// completion order. `break_on_error` does not apply here: already-dispatched
/// work is never cancelled.
async fn run_parallel(ops: Vec<BatchItem>) -> Vec<BatchItemResult> {
    let handles: Vec<_> = ops
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let fallback_id = item.id.clone().unwrap_or_else(|| index.to_string());
            let name = item.name.clone();
            (
                fallback_id,
                name,
                tokio::spawn(async move { run_one(index, item) }),
            )
        })
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for (id, name, handle) in handles {
        let result = match handle.await {
            Ok(result) => result,
            Err(e) => BatchItemResult::failure(id, name, format!("Task failed: {e}")),
        };
        results.push(result);
    }
    results
}

/// Process items one at a time, stopping after the first failure when
/// `break_on_error` is set. Unprocessed items are absent from the results.
fn run_sequential(ops: Vec<BatchItem>, break_on_error: bool) -> Vec<BatchItemResult> {
    let mut results = Vec::with_capacity(ops.len());
    for (index, item) in ops.into_iter().enumerate() {
        let result = run_one(index, item);
        let failed = !result.ok;
        results.push(result);
        if failed && break_on_error {
            debug!("Batch stopped at item {} (break_on_error)", index);
            break;
        }
    }
    results
}
