//! Graph access errors.

use super::error_code::{self, FaultlineErrorCode};

/// Errors raised by an `AssetGraph` backend.
///
/// These are propagated to the caller unchanged; retry policy is theirs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("Graph store unavailable: {message}")]
    Unavailable { message: String },

    #[error("Graph query timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Graph query failed: {message}")]
    Query { message: String },

    #[error("Relationship {source_id} -> {target_id} references an unknown asset")]
    DanglingEdge { source_id: String, target_id: String },
}

impl FaultlineErrorCode for GraphError {
    fn error_code(&self) -> &'static str {
        error_code::GRAPH_ACCESS_FAILURE
    }
}

/// Result alias for graph access operations.
pub type GraphResult<T> = Result<T, GraphError>;
