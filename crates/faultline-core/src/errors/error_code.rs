//! FaultlineErrorCode trait for the transport boundary.

/// Structured error code for callers that serialize errors onto the wire.
/// Every error enum implements this.
pub trait FaultlineErrorCode {
    /// Returns the error code string (e.g., "NODE_NOT_FOUND").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted wire string: `[ERROR_CODE] message`.
    fn wire_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const NODE_NOT_FOUND: &str = "NODE_NOT_FOUND";
pub const GRAPH_ACCESS_FAILURE: &str = "GRAPH_ACCESS_FAILURE";
pub const INVALID_PARAMETER: &str = "INVALID_PARAMETER";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
