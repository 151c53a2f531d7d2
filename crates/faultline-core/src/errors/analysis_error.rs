//! Analysis errors.
//!
//! "Nothing found" is never an error: no drift, no upstream failure, and an
//! empty downstream set are all ordinary results.

use super::error_code::{self, FaultlineErrorCode};
use super::{ConfigError, GraphError};

/// Errors returned by traversal and the analyzers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    #[error("Asset not found: {id}")]
    NodeNotFound { id: String },

    #[error("Graph access failure: {0}")]
    GraphAccess(#[from] GraphError),

    #[error("Invalid parameter {name}: {message}")]
    InvalidParameter { name: String, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl AnalysisError {
    pub fn node_not_found(id: impl Into<String>) -> Self {
        Self::NodeNotFound { id: id.into() }
    }

    pub fn invalid_parameter(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// A rejected analyzer config, reported as the parameter it names.
    pub fn invalid_config(err: ConfigError) -> Self {
        match err {
            ConfigError::ValidationFailed { field, message }
            | ConfigError::InvalidValue { field, message } => {
                Self::InvalidParameter { name: field, message }
            }
            other => Self::Config(other),
        }
    }
}

impl FaultlineErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NodeNotFound { .. } => error_code::NODE_NOT_FOUND,
            Self::GraphAccess(e) => e.error_code(),
            Self::InvalidParameter { .. } => error_code::INVALID_PARAMETER,
            Self::Config(e) => e.error_code(),
        }
    }
}

/// Result alias used across the analyzers.
pub type FaultlineResult<T> = Result<T, AnalysisError>;
