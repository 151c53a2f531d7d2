//! Error handling for Faultline.
//! One error enum per concern, `thiserror` only.

pub mod analysis_error;
pub mod config_error;
pub mod error_code;
pub mod graph_error;

pub use analysis_error::{AnalysisError, FaultlineResult};
pub use config_error::ConfigError;
pub use error_code::FaultlineErrorCode;
pub use graph_error::{GraphError, GraphResult};
