//! # faultline-core
//!
//! Foundation crate for the Faultline diagnostic engine.
//! Defines the asset data model, the graph access contract, errors, config,
//! and tracing setup. Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::FaultlineConfig;
pub use errors::{AnalysisError, FaultlineResult, GraphError};
pub use models::{Asset, AssetStatus, Direction, EdgeType, Relationship, Severity, Team};
pub use traits::{AssetGraph, Neighbor};
