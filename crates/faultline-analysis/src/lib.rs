//! # faultline-analysis
//!
//! Diagnostic algorithms over the asset graph: bounded traversal, upstream
//! root-cause search, downstream cascade and blast-radius analysis,
//! criticality ranking, and intended-vs-actual configuration drift.

pub mod drift;
pub mod engine;
pub mod graph;
pub mod impact;
pub mod publish;
pub mod root_cause;
pub mod traversal;

pub use engine::DiagnosticEngine;
pub use graph::InMemoryAssetGraph;
pub use traversal::{TraversalEngine, TraversalHit, TraversalResult};
