//! Root-cause analysis: nearest failing upstream assets of a failing asset.

pub mod analyzer;
pub mod narrative;
pub mod playbook;
pub mod types;

pub use analyzer::RootCauseAnalyzer;
pub use types::{
    ChainLink, DetailedAnalysis, Evidence, RootCause, RootCauseOutcome, RootCauseResult,
    UpstreamFailure,
};
