//! Intended-vs-actual configuration drift detection.
//!
//! Detection is pure: it never triggers remediation. Executing an action is
//! the caller's job.

pub mod actions;
pub mod detector;
pub mod report;
pub mod types;

pub use detector::{aggregate_status, DriftDetector};
pub use report::{DriftReport, DriftSummary};
pub use types::{
    ActualState, DriftRecord, DriftStatus, FieldDrift, IntendedConfig, RemediationAction,
    SourceRef,
};
