//! Asset graph data model: assets, relationships, teams, severities.

pub mod asset;
pub mod relationship;
pub mod severity;
pub mod team;

pub use asset::{attributes, Asset, AssetStatus, AssetSummary};
pub use relationship::{Direction, EdgeType, Relationship};
pub use severity::Severity;
pub use team::Team;
