//! Directed, typed relationships between assets.

use serde::{Deserialize, Serialize};

/// Relationship types in the asset graph.
///
/// An edge `source -> target` means the target depends on the source:
/// if the source fails, the target may be impacted. `OwnedBy` is the
/// exception; it links an asset to its owning team and carries no dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EdgeType {
    Powers,
    ConnectsTo,
    FeedsData,
    DependsOn,
    Controls,
    OwnedBy,
}

impl EdgeType {
    /// All variants for iteration.
    pub const ALL: [EdgeType; 6] = [
        Self::Powers,
        Self::ConnectsTo,
        Self::FeedsData,
        Self::DependsOn,
        Self::Controls,
        Self::OwnedBy,
    ];

    /// Whether this edge type propagates failures.
    pub fn is_dependency(&self) -> bool {
        !matches!(self, Self::OwnedBy)
    }

    /// Parse from string (matching the serde rename).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s {
            "POWERS" => Some(Self::Powers),
            "CONNECTS_TO" => Some(Self::ConnectsTo),
            "FEEDS_DATA" => Some(Self::FeedsData),
            "DEPENDS_ON" => Some(Self::DependsOn),
            "CONTROLS" => Some(Self::Controls),
            "OWNED_BY" => Some(Self::OwnedBy),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Powers => "POWERS",
            Self::ConnectsTo => "CONNECTS_TO",
            Self::FeedsData => "FEEDS_DATA",
            Self::DependsOn => "DEPENDS_ON",
            Self::Controls => "CONTROLS",
            Self::OwnedBy => "OWNED_BY",
        }
    }
}

impl std::fmt::Display for EdgeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which way to follow dependency edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Follow incoming edges: the things a node depends on.
    Upstream,
    /// Follow outgoing edges: the things that depend on a node.
    Downstream,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upstream => "upstream",
            Self::Downstream => "downstream",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directed edge as returned by the graph access layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub source: String,
    pub target: String,
    pub edge_type: EdgeType,
}

impl Relationship {
    pub fn new(source: impl Into<String>, target: impl Into<String>, edge_type: EdgeType) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            edge_type,
        }
    }
}
