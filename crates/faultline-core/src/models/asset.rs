//! Factory assets and their operational status.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Severity;

/// Well-known keys in an asset's attribute bag.
pub mod attributes {
    pub const IP_ADDRESS: &str = "ipAddress";
    pub const VERSION: &str = "version";
    pub const CONFIG_CHECKSUM: &str = "configChecksum";
    pub const SECURITY_ZONE: &str = "securityZone";
    pub const LAST_SEEN: &str = "lastSeen";
    pub const LOCATION: &str = "location";
}

/// Operational status reported for an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetStatus {
    Online,
    Running,
    Offline,
    Error,
    Failed,
    Degraded,
    Warning,
    Unreachable,
}

impl AssetStatus {
    /// Total number of status variants.
    pub const COUNT: usize = 8;

    /// All variants for iteration.
    pub const ALL: [AssetStatus; 8] = [
        Self::Online,
        Self::Running,
        Self::Offline,
        Self::Error,
        Self::Failed,
        Self::Degraded,
        Self::Warning,
        Self::Unreachable,
    ];

    /// Parse from string (matching the serde rename). Case-sensitive.
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s {
            "online" => Some(Self::Online),
            "running" => Some(Self::Running),
            "offline" => Some(Self::Offline),
            "error" => Some(Self::Error),
            "failed" => Some(Self::Failed),
            "degraded" => Some(Self::Degraded),
            "warning" => Some(Self::Warning),
            "unreachable" => Some(Self::Unreachable),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Running => "running",
            Self::Offline => "offline",
            Self::Error => "error",
            Self::Failed => "failed",
            Self::Degraded => "degraded",
            Self::Warning => "warning",
            Self::Unreachable => "unreachable",
        }
    }

    /// Whether the asset is serving normally.
    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Online | Self::Running)
    }

    /// Incident severity implied by an asset being in this status.
    pub fn incident_severity(&self) -> Severity {
        match self {
            Self::Failed | Self::Offline => Severity::Critical,
            Self::Error | Self::Unreachable => Severity::High,
            Self::Degraded | Self::Warning => Severity::Medium,
            Self::Online | Self::Running => Severity::Low,
        }
    }
}

impl std::fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node of the asset graph.
///
/// Created and updated by discovery outside the engine; analyzers only read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Unique asset name.
    pub id: String,
    /// Asset type, e.g. `PLC`, `Sensor`, `NetworkSwitch`, `Team`.
    pub category: String,
    pub status: AssetStatus,
    /// Recorded reason for the most recent failure, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    /// Free-form attribute bag (IP address, version, checksum, zone, ...).
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl Asset {
    pub fn new(id: impl Into<String>, category: impl Into<String>, status: AssetStatus) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            status,
            failure_reason: None,
            attributes: BTreeMap::new(),
        }
    }

    /// Builder-style failure reason.
    pub fn with_failure_reason(mut self, reason: impl Into<String>) -> Self {
        self.failure_reason = Some(reason.into());
        self
    }

    /// Builder-style attribute insertion.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Compact view used inside analysis results.
    pub fn summary(&self) -> AssetSummary {
        AssetSummary {
            id: self.id.clone(),
            category: self.category.clone(),
            status: self.status,
            failure_reason: self.failure_reason.clone(),
        }
    }
}

/// The identity, type, and status of an asset as reported in results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetSummary {
    pub id: String,
    pub category: String,
    pub status: AssetStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
}
