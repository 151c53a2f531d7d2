//! Team ownership records, attached to assets through `OWNED_BY` edges.

use serde::{Deserialize, Serialize};

use super::Asset;

/// Category name of team nodes in the asset graph.
pub const TEAM_CATEGORY: &str = "Team";

/// Attribute keys a team node carries.
pub mod team_attributes {
    pub const LEAD: &str = "lead";
    pub const CONTACT: &str = "contact";
    pub const CHANNEL: &str = "channel";
    pub const ON_CALL: &str = "onCall";
}

/// Owning team of an asset. Used for attribution only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub name: String,
    pub lead: Option<String>,
    pub contact: Option<String>,
    pub channel: Option<String>,
    pub on_call: Option<String>,
}

impl Team {
    /// Read a team from a graph node. Returns `None` for non-team nodes.
    pub fn from_asset(asset: &Asset) -> Option<Self> {
        if asset.category != TEAM_CATEGORY {
            return None;
        }
        let attr = |key: &str| asset.attribute(key).map(str::to_string);
        Some(Self {
            name: asset.id.clone(),
            lead: attr(team_attributes::LEAD),
            contact: attr(team_attributes::CONTACT),
            channel: attr(team_attributes::CHANNEL),
            on_call: attr(team_attributes::ON_CALL),
        })
    }

    /// Build the graph node representing this team.
    pub fn to_asset(&self) -> Asset {
        let mut asset = Asset::new(&self.name, TEAM_CATEGORY, super::AssetStatus::Online);
        let fields = [
            (team_attributes::LEAD, &self.lead),
            (team_attributes::CONTACT, &self.contact),
            (team_attributes::CHANNEL, &self.channel),
            (team_attributes::ON_CALL, &self.on_call),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                asset.attributes.insert(key.to_string(), value.clone());
            }
        }
        asset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AssetStatus;

    #[test]
    fn test_team_node_round_trip() {
        let team = Team {
            name: "Network Infrastructure".to_string(),
            lead: Some("D. Kim".to_string()),
            contact: None,
            channel: Some("#network-ops".to_string()),
            on_call: Some("+1-555-0104".to_string()),
        };
        let node = team.to_asset();
        assert_eq!(node.category, TEAM_CATEGORY);
        assert_eq!(Team::from_asset(&node), Some(team));
    }

    #[test]
    fn test_non_team_node_is_ignored() {
        let plc = Asset::new("PLC-001", "PLC", AssetStatus::Running);
        assert!(Team::from_asset(&plc).is_none());
    }
}
