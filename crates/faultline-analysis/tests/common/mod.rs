//! Shared graph builders for integration tests.
#![allow(dead_code)]

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use faultline_analysis::InMemoryAssetGraph;
use faultline_core::errors::{GraphError, GraphResult};
use faultline_core::models::{Asset, AssetStatus, Direction, EdgeType, Team};
use faultline_core::traits::{AssetGraph, Neighbor};

pub fn asset(id: &str, category: &str, status: AssetStatus) -> Asset {
    Asset::new(id, category, status)
}

pub fn graph_of(assets: Vec<Asset>, edges: &[(&str, &str, EdgeType)]) -> InMemoryAssetGraph {
    let mut g = InMemoryAssetGraph::new();
    for a in assets {
        g.upsert_asset(a);
    }
    for (source, target, edge_type) in edges {
        g.connect(source, target, *edge_type).unwrap();
    }
    g
}

/// A small production cell:
///
/// ```text
/// UPS-1 (failed) --POWERS--> SW-CORE (offline) --CONNECTS_TO--> PLC-1 (offline)
/// HIST-1 (running) --FEEDS_DATA--> PLC-1
/// PLC-1 --CONTROLS--> ROBOT-1 (error)
/// PLC-1 --FEEDS_DATA--> HMI-1 (warning)
/// SW-CORE --OWNED_BY--> Network Infrastructure
/// PLC-1 --OWNED_BY--> Controls Engineering
/// ```
pub fn factory_graph() -> InMemoryAssetGraph {
    let network = Team {
        name: "Network Infrastructure".to_string(),
        lead: Some("D. Kim".to_string()),
        contact: None,
        channel: Some("#network-ops".to_string()),
        on_call: None,
    }
    .to_asset();
    let controls = Team {
        name: "Controls Engineering".to_string(),
        lead: None,
        contact: None,
        channel: None,
        on_call: None,
    }
    .to_asset();

    graph_of(
        vec![
            asset("UPS-1", "UPS", AssetStatus::Failed).with_failure_reason("battery depleted"),
            asset("SW-CORE", "NetworkSwitch", AssetStatus::Offline)
                .with_failure_reason("lost power"),
            asset("PLC-1", "PLC", AssetStatus::Offline),
            asset("HIST-1", "Historian", AssetStatus::Running),
            asset("ROBOT-1", "Robot", AssetStatus::Error),
            asset("HMI-1", "HMI", AssetStatus::Warning),
            network,
            controls,
        ],
        &[
            ("UPS-1", "SW-CORE", EdgeType::Powers),
            ("SW-CORE", "PLC-1", EdgeType::ConnectsTo),
            ("HIST-1", "PLC-1", EdgeType::FeedsData),
            ("PLC-1", "ROBOT-1", EdgeType::Controls),
            ("PLC-1", "HMI-1", EdgeType::FeedsData),
            ("SW-CORE", "Network Infrastructure", EdgeType::OwnedBy),
            ("PLC-1", "Controls Engineering", EdgeType::OwnedBy),
        ],
    )
}

/// `N0 -> N1 -> ... -> N{n-1}` over DEPENDS_ON, all running.
pub fn linear_chain(n: usize) -> InMemoryAssetGraph {
    let mut g = InMemoryAssetGraph::new();
    for i in 0..n {
        g.upsert_asset(asset(&format!("N{i}"), "Sensor", AssetStatus::Running));
    }
    for i in 1..n {
        g.connect(&format!("N{}", i - 1), &format!("N{i}"), EdgeType::DependsOn)
            .unwrap();
    }
    g
}

/// A graph whose neighbor queries time out after `fail_after` successful calls.
pub struct FailingGraph {
    pub inner: InMemoryAssetGraph,
    pub fail_after: usize,
    calls: AtomicUsize,
}

impl FailingGraph {
    pub fn new(inner: InMemoryAssetGraph, fail_after: usize) -> Self {
        Self {
            inner,
            fail_after,
            calls: AtomicUsize::new(0),
        }
    }
}

impl AssetGraph for FailingGraph {
    fn get_node(&self, id: &str) -> GraphResult<Option<Asset>> {
        self.inner.get_node(id)
    }

    fn get_neighbors(
        &self,
        id: &str,
        direction: Direction,
        edge_types: Option<&BTreeSet<EdgeType>>,
    ) -> GraphResult<Vec<Neighbor>> {
        if self.calls.fetch_add(1, Ordering::SeqCst) >= self.fail_after {
            return Err(GraphError::Timeout { timeout_ms: 250 });
        }
        self.inner.get_neighbors(id, direction, edge_types)
    }

    fn find_nodes_by_status(&self, statuses: &BTreeSet<AssetStatus>) -> GraphResult<Vec<Asset>> {
        self.inner.find_nodes_by_status(statuses)
    }
}
