//! In-memory asset graph backed by petgraph::StableGraph.

use std::collections::BTreeSet;

use faultline_core::errors::{GraphError, GraphResult};
use faultline_core::models::{Asset, AssetStatus, Direction, EdgeType, Relationship};
use faultline_core::traits::{AssetGraph, Neighbor};
use faultline_core::types::collections::FxHashMap;
use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::visit::EdgeRef;
use petgraph::Directed;

/// The underlying directed graph type.
pub type AssetStableGraph = StableGraph<Asset, EdgeType, Directed>;

/// A snapshot of the asset graph held in memory.
///
/// Nodes are keyed by asset id; edges carry their `EdgeType`. Parallel edges
/// of different types between the same pair are kept.
#[derive(Debug, Clone)]
pub struct InMemoryAssetGraph {
    graph: AssetStableGraph,
    /// Map from asset id → NodeIndex for O(1) lookup.
    node_index: FxHashMap<String, NodeIndex>,
}

impl InMemoryAssetGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            graph: StableGraph::new(),
            node_index: FxHashMap::default(),
        }
    }

    /// Insert an asset, or replace the stored asset with the same id.
    pub fn upsert_asset(&mut self, asset: Asset) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(&asset.id) {
            if let Some(slot) = self.graph.node_weight_mut(idx) {
                *slot = asset;
            }
            return idx;
        }
        let id = asset.id.clone();
        let idx = self.graph.add_node(asset);
        self.node_index.insert(id, idx);
        idx
    }

    /// Add a directed edge. Both endpoints must already exist.
    ///
    /// Adding an edge that is already present is a no-op.
    pub fn add_relationship(&mut self, relationship: Relationship) -> GraphResult<()> {
        let (Some(&from), Some(&to)) = (
            self.node_index.get(&relationship.source),
            self.node_index.get(&relationship.target),
        ) else {
            return Err(GraphError::DanglingEdge {
                source_id: relationship.source,
                target_id: relationship.target,
            });
        };
        let exists = self
            .graph
            .edges_connecting(from, to)
            .any(|e| *e.weight() == relationship.edge_type);
        if !exists {
            self.graph.add_edge(from, to, relationship.edge_type);
        }
        Ok(())
    }

    /// Convenience wrapper over [`add_relationship`](Self::add_relationship).
    pub fn connect(&mut self, source: &str, target: &str, edge_type: EdgeType) -> GraphResult<()> {
        self.add_relationship(Relationship::new(source, target, edge_type))
    }

    /// Every asset in the graph, ordered by id.
    pub fn assets(&self) -> Vec<&Asset> {
        let mut assets: Vec<&Asset> = self.graph.node_weights().collect();
        assets.sort_by(|a, b| a.id.cmp(&b.id));
        assets
    }

    pub fn contains(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl Default for InMemoryAssetGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetGraph for InMemoryAssetGraph {
    fn get_node(&self, id: &str) -> GraphResult<Option<Asset>> {
        Ok(self
            .node_index
            .get(id)
            .and_then(|&idx| self.graph.node_weight(idx))
            .cloned())
    }

    fn get_neighbors(
        &self,
        id: &str,
        direction: Direction,
        edge_types: Option<&BTreeSet<EdgeType>>,
    ) -> GraphResult<Vec<Neighbor>> {
        let Some(&idx) = self.node_index.get(id) else {
            return Ok(Vec::new());
        };
        let pg_direction = match direction {
            Direction::Upstream => petgraph::Direction::Incoming,
            Direction::Downstream => petgraph::Direction::Outgoing,
        };

        let mut neighbors = Vec::new();
        for edge in self.graph.edges_directed(idx, pg_direction) {
            let edge_type = *edge.weight();
            if edge_types.is_some_and(|allowed| !allowed.contains(&edge_type)) {
                continue;
            }
            let (Some(source), Some(target)) = (
                self.graph.node_weight(edge.source()),
                self.graph.node_weight(edge.target()),
            ) else {
                continue;
            };
            let node = match direction {
                Direction::Upstream => source,
                Direction::Downstream => target,
            };
            neighbors.push(Neighbor {
                edge: Relationship::new(&source.id, &target.id, edge_type),
                node: node.clone(),
            });
        }
        Ok(neighbors)
    }

    fn find_nodes_by_status(&self, statuses: &BTreeSet<AssetStatus>) -> GraphResult<Vec<Asset>> {
        let mut nodes: Vec<Asset> = self
            .graph
            .node_weights()
            .filter(|asset| statuses.contains(&asset.status))
            .cloned()
            .collect();
        nodes.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(nodes)
    }
}
