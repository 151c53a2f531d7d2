//! Traversal engine: bounded breadth-first search over the asset graph.

pub mod bfs;

use std::collections::BTreeSet;

use faultline_core::errors::FaultlineResult;
use faultline_core::models::{Asset, AssetSummary, Direction, EdgeType};
use faultline_core::traits::AssetGraph;
use faultline_core::types::collections::SmallVec4;
use serde::{Deserialize, Serialize};

/// A node discovered during traversal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraversalHit {
    pub asset: Asset,
    /// Shortest hop distance from the origin.
    pub hops: usize,
    /// Edge types along the discovery path, origin first.
    pub path_edge_types: SmallVec4<EdgeType>,
    /// The node this one was discovered from (the origin for hop 1).
    pub parent: String,
}

impl TraversalHit {
    pub fn id(&self) -> &str {
        &self.asset.id
    }

    /// The edge type connecting this hit to its parent.
    pub fn via(&self) -> Option<EdgeType> {
        self.path_edge_types.last().copied()
    }
}

/// Result of a traversal operation.
///
/// `hits` are in discovery order, so `hops` never decreases along the list.
/// The origin itself is not a hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraversalResult {
    pub origin: AssetSummary,
    pub direction: Direction,
    pub max_hops: usize,
    pub hits: Vec<TraversalHit>,
    /// Largest hop distance among the hits, 0 when there are none.
    pub max_depth_reached: usize,
    /// True when the hop bound stopped the search while unvisited nodes
    /// were still reachable.
    pub truncated: bool,
}

impl TraversalResult {
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&TraversalHit> {
        self.hits.iter().find(|hit| hit.asset.id == id)
    }

    /// Hits at exactly `hops` from the origin.
    pub fn at_hops(&self, hops: usize) -> impl Iterator<Item = &TraversalHit> {
        self.hits.iter().filter(move |hit| hit.hops == hops)
    }

    /// Hits from hop 1 down to `id`, following discovery parents.
    /// Returns `None` if `id` was not discovered.
    pub fn path_to(&self, id: &str) -> Option<Vec<&TraversalHit>> {
        let mut path = Vec::new();
        let mut current = self.get(id)?;
        loop {
            path.push(current);
            if current.parent == self.origin.id {
                break;
            }
            // Parents are always discovered before their children.
            current = self.get(&current.parent)?;
        }
        path.reverse();
        Some(path)
    }
}

/// The traversal engine wraps a graph handle.
pub struct TraversalEngine<'g, G: AssetGraph + ?Sized> {
    graph: &'g G,
}

impl<'g, G: AssetGraph + ?Sized> TraversalEngine<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    /// Breadth-first traversal from `start_id`.
    ///
    /// Fails with `InvalidParameter` when `max_hops` is 0 and `NodeNotFound`
    /// when the start asset does not exist. `edge_types = None` follows every
    /// edge type.
    pub fn traverse(
        &self,
        start_id: &str,
        direction: Direction,
        max_hops: usize,
        edge_types: Option<&BTreeSet<EdgeType>>,
    ) -> FaultlineResult<TraversalResult> {
        bfs::traverse(self.graph, start_id, direction, max_hops, edge_types)
    }

    /// Upstream traversal: the assets `start_id` depends on.
    pub fn upstream(
        &self,
        start_id: &str,
        max_hops: usize,
        edge_types: Option<&BTreeSet<EdgeType>>,
    ) -> FaultlineResult<TraversalResult> {
        self.traverse(start_id, Direction::Upstream, max_hops, edge_types)
    }

    /// Downstream traversal: the assets that depend on `start_id`.
    pub fn downstream(
        &self,
        start_id: &str,
        max_hops: usize,
        edge_types: Option<&BTreeSet<EdgeType>>,
    ) -> FaultlineResult<TraversalResult> {
        self.traverse(start_id, Direction::Downstream, max_hops, edge_types)
    }
}
