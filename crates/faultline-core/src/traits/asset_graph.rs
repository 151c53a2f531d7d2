//! Graph access layer: read-only queries against the asset graph.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::errors::GraphResult;
use crate::models::{Asset, AssetStatus, Direction, EdgeType, Relationship};

/// A relationship together with the asset on its far end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    pub edge: Relationship,
    pub node: Asset,
}

/// Read-only access to a property graph of assets.
///
/// The engine holds no state between calls, so implementations may block on
/// I/O. Every method may fail with a `GraphError`, which callers propagate.
pub trait AssetGraph: Send + Sync {
    /// Fetch a node by its identity. `Ok(None)` means the node does not exist.
    fn get_node(&self, id: &str) -> GraphResult<Option<Asset>>;

    /// Direct neighbors of `id`.
    ///
    /// `Upstream` yields the sources of incoming edges, `Downstream` the
    /// targets of outgoing edges. `edge_types = None` accepts every type.
    /// An unknown `id` yields an empty list.
    fn get_neighbors(
        &self,
        id: &str,
        direction: Direction,
        edge_types: Option<&BTreeSet<EdgeType>>,
    ) -> GraphResult<Vec<Neighbor>>;

    /// All nodes whose status is in `statuses`.
    fn find_nodes_by_status(&self, statuses: &BTreeSet<AssetStatus>) -> GraphResult<Vec<Asset>>;
}

impl<G: AssetGraph + ?Sized> AssetGraph for std::sync::Arc<G> {
    fn get_node(&self, id: &str) -> GraphResult<Option<Asset>> {
        (**self).get_node(id)
    }

    fn get_neighbors(
        &self,
        id: &str,
        direction: Direction,
        edge_types: Option<&BTreeSet<EdgeType>>,
    ) -> GraphResult<Vec<Neighbor>> {
        (**self).get_neighbors(id, direction, edge_types)
    }

    fn find_nodes_by_status(&self, statuses: &BTreeSet<AssetStatus>) -> GraphResult<Vec<Asset>> {
        (**self).find_nodes_by_status(statuses)
    }
}
