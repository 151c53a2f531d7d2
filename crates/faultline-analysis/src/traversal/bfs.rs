//! Bounded BFS with a visited set keyed by asset id.

use std::collections::{BTreeSet, VecDeque};

use faultline_core::errors::{AnalysisError, FaultlineResult};
use faultline_core::models::{Direction, EdgeType};
use faultline_core::traits::{AssetGraph, Neighbor};
use faultline_core::types::collections::{FxHashSet, SmallVec4};

use super::{TraversalHit, TraversalResult};

/// Traverse from `start_id`, emitting each reachable node once at its
/// shortest hop distance.
pub fn traverse<G: AssetGraph + ?Sized>(
    graph: &G,
    start_id: &str,
    direction: Direction,
    max_hops: usize,
    edge_types: Option<&BTreeSet<EdgeType>>,
) -> FaultlineResult<TraversalResult> {
    if max_hops == 0 {
        return Err(AnalysisError::invalid_parameter(
            "max_hops",
            "must be at least 1",
        ));
    }
    let start = graph
        .get_node(start_id)?
        .ok_or_else(|| AnalysisError::node_not_found(start_id))?;

    let mut result = TraversalResult {
        origin: start.summary(),
        direction,
        max_hops,
        hits: Vec::new(),
        max_depth_reached: 0,
        truncated: false,
    };

    let mut visited: FxHashSet<String> = FxHashSet::default();
    visited.insert(start.id.clone());

    // (asset id, depth, index of its hit; None for the origin)
    let mut queue: VecDeque<(String, usize, Option<usize>)> = VecDeque::new();
    queue.push_back((start.id, 0, None));

    while let Some((current, depth, hit_idx)) = queue.pop_front() {
        if depth >= max_hops {
            // Every node at this depth is already visited, so an unvisited
            // neighbor lies strictly beyond the bound.
            if !result.truncated {
                result.truncated = graph
                    .get_neighbors(&current, direction, edge_types)?
                    .iter()
                    .any(|n| !visited.contains(&n.node.id));
            }
            continue;
        }

        for neighbor in sorted_neighbors(graph, &current, direction, edge_types)? {
            if !visited.insert(neighbor.node.id.clone()) {
                continue;
            }
            let mut path: SmallVec4<EdgeType> = hit_idx
                .map(|idx| result.hits[idx].path_edge_types.clone())
                .unwrap_or_default();
            path.push(neighbor.edge.edge_type);

            let new_depth = depth + 1;
            result.max_depth_reached = result.max_depth_reached.max(new_depth);
            let id = neighbor.node.id.clone();
            result.hits.push(TraversalHit {
                asset: neighbor.node,
                hops: new_depth,
                path_edge_types: path,
                parent: current.clone(),
            });
            queue.push_back((id, new_depth, Some(result.hits.len() - 1)));
        }
    }

    tracing::debug!(
        origin = %result.origin.id,
        direction = %direction,
        max_hops,
        hits = result.hits.len(),
        max_depth = result.max_depth_reached,
        truncated = result.truncated,
        "traversal complete"
    );

    Ok(result)
}

/// Neighbors ordered by id, then edge type, so results do not depend on the
/// store's adjacency order.
fn sorted_neighbors<G: AssetGraph + ?Sized>(
    graph: &G,
    id: &str,
    direction: Direction,
    edge_types: Option<&BTreeSet<EdgeType>>,
) -> FaultlineResult<Vec<Neighbor>> {
    let mut neighbors = graph.get_neighbors(id, direction, edge_types)?;
    neighbors.sort_by(|a, b| {
        a.node
            .id
            .cmp(&b.node.id)
            .then(a.edge.edge_type.cmp(&b.edge.edge_type))
    });
    Ok(neighbors)
}
