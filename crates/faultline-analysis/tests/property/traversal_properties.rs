//! Property tests for bounded BFS traversal.

#[path = "../common/mod.rs"]
mod common;

use std::collections::{BTreeMap, VecDeque};

use faultline_analysis::{InMemoryAssetGraph, TraversalEngine};
use faultline_core::models::{AssetStatus, EdgeType};
use proptest::prelude::*;

/// Random directed graph over `n` nodes, self-loops and cycles allowed.
fn arb_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..24).prop_flat_map(|n| {
        let edges = prop::collection::vec((0..n, 0..n), 0..n * 3);
        (Just(n), edges)
    })
}

fn build(n: usize, edges: &[(usize, usize)]) -> InMemoryAssetGraph {
    let mut g = InMemoryAssetGraph::new();
    for i in 0..n {
        g.upsert_asset(common::asset(&format!("N{i}"), "Sensor", AssetStatus::Online));
    }
    for &(a, b) in edges {
        g.connect(&format!("N{a}"), &format!("N{b}"), EdgeType::DependsOn)
            .unwrap();
    }
    g
}

/// Reference shortest distances from node 0 along outgoing edges.
fn reference_distances(n: usize, edges: &[(usize, usize)]) -> BTreeMap<String, usize> {
    let mut adjacency = vec![Vec::new(); n];
    for &(a, b) in edges {
        adjacency[a].push(b);
    }
    let mut dist = vec![usize::MAX; n];
    dist[0] = 0;
    let mut queue = VecDeque::from([0]);
    while let Some(u) = queue.pop_front() {
        for &v in &adjacency[u] {
            if dist[v] == usize::MAX {
                dist[v] = dist[u] + 1;
                queue.push_back(v);
            }
        }
    }
    (1..n)
        .filter(|&i| dist[i] != usize::MAX)
        .map(|i| (format!("N{i}"), dist[i]))
        .collect()
}

proptest! {
    #[test]
    fn unbounded_traversal_matches_shortest_paths((n, edges) in arb_graph()) {
        let g = build(n, &edges);
        let result = TraversalEngine::new(&g).downstream("N0", n + 1, None).unwrap();

        let found: BTreeMap<String, usize> = result
            .hits
            .iter()
            .map(|h| (h.asset.id.clone(), h.hops))
            .collect();
        prop_assert_eq!(found.len(), result.hits.len(), "duplicate node in hits");
        prop_assert_eq!(found, reference_distances(n, &edges));
        prop_assert!(!result.truncated);
    }

    #[test]
    fn bounded_traversal_respects_bound((n, edges) in arb_graph(), max_hops in 1usize..4) {
        let g = build(n, &edges);
        let result = TraversalEngine::new(&g).downstream("N0", max_hops, None).unwrap();
        let reference = reference_distances(n, &edges);

        prop_assert!(result.hits.iter().all(|h| h.hops <= max_hops));
        prop_assert!(result.hits.windows(2).all(|w| w[0].hops <= w[1].hops));
        let expected = reference.values().filter(|&&d| d <= max_hops).count();
        prop_assert_eq!(result.hits.len(), expected);
        prop_assert_eq!(result.truncated, reference.values().any(|&d| d > max_hops));
    }

    #[test]
    fn path_to_ends_at_hit((n, edges) in arb_graph()) {
        let g = build(n, &edges);
        let result = TraversalEngine::new(&g).downstream("N0", n + 1, None).unwrap();
        for hit in &result.hits {
            let path = result.path_to(hit.id()).unwrap();
            prop_assert_eq!(path.len(), hit.hops);
            prop_assert_eq!(path.last().map(|h| h.id()), Some(hit.id()));
            prop_assert_eq!(hit.path_edge_types.len(), hit.hops);
        }
    }
}
