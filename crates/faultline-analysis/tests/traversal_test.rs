//! Bounded BFS traversal tests.

mod common;

use std::collections::BTreeSet;

use common::{asset, factory_graph, graph_of, linear_chain, FailingGraph};
use faultline_analysis::TraversalEngine;
use faultline_core::errors::{AnalysisError, GraphError};
use faultline_core::models::{AssetStatus, Direction, EdgeType};

#[test]
fn test_downstream_linear_chain_distances() {
    let g = linear_chain(5);
    let result = TraversalEngine::new(&g)
        .downstream("N0", 10, None)
        .unwrap();

    let hops: Vec<(String, usize)> = result
        .hits
        .iter()
        .map(|h| (h.asset.id.clone(), h.hops))
        .collect();
    assert_eq!(
        hops,
        vec![
            ("N1".to_string(), 1),
            ("N2".to_string(), 2),
            ("N3".to_string(), 3),
            ("N4".to_string(), 4)
        ]
    );
    assert_eq!(result.max_depth_reached, 4);
    assert!(!result.truncated);
}

#[test]
fn test_hop_bound_truncates() {
    let g = linear_chain(5);
    let result = TraversalEngine::new(&g).downstream("N0", 2, None).unwrap();
    assert_eq!(result.len(), 2);
    assert_eq!(result.max_depth_reached, 2);
    assert!(result.truncated);
}

#[test]
fn test_bound_exactly_at_end_is_not_truncated() {
    let g = linear_chain(3);
    let result = TraversalEngine::new(&g).downstream("N0", 2, None).unwrap();
    assert_eq!(result.len(), 2);
    assert!(!result.truncated);
}

#[test]
fn test_upstream_follows_incoming_edges() {
    let g = linear_chain(4);
    let result = TraversalEngine::new(&g).upstream("N3", 5, None).unwrap();
    let ids: Vec<&str> = result.hits.iter().map(|h| h.id()).collect();
    assert_eq!(ids, vec!["N2", "N1", "N0"]);
    assert_eq!(result.direction, Direction::Upstream);
}

#[test]
fn test_cycle_terminates_without_duplicates() {
    // A -> B -> C -> A, plus a self-loop on B.
    let g = graph_of(
        vec![
            asset("A", "PLC", AssetStatus::Running),
            asset("B", "PLC", AssetStatus::Running),
            asset("C", "PLC", AssetStatus::Running),
        ],
        &[
            ("A", "B", EdgeType::DependsOn),
            ("B", "C", EdgeType::DependsOn),
            ("C", "A", EdgeType::DependsOn),
            ("B", "B", EdgeType::DependsOn),
        ],
    );
    let result = TraversalEngine::new(&g).downstream("A", 100, None).unwrap();
    let ids: Vec<&str> = result.hits.iter().map(|h| h.id()).collect();
    assert_eq!(ids, vec!["B", "C"]);
    assert!(!result.truncated);
}

#[test]
fn test_diamond_keeps_shortest_distance() {
    // A -> B -> D, A -> C -> D, A -> D
    let g = graph_of(
        vec![
            asset("A", "PLC", AssetStatus::Running),
            asset("B", "PLC", AssetStatus::Running),
            asset("C", "PLC", AssetStatus::Running),
            asset("D", "PLC", AssetStatus::Running),
        ],
        &[
            ("A", "B", EdgeType::DependsOn),
            ("A", "C", EdgeType::DependsOn),
            ("B", "D", EdgeType::DependsOn),
            ("C", "D", EdgeType::DependsOn),
            ("A", "D", EdgeType::Powers),
        ],
    );
    let result = TraversalEngine::new(&g).downstream("A", 5, None).unwrap();
    assert_eq!(result.len(), 3);
    let d = result.get("D").unwrap();
    assert_eq!(d.hops, 1);
    assert_eq!(d.parent, "A");
    assert_eq!(d.via(), Some(EdgeType::Powers));
}

#[test]
fn test_hops_never_decrease() {
    let g = factory_graph();
    let result = TraversalEngine::new(&g)
        .upstream("ROBOT-1", 10, None)
        .unwrap();
    assert!(result.hits.windows(2).all(|w| w[0].hops <= w[1].hops));
}

#[test]
fn test_edge_type_filter_and_path() {
    let g = factory_graph();
    let filter: BTreeSet<EdgeType> = [EdgeType::Powers, EdgeType::ConnectsTo]
        .into_iter()
        .collect();
    let result = TraversalEngine::new(&g)
        .upstream("PLC-1", 5, Some(&filter))
        .unwrap();
    let ids: Vec<&str> = result.hits.iter().map(|h| h.id()).collect();
    // HIST-1 only reaches PLC-1 over FEEDS_DATA.
    assert_eq!(ids, vec!["SW-CORE", "UPS-1"]);

    let ups = result.get("UPS-1").unwrap();
    assert_eq!(
        ups.path_edge_types.as_slice(),
        &[EdgeType::ConnectsTo, EdgeType::Powers]
    );
    let path: Vec<&str> = result
        .path_to("UPS-1")
        .unwrap()
        .iter()
        .map(|h| h.id())
        .collect();
    assert_eq!(path, vec!["SW-CORE", "UPS-1"]);
    assert!(result.path_to("HIST-1").is_none());
}

#[test]
fn test_disconnected_start_is_empty_not_error() {
    let g = graph_of(vec![asset("LONE", "Sensor", AssetStatus::Online)], &[]);
    let result = TraversalEngine::new(&g)
        .traverse("LONE", Direction::Downstream, 3, None)
        .unwrap();
    assert!(result.is_empty());
    assert_eq!(result.max_depth_reached, 0);
    assert!(!result.truncated);
    assert_eq!(result.origin.id, "LONE");
}

#[test]
fn test_zero_hops_rejected() {
    let g = linear_chain(2);
    let err = TraversalEngine::new(&g).downstream("N0", 0, None).unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidParameter { .. }));
}

#[test]
fn test_missing_start_is_node_not_found() {
    let g = linear_chain(2);
    let err = TraversalEngine::new(&g).downstream("N9", 3, None).unwrap_err();
    assert_eq!(err, AnalysisError::node_not_found("N9"));
}

#[test]
fn test_graph_failure_propagates() {
    let g = FailingGraph::new(linear_chain(4), 1);
    let err = TraversalEngine::new(&g).downstream("N0", 5, None).unwrap_err();
    assert_eq!(
        err,
        AnalysisError::GraphAccess(GraphError::Timeout { timeout_ms: 250 })
    );
}
