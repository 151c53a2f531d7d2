//! Criterion benchmarks for faultline-analysis.
//!
//! - Downstream traversal over a wide fan-out (1 hub, 2K leaves)
//! - Upstream traversal over a deep chain (500 nodes)
//! - Criticality ranking over a layered plant (400 assets)

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use faultline_analysis::impact::ImpactAnalyzer;
use faultline_analysis::{InMemoryAssetGraph, TraversalEngine};
use faultline_core::config::ImpactConfig;
use faultline_core::models::{Asset, AssetStatus, EdgeType};

fn wide_graph(leaves: usize) -> InMemoryAssetGraph {
    let mut g = InMemoryAssetGraph::new();
    g.upsert_asset(Asset::new("HUB", "NetworkSwitch", AssetStatus::Online));
    for i in 0..leaves {
        let id = format!("LEAF-{i}");
        g.upsert_asset(Asset::new(&id, "Sensor", AssetStatus::Online));
        let _ = g.connect("HUB", &id, EdgeType::ConnectsTo);
    }
    g
}

fn deep_graph(depth: usize) -> InMemoryAssetGraph {
    let mut g = InMemoryAssetGraph::new();
    for i in 0..depth {
        g.upsert_asset(Asset::new(format!("N{i}"), "PLC", AssetStatus::Running));
    }
    for i in 1..depth {
        let _ = g.connect(&format!("N{}", i - 1), &format!("N{i}"), EdgeType::DependsOn);
    }
    g
}

/// `layers` layers of `width` assets, each asset feeding two in the next layer.
fn layered_graph(layers: usize, width: usize) -> InMemoryAssetGraph {
    let mut g = InMemoryAssetGraph::new();
    for l in 0..layers {
        for w in 0..width {
            g.upsert_asset(Asset::new(format!("L{l}-{w}"), "PLC", AssetStatus::Running));
        }
    }
    for l in 1..layers {
        for w in 0..width {
            let source = format!("L{}-{w}", l - 1);
            let _ = g.connect(&source, &format!("L{l}-{w}"), EdgeType::FeedsData);
            let _ = g.connect(&source, &format!("L{l}-{}", (w + 1) % width), EdgeType::Powers);
        }
    }
    g
}

fn bench_wide_downstream(c: &mut Criterion) {
    let g = wide_graph(2_000);
    c.bench_function("traverse_wide_downstream_2k", |b| {
        b.iter(|| {
            let result = TraversalEngine::new(&g)
                .downstream(black_box("HUB"), 5, None)
                .unwrap();
            black_box(result.len());
        })
    });
}

fn bench_deep_upstream(c: &mut Criterion) {
    let g = deep_graph(500);
    c.bench_function("traverse_deep_upstream_500", |b| {
        b.iter(|| {
            let result = TraversalEngine::new(&g)
                .upstream(black_box("N499"), 500, None)
                .unwrap();
            black_box(result.len());
        })
    });
}

fn bench_rank_criticality(c: &mut Criterion) {
    let g = layered_graph(20, 20);
    let config = ImpactConfig::default();
    let analyzer = ImpactAnalyzer::new(&g, &config).unwrap();
    c.bench_function("rank_criticality_400", |b| {
        b.iter(|| {
            let ranking = analyzer.rank_criticality().unwrap();
            black_box(ranking.len());
        })
    });
}

criterion_group!(
    benches,
    bench_wide_downstream,
    bench_deep_upstream,
    bench_rank_criticality
);
criterion_main!(benches);
