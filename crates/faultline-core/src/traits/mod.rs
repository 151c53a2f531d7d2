//! Seams between the engine and its collaborators.

pub mod asset_graph;

pub use asset_graph::{AssetGraph, Neighbor};
