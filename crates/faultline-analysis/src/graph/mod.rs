//! Graph access layer backends.

pub mod memory;

pub use memory::InMemoryAssetGraph;
