//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;
pub use std::collections::BTreeSet;

/// SmallVec sized for edge-type paths (hop bounds keep these short).
pub type SmallVec4<T> = SmallVec<[T; 4]>;
