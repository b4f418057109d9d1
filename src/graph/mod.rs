//! Graph engines and the traversals built on them.
//!
//! - `basic`: the adjacency-list and adjacency-matrix engines

pub mod basic;
pub(crate) mod access;

// Re-export commonly used types from submodules
pub use basic::{AdjListGraph, AdjMatrixGraph, DepthFirstForest, PathEntry, TraceMode};
