//! Basic graph implementations.
//!
//! Two independent engines over 1-based vertex numbers: an adjacency list for
//! depth-first traversal and an adjacency matrix for all-pairs shortest paths.

pub mod adj_list;
pub mod adj_matrix;
pub mod algorithms;

pub use adj_list::{AdjListGraph, Neighbors};
pub use adj_matrix::{AdjMatrixGraph, AllPairsReport, PairReport, PathEntry, ShortestPathSummary, TraceMode};
pub use algorithms::{depth_first_forest, DepthFirstForest};
