//! # `routegraph` - Adjacency List and Adjacency Matrix Graph Engines
//!
//! Two small, independent, in-memory graph engines over a fixed set of
//! labelled vertices numbered `1..=N`:
//!
//! - [`AdjListGraph`]: directed edges chained per vertex, with a full
//!   depth-first traversal. Neighbors are visited in reverse insertion order.
//! - [`AdjMatrixGraph`]: a dense weighted cost matrix with all-pairs shortest
//!   paths (Dijkstra's algorithm per source) and route reconstruction.
//!
//! Both are built from a textual description (see [`input`]) or directly from
//! a label source and edge descriptors, then queried any number of times.
//!
//! ## Invariants
//!
//! - Vertex `0` is the "no vertex" sentinel and is never stored.
//! - The adjacency list never holds a self loop.
//! - Weights are non-negative; the weight type's maximum means "infinite".
//! - A missing route is a `None` result, never an error.
//!
//! ## Example
//!
//! ```rust
//! use routegraph::{AdjMatrixGraph, GraphReader};
//!
//! let text = "2\nHarbor\nHill\n1 2 30\n0 0 0\n";
//! let mut graph: AdjMatrixGraph<String> = AdjMatrixGraph::build(&mut GraphReader::new(text)).unwrap();
//! graph.find_shortest_path();
//!
//! assert_eq!(graph.distance(1, 2), Some(30));
//! assert_eq!(graph.distance(2, 1), None);
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit construction and computation events through `tracing`.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod log;

pub mod collections;
pub mod config;
pub mod error;
pub mod graph;
pub mod input;

pub use collections::Matrix;
pub use config::GraphConfig;
pub use error::{GraphError, Result};
pub use graph::{AdjListGraph, AdjMatrixGraph, DepthFirstForest, PathEntry, TraceMode};
pub use input::{GraphReader, LabelSource};
