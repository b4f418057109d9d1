//! Error type shared by both graph engines and the text reader.
//!
//! Failures are local and synchronous. An absent route between two vertices is
//! not an error: shortest-path queries report it as `None`.

use thiserror::Error;

/// Errors produced while building or querying a graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The declared vertex count was zero or negative, or the graph was never built.
    #[error("graph is empty (declared vertex count {declared})")]
    EmptyGraph {
        /// The count read from the input, or `0` for an unbuilt graph.
        declared: i64,
    },

    /// An adjacency-list edge whose endpoints coincide.
    #[error("self loop on vertex {vertex} rejected")]
    SelfLoop {
        /// The vertex on both ends of the edge.
        vertex: usize,
    },

    /// A vertex index outside `1..=count`.
    #[error("vertex {vertex} is out of range 1..={count}")]
    VertexOutOfRange {
        /// The offending index as given by the caller.
        vertex: i64,
        /// Number of vertices in the graph.
        count: usize,
    },

    /// An edge weight below zero or above the infinite sentinel.
    #[error("edge weight {weight} is out of range")]
    WeightOutOfRange {
        /// The rejected weight.
        weight: i64,
    },

    /// The declared vertex count exceeds the configured capacity.
    #[error("declared vertex count {declared} exceeds the limit of {limit}")]
    TooManyVertices {
        /// The count read from the input.
        declared: i64,
        /// The configured maximum.
        limit: usize,
    },

    /// A token that should have been an integer.
    #[error("expected an integer, found `{token}`")]
    Parse {
        /// The token as it appeared in the input.
        token: String,
    },

    /// The input ended where a vertex count or a label was required.
    #[error("unexpected end of input while reading {expected}")]
    UnexpectedEnd {
        /// What the reader was looking for.
        expected: &'static str,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = GraphError::VertexOutOfRange { vertex: 7, count: 4 };
        assert_eq!(err.to_string(), "vertex 7 is out of range 1..=4");

        let err = GraphError::EmptyGraph { declared: -3 };
        assert!(err.to_string().contains("-3"));
    }
}
