//! Vertex count and vertex index validation.
//!
//! Vertices are numbered `1..=count`; `0` is the "no vertex" sentinel.

use crate::error::{GraphError, Result};

/// Sentinel meaning "no predecessor / no vertex".
pub(crate) const NO_VERTEX: usize = 0;

/// Converts a declared vertex count into a usable one.
pub(crate) fn checked_count(declared: i64) -> Result<usize> {
    if declared <= 0 {
        return Err(GraphError::EmptyGraph { declared });
    }
    usize::try_from(declared).map_err(|_| GraphError::TooManyVertices {
        declared,
        limit: usize::MAX,
    })
}

/// Converts a raw vertex number into an index in `1..=count`.
pub(crate) fn checked_vertex(vertex: i64, count: usize) -> Result<usize> {
    match usize::try_from(vertex) {
        Ok(v) if (1..=count).contains(&v) => Ok(v),
        _ => Err(GraphError::VertexOutOfRange { vertex, count }),
    }
}

/// Validates an already unsigned vertex number.
pub(crate) fn require_vertex(vertex: usize, count: usize) -> Result<usize> {
    if (1..=count).contains(&vertex) {
        Ok(vertex)
    } else {
        Err(GraphError::VertexOutOfRange {
            vertex: i64::try_from(vertex).unwrap_or(i64::MAX),
            count,
        })
    }
}
