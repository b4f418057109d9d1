//! Adjacency List Graph
//!
//! A directed graph over a fixed set of labelled vertices numbered `1..=N`.
//! Edges are stored in an arena (`EdgeStore`) and chained per source vertex
//! through integer handles: each vertex record holds the handle of its most
//! recent edge and every edge holds the handle of the one inserted before it.
//!
//! # Neighbor order
//! New edges are prepended to their source's chain, so neighbors are always
//! reported (and traversed) in reverse insertion order. Depth-first output
//! depends on this.

use crate::error::{GraphError, Result};
use crate::graph::access::index::{checked_count, checked_vertex, require_vertex};
use crate::graph::basic::algorithms::{depth_first_forest, DepthFirstForest};
use crate::input::{GraphReader, LabelSource};
use std::fmt;

/// Handle of an edge record inside the `EdgeStore`.
type EdgeId = usize;

/// Edge data: the target and the link to the next edge of the same source.
#[derive(Debug, Clone, Copy)]
struct EdgeRecord {
    target: usize,
    next: Option<EdgeId>,
}

/// Arena holding every edge of the graph.
#[derive(Debug, Clone, Default)]
struct EdgeStore {
    records: Vec<EdgeRecord>,
}

impl EdgeStore {
    fn alloc(&mut self, record: EdgeRecord) -> EdgeId {
        let id = self.records.len();
        self.records.push(record);
        id
    }

    #[inline]
    fn get(&self, id: EdgeId) -> Option<&EdgeRecord> {
        self.records.get(id)
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

/// A vertex: its label and the head of its outgoing edge chain.
#[derive(Debug, Clone)]
struct VertexRecord<L> {
    label: L,
    head: Option<EdgeId>,
}

/// A directed adjacency-list graph with labelled vertices.
///
/// ```rust
/// use routegraph::AdjListGraph;
///
/// let text = "3\nA\nB\nC\n1 2\n1 3\n0 0\n";
/// let graph: AdjListGraph<String> = AdjListGraph::from_text(text).unwrap();
///
/// let dfs = graph.depth_first_search().unwrap();
/// assert_eq!(dfs.order().collect::<Vec<_>>(), vec![1, 3, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct AdjListGraph<L> {
    vertices: Vec<VertexRecord<L>>,
    edges: EdgeStore,
}

impl<L> Default for AdjListGraph<L> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            edges: EdgeStore::default(),
        }
    }
}

impl<L> AdjListGraph<L> {
    /// Creates an empty, unbuilt graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from a declared vertex count, a label per vertex and
    /// `(from, to)` edge descriptors.
    ///
    /// Descriptors are consumed until one holds a `0`. Self loops and
    /// descriptors naming unknown vertices are skipped; only a non-positive
    /// count (or running out of labels) fails the build.
    pub fn from_parts<S, I>(declared: i64, labels: &mut S, edges: I) -> Result<Self>
    where
        S: LabelSource<L> + ?Sized,
        I: IntoIterator<Item = (i64, i64)>,
    {
        let count = checked_count(declared)?;

        let mut vertices = Vec::new();
        for _ in 0..count {
            let label = labels.next_label().ok_or(GraphError::UnexpectedEnd {
                expected: "vertex label",
            })?;
            vertices.push(VertexRecord { label, head: None });
        }

        let mut graph = Self {
            vertices,
            edges: EdgeStore::default(),
        };

        for (from, to) in edges {
            if from == 0 || to == 0 {
                break;
            }
            let inserted = checked_vertex(from, count)
                .and_then(|from| checked_vertex(to, count).map(|to| (from, to)))
                .and_then(|(from, to)| graph.insert_edge(from, to));
            if let Err(_err) = inserted {
                debug_event!(error = %_err, "edge descriptor skipped");
            }
        }

        debug_event!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "adjacency list built"
        );
        Ok(graph)
    }

    /// Reads one graph description from `reader`.
    ///
    /// On an empty-graph declaration nothing past the count is consumed.
    pub fn build(reader: &mut GraphReader<'_>) -> Result<Self>
    where
        L: From<String>,
    {
        let declared = reader.read_count()?;
        let count = checked_count(declared)?;
        let labels = reader.read_labels::<L>(count)?;
        let edges = reader.read_descriptors::<2>()?;

        Self::from_parts(
            declared,
            &mut labels.into_iter(),
            edges.into_iter().map(|[from, to]| (from, to)),
        )
    }

    /// Builds a graph from the first description in `text`.
    pub fn from_text(text: &str) -> Result<Self>
    where
        L: From<String>,
    {
        Self::build(&mut GraphReader::new(text))
    }

    /// Inserts a directed edge at the head of `from`'s chain.
    ///
    /// Self loops are rejected without touching the graph.
    pub fn insert_edge(&mut self, from: usize, to: usize) -> Result<()> {
        let count = self.vertex_count();
        require_vertex(from, count)?;
        require_vertex(to, count)?;
        if from == to {
            return Err(GraphError::SelfLoop { vertex: from });
        }

        let record = &mut self.vertices[from - 1];
        let id = self.edges.alloc(EdgeRecord {
            target: to,
            next: record.head,
        });
        record.head = Some(id);
        trace_event!(from, to, "edge inserted");
        Ok(())
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` for an unbuilt graph.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The label of `vertex`.
    pub fn label(&self, vertex: usize) -> Option<&L> {
        vertex
            .checked_sub(1)
            .and_then(|slot| self.vertices.get(slot))
            .map(|record| &record.label)
    }

    /// Iterates over the targets of `vertex`'s edges in chain order.
    ///
    /// Unknown vertices have no neighbors.
    pub fn neighbors(&self, vertex: usize) -> Neighbors<'_> {
        let curr_edge = vertex
            .checked_sub(1)
            .and_then(|slot| self.vertices.get(slot))
            .and_then(|record| record.head);
        Neighbors {
            edges: &self.edges,
            curr_edge,
        }
    }

    /// Number of outgoing edges of `vertex`.
    pub fn out_degree(&self, vertex: usize) -> usize {
        self.neighbors(vertex).count()
    }

    /// Depth-first traversal of the whole graph.
    ///
    /// Roots are taken in ascending vertex order; each vertex's neighbors are
    /// visited in chain order. Fails only on an empty graph.
    pub fn depth_first_search(&self) -> Result<DepthFirstForest> {
        if self.is_empty() {
            return Err(GraphError::EmptyGraph { declared: 0 });
        }
        Ok(depth_first_forest(self.vertex_count(), |v| self.neighbors(v)))
    }
}

/// Iterator over a vertex's neighbors, following its edge chain.
pub struct Neighbors<'a> {
    edges: &'a EdgeStore,
    curr_edge: Option<EdgeId>,
}

impl<'a> Iterator for Neighbors<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.edges.get(self.curr_edge?)?;
        self.curr_edge = record.next;
        Some(record.target)
    }
}

impl<L: fmt::Display> fmt::Display for AdjListGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_empty() {
            writeln!(f, "Graph:")?;
            for (slot, record) in self.vertices.iter().enumerate() {
                let vertex = slot + 1;
                writeln!(f, "Node{vertex}         {}", record.label)?;
                for target in self.neighbors(vertex) {
                    writeln!(f, "  edge  {vertex}  {target}")?;
                }
            }
        }
        writeln!(f)
    }
}
