//! Adjacency Matrix Graph
//!
//! A directed, weighted graph over vertices `1..=N` stored as a dense cost
//! matrix, together with an all-pairs shortest-path table filled by running
//! Dijkstra's algorithm once per source.
//!
//! Both tables are `(N + 1) x (N + 1)` so vertex numbers index them directly;
//! row and column 0 are unused. The largest value of the weight type stands
//! for "infinite": no edge in the cost matrix, no known route in the table.
//!
//! # Table invariant
//! After [`AdjMatrixGraph::find_shortest_path`], every `(source, vertex)`
//! entry either holds a finite distance whose predecessor chain leads back to
//! `source` without repeating a vertex, or an infinite distance with
//! predecessor `0`.

use crate::collections::Matrix;
use crate::config::GraphConfig;
use crate::error::{GraphError, Result};
use crate::graph::access::index::{checked_count, checked_vertex, require_vertex, NO_VERTEX};
use crate::input::{GraphReader, LabelSource};
use num_traits::{NumCast, PrimInt};
use serde::Serialize;
use std::fmt;

/// One cell of the shortest-path table, indexed `[source][vertex]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathEntry<W> {
    /// Whether `vertex` has been settled by the run rooted at `source`.
    pub visited: bool,
    /// Best known distance from `source` to `vertex`.
    pub dist: W,
    /// Predecessor of `vertex` on that route, `0` when there is none.
    pub path: usize,
}

impl<W: PrimInt> PathEntry<W> {
    fn unreached() -> Self {
        Self {
            visited: false,
            dist: W::max_value(),
            path: NO_VERTEX,
        }
    }
}

/// What [`AdjMatrixGraph::trace_path`] reports for each vertex on a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceMode {
    /// The vertex itself.
    Vertices,
    /// The vertex's predecessor (`0` for the route's first vertex).
    Predecessors,
}

/// A directed weighted graph with labelled vertices and an all-pairs
/// shortest-path table.
///
/// ```rust
/// use routegraph::AdjMatrixGraph;
///
/// let text = "3\nA\nB\nC\n1 2 4\n2 3 1\n1 3 9\n0 0 0\n";
/// let mut graph: AdjMatrixGraph<String> = AdjMatrixGraph::from_text(text).unwrap();
/// graph.find_shortest_path();
///
/// assert_eq!(graph.distance(1, 3), Some(5));
/// assert_eq!(graph.path(1, 3), Some(vec![1, 2, 3]));
/// assert_eq!(graph.distance(3, 1), None);
/// ```
#[derive(Debug, Clone)]
pub struct AdjMatrixGraph<L, W = i32> {
    labels: Vec<L>,
    cost: Matrix<W>,
    table: Matrix<PathEntry<W>>,
    config: GraphConfig,
}

impl<L, W: PrimInt> Default for AdjMatrixGraph<L, W> {
    fn default() -> Self {
        Self::with_size(Vec::new(), GraphConfig::default())
    }
}

impl<L, W: PrimInt> AdjMatrixGraph<L, W> {
    /// Creates an empty, unbuilt graph. Every query on it reports "no path".
    pub fn new() -> Self {
        Self::default()
    }

    fn with_size(labels: Vec<L>, config: GraphConfig) -> Self {
        let side = labels.len() + 1;
        Self {
            labels,
            cost: Matrix::filled(side, side, W::max_value()),
            table: Matrix::filled(side, side, PathEntry::unreached()),
            config,
        }
    }

    /// The "infinite" sentinel: no edge, or no route.
    #[inline(always)]
    pub fn infinity() -> W {
        W::max_value()
    }

    /// Builds a graph from a declared vertex count, a label per vertex and
    /// `(from, to, weight)` edge descriptors.
    ///
    /// Descriptors are consumed until one holds a `0`. Descriptors that fail
    /// range checks are skipped; only the vertex count can fail the build.
    pub fn from_parts<S, I>(declared: i64, labels: &mut S, edges: I, config: GraphConfig) -> Result<Self>
    where
        S: LabelSource<L> + ?Sized,
        I: IntoIterator<Item = (i64, i64, i64)>,
    {
        let count = Self::admit_count(declared, &config)?;

        let mut names = Vec::new();
        for _ in 0..count {
            let label = labels.next_label().ok_or(GraphError::UnexpectedEnd {
                expected: "vertex label",
            })?;
            names.push(label);
        }

        let mut graph = Self::with_size(names, config);
        for (from, to, weight) in edges {
            if from == 0 || to == 0 || weight == 0 {
                break;
            }
            if let Err(_err) = graph.insert_raw_edge(from, to, weight) {
                debug_event!(error = %_err, "edge descriptor skipped");
            }
        }

        debug_event!(vertices = graph.vertex_count(), "adjacency matrix built");
        Ok(graph)
    }

    /// Reads one graph description from `reader` using `config`.
    ///
    /// On an empty-graph declaration nothing past the count is consumed.
    pub fn build_with_config(reader: &mut GraphReader<'_>, config: GraphConfig) -> Result<Self>
    where
        L: From<String>,
    {
        let declared = reader.read_count()?;
        let count = Self::admit_count(declared, &config)?;
        let labels = reader.read_labels::<L>(count)?;
        let edges = reader.read_descriptors::<3>()?;

        Self::from_parts(
            declared,
            &mut labels.into_iter(),
            edges.into_iter().map(|[from, to, weight]| (from, to, weight)),
            config,
        )
    }

    /// Reads one graph description from `reader` with the default configuration.
    pub fn build(reader: &mut GraphReader<'_>) -> Result<Self>
    where
        L: From<String>,
    {
        Self::build_with_config(reader, GraphConfig::default())
    }

    /// Builds a graph from the first description in `text`.
    pub fn from_text(text: &str) -> Result<Self>
    where
        L: From<String>,
    {
        Self::build(&mut GraphReader::new(text))
    }

    fn admit_count(declared: i64, config: &GraphConfig) -> Result<usize> {
        let count = checked_count(declared)?;
        match config.max_vertices {
            Some(limit) if count > limit => Err(GraphError::TooManyVertices { declared, limit }),
            _ => Ok(count),
        }
    }

    fn insert_raw_edge(&mut self, from: i64, to: i64, weight: i64) -> Result<()> {
        let count = self.vertex_count();
        let from = checked_vertex(from, count)?;
        let to = checked_vertex(to, count)?;
        let weight = <W as NumCast>::from(weight).ok_or(GraphError::WeightOutOfRange { weight })?;
        self.insert_edge(from, to, weight)
    }

    /// Sets the cost of the edge `from -> to`, replacing any previous weight.
    ///
    /// Vertices must lie in `1..=N` and the weight in `0..=infinity`; on
    /// failure the matrix is left untouched. The shortest-path table is not
    /// refreshed until the next [`find_shortest_path`](Self::find_shortest_path).
    pub fn insert_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        let count = self.vertex_count();
        require_vertex(from, count)?;
        require_vertex(to, count)?;
        if weight < W::zero() {
            return Err(GraphError::WeightOutOfRange {
                weight: weight.to_i64().unwrap_or(i64::MIN),
            });
        }
        self.cost[(from, to)] = weight;
        trace_event!(from, to, "edge cost set");
        Ok(())
    }

    /// Removes the edge `from -> to` by resetting its cost to infinity.
    ///
    /// Both endpoints must lie in `1..=N`.
    pub fn remove_edge(&mut self, from: usize, to: usize) -> Result<()> {
        let count = self.vertex_count();
        require_vertex(from, count)?;
        require_vertex(to, count)?;
        self.cost[(from, to)] = Self::infinity();
        Ok(())
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` for an unbuilt graph.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The configuration this graph was built with.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// The label of `vertex`.
    pub fn label(&self, vertex: usize) -> Option<&L> {
        vertex.checked_sub(1).and_then(|slot| self.labels.get(slot))
    }

    /// The cost of the edge `from -> to`, or `None` if there is no such edge.
    pub fn cost(&self, from: usize, to: usize) -> Option<W> {
        if from == NO_VERTEX || to == NO_VERTEX {
            return None;
        }
        self.cost
            .get(from, to)
            .copied()
            .filter(|&weight| weight != Self::infinity())
    }

    /// The raw shortest-path table entry for `(from, to)`.
    pub fn entry(&self, from: usize, to: usize) -> Option<&PathEntry<W>> {
        if from == NO_VERTEX || to == NO_VERTEX {
            return None;
        }
        self.table.get(from, to)
    }

    /// Computes shortest paths between every ordered pair of vertices.
    ///
    /// The table is cleared first, then Dijkstra's algorithm runs once per
    /// source. Each round settles the closest unsettled vertex (lowest number
    /// on ties) and relaxes its outgoing edges. A run ends early once every
    /// vertex left is unreachable. Running this twice without changing an
    /// edge yields the same table.
    pub fn find_shortest_path(&mut self) {
        let count = self.vertex_count();
        self.table.fill(PathEntry::unreached());

        for source in 1..=count {
            self.table[(source, source)].dist = W::zero();

            for _ in 0..count {
                let Some(v) = self.closest_unvisited(source) else {
                    break;
                };
                self.table[(source, v)].visited = true;
                self.relax_from(source, v);
            }

            for entry in self.table.row_mut(source).into_iter().flatten() {
                entry.visited = false;
            }
            trace_event!(source, "shortest paths settled");
        }

        debug_event!(vertices = count, "all-pairs shortest paths computed");
    }

    fn closest_unvisited(&self, source: usize) -> Option<usize> {
        let row = self.table.row(source)?;
        let mut min = Self::infinity();
        let mut closest = None;
        for (vertex, entry) in row.iter().enumerate().skip(1) {
            if !entry.visited && entry.dist < min {
                min = entry.dist;
                closest = Some(vertex);
            }
        }
        closest
    }

    fn relax_from(&mut self, source: usize, v: usize) {
        let dist_v = self.table[(source, v)].dist;
        for w in 1..=self.vertex_count() {
            let weight = self.cost[(v, w)];
            if weight == Self::infinity() || self.table[(source, w)].visited {
                continue;
            }
            let Some(candidate) = dist_v.checked_add(&weight) else {
                continue;
            };
            let entry = &mut self.table[(source, w)];
            if candidate < entry.dist {
                entry.dist = candidate;
                entry.path = v;
            }
        }
    }

    /// The shortest distance from `from` to `to`, or `None` if there is no path.
    pub fn distance(&self, from: usize, to: usize) -> Option<W> {
        self.entry(from, to)
            .map(|entry| entry.dist)
            .filter(|&dist| dist != Self::infinity())
    }

    /// The vertex preceding `to` on the shortest route from `from`.
    pub fn predecessor(&self, from: usize, to: usize) -> Option<usize> {
        self.entry(from, to)
            .map(|entry| entry.path)
            .filter(|&vertex| vertex != NO_VERTEX)
    }

    /// The vertices of the shortest route from `from` to `to`, both included.
    pub fn path(&self, from: usize, to: usize) -> Option<Vec<usize>> {
        self.distance(from, to)?;
        Some(self.trace_path(from, to, TraceMode::Vertices))
    }

    /// Walks the predecessor chain from `to` back to `from` and reports it
    /// forwards, one item per vertex on the chain.
    ///
    /// Out-of-range vertices yield an empty trace.
    pub fn trace_path(&self, from: usize, to: usize, mode: TraceMode) -> Vec<usize> {
        let mut out = Vec::new();
        if self.entry(from, to).is_some() {
            self.trace(from, to, mode, &mut out);
        }
        out
    }

    fn trace(&self, from: usize, to: usize, mode: TraceMode, out: &mut Vec<usize>) {
        let prev = self.table[(from, to)].path;
        if from != to && prev != NO_VERTEX {
            self.trace(from, prev, mode, out);
        }
        out.push(match mode {
            TraceMode::Vertices => to,
            TraceMode::Predecessors => prev,
        });
    }

    /// A report over every ordered pair of distinct vertices.
    pub fn display_all(&self) -> AllPairsReport<'_, L, W> {
        AllPairsReport { graph: self }
    }

    /// A report for the single ordered pair `(from, to)`.
    pub fn display(&self, from: usize, to: usize) -> Result<PairReport<'_, L, W>> {
        let count = self.vertex_count();
        require_vertex(from, count)?;
        require_vertex(to, count)?;
        Ok(PairReport {
            graph: self,
            from,
            to,
        })
    }

    /// Machine-readable results for every ordered pair of distinct vertices.
    pub fn summaries(&self) -> Vec<ShortestPathSummary<W>>
    where
        L: fmt::Display,
    {
        let count = self.vertex_count();
        let mut out = Vec::new();
        for from in 1..=count {
            for to in (1..=count).filter(|&to| to != from) {
                out.push(ShortestPathSummary {
                    from,
                    to,
                    from_label: self.label(from).map(ToString::to_string).unwrap_or_default(),
                    to_label: self.label(to).map(ToString::to_string).unwrap_or_default(),
                    distance: self.distance(from, to),
                    path: self.path(from, to),
                });
            }
        }
        out
    }
}

/// Shortest-path result for one ordered pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPathSummary<W> {
    /// Source vertex.
    pub from: usize,
    /// Destination vertex.
    pub to: usize,
    /// Label of the source vertex.
    pub from_label: String,
    /// Label of the destination vertex.
    pub to_label: String,
    /// Shortest distance, absent when there is no path.
    pub distance: Option<W>,
    /// Vertices along the route, absent when there is no path.
    pub path: Option<Vec<usize>>,
}

fn write_vertices(f: &mut fmt::Formatter<'_>, vertices: &[usize]) -> fmt::Result {
    for (i, vertex) in vertices.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{vertex}")?;
    }
    Ok(())
}

/// Fixed-column table of every pair's distance and route.
pub struct AllPairsReport<'a, L, W> {
    graph: &'a AdjMatrixGraph<L, W>,
}

impl<L, W> fmt::Display for AllPairsReport<'_, L, W>
where
    L: fmt::Display,
    W: PrimInt + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let graph = self.graph;
        let count = graph.vertex_count();
        writeln!(f, "Description         From Node   To Node   Dijkstra's      Path")?;
        for from in 1..=count {
            if let Some(label) = graph.label(from) {
                writeln!(f, "{label}")?;
            }
            for to in (1..=count).filter(|&to| to != from) {
                write!(f, "                        {from}         {to}         ")?;
                match graph.distance(from, to) {
                    Some(dist) => {
                        write!(f, "{dist}            ")?;
                        write_vertices(f, &graph.trace_path(from, to, TraceMode::Vertices))?;
                    }
                    None => f.write_str(&graph.config.no_path_marker)?,
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Distance, route and route labels for one ordered pair.
pub struct PairReport<'a, L, W> {
    graph: &'a AdjMatrixGraph<L, W>,
    from: usize,
    to: usize,
}

impl<L, W> fmt::Display for PairReport<'_, L, W>
where
    L: fmt::Display,
    W: PrimInt + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { graph, from, to } = *self;
        write!(f, "   {from}         {to}         ")?;
        let Some(dist) = graph.distance(from, to) else {
            writeln!(f, "{}", graph.config.no_path_marker)?;
            return writeln!(f);
        };

        write!(f, "{dist}         ")?;
        write_vertices(f, &graph.trace_path(from, to, TraceMode::Vertices))?;
        writeln!(f)?;
        for prev in graph.trace_path(from, to, TraceMode::Predecessors) {
            if let Some(label) = graph.label(prev) {
                writeln!(f, "{label}")?;
            }
        }
        if let Some(label) = graph.label(to) {
            writeln!(f, "{label}")?;
        }
        writeln!(f)
    }
}
