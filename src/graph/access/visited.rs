//! Visited sets for graph traversals.

/// A per-vertex visited flag vector, indexed by vertex number.
///
/// Slot 0 exists so 1-based vertex numbers index directly; it is never marked.
pub(crate) struct VisitedFlags {
    flags: Vec<bool>,
}

impl VisitedFlags {
    /// Creates flags for vertices `1..=vertex_count`, all unvisited.
    pub(crate) fn new(vertex_count: usize) -> Self {
        Self {
            flags: vec![false; vertex_count + 1],
        }
    }

    #[cfg(test)]
    pub(crate) fn is_visited(&self, vertex: usize) -> bool {
        self.flags.get(vertex).copied().unwrap_or(false)
    }

    /// Returns `true` iff this call observed the vertex as not-yet-visited and marks it visited.
    ///
    /// Out-of-range vertices are never visitable.
    #[inline(always)]
    pub(crate) fn try_visit(&mut self, vertex: usize) -> bool {
        match self.flags.get_mut(vertex) {
            Some(flag) if !*flag && vertex != 0 => {
                *flag = true;
                true
            }
            _ => false,
        }
    }
}
