//! Traversal building blocks shared by the graph engines.
//!
//! The depth-first forest here is the recursive classic: an ascending outer
//! scan over vertex numbers starts a new tree at every vertex not yet reached,
//! and each visit descends into neighbors in the order the neighbor function
//! yields them.

use crate::graph::access::visited::VisitedFlags;
use serde::Serialize;
use std::fmt;

/// The result of a full depth-first traversal: one preorder per root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DepthFirstForest {
    trees: Vec<Vec<usize>>,
}

impl DepthFirstForest {
    /// Preorders grouped by traversal root, roots in ascending order.
    pub fn trees(&self) -> &[Vec<usize>] {
        &self.trees
    }

    /// The root of every tree.
    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        self.trees.iter().filter_map(|tree| tree.first().copied())
    }

    /// The whole preorder sequence.
    pub fn order(&self) -> impl Iterator<Item = usize> + '_ {
        self.trees.iter().flatten().copied()
    }

    /// Number of vertices visited.
    pub fn len(&self) -> usize {
        self.trees.iter().map(Vec::len).sum()
    }

    /// Returns `true` if nothing was visited.
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }
}

impl fmt::Display for DepthFirstForest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Depth-first ordering:")?;
        for vertex in self.order() {
            write!(f, " {vertex}")?;
        }
        Ok(())
    }
}

/// Runs a depth-first traversal over vertices `1..=vertex_count`.
///
/// `neighbors(v)` must yield the successors of `v`; out-of-range successors
/// are ignored.
pub fn depth_first_forest<N, I>(vertex_count: usize, neighbors: N) -> DepthFirstForest
where
    N: Fn(usize) -> I,
    I: Iterator<Item = usize>,
{
    let mut visited = VisitedFlags::new(vertex_count);
    let mut trees = Vec::new();

    for root in 1..=vertex_count {
        if visited.try_visit(root) {
            let mut preorder = Vec::new();
            visit(root, &neighbors, &mut visited, &mut preorder);
            trees.push(preorder);
        }
    }

    DepthFirstForest { trees }
}

// Recursion depth is bounded by the vertex count.
fn visit<N, I>(vertex: usize, neighbors: &N, visited: &mut VisitedFlags, preorder: &mut Vec<usize>)
where
    N: Fn(usize) -> I,
    I: Iterator<Item = usize>,
{
    preorder.push(vertex);
    for next in neighbors(vertex) {
        if visited.try_visit(next) {
            visit(next, neighbors, visited, preorder);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adjacency<'a>(lists: &'a [&'a [usize]]) -> impl Fn(usize) -> std::vec::IntoIter<usize> + 'a {
        move |v| lists[v].to_vec().into_iter()
    }

    #[test]
    fn test_forest_roots_follow_ascending_scan() {
        // 1 -> 2, 3 -> 1, 4 isolated
        let lists: &[&[usize]] = &[&[], &[2], &[], &[1], &[]];
        let forest = depth_first_forest(4, adjacency(lists));

        assert_eq!(forest.trees(), &[vec![1, 2], vec![3], vec![4]]);
        assert_eq!(forest.roots().collect::<Vec<_>>(), vec![1, 3, 4]);
        assert_eq!(forest.len(), 4);
    }

    #[test]
    fn test_descends_before_siblings() {
        // 1 -> 2, 1 -> 4, 2 -> 3
        let lists: &[&[usize]] = &[&[], &[2, 4], &[3], &[], &[]];
        let forest = depth_first_forest(4, adjacency(lists));
        assert_eq!(forest.order().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(forest.to_string(), "Depth-first ordering: 1 2 3 4");
    }

    #[test]
    fn test_cycles_and_bad_targets_terminate() {
        let lists: &[&[usize]] = &[&[], &[2, 9], &[1], &[0]];
        let forest = depth_first_forest(3, adjacency(lists));
        assert_eq!(forest.order().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_empty() {
        let forest = depth_first_forest(0, |_| std::iter::empty());
        assert!(forest.is_empty());
        assert_eq!(forest.to_string(), "Depth-first ordering:");
    }
}
