//! Per-query visited sets for graph traversals.
//!
//! A `VisitedSet` is allocated fresh for every query, sized to the graph's
//! vertex count at call time, and dropped when the query returns. Nothing is
//! shared between queries, so concurrent read-only queries on the same graph
//! never contend on traversal state.

/// A dense visited marker, one flag per vertex.
pub(crate) struct VisitedSet {
    flags: Vec<bool>,
    marked: usize,
}

impl VisitedSet {
    /// Creates an all-unvisited set for `len` vertices.
    #[inline]
    pub(crate) fn new(len: usize) -> Self {
        Self {
            flags: vec![false; len],
            marked: 0,
        }
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.flags.len()
    }

    /// Number of vertices marked so far.
    #[inline(always)]
    pub(crate) fn marked(&self) -> usize {
        self.marked
    }

    /// Returns `true` iff `vertex` was not yet visited, marking it visited.
    #[inline(always)]
    pub(crate) fn try_visit(&mut self, vertex: usize) -> bool {
        let flag = &mut self.flags[vertex];
        if *flag {
            return false;
        }
        *flag = true;
        self.marked += 1;
        true
    }
}
