//! A dynamic adjacency-list directed graph.
//!
//! This representation prioritizes **dynamic updates** (edge and vertex
//! insertion) and sparse graphs. Each vertex owns a `Vec<usize>` of its
//! out-neighbors in insertion order; duplicate edges are never stored.

use crate::graph::DirectedGraph;

/// A dynamic adjacency list graph.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `with_vertices` | \(O(n)\) | One empty list per vertex |
/// | `add_vertex` | \(O(1)\) amortized | Appends to the outer vector |
/// | `add_edge` | \(O(\text{out-degree})\) | Checks for existence first |
/// | `remove_edge` | \(O(\text{out-degree})\) | Linear scan of adjacency list |
/// | `has_edge` | \(O(\text{out-degree})\) | Linear scan of adjacency list |
/// | `next_successor` | \(O(\text{out-degree})\) | Minimum over the list |
/// | `out_degree` | \(O(1)\) | Returns `Vec::len` |
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyGraph {
    adjacency: Vec<Vec<usize>>,
}

impl AdjacencyGraph {
    /// Creates an empty graph with `vertex_count` vertices and zero edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Creates a graph from adjacency lists.
    ///
    /// Repeated neighbors in a list are collapsed into a single edge.
    ///
    /// # Panics
    /// Panics if any neighbor index is out of bounds.
    pub fn from_adjacency(adjacency_lists: Vec<Vec<usize>>) -> Self {
        let vertex_count = adjacency_lists.len();
        let mut graph = Self::new(vertex_count);
        for (u, nbrs) in adjacency_lists.into_iter().enumerate() {
            for v in nbrs {
                assert!(v < vertex_count, "edge {u}->{v} out of bounds for n={vertex_count}");
                graph.add_edge(u, v);
            }
        }
        graph
    }

    /// Adds an isolated vertex to the graph.
    ///
    /// Returns the index of the new vertex.
    pub fn add_vertex(&mut self) -> usize {
        let idx = self.adjacency.len();
        self.adjacency.push(Vec::new());
        idx
    }

    /// Removes a directed edge `from -> to` if present.
    ///
    /// Returns `true` if an edge was removed.
    ///
    /// # Panics
    /// Panics if `from` or `to` are out of bounds.
    pub fn remove_edge(&mut self, from: usize, to: usize) -> bool {
        self.check_vertex(from);
        self.check_vertex(to);
        let nbrs = &mut self.adjacency[from];
        let before = nbrs.len();
        nbrs.retain(|&v| v != to);
        before != nbrs.len()
    }

    /// Returns the number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Returns the out-degree of a vertex.
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds.
    pub fn out_degree(&self, vertex: usize) -> usize {
        self.check_vertex(vertex);
        self.adjacency[vertex].len()
    }

    /// Returns the out-neighbors of a vertex in insertion order.
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds.
    pub fn out_neighbors(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        self.check_vertex(vertex);
        self.adjacency[vertex].iter().copied()
    }

    #[inline(always)]
    fn check_vertex(&self, vertex: usize) {
        let n = self.adjacency.len();
        assert!(vertex < n, "vertex {vertex} out of bounds for n={n}");
    }
}

impl DirectedGraph for AdjacencyGraph {
    fn with_vertices(vertex_count: usize) -> Self {
        Self::new(vertex_count)
    }

    #[inline]
    fn size(&self) -> usize {
        self.adjacency.len()
    }

    fn add_edge(&mut self, from: usize, to: usize) {
        self.check_vertex(from);
        self.check_vertex(to);
        let nbrs = &mut self.adjacency[from];
        if !nbrs.contains(&to) {
            nbrs.push(to);
        }
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.check_vertex(from);
        self.check_vertex(to);
        self.adjacency[from].contains(&to)
    }

    fn next_successor(&self, from: usize, start: usize) -> Option<usize> {
        self.check_vertex(from);
        self.adjacency[from].iter().copied().filter(|&v| v >= start).min()
    }
}
