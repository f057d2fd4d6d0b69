//! Directed graph backings and the contract queries consume.
//!
//! Graph implementations are organized into categories:
//! - `basic`: concrete backings (adjacency list, bit matrix)
//! - `algorithms`: reachability and bounded-path queries
//! - `edge_list`: serializable edge lists and JSON loading
//! - `fixtures`: graph builders for tests and benchmarks

pub mod algorithms;
pub mod basic;
pub mod edge_list;
pub mod fixtures;
pub(crate) mod access;

pub use algorithms::{has_path_within, has_path_within_batch, has_path_within_hops, is_reachable, PathQuery};
pub use basic::{AdjacencyGraph, MatrixGraph};
pub use edge_list::{EdgeList, GraphError};
pub use fixtures::linear_chain;

/// A finite directed graph over dense vertex indices `0..size()`.
///
/// This is the whole surface the queries in [`algorithms`] rely on. Releasing
/// the graph is `Drop`; there is no explicit destroy operation.
///
/// Every method taking a vertex panics if the vertex is `>= size()`. An
/// out-of-range vertex is a programming error, not a recoverable condition.
pub trait DirectedGraph {
    /// Creates a graph with `vertex_count` isolated vertices.
    fn with_vertices(vertex_count: usize) -> Self
    where
        Self: Sized;

    /// Returns the number of vertices.
    fn size(&self) -> usize;

    /// Inserts the directed edge `from -> to`.
    ///
    /// Inserting an edge that already exists leaves the graph unchanged.
    ///
    /// # Panics
    /// Panics if `from` or `to` are out of bounds.
    fn add_edge(&mut self, from: usize, to: usize);

    /// Returns `true` if the directed edge `from -> to` exists.
    ///
    /// # Panics
    /// Panics if `from` or `to` are out of bounds.
    fn has_edge(&self, from: usize, to: usize) -> bool;

    /// Returns the smallest successor `v >= start` of `from`, if any.
    ///
    /// The default scans `start..size()` with [`has_edge`](Self::has_edge).
    /// Backings override it when they can skip non-edges faster.
    ///
    /// # Panics
    /// Panics if `from` is out of bounds.
    fn next_successor(&self, from: usize, start: usize) -> Option<usize> {
        let n = self.size();
        assert!(from < n, "from vertex {from} out of bounds for n={n}");
        (start..n).find(|&v| self.has_edge(from, v))
    }
}
