//! Graph builders for tests and benchmarks.

use crate::graph::DirectedGraph;

/// Builds the graph `0 -> 1 -> ... -> (n-2) -> (n-1)`.
///
/// Graphs with zero or one vertex have no edges.
///
/// # Examples
/// ```
/// use hopgraph::graph::{linear_chain, AdjacencyGraph, DirectedGraph};
///
/// let g: AdjacencyGraph = linear_chain(4);
/// assert!(g.has_edge(2, 3));
/// assert!(!g.has_edge(3, 0));
/// ```
pub fn linear_chain<G: DirectedGraph>(n: usize) -> G {
    let mut graph = G::with_vertices(n);
    for i in 1..n {
        graph.add_edge(i - 1, i);
    }
    graph
}
