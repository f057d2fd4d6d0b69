//! Basic graph implementations.
//!
//! Both backings implement [`DirectedGraph`](crate::graph::DirectedGraph) and
//! are interchangeable from the queries' point of view.

pub mod adjacency_graph;
pub mod matrix_graph;

pub use adjacency_graph::AdjacencyGraph;
pub use matrix_graph::MatrixGraph;
