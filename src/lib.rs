//! # `hopgraph` - Bounded-Path Queries over Directed Graphs
//!
//! Directed graph backings over dense vertex indices, and the reachability
//! queries that run on them.
//!
//! ## Architecture
//!
//! ### Core Abstractions
//!
//! 1. **Graph contract** ([`DirectedGraph`]):
//!    - Vertices are `0..size()`; edges are directed pairs
//!    - `with_vertices`, `size`, `add_edge`, `has_edge`; releasing is `Drop`
//!    - Out-of-range vertices are programming errors and panic
//!
//! 2. **Backings** ([`AdjacencyGraph`], [`MatrixGraph`]):
//!    - Adjacency lists for sparse, growing graphs
//!    - Word-packed bit matrix for dense graphs with `O(1)` edge tests
//!
//! 3. **Queries** ([`graph::algorithms`]):
//!    - [`has_path_within`]: endpoint-index pre-check, then depth-first search
//!    - [`has_path_within_hops`]: hop-counting breadth-first search
//!    - [`is_reachable`]: plain reachability
//!
//! 4. **Interchange** ([`EdgeList`]):
//!    - Serde-serializable edge lists, JSON loading with `anyhow` context
//!
//! ### Guarantees
//!
//! - Queries borrow the graph immutably, so the borrow checker rules out
//!   mutation during a query.
//! - Every query owns a fresh visited set; concurrent queries on a shared
//!   graph do not interact.
//! - Traversals use explicit stacks and terminate on cyclic graphs.
//!
//! ## Cargo Features
//!
//! - `parallel`: [`has_path_within_batch`](graph::has_path_within_batch) runs
//!   on rayon.
//! - `tracing`: emits `tracing` events from queries and edge-list loading.
//!
//! ## Example
//!
//! ```rust
//! use hopgraph::{has_path_within, linear_chain, AdjacencyGraph, DirectedGraph};
//!
//! let mut g: AdjacencyGraph = linear_chain(3);
//! assert!(has_path_within(&g, 0, 2, 2));
//! assert!(!has_path_within(&g, 2, 0, 10));
//!
//! g.add_edge(2, 0);
//! assert!(has_path_within(&g, 2, 0, 10));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod graph;

pub use graph::{
    has_path_within,
    has_path_within_batch,
    has_path_within_hops,
    is_reachable,
    linear_chain,
    AdjacencyGraph,
    DirectedGraph,
    EdgeList,
    GraphError,
    MatrixGraph,
    PathQuery,
};

// Compile-time checks that every backing can be shared across query threads.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AdjacencyGraph>();
    assert_send_sync::<MatrixGraph>();
};
