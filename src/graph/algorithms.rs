//! Reachability and bounded-path queries over any [`DirectedGraph`].
//!
//! Queries only use `size`, `has_edge` and the derived `next_successor`, so
//! they work unchanged on every backing. Each query allocates its own visited
//! set and traversal stack and releases both on return; the graph is borrowed
//! immutably throughout.
//!
//! Two notions of "within `n` hops" are offered:
//! - [`has_path_within`] rejects a query when either endpoint *index* exceeds
//!   the bound, then runs an unbounded depth-first search. Vertex indices and
//!   hop counts are different units, so this is only a coarse filter; it is
//!   kept because existing callers depend on its exact answers.
//! - [`has_path_within_hops`] counts hops during a breadth-first search and
//!   answers the bounded question exactly.

use serde::{Deserialize, Serialize};

use crate::graph::access::visited::VisitedSet;
use crate::graph::DirectedGraph;

/// Determines whether there is a path from `source` to `destination` whose
/// length is `bound` or fewer, using the index pre-check.
///
/// Returns `false` without searching if `source > bound` or
/// `destination > bound`. Otherwise the answer is plain reachability: the
/// traversal does not track path length.
///
/// A vertex always reaches itself with zero edges, even with no self-loop.
///
/// # Panics
/// Panics if `source` or `destination` is not a vertex of `graph`. The range
/// check happens before the index pre-check, so an invalid vertex never
/// produces a silent `false`.
///
/// # Examples
/// ```
/// use hopgraph::graph::{has_path_within, linear_chain, MatrixGraph};
///
/// let g: MatrixGraph = linear_chain(3);
/// assert!(has_path_within(&g, 0, 2, 2));
/// assert!(!has_path_within(&g, 0, 2, 1));
/// assert!(!has_path_within(&g, 2, 0, 10));
/// ```
pub fn has_path_within<G>(graph: &G, source: usize, destination: usize, bound: usize) -> bool
where
    G: DirectedGraph + ?Sized,
{
    check_endpoints(graph, source, destination);

    if source > bound || destination > bound {
        #[cfg(feature = "tracing")]
        tracing::trace!(source, destination, bound, "endpoint index exceeds bound");
        return false;
    }

    depth_first_search(graph, source, destination)
}

/// Returns `true` if `destination` is reachable from `source` by any number
/// of edges, including zero.
///
/// # Panics
/// Panics if `source` or `destination` is not a vertex of `graph`.
pub fn is_reachable<G>(graph: &G, source: usize, destination: usize) -> bool
where
    G: DirectedGraph + ?Sized,
{
    check_endpoints(graph, source, destination);
    depth_first_search(graph, source, destination)
}

/// Returns `true` if some path from `source` to `destination` uses at most
/// `bound` edges.
///
/// Breadth-first layers are expanded one hop at a time, so the first layer
/// containing `destination` is its hop distance.
///
/// # Panics
/// Panics if `source` or `destination` is not a vertex of `graph`.
///
/// # Examples
/// ```
/// use hopgraph::graph::{has_path_within_hops, linear_chain, AdjacencyGraph};
///
/// let g: AdjacencyGraph = linear_chain(16);
/// assert!(has_path_within_hops(&g, 10, 12, 2));
/// assert!(!has_path_within_hops(&g, 10, 12, 1));
/// ```
pub fn has_path_within_hops<G>(graph: &G, source: usize, destination: usize, bound: usize) -> bool
where
    G: DirectedGraph + ?Sized,
{
    check_endpoints(graph, source, destination);
    if source == destination {
        return true;
    }

    let n = graph.size();
    let mut visited = VisitedSet::new(n);
    visited.try_visit(source);
    let mut frontier = vec![source];
    let mut next = Vec::new();

    for _ in 0..bound {
        if frontier.is_empty() {
            break;
        }
        for &u in &frontier {
            let mut cursor = graph.next_successor(u, 0);
            while let Some(v) = cursor {
                if v == destination {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(source, destination, visited = visited.marked(), "bounded search reached destination");
                    return true;
                }
                if visited.try_visit(v) {
                    next.push(v);
                }
                cursor = graph.next_successor(u, v + 1);
            }
        }
        core::mem::swap(&mut frontier, &mut next);
        next.clear();
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(source, destination, bound, visited = visited.marked(), "bounded search exhausted");
    false
}

/// A single bounded-path query, as evaluated by [`has_path_within`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathQuery {
    /// Start vertex.
    pub source: usize,
    /// Goal vertex.
    pub destination: usize,
    /// Maximum number of edges.
    pub bound: usize,
}

impl PathQuery {
    /// Creates a query.
    pub const fn new(source: usize, destination: usize, bound: usize) -> Self {
        Self {
            source,
            destination,
            bound,
        }
    }

    /// Evaluates this query against `graph`.
    ///
    /// # Panics
    /// Panics if either endpoint is not a vertex of `graph`.
    pub fn evaluate<G: DirectedGraph + ?Sized>(&self, graph: &G) -> bool {
        has_path_within(graph, self.source, self.destination, self.bound)
    }
}

/// Evaluates many queries against one graph, returning answers in input order.
///
/// # Panics
/// Panics if any query names a vertex outside `graph`.
#[cfg(not(feature = "parallel"))]
pub fn has_path_within_batch<G>(graph: &G, queries: &[PathQuery]) -> Vec<bool>
where
    G: DirectedGraph + ?Sized,
{
    queries.iter().map(|q| q.evaluate(graph)).collect()
}

/// Evaluates many queries against one graph, returning answers in input order.
///
/// Queries run on the rayon thread pool; the graph is only read.
///
/// # Panics
/// Panics if any query names a vertex outside `graph`.
#[cfg(feature = "parallel")]
pub fn has_path_within_batch<G>(graph: &G, queries: &[PathQuery]) -> Vec<bool>
where
    G: DirectedGraph + Sync + ?Sized,
{
    use rayon::prelude::*;

    queries.par_iter().map(|q| q.evaluate(graph)).collect()
}

fn check_endpoints<G: DirectedGraph + ?Sized>(graph: &G, source: usize, destination: usize) {
    let n = graph.size();
    assert!(source < n, "source vertex {source} out of bounds for n={n}");
    assert!(destination < n, "destination vertex {destination} out of bounds for n={n}");
}

/// Outcome of entering a vertex during the depth-first search.
enum Enter {
    Found,
    Seen,
    Expand,
}

#[inline]
fn enter(visited: &mut VisitedSet, vertex: usize, destination: usize) -> Enter {
    // The goal test precedes the visited test so `source == destination`
    // succeeds with zero edges.
    if vertex == destination {
        Enter::Found
    } else if visited.try_visit(vertex) {
        Enter::Expand
    } else {
        Enter::Seen
    }
}

/// Depth-first search with an explicit stack of `(vertex, next successor)`
/// frames. Successors are tried in ascending index order.
fn depth_first_search<G>(graph: &G, source: usize, destination: usize) -> bool
where
    G: DirectedGraph + ?Sized,
{
    let n = graph.size();
    let mut visited = VisitedSet::new(n);
    let mut stack: Vec<(usize, usize)> = Vec::new();

    match enter(&mut visited, source, destination) {
        Enter::Found => return true,
        Enter::Expand => stack.push((source, 0)),
        Enter::Seen => unreachable!("fresh visited set"),
    }

    while let Some(frame) = stack.last_mut() {
        let (u, start) = *frame;
        match graph.next_successor(u, start) {
            Some(v) => {
                frame.1 = v + 1;
                match enter(&mut visited, v, destination) {
                    Enter::Found => {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(source, destination, visited = visited.marked(), "path found");
                        return true;
                    }
                    Enter::Expand => stack.push((v, 0)),
                    Enter::Seen => {}
                }
            }
            None => {
                stack.pop();
            }
        }
    }

    debug_assert!(visited.marked() <= visited.len());
    #[cfg(feature = "tracing")]
    tracing::debug!(source, destination, visited = visited.marked(), "no path");
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{linear_chain, AdjacencyGraph, MatrixGraph};

    #[test]
    fn self_path_has_length_zero() {
        let g: MatrixGraph = linear_chain(3);
        assert!(has_path_within(&g, 0, 0, 0));
        assert!(has_path_within(&g, 1, 1, 1));
        assert!(is_reachable(&g, 2, 2));
        assert!(has_path_within_hops(&g, 2, 2, 0));
    }

    #[test]
    fn index_pre_check_rejects_large_indices() {
        let g: AdjacencyGraph = linear_chain(3);
        // 1 -> 2 is a direct edge, but index 2 exceeds the bound.
        assert!(!has_path_within(&g, 1, 2, 1));
        assert!(has_path_within_hops(&g, 1, 2, 1));
        assert!(is_reachable(&g, 1, 2));
    }

    #[test]
    fn traversal_ignores_path_length() {
        // 0 -> 2 needs two hops, but both indices fit under bound 2 and a
        // long detour is still accepted.
        let mut g = AdjacencyGraph::new(6);
        for (u, v) in [(0, 5), (5, 4), (4, 3), (3, 1)] {
            g.add_edge(u, v);
        }
        assert!(has_path_within(&g, 0, 1, 1));
        assert!(!has_path_within_hops(&g, 0, 1, 1));
        assert!(has_path_within_hops(&g, 0, 1, 4));
    }

    #[test]
    fn cycles_terminate() {
        let mut g = MatrixGraph::new(4);
        for (u, v) in [(0, 1), (1, 2), (2, 0), (2, 2)] {
            g.add_edge(u, v);
        }
        assert!(!is_reachable(&g, 0, 3));
        assert!(!has_path_within(&g, 0, 3, 10));
        assert!(!has_path_within_hops(&g, 0, 3, usize::MAX));
        assert!(is_reachable(&g, 2, 1));
    }

    #[test]
    fn deep_chain_does_not_overflow_the_stack() {
        let n = 100_000;
        let g: AdjacencyGraph = linear_chain(n);
        assert!(is_reachable(&g, 0, n - 1));
        assert!(!is_reachable(&g, n - 1, 0));
    }

    #[test]
    fn hop_bound_is_exact() {
        let g: AdjacencyGraph = linear_chain(5);
        assert!(!has_path_within_hops(&g, 0, 4, 3));
        assert!(has_path_within_hops(&g, 0, 4, 4));
        assert!(has_path_within_hops(&g, 0, 4, 5));
        assert!(!has_path_within_hops(&g, 4, 0, 100));
    }

    #[test]
    fn hop_bound_uses_shortest_route() {
        let mut g = MatrixGraph::new(5);
        for (u, v) in [(0, 1), (1, 2), (2, 3), (3, 4), (0, 4)] {
            g.add_edge(u, v);
        }
        assert!(has_path_within_hops(&g, 0, 4, 1));
    }

    #[test]
    fn batch_preserves_order() {
        let g: MatrixGraph = linear_chain(3);
        let queries = [
            PathQuery::new(0, 2, 2),
            PathQuery::new(0, 2, 1),
            PathQuery::new(2, 0, 10),
            PathQuery::new(0, 0, 0),
        ];
        assert_eq!(has_path_within_batch(&g, &queries), vec![true, false, false, true]);
    }

    #[test]
    fn queries_accept_trait_objects() {
        let g: AdjacencyGraph = linear_chain(4);
        let dyn_g: &dyn DirectedGraph = &g;
        assert!(has_path_within(dyn_g, 0, 3, 4));
        assert!(is_reachable(dyn_g, 1, 3));
    }

    #[test]
    #[should_panic(expected = "source vertex 3 out of bounds for n=3")]
    fn out_of_range_source_panics_even_when_bound_is_small() {
        let g: MatrixGraph = linear_chain(3);
        has_path_within(&g, 3, 0, 0);
    }

    #[test]
    #[should_panic(expected = "destination vertex 7 out of bounds for n=3")]
    fn out_of_range_destination_panics() {
        let g: AdjacencyGraph = linear_chain(3);
        has_path_within_hops(&g, 0, 7, 10);
    }
}
