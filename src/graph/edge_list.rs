//! Serializable edge lists.
//!
//! An [`EdgeList`] is the interchange form of a graph: a vertex count plus the
//! directed edges as `[from, to]` pairs. In JSON:
//!
//! ```json
//! { "vertex_count": 3, "edges": [[0, 1], [1, 2]] }
//! ```
//!
//! Unlike the graph operations, which treat an out-of-range vertex as a
//! programming error, edge lists come from outside the program, so
//! validation failures are reported as [`GraphError`] values.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::graph::{DirectedGraph, PathQuery};

/// A graph as a vertex count and a list of directed edges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeList {
    /// Number of vertices; valid indices are `0..vertex_count`.
    pub vertex_count: usize,
    /// Directed edges as `(from, to)`.
    #[serde(default)]
    pub edges: Vec<(usize, usize)>,
}

/// Errors raised while turning external data into a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// An edge names a vertex outside `0..vertex_count`.
    EdgeOutOfBounds {
        /// Source endpoint of the offending edge.
        from: usize,
        /// Target endpoint of the offending edge.
        to: usize,
        /// Vertex count of the graph being built.
        vertex_count: usize,
    },
}

impl core::fmt::Display for GraphError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::EdgeOutOfBounds {
                from,
                to,
                vertex_count,
            } => write!(f, "edge {from}->{to} out of bounds for n={vertex_count}"),
        }
    }
}

impl std::error::Error for GraphError {}

impl EdgeList {
    /// Collects the edges of `graph` in ascending `(from, to)` order.
    pub fn from_graph<G: DirectedGraph + ?Sized>(graph: &G) -> Self {
        let vertex_count = graph.size();
        let mut edges = Vec::new();
        for u in 0..vertex_count {
            let mut cursor = graph.next_successor(u, 0);
            while let Some(v) = cursor {
                edges.push((u, v));
                cursor = graph.next_successor(u, v + 1);
            }
        }
        Self { vertex_count, edges }
    }

    /// Checks that every edge endpoint is a valid vertex.
    ///
    /// # Errors
    /// Returns [`GraphError::EdgeOutOfBounds`] for the first offending edge.
    pub fn validate(&self) -> Result<(), GraphError> {
        let vertex_count = self.vertex_count;
        match self
            .edges
            .iter()
            .find(|&&(from, to)| from >= vertex_count || to >= vertex_count)
        {
            Some(&(from, to)) => Err(GraphError::EdgeOutOfBounds {
                from,
                to,
                vertex_count,
            }),
            None => Ok(()),
        }
    }

    /// Builds a graph of any backing from this edge list.
    ///
    /// Repeated edges collapse into one.
    ///
    /// # Errors
    /// Returns [`GraphError::EdgeOutOfBounds`] if an edge names a vertex
    /// outside `0..vertex_count`. No graph is built in that case.
    pub fn to_graph<G: DirectedGraph>(&self) -> Result<G, GraphError> {
        self.validate()?;
        let mut graph = G::with_vertices(self.vertex_count);
        for &(from, to) in &self.edges {
            graph.add_edge(from, to);
        }
        Ok(graph)
    }

    /// Parses an edge list from JSON.
    ///
    /// The edges are not validated; [`to_graph`](Self::to_graph) does that.
    ///
    /// # Errors
    /// Fails if the input is not a JSON edge list.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let list: Self = serde_json::from_reader(reader).context("failed to parse edge list JSON")?;
        #[cfg(feature = "tracing")]
        tracing::debug!(vertex_count = list.vertex_count, edges = list.edges.len(), "parsed edge list");
        Ok(list)
    }

    /// Writes this edge list as pretty-printed JSON.
    ///
    /// # Errors
    /// Fails if the writer fails.
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self).context("failed to write edge list JSON")
    }
}

/// Reads a JSON edge list from `path` and builds a graph from it.
///
/// # Errors
/// Fails if the file cannot be opened, is not a JSON edge list, or contains
/// an out-of-range edge.
pub fn load_graph<G: DirectedGraph, P: AsRef<Path>>(path: P) -> Result<G> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let list = EdgeList::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to read edge list from {}", path.display()))?;
    let graph = list
        .to_graph()
        .with_context(|| format!("invalid edge list in {}", path.display()))?;
    Ok(graph)
}

/// Writes `graph` to `path` as a JSON edge list.
///
/// # Errors
/// Fails if the file cannot be created or written.
pub fn save_graph<G: DirectedGraph + ?Sized, P: AsRef<Path>>(graph: &G, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    EdgeList::from_graph(graph).to_writer(&mut writer)?;
    writer
        .flush()
        .with_context(|| format!("failed to flush {}", path.display()))
}

/// Parses a JSON array of [`PathQuery`] objects.
///
/// # Errors
/// Fails if the input is not a JSON array of queries.
pub fn queries_from_reader<R: Read>(reader: R) -> Result<Vec<PathQuery>> {
    serde_json::from_reader(reader).context("failed to parse path queries JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{linear_chain, AdjacencyGraph, MatrixGraph};

    #[test]
    fn from_graph_lists_edges_in_order() {
        let g = AdjacencyGraph::from_adjacency(vec![vec![2, 1], vec![], vec![0]]);
        let list = EdgeList::from_graph(&g);
        assert_eq!(list.vertex_count, 3);
        assert_eq!(list.edges, vec![(0, 1), (0, 2), (2, 0)]);
    }

    #[test]
    fn to_graph_rebuilds_on_another_backing() {
        let chain: AdjacencyGraph = linear_chain(5);
        let list = EdgeList::from_graph(&chain);
        let matrix: MatrixGraph = list.to_graph().unwrap();
        assert_eq!(EdgeList::from_graph(&matrix), list);
    }

    #[test]
    fn to_graph_rejects_out_of_range_edge() {
        let list = EdgeList {
            vertex_count: 2,
            edges: vec![(0, 1), (1, 2)],
        };
        let err = list.to_graph::<MatrixGraph>().unwrap_err();
        assert_eq!(
            err,
            GraphError::EdgeOutOfBounds {
                from: 1,
                to: 2,
                vertex_count: 2
            }
        );
        assert_eq!(err.to_string(), "edge 1->2 out of bounds for n=2");
    }

    #[test]
    fn json_shape() {
        let list: EdgeList = serde_json::from_str(r#"{"vertex_count": 3, "edges": [[0, 1], [1, 2]]}"#).unwrap();
        assert_eq!(list.edges, vec![(0, 1), (1, 2)]);

        let isolated: EdgeList = serde_json::from_str(r#"{"vertex_count": 4}"#).unwrap();
        assert_eq!(isolated.vertex_count, 4);
        assert!(isolated.edges.is_empty());
    }

    #[test]
    fn from_reader_reports_parse_errors() {
        let err = EdgeList::from_reader(&b"{\"edges\": 5}"[..]).unwrap_err();
        assert!(err.to_string().contains("failed to parse edge list JSON"));
    }

    #[test]
    fn queries_parse() {
        let queries =
            queries_from_reader(&br#"[{"source": 0, "destination": 2, "bound": 2}]"#[..]).unwrap();
        assert_eq!(queries, vec![PathQuery::new(0, 2, 2)]);
    }
}
