//! Base graphs: a node count and a directed edge list.
//!
//! A [`Graph`] is the input to [`lift`](crate::lift::lift). It is validated
//! on construction and immutable afterwards.

use crate::error::{LiftError, Result};

/// A graph on nodes `{0..num_nodes}`, given by a list of directed edges.
///
/// An undirected graph is represented by listing both directions of each
/// edge; [`Graph::symmetrize`] produces that form from a one-directional
/// list. Whether to do so is the caller's choice (see
/// [`LiftConfig`](crate::lift::LiftConfig)); it changes which neighbors are
/// visible from each node, and therefore which hyperedges a lift produces.
///
/// ```rust
/// use hypergraph_lift::graph::Graph;
///
/// let g = Graph::new(4, vec![(0, 1), (1, 2), (2, 3)]).unwrap();
/// assert_eq!(g.num_nodes(), 4);
///
/// // node 1 has no *outgoing* neighbors besides 2 until we symmetrize
/// assert_eq!(g.adjacency()[1], vec![2]);
/// assert_eq!(g.symmetrize().adjacency()[1], vec![0, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    num_nodes: usize,
    edges: Vec<(usize, usize)>,
}

impl Graph {
    /// Construct a graph, checking every edge endpoint is in `[0, num_nodes)`.
    ///
    /// Fails with [`LiftError::EmptyGraph`] when `num_nodes == 0` and with
    /// [`LiftError::InvalidEdge`] on the first out-of-range endpoint.
    pub fn new(num_nodes: usize, edges: Vec<(usize, usize)>) -> Result<Self> {
        if num_nodes == 0 {
            return Err(LiftError::EmptyGraph);
        }

        for (index, &(s, t)) in edges.iter().enumerate() {
            let node = if s >= num_nodes { s } else { t };
            if node >= num_nodes {
                return Err(LiftError::InvalidEdge {
                    index,
                    node,
                    num_nodes,
                });
            }
        }

        Ok(Graph { num_nodes, edges })
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// The undirected form of this graph: both directions of every edge.
    ///
    /// Idempotent up to adjacency: symmetrizing twice yields the same
    /// neighbor sets as symmetrizing once. Self-loops are kept as-is.
    pub fn symmetrize(&self) -> Self {
        let mut edges = Vec::with_capacity(self.edges.len() * 2);
        for &(s, t) in &self.edges {
            edges.push((s, t));
            if s != t {
                edges.push((t, s));
            }
        }
        Graph {
            num_nodes: self.num_nodes,
            edges,
        }
    }

    /// Per-node sorted, deduplicated out-neighbor lists.
    ///
    /// Built in a single O(E) pass over the edge list (plus per-node sorts),
    /// so each subsequent neighborhood lookup is O(degree) instead of an
    /// O(E) scan. Parallel edges collapse; a self-loop `(v, v)` makes `v`
    /// its own neighbor.
    pub fn adjacency(&self) -> Vec<Vec<usize>> {
        let mut index: Vec<Vec<usize>> = vec![Vec::new(); self.num_nodes];
        for &(s, t) in &self.edges {
            index[s].push(t);
        }
        for neighbors in &mut index {
            neighbors.sort_unstable();
            neighbors.dedup();
        }
        index
    }
}
