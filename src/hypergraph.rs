//! Hyperedges and the deduplicated hypergraph they form.

use std::collections::HashSet;

use crate::error::{LiftError, Result};

/// A hyperedge: a set of node indices in canonical form.
///
/// The canonical form is a sorted, deduplicated list. Sorting by node id is
/// necessary and sufficient for set-equality deduplication: two hyperedges
/// are the same set iff their canonical lists are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hyperedge(Vec<usize>);

impl Hyperedge {
    /// Canonicalize a list of node indices into a hyperedge.
    pub fn new(mut nodes: Vec<usize>) -> Self {
        nodes.sort_unstable();
        nodes.dedup();
        Hyperedge(nodes)
    }

    /// The singleton hyperedge `{v}`.
    pub fn singleton(v: usize) -> Self {
        Hyperedge(vec![v])
    }

    /// Member node indices, sorted ascending.
    pub fn nodes(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Size statistics over a hypergraph's hyperedges, for diagnostic logging.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SizeStats {
    pub count: usize,
    pub min: usize,
    pub max: usize,
    pub mean: f64,
    pub median: f64,
    /// Population standard deviation of hyperedge sizes.
    pub std_dev: f64,
    /// Number of size-1 hyperedges (isolated nodes under the self-loop
    /// policy, or nodes with a single distinct neighbor).
    pub singletons: usize,
}

/// A set of unique hyperedges over nodes `{0..num_nodes}`.
///
/// Constructed once, read-only afterwards. Insertion order is preserved, so
/// the `j`-th hyperedge is the `j`-th *column* of the incidence matrix built
/// from this hypergraph. Duplicates are collapsed on construction: only the
/// first occurrence of each node set is kept, whichever anchor node produced
/// it.
///
/// ```rust
/// use hypergraph_lift::hypergraph::{Hyperedge, Hypergraph};
///
/// // same set twice, in different orders: collapses to one hyperedge
/// let h = Hypergraph::new(3, vec![
///     Hyperedge::new(vec![1, 0]),
///     Hyperedge::new(vec![0, 1]),
///     Hyperedge::new(vec![2]),
/// ]).unwrap();
/// assert_eq!(h.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hypergraph {
    num_nodes: usize,
    hyperedges: Vec<Hyperedge>,
}

impl Hypergraph {
    /// Build a hypergraph from a sequence of hyperedges, collapsing exact
    /// duplicates. First occurrence wins; order is otherwise preserved.
    ///
    /// Fails with [`LiftError::InvalidEdge`] when a hyperedge references a
    /// node outside `[0, num_nodes)`.
    pub fn new(num_nodes: usize, edges: impl IntoIterator<Item = Hyperedge>) -> Result<Self> {
        let mut seen: HashSet<Hyperedge> = HashSet::new();
        let mut hyperedges = Vec::new();
        for (index, edge) in edges.into_iter().enumerate() {
            // canonical form is sorted, so the last member is the largest
            if let Some(&node) = edge.nodes().last() {
                if node >= num_nodes {
                    return Err(LiftError::InvalidEdge {
                        index,
                        node,
                        num_nodes,
                    });
                }
            }
            if seen.insert(edge.clone()) {
                hyperedges.push(edge);
            }
        }
        Ok(Hypergraph {
            num_nodes,
            hyperedges,
        })
    }

    /// The hypergraph on `num_nodes` nodes with no hyperedges.
    pub fn empty(num_nodes: usize) -> Self {
        Hypergraph {
            num_nodes,
            hyperedges: Vec::new(),
        }
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Number of unique hyperedges.
    pub fn len(&self) -> usize {
        self.hyperedges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hyperedges.is_empty()
    }

    /// The unique hyperedges, in insertion order.
    pub fn hyperedges(&self) -> &[Hyperedge] {
        &self.hyperedges
    }

    /// Size statistics over the hyperedges, or `None` when there are none.
    pub fn size_stats(&self) -> Option<SizeStats> {
        if self.hyperedges.is_empty() {
            return None;
        }

        let mut sizes: Vec<usize> = self.hyperedges.iter().map(|e| e.len()).collect();
        sizes.sort_unstable();

        let count = sizes.len();
        let sum: usize = sizes.iter().sum();
        let mean = sum as f64 / count as f64;
        let variance = sizes
            .iter()
            .map(|&s| {
                let d = s as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / count as f64;

        let median = if count % 2 == 1 {
            sizes[count / 2] as f64
        } else {
            (sizes[count / 2 - 1] + sizes[count / 2]) as f64 / 2.0
        };

        Some(SizeStats {
            count,
            min: sizes[0],
            max: sizes[count - 1],
            mean,
            median,
            std_dev: variance.sqrt(),
            singletons: sizes.iter().filter(|&&s| s == 1).count(),
        })
    }

    /// Per-node sorted lists of nodes sharing at least one hyperedge.
    ///
    /// This is the "neighbors via shared hyperedge" structure consumers use
    /// to wire node-to-node message passing. A node is never its own
    /// neighbor.
    pub fn node_adjacency(&self) -> Vec<Vec<usize>> {
        let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); self.num_nodes];
        for edge in &self.hyperedges {
            for &i in edge.nodes() {
                for &j in edge.nodes() {
                    if i != j {
                        adjacency[i].push(j);
                    }
                }
            }
        }
        for neighbors in &mut adjacency {
            neighbors.sort_unstable();
            neighbors.dedup();
        }
        adjacency
    }
}
