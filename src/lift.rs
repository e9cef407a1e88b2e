//! Lifting a graph into a hypergraph of 1-hop neighborhoods.
//!
//! The lift produces one candidate hyperedge per node (that node's
//! neighborhood) and collapses exact duplicates. Every knob that changes
//! the result (symmetrization, open vs closed neighborhoods, isolated-node
//! handling) is explicit in [`LiftConfig`]; there is no process-global
//! configuration.

use log::debug;

use crate::error::{LiftError, Result};
use crate::graph::Graph;
use crate::hypergraph::{Hyperedge, Hypergraph};

/// Whether a node's neighborhood includes the node itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NeighborhoodMode {
    /// `neighbors(v)` excludes `v` (unless the graph has a self-loop at `v`).
    Open,
    /// `neighbors(v)` always includes `v`.
    ///
    /// In this mode every node belongs to its own hyperedge, so the lifted
    /// hypergraph can never have an uncovered node or an empty hyperedge.
    Closed,
}

/// What to do with a node whose neighborhood is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IsolatedNodePolicy {
    /// Fail the lift with [`LiftError::StructuralInvariantViolation`].
    Reject,
    /// Assign the node the singleton hyperedge `{v}`.
    SelfLoop,
}

/// Configuration for a single lift.
///
/// All three fields must be chosen by the caller: there is deliberately no
/// `Default` impl, because each choice changes the resulting hyperedges and
/// none of them can be inferred from the input graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LiftConfig {
    /// Add the reverse of every edge before lifting, treating the graph as
    /// undirected.
    pub symmetrize: bool,
    pub neighborhood: NeighborhoodMode,
    pub isolated: IsolatedNodePolicy,
}

/// Lift a graph into the hypergraph of its per-node 1-hop neighborhoods.
///
/// One candidate hyperedge is computed per node; exact duplicates (two nodes
/// with the same neighbor set) collapse to a single hyperedge, keeping the
/// first occurrence in node order.
///
/// ```rust
/// use hypergraph_lift::prelude::*;
///
/// let graph = Graph::new(4, vec![(0, 1), (1, 2), (2, 3)]).unwrap();
/// let config = LiftConfig {
///     symmetrize: true,
///     neighborhood: NeighborhoodMode::Open,
///     isolated: IsolatedNodePolicy::Reject,
/// };
///
/// let h = lift(&graph, &config).unwrap();
/// let edges: Vec<&[usize]> = h.hyperedges().iter().map(|e| e.nodes()).collect();
/// assert_eq!(edges, vec![&[1][..], &[0, 2][..], &[1, 3][..], &[2][..]]);
/// ```
pub fn lift(graph: &Graph, config: &LiftConfig) -> Result<Hypergraph> {
    let symmetrized;
    let graph = if config.symmetrize {
        symmetrized = graph.symmetrize();
        &symmetrized
    } else {
        graph
    };

    let n = graph.num_nodes();
    let adjacency = graph.adjacency();

    let mut candidates = Vec::with_capacity(n);
    let mut empty_neighborhoods = Vec::new();

    for (v, neighbors) in adjacency.into_iter().enumerate() {
        let mut members = neighbors;
        if config.neighborhood == NeighborhoodMode::Closed {
            // adjacency lists are sorted, keep them that way
            if let Err(at) = members.binary_search(&v) {
                members.insert(at, v);
            }
        }

        if members.is_empty() {
            match config.isolated {
                IsolatedNodePolicy::SelfLoop => candidates.push(Hyperedge::singleton(v)),
                IsolatedNodePolicy::Reject => empty_neighborhoods.push(v),
            }
        } else {
            candidates.push(Hyperedge::new(members));
        }
    }

    if !empty_neighborhoods.is_empty() {
        return Err(LiftError::StructuralInvariantViolation {
            empty_rows: empty_neighborhoods,
            empty_cols: vec![],
        });
    }

    let hypergraph = Hypergraph::new(n, candidates)?;

    debug!(
        "lifted {} nodes / {} edges into {} hyperedges ({} duplicates collapsed)",
        n,
        graph.num_edges(),
        hypergraph.len(),
        n - hypergraph.len(),
    );
    if let Some(stats) = hypergraph.size_stats() {
        debug!(
            "hyperedge sizes: min {} max {} mean {:.2} median {:.1} std {:.2}, {} singletons",
            stats.min, stats.max, stats.mean, stats.median, stats.std_dev, stats.singletons,
        );
    }

    Ok(hypergraph)
}
