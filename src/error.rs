//! Failure conditions for lifting and incidence construction.
//!
//! None of these are recoverable within this crate: each is surfaced to the
//! caller at the point of detection, with no partial results.

use thiserror::Error;

/// Errors produced by [`lift`](crate::lift::lift) and
/// [`incidence_matrix`](crate::incidence::incidence_matrix).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LiftError {
    /// The input graph has zero nodes.
    #[error("graph has zero nodes")]
    EmptyGraph,

    /// An edge (graph edge or hyperedge) references a node index outside
    /// `[0, num_nodes)`.
    ///
    /// This indicates a bug in whatever loaded the edge list; it is reported
    /// immediately rather than dropped.
    #[error("edge #{index} references node {node} outside [0, {num_nodes})")]
    InvalidEdge {
        /// Position of the offending edge in its edge list.
        index: usize,
        /// The offending node index.
        node: usize,
        /// Number of nodes in the graph.
        num_nodes: usize,
    },

    /// The incidence matrix has an all-zero row or column.
    ///
    /// An all-zero row means a node belongs to no hyperedge; fed into a
    /// message-passing layer, that node would never receive a message and its
    /// embedding would silently never update. So this is fatal, not a warning.
    #[error("incidence matrix has empty rows {empty_rows:?} and empty columns {empty_cols:?}")]
    StructuralInvariantViolation {
        /// Node indices with no hyperedge membership. When raised by the
        /// lifter under [`IsolatedNodePolicy::Reject`], these are the nodes
        /// whose neighborhoods were empty.
        ///
        /// [`IsolatedNodePolicy::Reject`]: crate::lift::IsolatedNodePolicy::Reject
        empty_rows: Vec<usize>,
        /// Hyperedge indices with no members.
        empty_cols: Vec<usize>,
    },
}

pub type Result<T> = std::result::Result<T, LiftError>;
