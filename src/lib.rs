//! # Hypergraph Lift
//!
//! Convert a plain graph into a hypergraph of 1-hop neighborhoods, and
//! materialize its sparse node × hyperedge incidence matrix:
//!
//! ```text
//!                                      hyperedges
//!                                  {1}  {0,2}  {1,3}  {2}
//!                               0 [ 0     1      0     0 ]
//!   0 ── 1 ── 2 ── 3   ──lift──▶1 [ 1     0      1     0 ]
//!                               2 [ 0     1      0     1 ]
//!                               3 [ 0     0      1     0 ]
//! ```
//!
//! Each node contributes one candidate hyperedge, its neighbor set, and
//! exact duplicates collapse to a single hyperedge. The incidence matrix is
//! produced in sparse coordinate form (row/col/value arrays) so that any
//! consuming numerical framework can ingest it; this crate does not depend
//! on any tensor library.
//!
//! # Example
//!
//! ```rust
//! use hypergraph_lift::prelude::*;
//!
//! let graph = Graph::new(4, vec![(0, 1), (1, 2), (2, 3)]).unwrap();
//!
//! // Every choice that changes the result is explicit.
//! let config = LiftConfig {
//!     symmetrize: true,
//!     neighborhood: NeighborhoodMode::Open,
//!     isolated: IsolatedNodePolicy::Reject,
//! };
//!
//! let hypergraph = lift(&graph, &config).unwrap();
//! assert_eq!(hypergraph.len(), 4);
//!
//! let b = incidence_matrix::<f32>(&hypergraph).unwrap();
//! assert_eq!(b.shape(), (4, 4));
//!
//! // Structural invariants hold for every matrix the builder returns:
//! // no empty rows (uncovered nodes), no empty columns (empty hyperedges).
//! assert!(b.row_sums().iter().all(|&s| s >= 1));
//! assert!(b.col_sums().iter().all(|&s| s >= 1));
//! ```
//!
//! # Failure conditions
//!
//! All failures are surfaced immediately as [`LiftError`](error::LiftError);
//! there are no silent defaults and no partial results. In particular a
//! matrix with an empty row is *rejected* rather than returned, because a
//! node with no hyperedge membership silently receives no messages in a
//! downstream message-passing layer.

pub mod error;
pub mod graph;
pub mod hypergraph;
pub mod incidence;
pub mod lift;

pub mod prelude {
    //! Convenience re-exports of the whole pipeline.
    pub use crate::error::{LiftError, Result};
    pub use crate::graph::Graph;
    pub use crate::hypergraph::{Hyperedge, Hypergraph, SizeStats};
    pub use crate::incidence::{incidence_matrix, CooMatrix};
    pub use crate::lift::{lift, IsolatedNodePolicy, LiftConfig, NeighborhoodMode};
}
