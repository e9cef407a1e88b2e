//! Sparse node × hyperedge incidence matrices in coordinate form.
//!
//! The coordinate (COO) layout (parallel row/column/value arrays) is
//! deliberately framework-neutral: any consuming numerical library can build
//! its own sparse tensor from the three arrays without this crate depending
//! on a tensor type.

use num_traits::{One, Zero};

use crate::error::{LiftError, Result};
use crate::hypergraph::Hypergraph;

/// A sparse matrix in coordinate form: entry `k` is
/// `(rows[k], cols[k], values[k])`.
///
/// The value type is generic so consumers can request whatever their
/// numerical backend ingests (`u8`, `f32`, `f64`, ...).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CooMatrix<T> {
    num_rows: usize,
    num_cols: usize,
    rows: Vec<usize>,
    cols: Vec<usize>,
    values: Vec<T>,
}

impl<T> CooMatrix<T> {
    /// The `num_rows × num_cols` matrix with no stored entries.
    pub fn empty(num_rows: usize, num_cols: usize) -> Self {
        CooMatrix {
            num_rows,
            num_cols,
            rows: Vec::new(),
            cols: Vec::new(),
            values: Vec::new(),
        }
    }

    /// `(num_rows, num_cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.num_rows, self.num_cols)
    }

    /// Number of stored entries.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    pub fn cols(&self) -> &[usize] {
        &self.cols
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Append the entry `(row, col, value)`. The caller is responsible for
    /// bounds and for not storing duplicate coordinates.
    pub(crate) fn push(&mut self, row: usize, col: usize, value: T) {
        self.rows.push(row);
        self.cols.push(col);
        self.values.push(value);
    }

    /// Number of stored entries per row.
    ///
    /// These are structural occupancy counts, not numeric sums; for a binary
    /// incidence matrix the two coincide.
    pub fn row_sums(&self) -> Vec<usize> {
        let mut sums = vec![0; self.num_rows];
        for &r in &self.rows {
            sums[r] += 1;
        }
        sums
    }

    /// Number of stored entries per column.
    pub fn col_sums(&self) -> Vec<usize> {
        let mut sums = vec![0; self.num_cols];
        for &c in &self.cols {
            sums[c] += 1;
        }
        sums
    }

    /// The transpose: same entries with rows and columns swapped.
    pub fn transpose(self) -> Self {
        CooMatrix {
            num_rows: self.num_cols,
            num_cols: self.num_rows,
            rows: self.cols,
            cols: self.rows,
            values: self.values,
        }
    }
}

impl<T: Zero + Clone> CooMatrix<T> {
    /// Materialize as a dense row-major array of length
    /// `num_rows * num_cols`.
    ///
    /// Only suitable when `num_rows * num_cols` is small (demo-sized
    /// datasets); for anything larger, hand the COO arrays to the consumer
    /// directly.
    pub fn to_dense(&self) -> Vec<T> {
        let mut dense = vec![T::zero(); self.num_rows * self.num_cols];
        for ((&r, &c), v) in self.rows.iter().zip(&self.cols).zip(&self.values) {
            dense[r * self.num_cols + c] = v.clone();
        }
        dense
    }
}

/// Build the `num_nodes × len` binary incidence matrix of a hypergraph:
/// entry `(i, j)` is one iff node `i` belongs to hyperedge `j`.
///
/// Construction is a single pass over hyperedge members, O(total hyperedge
/// size), with no dense intermediate. Each `(node, hyperedge)` pair is
/// stored at most once because hyperedges are canonical sets.
///
/// The structural invariants are checked unconditionally before returning:
/// every column and every row must have at least one entry, otherwise
/// [`LiftError::StructuralInvariantViolation`] reports the offending
/// indices. See the error's docs for why proceeding would be worse than
/// failing.
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
/// let h = lift(&graph, &config).unwrap();
///
/// let b = incidence_matrix::<f32>(&h).unwrap();
/// assert_eq!(b.shape(), (4, 4));
/// // node 1 belongs to hyperedges 0 = {1} and 2 = {1, 3}
/// assert_eq!(b.row_sums(), vec![1, 2, 2, 1]);
/// ```
pub fn incidence_matrix<T: Zero + One + Clone>(hypergraph: &Hypergraph) -> Result<CooMatrix<T>> {
    let n = hypergraph.num_nodes();
    let m = hypergraph.len();

    let mut matrix = CooMatrix::empty(n, m);
    let mut row_covered = vec![false; n];
    let mut empty_cols = Vec::new();

    for (j, edge) in hypergraph.hyperedges().iter().enumerate() {
        if edge.is_empty() {
            empty_cols.push(j);
        }
        for &i in edge.nodes() {
            row_covered[i] = true;
            matrix.push(i, j, T::one());
        }
    }

    let empty_rows: Vec<usize> = row_covered
        .iter()
        .enumerate()
        .filter_map(|(i, &covered)| (!covered).then_some(i))
        .collect();

    if !empty_rows.is_empty() || !empty_cols.is_empty() {
        return Err(LiftError::StructuralInvariantViolation {
            empty_rows,
            empty_cols,
        });
    }

    Ok(matrix)
}
