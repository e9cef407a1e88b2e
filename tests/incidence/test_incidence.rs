use std::collections::HashSet;

use hypergraph_lift::prelude::*;
use proptest::prelude::*;

use crate::lift::strategy::{arb_graph, arb_total_config};

// The worked example, end to end: path graph on 4 nodes, symmetrized, open
// neighborhoods. Memberships are asserted exactly from the neighbor sets
// {1}, {0,2}, {1,3}, {2}, not from a hand-guessed matrix.
#[test]
fn path_graph_incidence_memberships() {
    let graph = Graph::new(4, vec![(0, 1), (1, 2), (2, 3)]).unwrap();
    let config = LiftConfig {
        symmetrize: true,
        neighborhood: NeighborhoodMode::Open,
        isolated: IsolatedNodePolicy::Reject,
    };
    let h = lift(&graph, &config).unwrap();
    let b = incidence_matrix::<u8>(&h).unwrap();

    assert_eq!(b.shape(), (4, 4));

    let entries: HashSet<(usize, usize)> = b
        .rows()
        .iter()
        .zip(b.cols())
        .map(|(&r, &c)| (r, c))
        .collect();
    let expected: HashSet<(usize, usize)> = [
        (1, 0), // hyperedge 0 = {1}
        (0, 1),
        (2, 1), // hyperedge 1 = {0, 2}
        (1, 2),
        (3, 2), // hyperedge 2 = {1, 3}
        (2, 3), // hyperedge 3 = {2}
    ]
    .into_iter()
    .collect();
    assert_eq!(entries, expected);

    assert_eq!(b.row_sums(), vec![1, 2, 2, 1]);
    assert_eq!(b.col_sums(), vec![1, 2, 2, 1]);
}

// A directed graph can produce an empty *row* without any isolated node:
// node 0 here has out-neighbors (so its own hyperedge is fine) but nobody
// lists 0 as a neighbor. The builder must catch this.
#[test]
fn source_only_node_fails_unsymmetrized() {
    let graph = Graph::new(3, vec![(0, 1), (1, 2), (2, 1)]).unwrap();
    let config = LiftConfig {
        symmetrize: false,
        neighborhood: NeighborhoodMode::Open,
        isolated: IsolatedNodePolicy::Reject,
    };
    let h = lift(&graph, &config).unwrap();
    let err = incidence_matrix::<u8>(&h).unwrap_err();
    match err {
        LiftError::StructuralInvariantViolation { empty_rows, empty_cols } => {
            assert_eq!(empty_rows, vec![0]);
            assert!(empty_cols.is_empty());
        }
        other => panic!("expected StructuralInvariantViolation, got {other:?}"),
    }
}

#[test]
fn self_loop_policy_yields_valid_matrix() {
    let graph = Graph::new(4, vec![(0, 1)]).unwrap();
    let config = LiftConfig {
        symmetrize: true,
        neighborhood: NeighborhoodMode::Open,
        isolated: IsolatedNodePolicy::SelfLoop,
    };
    let h = lift(&graph, &config).unwrap();
    let b = incidence_matrix::<f64>(&h).unwrap();

    // hyperedges: {1}, {0}, {2}, {3}
    assert_eq!(b.shape(), (4, 4));
    assert!(b.row_sums().iter().all(|&s| s >= 1));
    assert!(b.col_sums().iter().all(|&s| s >= 1));
}

proptest! {
    // Shape is always n × m for n nodes and m unique hyperedges, and the
    // number of stored entries is the total hyperedge size.
    #[test]
    fn shape_and_nnz(
        graph in arb_graph(12, 30),
        config in arb_total_config(),
    ) {
        let h = lift(&graph, &config).unwrap();
        let b = incidence_matrix::<u8>(&h).unwrap();
        prop_assert_eq!(b.shape(), (graph.num_nodes(), h.len()));
        let total: usize = h.hyperedges().iter().map(|e| e.len()).sum();
        prop_assert_eq!(b.nnz(), total);
    }

    // Every matrix the builder returns satisfies the invariants.
    #[test]
    fn no_empty_rows_or_columns(
        graph in arb_graph(12, 30),
        config in arb_total_config(),
    ) {
        let h = lift(&graph, &config).unwrap();
        let b = incidence_matrix::<u8>(&h).unwrap();
        prop_assert!(b.row_sums().into_iter().all(|s| s >= 1));
        prop_assert!(b.col_sums().into_iter().all(|s| s >= 1));
    }

    // Deduplication invariant, stated on the matrix: no two columns are
    // identical.
    #[test]
    fn no_two_columns_identical(
        graph in arb_graph(12, 30),
        config in arb_total_config(),
    ) {
        let h = lift(&graph, &config).unwrap();
        let b = incidence_matrix::<u8>(&h).unwrap();

        let (_, m) = b.shape();
        let mut columns: Vec<Vec<usize>> = vec![Vec::new(); m];
        for (&r, &c) in b.rows().iter().zip(b.cols()) {
            columns[c].push(r);
        }
        let distinct: HashSet<Vec<usize>> = columns.iter().cloned().collect();
        prop_assert_eq!(distinct.len(), m);
    }

    // Lifting twice produces byte-for-byte identical COO triples.
    #[test]
    fn matrix_construction_is_deterministic(
        graph in arb_graph(12, 30),
        config in arb_total_config(),
    ) {
        let b1 = incidence_matrix::<u8>(&lift(&graph, &config).unwrap()).unwrap();
        let b2 = incidence_matrix::<u8>(&lift(&graph, &config).unwrap()).unwrap();
        prop_assert_eq!(b1, b2);
    }

    // Dense materialization agrees with the sparse triples.
    #[test]
    fn dense_agrees_with_sparse(
        graph in arb_graph(8, 16),
        config in arb_total_config(),
    ) {
        let h = lift(&graph, &config).unwrap();
        let b = incidence_matrix::<u8>(&h).unwrap();
        let dense = b.to_dense();
        let (_, m) = b.shape();

        let ones: usize = dense.iter().filter(|&&x| x == 1).count();
        prop_assert_eq!(ones, b.nnz());
        for (&r, &c) in b.rows().iter().zip(b.cols()) {
            prop_assert_eq!(dense[r * m + c], 1);
        }
    }

    // Transposing is an involution on shape and entries.
    #[test]
    fn transpose_involution(
        graph in arb_graph(8, 16),
        config in arb_total_config(),
    ) {
        let b = incidence_matrix::<u8>(&lift(&graph, &config).unwrap()).unwrap();
        let roundtrip = b.clone().transpose().transpose();
        prop_assert_eq!(b, roundtrip);
    }
}
