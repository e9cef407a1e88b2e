//! Lift Zachary's karate club graph into a hypergraph and print the
//! incidence matrix statistics a training script would log before handing
//! the COO arrays to its numerical framework.
//!
//! Run with `cargo run --example karate_club`.

use hypergraph_lift::prelude::*;

/// Edge list of Zachary's karate club (34 nodes, 78 undirected edges).
#[rustfmt::skip]
fn karate_club_edges() -> Vec<(usize, usize)> {
    vec![
        (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6), (0, 7), (0, 8),
        (0, 10), (0, 11), (0, 12), (0, 13), (0, 17), (0, 19), (0, 21),
        (0, 31), (1, 2), (1, 3), (1, 7), (1, 13), (1, 17), (1, 19),
        (1, 21), (1, 30), (2, 3), (2, 7), (2, 8), (2, 9), (2, 13),
        (2, 27), (2, 28), (2, 32), (3, 7), (3, 12), (3, 13), (4, 6),
        (4, 10), (5, 6), (5, 10), (5, 16), (6, 16), (8, 30), (8, 32),
        (8, 33), (9, 33), (13, 33), (14, 32), (14, 33), (15, 32),
        (15, 33), (18, 32), (18, 33), (19, 33), (20, 32), (20, 33),
        (22, 32), (22, 33), (23, 25), (23, 27), (23, 29), (23, 32),
        (23, 33), (24, 25), (24, 27), (24, 31), (25, 31), (26, 29),
        (26, 33), (27, 33), (28, 31), (28, 33), (29, 32), (29, 33),
        (30, 32), (30, 33), (31, 32), (31, 33), (32, 33),
    ]
}

fn main() -> Result<()> {
    let graph = Graph::new(34, karate_club_edges())?;

    let config = LiftConfig {
        symmetrize: true,
        neighborhood: NeighborhoodMode::Open,
        isolated: IsolatedNodePolicy::Reject,
    };

    let hypergraph = lift(&graph, &config)?;
    let stats = hypergraph.size_stats().expect("at least one hyperedge");
    println!(
        "lifted {} nodes into {} hyperedges ({} duplicates collapsed)",
        graph.num_nodes(),
        hypergraph.len(),
        graph.num_nodes() - hypergraph.len(),
    );
    println!(
        "hyperedge sizes: min {} max {} mean {:.2} median {:.1} std {:.2}",
        stats.min, stats.max, stats.mean, stats.median, stats.std_dev,
    );

    let b = incidence_matrix::<f32>(&hypergraph)?;
    let (n, m) = b.shape();
    println!("incidence matrix: {n} x {m}, {} nonzeros", b.nnz());

    // The three COO arrays are what a consuming framework ingests.
    assert_eq!(b.rows().len(), b.nnz());
    assert_eq!(b.cols().len(), b.nnz());
    assert_eq!(b.values().len(), b.nnz());

    Ok(())
}
