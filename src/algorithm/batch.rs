//! Many independent runs over one shared graph.

use rayon::prelude::*;

use crate::algorithm::{PathResultSet, ShortestPathAlgorithm};
use crate::graph::{Graph, Weight};
use crate::Result;

/// Computes shortest paths from every node in `sources`, in parallel.
///
/// Each run owns its own distance, path and frontier state and only reads the
/// graph, so runs never contend. Results come back in the order of `sources`.
/// The first failing run fails the whole batch.
pub fn compute_from_sources<W, G, A>(
    algorithm: &A,
    graph: &G,
    sources: &[usize],
) -> Result<Vec<PathResultSet<W>>>
where
    W: Weight,
    G: Graph<W> + Sync + ?Sized,
    A: ShortestPathAlgorithm<W, G> + Sync,
{
    log::debug!(
        "{}: computing shortest paths from {} sources",
        algorithm.name(),
        sources.len()
    );

    sources
        .par_iter()
        .map(|&source| algorithm.compute_shortest_paths(graph, source))
        .collect()
}
