use std::collections::BTreeSet;
use std::mem;

use log::{debug, trace};

use crate::algorithm::{PathResult, PathResultSet, ShortestPathAlgorithm};
use crate::graph::validate::validate_indexing;
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Counters collected while relaxing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelaxationStats {
    /// Number of rounds, i.e. non-empty frontiers processed
    pub rounds: usize,
    /// Number of strict improvements recorded
    pub relaxations: usize,
    /// Number of edges examined across all rounds
    pub edges_scanned: usize,
}

/// Round-based frontier relaxation.
///
/// Starting from the source, every round walks the outgoing edges of the nodes
/// whose distance improved in the previous round. A strictly cheaper candidate
/// replaces the target's distance and path, and schedules the target for the
/// next round. The search ends after a round that improves nothing.
///
/// This is a label-correcting method, not Dijkstra: a node may be improved in
/// several rounds if a cheaper route through more hops shows up later. Every
/// improvement strictly lowers a non-negative distance, so it terminates for
/// non-negative weights. Negative weights are not supported.
#[derive(Debug, Default, Clone)]
pub struct FrontierRelaxation {
    /// Whether to trace the frontier contents of each round
    round_log: bool,
}

impl FrontierRelaxation {
    /// Creates a new frontier relaxation instance
    pub fn new() -> Self {
        FrontierRelaxation { round_log: false }
    }

    /// Enable or disable tracing of every round's frontier
    pub fn with_round_log(mut self, enabled: bool) -> Self {
        self.round_log = enabled;
        self
    }

    /// Computes shortest paths and returns the counters gathered along the way.
    ///
    /// Fails with [`Error::InvalidGraph`] before doing any work if a node is out
    /// of place or an edge dangles, and with [`Error::SourceNotFound`] if the
    /// source is not a node of the graph.
    pub fn compute_with_stats<W, G>(
        &self,
        graph: &G,
        source: usize,
    ) -> Result<(PathResultSet<W>, RelaxationStats)>
    where
        W: Weight,
        G: Graph<W> + ?Sized,
    {
        validate_indexing::<W, G>(graph)?;
        if !graph.has_node(source) {
            return Err(Error::SourceNotFound(source));
        }

        let n = graph.node_count();
        debug!("frontier relaxation from node {} over {} nodes", source, n);

        let mut distances = vec![W::unreachable(); n];
        let mut paths: Vec<Vec<usize>> = vec![Vec::new(); n];
        distances[source] = W::zero();
        paths[source].push(source);

        let mut stats = RelaxationStats::default();
        let mut current = BTreeSet::from([source]);
        let mut next = BTreeSet::new();

        while !current.is_empty() {
            stats.rounds += 1;
            if self.round_log {
                trace!("round {}: frontier {:?}", stats.rounds, current);
            } else {
                trace!("round {}: {} frontier nodes", stats.rounds, current.len());
            }

            for &u in &current {
                for edge in graph.outgoing_edges(u) {
                    stats.edges_scanned += 1;

                    // Read distance[u] per edge: an earlier node of this round may have lowered it
                    let candidate = distances[u].relax(edge.weight);
                    let v = edge.target;
                    if candidate < distances[v] {
                        distances[v] = candidate;

                        // Own copy, later changes to paths[u] must not leak into paths[v]
                        let mut path = Vec::with_capacity(paths[u].len() + 1);
                        path.extend_from_slice(&paths[u]);
                        path.push(v);
                        paths[v] = path;

                        next.insert(v);
                        stats.relaxations += 1;
                    }
                }
            }

            current = mem::take(&mut next);
        }

        debug!(
            "frontier relaxation done: {} rounds, {} relaxations, {} edges scanned",
            stats.rounds, stats.relaxations, stats.edges_scanned
        );

        let results = distances
            .into_iter()
            .zip(paths)
            .map(|(distance, path)| {
                if distance == W::unreachable() {
                    PathResult::unreachable()
                } else {
                    PathResult { distance, path }
                }
            })
            .collect();

        Ok((PathResultSet::new(source, results), stats))
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for FrontierRelaxation
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    fn name(&self) -> &'static str {
        "FrontierRelaxation"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<PathResultSet<W>> {
        self.compute_with_stats(graph, source)
            .map(|(result, _)| result)
    }
}
