use crate::algorithm::{PathResult, PathResultSet, ShortestPathAlgorithm};
use crate::data_structures::BinaryHeapWrapper;
use crate::graph::validate::validate_indexing;
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation.
///
/// Kept as an independent reference for the frontier relaxation: both must
/// agree on every distance for non-negative weights.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Rebuilds the source-to-`target` path by walking predecessors back to the source
    fn build_path(predecessors: &[Option<usize>], source: usize, target: usize) -> Vec<usize> {
        let mut path = vec![target];
        let mut current = target;
        while current != source {
            match predecessors[current] {
                Some(pred) => {
                    path.push(pred);
                    current = pred;
                }
                None => return Vec::new(),
            }
            // A predecessor chain can't be longer than the graph
            if path.len() > predecessors.len() {
                return Vec::new();
            }
        }
        path.reverse();
        path
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<PathResultSet<W>> {
        validate_indexing::<W, G>(graph)?;
        if !graph.has_node(source) {
            return Err(Error::SourceNotFound(source));
        }

        let n = graph.node_count();

        // Initialize distances and predecessors
        let mut distances = vec![W::unreachable(); n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];

        // Distance to source is 0
        distances[source] = W::zero();

        // Initialize priority queue
        let mut queue = BinaryHeapWrapper::new();
        queue.push(source, W::zero());

        // Main Dijkstra loop
        while let Some((u, dist_u)) = queue.pop() {
            // If we've already found a shorter path to u, skip
            if distances[u] < dist_u {
                continue;
            }

            // Relax all outgoing edges
            for edge in graph.outgoing_edges(u) {
                let new_dist = dist_u.relax(edge.weight);
                if new_dist < distances[edge.target] {
                    distances[edge.target] = new_dist;
                    predecessors[edge.target] = Some(u);
                    queue.push(edge.target, new_dist);
                }
            }
        }

        let results = distances
            .iter()
            .enumerate()
            .map(|(v, &distance)| {
                if distance == W::unreachable() {
                    PathResult::unreachable()
                } else {
                    PathResult {
                        distance,
                        path: Self::build_path(&predecessors, source, v),
                    }
                }
            })
            .collect();

        Ok(PathResultSet::new(source, results))
    }
}
