use crate::graph::{Graph, Weight};
use crate::Result;

/// Shortest distance and path from the source to one node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult<W>
where
    W: Weight,
{
    /// Cumulative weight, or `W::unreachable()` when no path exists
    pub distance: W,

    /// Node ids from source to this node, both inclusive; empty when unreachable
    pub path: Vec<usize>,
}

impl<W> PathResult<W>
where
    W: Weight,
{
    pub fn unreachable() -> Self {
        PathResult {
            distance: W::unreachable(),
            path: Vec::new(),
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.distance != W::unreachable()
    }
}

/// Result of a shortest path computation: one entry per node, indexed by id.
///
/// Owns its paths as id sequences, so it does not borrow the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResultSet<W>
where
    W: Weight,
{
    source: usize,
    results: Vec<PathResult<W>>,
}

impl<W> PathResultSet<W>
where
    W: Weight,
{
    pub(crate) fn new(source: usize, results: Vec<PathResult<W>>) -> Self {
        PathResultSet { source, results }
    }

    /// Source node id
    pub fn source(&self) -> usize {
        self.source
    }

    /// Number of nodes covered, reachable or not
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn get(&self, node: usize) -> Option<&PathResult<W>> {
        self.results.get(node)
    }

    /// Distance to `node`; the unreachable sentinel if there is no path,
    /// `None` if the node is not part of the graph
    pub fn distance(&self, node: usize) -> Option<W> {
        self.results.get(node).map(|r| r.distance)
    }

    /// Path to `node`, starting at the source. Empty when unreachable.
    pub fn path(&self, node: usize) -> Option<&[usize]> {
        self.results.get(node).map(|r| r.path.as_slice())
    }

    pub fn is_reachable(&self, node: usize) -> bool {
        self.results.get(node).map_or(false, PathResult::is_reachable)
    }

    /// Node preceding `node` on its shortest path
    pub fn predecessor(&self, node: usize) -> Option<usize> {
        let path = self.path(node)?;
        if path.len() < 2 {
            return None;
        }
        Some(path[path.len() - 2])
    }

    pub fn reachable_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_reachable()).count()
    }

    /// All distances in id order
    pub fn distances(&self) -> Vec<W> {
        self.results.iter().map(|r| r.distance).collect()
    }

    /// `(node_id, distance, path)` triples in id order
    pub fn iter(&self) -> impl Iterator<Item = (usize, W, &[usize])> + '_ {
        self.results
            .iter()
            .enumerate()
            .map(|(id, r)| (id, r.distance, r.path.as_slice()))
    }

    pub fn into_results(self) -> Vec<PathResult<W>> {
        self.results
    }
}

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    /// Compute shortest distances and paths from a source node to all other nodes
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<PathResultSet<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
