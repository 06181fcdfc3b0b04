use std::fmt::Debug;
use std::ops::{Add, Sub};
use num_traits::{Bounded, Zero};

use crate::graph::node::Edge;

/// Numeric bound for edge weights and path distances.
///
/// `W::max_value()` doubles as the unreachable sentinel, so it is never a
/// meaningful distance. Integers and `OrderedFloat<f64>` both qualify.
pub trait Weight:
    Copy + Ord + Debug + Zero + Bounded + Add<Output = Self> + Sub<Output = Self> + Send + Sync
{
    /// Distance reported for nodes with no path from the source
    fn unreachable() -> Self {
        Self::max_value()
    }

    /// `self + weight`, saturating at the unreachable sentinel instead of overflowing.
    /// `self` must be a reachable distance.
    fn relax(self, weight: Self) -> Self {
        if weight >= Self::max_value() - self {
            Self::max_value()
        } else {
            self + weight
        }
    }
}

impl<T> Weight for T where
    T: Copy + Ord + Debug + Zero + Bounded + Add<Output = T> + Sub<Output = T> + Send + Sync
{
}

/// Read-only view of a weighted directed graph whose nodes are addressed by position
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns the id declared by the node stored at `position`
    fn node_id(&self, position: usize) -> Option<usize>;

    /// Returns an iterator over the outgoing edges of the node at `node`, in insertion order
    fn outgoing_edges(&self, node: usize) -> Box<dyn Iterator<Item = Edge<W>> + '_>;

    /// Returns true if the node exists in the graph
    fn has_node(&self, node: usize) -> bool {
        node < self.node_count()
    }

    /// Returns true if there's at least one edge between the two nodes
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.outgoing_edges(from).any(|edge| edge.target == to)
    }

    /// Gets the cheapest weight among the edges from `from` to `to`
    fn edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing_edges(from)
            .filter(|edge| edge.target == to)
            .map(|edge| edge.weight)
            .min()
    }
}
