//! Incremental graph builder.

use crate::graph::directed::DirectedGraph;
use crate::graph::node::{Edge, Node};
use crate::graph::traits::Weight;

/// Builder for constructing a graph one node and edge at a time.
///
/// Node ids are handed out densely from 0, so every graph it produces already
/// satisfies the id/position invariant.
#[derive(Debug, Clone)]
pub struct GraphBuilder<W>
where
    W: Weight,
{
    nodes: Vec<Node<W>>,
}

impl<W> Default for GraphBuilder<W>
where
    W: Weight,
{
    fn default() -> Self {
        GraphBuilder { nodes: Vec::new() }
    }
}

impl<W> GraphBuilder<W>
where
    W: Weight,
{
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder that already holds `count` nodes with ids `0..count`.
    pub fn with_nodes(count: usize) -> Self {
        GraphBuilder {
            nodes: (0..count).map(Node::new).collect(),
        }
    }

    /// Add a node and return its id.
    pub fn add_node(&mut self) -> usize {
        let id = self.nodes.len();
        self.nodes.push(Node::new(id));
        id
    }

    /// Add a directed edge. Returns false when either endpoint is unknown or the
    /// weight is negative or above `W::max_value()`; parallel edges and self-loops
    /// are accepted.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool {
        // OrderedFloat orders NaN and +inf above f64::MAX and -inf below zero
        if to >= self.nodes.len() || weight < W::zero() || weight > W::max_value() {
            return false;
        }
        match self.nodes.get_mut(from) {
            Some(node) => {
                node.edges.push(Edge::new(weight, to));
                true
            }
            None => false,
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Freeze the builder into an immutable graph.
    pub fn build(self) -> DirectedGraph<W> {
        DirectedGraph::build(self.nodes)
    }
}
