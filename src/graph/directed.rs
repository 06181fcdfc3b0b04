use crate::graph::node::{Edge, Node};
use crate::graph::traits::{Graph, Weight};
use crate::graph::validate::validate_indexing;
use crate::Result;

/// A directed graph that owns a flat collection of nodes indexed `0..n`.
///
/// Edges refer to their targets by id, so lookups go through the graph and
/// there is no shared ownership between nodes. The graph is immutable once
/// built, which makes `&DirectedGraph` safe to share across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectedGraph<W>
where
    W: Weight,
{
    nodes: Vec<Node<W>>,
}

impl<W> DirectedGraph<W>
where
    W: Weight,
{
    /// Wraps caller-supplied nodes without checking them.
    ///
    /// The id/position invariant is verified lazily when a shortest path
    /// computation starts; use [`DirectedGraph::build_checked`] to fail early.
    pub fn build(nodes: Vec<Node<W>>) -> Self {
        DirectedGraph { nodes }
    }

    /// Wraps caller-supplied nodes, rejecting misplaced nodes and dangling edges up front
    pub fn build_checked(nodes: Vec<Node<W>>) -> Result<Self> {
        let graph = DirectedGraph { nodes };
        validate_indexing(&graph)?;
        Ok(graph)
    }

    /// Creates a graph with no nodes
    pub fn empty() -> Self {
        DirectedGraph { nodes: Vec::new() }
    }

    pub fn nodes(&self) -> &[Node<W>] {
        &self.nodes
    }

    /// Returns the node stored at `position`
    pub fn node(&self, position: usize) -> Option<&Node<W>> {
        self.nodes.get(position)
    }

    pub fn into_nodes(self) -> Vec<Node<W>> {
        self.nodes
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.nodes.iter().map(|node| node.edges.len()).sum()
    }

    fn node_id(&self, position: usize) -> Option<usize> {
        self.nodes.get(position).map(|node| node.id)
    }

    fn outgoing_edges(&self, node: usize) -> Box<dyn Iterator<Item = Edge<W>> + '_> {
        if let Some(node) = self.nodes.get(node) {
            Box::new(node.edges.iter().copied())
        } else {
            Box::new(std::iter::empty())
        }
    }
}
