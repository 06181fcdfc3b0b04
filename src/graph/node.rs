
use crate::graph::traits::Weight;

/// A weighted directed edge. The target is stored as a node id and resolved
/// through the owning graph at traversal time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<W> {
    pub weight: W,
    pub target: usize,
}

impl<W: Weight> Edge<W> {
    pub fn new(weight: W, target: usize) -> Self {
        Edge { weight, target }
    }
}

/// A graph node: its declared id and its ordered outgoing edges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<W> {
    pub id: usize,
    pub edges: Vec<Edge<W>>,
}

impl<W: Weight> Node<W> {
    /// Creates a node with no outgoing edges
    pub fn new(id: usize) -> Self {
        Node {
            id,
            edges: Vec::new(),
        }
    }

    /// Creates a node from `(weight, target)` pairs, keeping their order
    pub fn with_edges<I>(id: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (W, usize)>,
    {
        Node {
            id,
            edges: edges
                .into_iter()
                .map(|(weight, target)| Edge::new(weight, target))
                .collect(),
        }
    }

    /// Appends an outgoing edge, for readable graph literals:
    /// `Node::new(0).with_edge(5, 1).with_edge(15, 2)`
    pub fn with_edge(mut self, weight: W, target: usize) -> Self {
        self.edges.push(Edge::new(weight, target));
        self
    }

    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }
}
