//! Frontier SSSP - round-based single-source shortest paths with path witnesses
//!
//! This library computes, from one source node, the smallest cumulative edge weight
//! to every reachable node of a directed graph with non-negative weights, together
//! with the sequence of nodes that achieves it.
//!
//! The engine is a label-correcting relaxation organised into synchronous rounds:
//! every node whose distance improved in one round propagates that improvement to
//! its neighbours in the next, until a round improves nothing.

pub mod algorithm;
pub mod data_structures;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod graph;
#[cfg(feature = "python")]
mod python;
pub mod render;
pub mod web;

pub use algorithm::{
    batch::compute_from_sources, dijkstra::Dijkstra, frontier::FrontierRelaxation,
    frontier::RelaxationStats, PathResult, PathResultSet, ShortestPathAlgorithm,
};
/// Re-export main types for convenient use
pub use graph::{DirectedGraph, Edge, Graph, GraphBuilder, Node, Weight};
pub use render::PathTable;

/// Defects that make a node collection unusable as a graph
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidGraph {
    #[error("node at position {position} has id {id}")]
    MisplacedNode { position: usize, id: usize },

    #[error("edge from node {from} targets unknown node {target}")]
    DanglingEdge { from: usize, target: usize },
}

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid graph: {0}")]
    InvalidGraph(#[from] InvalidGraph),

    #[error("Source node not found in graph: {0}")]
    SourceNotFound(usize),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
