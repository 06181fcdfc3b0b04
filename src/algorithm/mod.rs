pub mod traits;
pub mod batch;
pub mod dijkstra;
pub mod frontier;

pub use traits::{PathResult, PathResultSet, ShortestPathAlgorithm};
