pub mod builder;
pub mod directed;
pub mod generators;
pub mod node;
pub mod traits;
pub mod validate;

pub use builder::GraphBuilder;
pub use directed::DirectedGraph;
pub use node::{Edge, Node};
pub use traits::{Graph, Weight};
pub use validate::validate_indexing;
