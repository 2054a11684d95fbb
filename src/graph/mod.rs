pub mod generators;
pub mod traits;
pub mod weighted;

pub use traits::{validate_weight, Graph, MutableGraph, NodeId, Weight};
pub use weighted::WeightedGraph;
