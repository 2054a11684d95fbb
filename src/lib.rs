//! Shortest Route - Dijkstra shortest paths between labeled places
//!
//! This library finds the minimum-weight route between two labeled nodes of a
//! small weighted graph and exposes the result for map visualization.
//!
//! The search is a label-setting (Dijkstra) algorithm over a binary-heap
//! frontier. Graphs are immutable while searched, so one graph can be shared
//! by any number of concurrent searches.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod web;

pub use algorithm::{
    dijkstra::Dijkstra, path_weight, Route, RouteStatus, ShortestPathAlgorithm,
    ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::weighted::WeightedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Node not found in graph: {0}")]
    NodeNotFound(String),

    #[error("Negative or undefined edge weight: {0}")]
    NegativeWeight(f64),

    #[error("Invalid graph: {0}")]
    InvalidGraph(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
