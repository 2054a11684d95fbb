use num_traits::Float;
use std::fmt::Debug;
use std::hash::Hash;

use crate::{Error, Result};

/// Bound for node identifiers: opaque, comparable and hashable labels
pub trait NodeId: Clone + Eq + Hash + Debug {}

impl<T> NodeId for T where T: Clone + Eq + Hash + Debug {}

/// Bound for edge weights: totally ordered floats such as `OrderedFloat<f64>`
pub trait Weight: Float + Debug + Copy + Ord {}

impl<T> Weight for T where T: Float + Debug + Copy + Ord {}

/// Trait representing a weighted directed graph keyed by node identifier
pub trait Graph<N, W>: Debug
where
    N: NodeId,
    W: Weight,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph, parallel edges included
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the nodes in insertion order
    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_>;

    /// Returns an iterator over the outgoing edges from a node, in insertion order.
    /// Unknown nodes have no outgoing edges.
    fn outgoing_edges(&self, node: &N) -> Box<dyn Iterator<Item = (&N, W)> + '_>;

    /// Returns true if the node is a key of the graph
    fn has_node(&self, node: &N) -> bool;

    /// Returns true if there's an edge between the two nodes
    fn has_edge(&self, from: &N, to: &N) -> bool {
        self.outgoing_edges(from).any(|(target, _)| target == to)
    }

    /// Gets the weight of the cheapest edge between two nodes, if any
    fn edge_weight(&self, from: &N, to: &N) -> Option<W> {
        self.outgoing_edges(from)
            .filter(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
            .min()
    }

    /// Returns true if the graph has no nodes
    fn is_empty(&self) -> bool {
        self.node_count() == 0
    }
}

/// Trait for building a graph before it is searched
pub trait MutableGraph<N, W>: Graph<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Adds a node without edges. Returns false if it was already present.
    fn add_node(&mut self, node: N) -> bool;

    /// Adds a directed edge. `from` becomes a node if it isn't one yet; `to`
    /// is left as is, so an edge may point at a node with no entry of its own.
    /// Parallel edges are kept side by side.
    fn add_edge(&mut self, from: N, to: N, weight: W) -> Result<()>;

    /// Adds both directions of an undirected connection, each with its own weight
    fn add_undirected_edge(&mut self, a: N, b: N, forward: W, backward: W) -> Result<()> {
        validate_weight(backward)?;
        self.add_edge(a.clone(), b.clone(), forward)?;
        self.add_edge(b, a, backward)
    }
}

/// Rejects weights the search cannot handle: negative values and NaN
pub fn validate_weight<W: Weight>(weight: W) -> Result<()> {
    if weight.is_nan() || weight < W::zero() {
        return Err(Error::NegativeWeight(weight.to_f64().unwrap_or(f64::NAN)));
    }
    Ok(())
}
