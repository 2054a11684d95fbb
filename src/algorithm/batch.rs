use std::collections::HashMap;

use log::debug;
use rayon::prelude::*;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, NodeId, Weight};
use crate::Result;

/// Shortest-path trees from every node of a graph
#[derive(Debug, Clone)]
pub struct RouteTable<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Nodes in graph order
    pub nodes: Vec<N>,
    trees: HashMap<N, ShortestPathResult<N, W>>,
}

impl<N, W> RouteTable<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Same answer as a point query from `start` to `end`
    pub fn route(&self, start: &N, end: &N) -> Vec<N> {
        if !self.trees.contains_key(end) {
            return Vec::new();
        }
        self.trees
            .get(start)
            .map(|tree| tree.path_to(end))
            .unwrap_or_default()
    }

    /// Shortest distance, `None` when unreachable or unknown
    pub fn distance(&self, start: &N, end: &N) -> Option<W> {
        if !self.trees.contains_key(end) {
            return None;
        }
        self.trees.get(start).and_then(|tree| tree.distance(end))
    }

    /// The tree rooted at `source`
    pub fn tree(&self, source: &N) -> Option<&ShortestPathResult<N, W>> {
        self.trees.get(source)
    }
}

/// Computes one shortest-path tree per node, in parallel.
///
/// Each task runs its own search with its own state; the graph is only read.
pub fn find_all_pairs<A, N, W, G>(algorithm: &A, graph: &G) -> Result<RouteTable<N, W>>
where
    A: ShortestPathAlgorithm<N, W, G> + Sync,
    N: NodeId + Send + Sync,
    W: Weight + Send + Sync,
    G: Graph<N, W> + Sync,
{
    let sources: Vec<&N> = graph.nodes().collect();

    let trees = sources
        .par_iter()
        .map(|&source| {
            algorithm
                .compute_shortest_paths(graph, source)
                .map(|tree| (source.clone(), tree))
        })
        .collect::<Result<HashMap<_, _>>>()?;

    debug!(
        "{}: computed {} shortest path trees",
        algorithm.name(),
        trees.len()
    );

    Ok(RouteTable {
        nodes: sources.into_iter().cloned().collect(),
        trees,
    })
}
