use std::collections::HashMap;

use log::debug;

use crate::algorithm::traits::trace_back;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::Frontier;
use crate::graph::{Graph, NodeId, Weight};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation
///
/// Every node enters the frontier up front, the start with priority zero and
/// the rest with infinity. Improved distances are pushed as new entries and
/// the superseded ones are skipped when they surface. Nodes with equal
/// priority are settled in the order their entries were pushed.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

/// Per-call search state, borrowed from the graph being searched
struct Search<'g, N, W> {
    distances: HashMap<&'g N, W>,
    predecessors: HashMap<&'g N, &'g N>,
    settled: usize,
    pushes: u64,
}

impl<'g, N, W> Search<'g, N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Runs the search from `start`. Stops as soon as `target` is extracted
    /// and reports whether that happened.
    fn run<G>(graph: &'g G, start: &'g N, target: Option<&'g N>) -> (Self, bool)
    where
        G: Graph<N, W>,
    {
        let node_count = graph.node_count();
        let mut search = Search {
            distances: HashMap::with_capacity(node_count),
            predecessors: HashMap::with_capacity(node_count),
            settled: 0,
            pushes: 0,
        };
        let mut frontier = Frontier::with_capacity(node_count);

        for node in graph.nodes() {
            let distance = if node == start {
                W::zero()
            } else {
                W::infinity()
            };
            search.distances.insert(node, distance);
            frontier.push(node, distance);
        }

        let mut reached = false;
        while let Some((node, priority)) = frontier.pop() {
            let distance = search.distance(node);

            if target == Some(node) {
                reached = true;
                break;
            }

            // Everything left in the frontier is unreachable too
            if distance.is_infinite() {
                continue;
            }

            if priority > distance {
                continue;
            }

            search.settled += 1;
            for (next, weight) in graph.outgoing_edges(node) {
                let alternative = distance + weight;
                if alternative < search.distance(next) {
                    search.distances.insert(next, alternative);
                    search.predecessors.insert(next, node);
                    frontier.push(next, alternative);
                }
            }
        }

        search.pushes = frontier.pushes();
        (search, reached)
    }

    fn distance(&self, node: &N) -> W {
        self.distances.get(node).copied().unwrap_or_else(W::infinity)
    }
}

impl<N, W, G> ShortestPathAlgorithm<N, W, G> for Dijkstra
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn find(&self, graph: &G, start: &N, end: &N) -> Vec<N> {
        if !graph.has_node(start) || !graph.has_node(end) {
            debug!("No route from {:?} to {:?}: endpoint is not in the graph", start, end);
            return Vec::new();
        }

        let (search, reached) = Search::run(graph, start, Some(end));
        debug!(
            "Searched {:?} -> {:?}: {} nodes settled, {} frontier pushes",
            start, end, search.settled, search.pushes
        );
        if !reached {
            return Vec::new();
        }

        match trace_back(start, end, |node| search.predecessors.get(node).copied()) {
            Some(path) => path.into_iter().cloned().collect(),
            None => {
                debug!("No route from {:?} to {:?}: target is unreachable", start, end);
                Vec::new()
            }
        }
    }

    fn compute_shortest_paths(&self, graph: &G, source: &N) -> Result<ShortestPathResult<N, W>> {
        if !graph.has_node(source) {
            return Err(Error::NodeNotFound(format!("{:?}", source)));
        }

        let (search, _) = Search::run(graph, source, None);
        debug!(
            "Shortest path tree from {:?}: {} nodes settled, {} frontier pushes",
            source, search.settled, search.pushes
        );

        let distances = search
            .distances
            .iter()
            .filter(|(_, distance)| distance.is_finite())
            .map(|(&node, &distance)| (node.clone(), distance))
            .collect();
        let predecessors = search
            .predecessors
            .iter()
            .map(|(&node, &previous)| (node.clone(), previous.clone()))
            .collect();

        Ok(ShortestPathResult {
            source: source.clone(),
            distances,
            predecessors,
        })
    }
}
