use std::collections::{HashMap, HashSet};

use log::warn;

use crate::graph::{Graph, NodeId, Weight};
use crate::Result;

/// Shortest-path tree computed from a single source
#[derive(Debug, Clone)]
pub struct ShortestPathResult<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Source node the tree is rooted at
    pub source: N,

    /// Final distance of every node reachable from the source
    pub distances: HashMap<N, W>,

    /// Node preceding each reached node on its shortest path
    pub predecessors: HashMap<N, N>,
}

impl<N, W> ShortestPathResult<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Distance from the source, `None` if the node is unreachable
    pub fn distance(&self, target: &N) -> Option<W> {
        self.distances.get(target).copied()
    }

    /// Number of nodes reached, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }

    /// Ordered path from the source to `target`, empty when unreachable
    pub fn path_to(&self, target: &N) -> Vec<N> {
        if !self.distances.contains_key(target) {
            return Vec::new();
        }
        match trace_back(&self.source, target, |node| self.predecessors.get(node)) {
            Some(path) => path.into_iter().cloned().collect(),
            None => Vec::new(),
        }
    }
}

/// Follows predecessor links from `end` back to `start`.
///
/// Returns the path in forward order, or `None` when the chain stops before
/// reaching `start`.
pub(crate) fn trace_back<'a, N, F>(start: &N, end: &'a N, predecessor: F) -> Option<Vec<&'a N>>
where
    N: NodeId,
    F: Fn(&N) -> Option<&'a N>,
{
    let mut path = vec![end];
    let mut visited = HashSet::from([end]);
    let mut current = end;

    while current != start {
        match predecessor(current) {
            Some(previous) => {
                if !visited.insert(previous) {
                    warn!("Cycle detected in path reconstruction at {:?}", previous);
                    return None;
                }
                path.push(previous);
                current = previous;
            }
            None => return None,
        }
    }

    path.reverse();
    Some(path)
}

/// A found route together with its total weight
#[derive(Debug, Clone, PartialEq)]
pub struct Route<N, W> {
    /// Nodes from start to end
    pub nodes: Vec<N>,

    /// Sum of the traversed edge weights
    pub total_weight: W,
}

impl<N, W> Route<N, W> {
    /// Number of edges traversed
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<N, W, G>
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Minimum-weight path from `start` to `end`.
    ///
    /// Returns the nodes in order from `start` to `end`, `[start]` when both
    /// are the same node, and an empty vector when there is no path or either
    /// endpoint is not a node of `graph`.
    fn find(&self, graph: &G, start: &N, end: &N) -> Vec<N>;

    /// Compute shortest paths from a source node to all other nodes
    fn compute_shortest_paths(&self, graph: &G, source: &N) -> Result<ShortestPathResult<N, W>>;

    /// Like `find`, but pairs the path with its weight. `None` when there is no path.
    fn find_route(&self, graph: &G, start: &N, end: &N) -> Option<Route<N, W>> {
        let nodes = self.find(graph, start, end);
        let total_weight = path_weight(graph, &nodes)?;
        Some(Route {
            nodes,
            total_weight,
        })
    }
}

/// Total weight of a path, taking the cheapest edge between each consecutive
/// pair. `None` for an empty path or when some hop has no edge.
pub fn path_weight<N, W, G>(graph: &G, path: &[N]) -> Option<W>
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W> + ?Sized,
{
    if path.is_empty() {
        return None;
    }
    path.windows(2).try_fold(W::zero(), |total, hop| {
        graph
            .edge_weight(&hop[0], &hop[1])
            .map(|weight| total + weight)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_back_follows_long_chains() {
        let labels: Vec<usize> = (0..10_000).collect();
        let path = trace_back(&labels[0], &labels[9_999], |node| {
            node.checked_sub(1).map(|previous| &labels[previous])
        })
        .unwrap();

        assert_eq!(path.len(), 10_000);
        assert_eq!(path.first(), Some(&&0));
        assert_eq!(path.last(), Some(&&9_999));
    }

    #[test]
    fn trace_back_stops_on_cycles() {
        let predecessors: HashMap<&str, &str> =
            HashMap::from([("C", "B"), ("B", "X"), ("X", "C")]);
        let path = trace_back(&"A", &"C", |node| predecessors.get(node));
        assert!(path.is_none());
    }

    #[test]
    fn trace_back_without_predecessor_is_none() {
        let path = trace_back(&"A", &"C", |_| None);
        assert!(path.is_none());
    }
}
