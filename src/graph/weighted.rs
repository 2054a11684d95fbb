use crate::graph::traits::{validate_weight, Graph, MutableGraph, NodeId, Weight};
use crate::Result;
use std::collections::HashMap;

/// A directed graph implementation using adjacency lists keyed by label.
///
/// Nodes keep the order in which they were added; the search relies on it to
/// break ties between equally distant nodes.
#[derive(Debug, Clone)]
pub struct WeightedGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Node labels in insertion order
    nodes: Vec<N>,

    /// Position of each label in `nodes` and `outgoing_edges`
    index: HashMap<N, usize>,

    /// Outgoing edges for each node: [(target, weight)]
    outgoing_edges: Vec<Vec<(N, W)>>,
}

impl<N, W> WeightedGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        WeightedGraph {
            nodes: Vec::new(),
            index: HashMap::new(),
            outgoing_edges: Vec::new(),
        }
    }

    /// Creates a new empty graph with room for the given number of nodes
    pub fn with_capacity(nodes: usize) -> Self {
        WeightedGraph {
            nodes: Vec::with_capacity(nodes),
            index: HashMap::with_capacity(nodes),
            outgoing_edges: Vec::with_capacity(nodes),
        }
    }

    /// Builds a graph from `(node, [(target, weight)])` entries, in order
    pub fn from_adjacency<I, E>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, E)>,
        E: IntoIterator<Item = (N, W)>,
    {
        let mut graph = WeightedGraph::new();
        for (node, edges) in entries {
            graph.add_node(node.clone());
            for (target, weight) in edges {
                graph.add_edge(node.clone(), target, weight)?;
            }
        }
        Ok(graph)
    }

    /// Edge targets that are not nodes of the graph
    pub fn dangling_targets(&self) -> Vec<&N> {
        let mut dangling = Vec::new();
        for (target, _) in self.outgoing_edges.iter().flatten() {
            if !self.index.contains_key(target) && !dangling.contains(&target) {
                dangling.push(target);
            }
        }
        dangling
    }

    fn ensure_node(&mut self, node: N) -> usize {
        if let Some(&position) = self.index.get(&node) {
            return position;
        }
        let position = self.nodes.len();
        self.index.insert(node.clone(), position);
        self.nodes.push(node);
        self.outgoing_edges.push(Vec::new());
        position
    }
}

impl<N, W> Default for WeightedGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W> Graph<N, W> for WeightedGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.iter().map(|edges| edges.len()).sum()
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_> {
        Box::new(self.nodes.iter())
    }

    fn outgoing_edges(&self, node: &N) -> Box<dyn Iterator<Item = (&N, W)> + '_> {
        match self.index.get(node) {
            Some(&position) => Box::new(
                self.outgoing_edges[position]
                    .iter()
                    .map(|(target, weight)| (target, *weight)),
            ),
            None => Box::new(std::iter::empty()),
        }
    }

    fn has_node(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }
}

impl<N, W> MutableGraph<N, W> for WeightedGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn add_node(&mut self, node: N) -> bool {
        if self.index.contains_key(&node) {
            return false;
        }
        self.ensure_node(node);
        true
    }

    fn add_edge(&mut self, from: N, to: N, weight: W) -> Result<()> {
        validate_weight(weight)?;
        let position = self.ensure_node(from);
        self.outgoing_edges[position].push((to, weight));
        Ok(())
    }
}
