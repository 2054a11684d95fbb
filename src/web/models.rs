use chrono::{DateTime, Utc};
use log::warn;
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::algorithm::RouteStatus;
use crate::graph::generators::{
    generate_random_ring, DEFAULT_MAX_WEIGHT, DEFAULT_MIN_WEIGHT, DEFAULT_RING_SIZE,
};
use crate::graph::{Graph, MutableGraph, WeightedGraph};
use crate::{Error, Result};

/// Graph type served by the API: string labels, float weights
pub type RouteGraph = WeightedGraph<String, OrderedFloat<f64>>;

/// Represents a node in the graph for web visualization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebNode {
    pub id: String,
}

/// Represents a directed edge in the graph for web visualization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebEdge {
    pub source: String,
    pub target: String,
    pub weight: f64,
    #[serde(default)]
    pub is_path: bool,
}

/// Represents a complete graph for web visualization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebGraph {
    pub nodes: Vec<WebNode>,
    pub links: Vec<WebEdge>,
}

impl WebGraph {
    /// Snapshot of a graph, nodes and edges in insertion order
    pub fn from_graph(graph: &RouteGraph) -> Self {
        let nodes = graph
            .nodes()
            .map(|id| WebNode { id: id.clone() })
            .collect();
        let links = graph
            .nodes()
            .flat_map(|source| {
                graph.outgoing_edges(source).map(move |(target, weight)| WebEdge {
                    source: source.clone(),
                    target: target.clone(),
                    weight: weight.into_inner(),
                    is_path: false,
                })
            })
            .collect();
        WebGraph { nodes, links }
    }
}

/// Parameters for graph creation
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GraphRequest {
    /// Ring of places, each linked to both neighbours with random weights
    Ring {
        #[serde(default = "default_ring_size")]
        node_count: usize,
        #[serde(default = "default_min_weight")]
        min_weight: u32,
        #[serde(default = "default_max_weight")]
        max_weight: u32,
        #[serde(default)]
        seed: Option<u64>,
    },
    /// Caller-supplied nodes and directed links
    Custom {
        nodes: Vec<String>,
        links: Vec<WebEdge>,
    },
}

fn default_ring_size() -> usize { DEFAULT_RING_SIZE }
fn default_min_weight() -> u32 { DEFAULT_MIN_WEIGHT }
fn default_max_weight() -> u32 { DEFAULT_MAX_WEIGHT }

impl GraphRequest {
    /// Number of nodes the built graph will have
    pub fn node_count(&self) -> usize {
        match self {
            GraphRequest::Ring { node_count, .. } => *node_count,
            GraphRequest::Custom { nodes, .. } => nodes.len(),
        }
    }

    /// Builds the graph this request describes, refusing graphs with more
    /// than `max_nodes` nodes before allocating anything
    pub fn build(self, max_nodes: usize) -> Result<RouteGraph> {
        let node_count = self.node_count();
        if node_count > max_nodes {
            return Err(Error::InvalidParameter(format!(
                "graph has {} nodes, the limit is {}",
                node_count, max_nodes
            )));
        }

        match self {
            GraphRequest::Ring {
                node_count,
                min_weight,
                max_weight,
                seed,
            } => {
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                generate_random_ring(node_count, min_weight, max_weight, &mut rng)
            }
            GraphRequest::Custom { nodes, links } => {
                let mut graph = RouteGraph::with_capacity(nodes.len());
                for node in nodes {
                    if !graph.add_node(node.clone()) {
                        return Err(Error::InvalidGraph(format!("duplicate node {:?}", node)));
                    }
                }
                for link in links {
                    if !graph.has_node(&link.source) {
                        return Err(Error::InvalidGraph(format!(
                            "link source {:?} is not a listed node",
                            link.source
                        )));
                    }
                    graph.add_edge(link.source, link.target, OrderedFloat(link.weight))?;
                }
                let dangling = graph.dangling_targets();
                if !dangling.is_empty() {
                    warn!("Graph links point at unlisted nodes {:?}; they stay unreachable as sources", dangling);
                }
                Ok(graph)
            }
        }
    }
}

/// Parameters for a route query. Missing or empty endpoints mean "not selected".
#[derive(Debug, Default, Deserialize)]
pub struct RouteRequest {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

impl RouteRequest {
    /// Selected endpoints, with empty strings treated as unselected
    pub fn endpoints(&self) -> (Option<&String>, Option<&String>) {
        (selected(&self.start), selected(&self.end))
    }
}

fn selected(value: &Option<String>) -> Option<&String> {
    value.as_ref().filter(|s| !s.is_empty())
}

/// Response to a route query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteResponse {
    pub status: RouteStatus,
    pub message: String,
    pub path: Vec<String>,
    pub total_weight: Option<f64>,
    /// Hops of the path, for highlighting on the map
    pub links: Vec<WebEdge>,
    pub execution_time_ms: f64,
}

/// One ordered pair of an all-pairs table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteEntry {
    pub start: String,
    pub end: String,
    pub path: Vec<String>,
    pub total_weight: Option<f64>,
}

/// Every route between distinct places of a graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteTableResponse {
    pub nodes: Vec<String>,
    pub routes: Vec<RouteEntry>,
    pub execution_time_ms: f64,
}

/// Error response for API
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

/// Session holding one immutable graph
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub graph: Arc<RouteGraph>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(graph: RouteGraph) -> Self {
        Self {
            id: Uuid::new_v4(),
            graph: Arc::new(graph),
            created_at: Utc::now(),
        }
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            id: self.id,
            created_at: self.created_at,
            node_count: self.graph.node_count(),
            edge_count: self.graph.edge_count(),
        }
    }
}

/// Session listing entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub node_count: usize,
    pub edge_count: usize,
}

/// Newly created session with its graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfo {
    #[serde(flatten)]
    pub summary: SessionSummary,
    pub graph: WebGraph,
}

/// Health check payload
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub sessions: usize,
}
