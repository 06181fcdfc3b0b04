use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An outgoing edge as exchanged over HTTP
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebEdge {
    pub weight: f64,
    pub target: usize,
}

/// A node as exchanged over HTTP. `id` is expected to equal the node's position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebNode {
    pub id: usize,
    #[serde(default)]
    pub edges: Vec<WebEdge>,
}

/// A complete graph as exchanged over HTTP
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebGraph {
    pub nodes: Vec<WebNode>,
}

impl WebGraph {
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|node| node.edges.len()).sum()
    }
}

/// Parameters for graph generation
#[derive(Debug, Deserialize)]
pub struct GraphGenerationRequest {
    pub graph_type: String,
    pub node_count: usize,
    #[serde(default = "default_edges_per_node")]
    pub edges_per_node: usize,
    #[serde(default = "default_radius")]
    pub radius: f64,
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_edges_per_node() -> usize { 3 }
fn default_radius() -> f64 { 0.2 }

/// Parameters for a shortest path run
#[derive(Debug, Deserialize)]
pub struct PathRequest {
    pub source: usize,
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

fn default_algorithm() -> String { "frontier".to_string() }

/// Distance and path to one node. `distance` is `null` when unreachable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PathEntry {
    pub node: usize,
    pub distance: Option<f64>,
    pub path: Vec<usize>,
}

/// Response containing the outcome of a shortest path run
#[derive(Debug, Clone, Serialize)]
pub struct PathResponse {
    pub execution_id: Uuid,
    pub algorithm: String,
    pub source: usize,
    pub execution_time_ms: f64,
    pub reachable: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rounds: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relaxations: Option<usize>,
    pub results: Vec<PathEntry>,
}

/// Short description of a session, for listings
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub id: Uuid,
    pub node_count: usize,
    pub edge_count: usize,
    pub created_at: DateTime<Utc>,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(error: &str, message: impl Into<String>) -> Self {
        ErrorResponse {
            error: error.to_string(),
            message: message.into(),
            details: None,
        }
    }
}

/// Session containing graph data and the latest run
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub graph: WebGraph,
    pub last_result: Option<PathResponse>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(graph: WebGraph) -> Self {
        Self {
            id: Uuid::new_v4(),
            graph,
            last_result: None,
            created_at: Utc::now(),
        }
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            id: self.id,
            node_count: self.graph.nodes.len(),
            edge_count: self.graph.edge_count(),
            created_at: self.created_at,
        }
    }
}
