use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use log::info;
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::frontier::FrontierRelaxation;
use crate::algorithm::{PathResultSet, ShortestPathAlgorithm};
use crate::graph::generators::{generate_geometric, generate_grid, generate_random};
use crate::graph::{DirectedGraph, Graph, Node};
use crate::web::models::*;
use crate::Error;

/// Upper bound on generated graph sizes
pub const MAX_GENERATED_NODES: usize = 100_000;

/// Upper bound on the edges a generator may produce for one request
pub const MAX_GENERATED_EDGES: usize = 1_000_000;

pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    max_sessions: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_max_sessions(1000)
    }

    pub fn with_max_sessions(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            max_sessions: max_sessions.max(1),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, Session>> {
        // Sessions hold plain data, so a panic elsewhere can't leave them half-written
        self.sessions.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Stores a session, evicting the oldest ones when full
    pub fn insert(&self, session: Session) {
        let mut sessions = self.lock();
        while sessions.len() >= self.max_sessions {
            let oldest = sessions
                .values()
                .min_by_key(|s| s.created_at)
                .map(|s| s.id);
            match oldest {
                Some(id) => {
                    sessions.remove(&id);
                }
                None => break,
            }
        }
        sessions.insert(session.id, session);
    }

    fn graph(&self, session_id: &Uuid) -> Result<WebGraph, ApiError> {
        self.lock()
            .get(session_id)
            .map(|session| session.graph.clone())
            .ok_or_else(session_not_found)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graphs", post(upload_graph))
        .route("/api/graphs/generate", post(generate_graph))
        .route("/api/graphs/:session_id", get(get_graph))
        .route("/api/paths/:session_id", post(run_paths))
        .route("/api/sessions", get(list_sessions))
        .route("/api/sessions/:session_id", get(get_session))
        .route("/api/health", get(health_check))
}

/// Store a caller-supplied graph in a new session
pub async fn upload_graph(
    State(state): State<AppState>,
    Json(graph): Json<WebGraph>,
) -> Result<Json<Session>, ApiError> {
    check_weights(&graph)?;

    let session = Session::new(graph);
    info!(
        "session {} created from upload ({} nodes)",
        session.id,
        session.graph.nodes.len()
    );
    state.insert(session.clone());

    Ok(Json(session))
}

/// Generate a new graph
pub async fn generate_graph(
    State(state): State<AppState>,
    Json(request): Json<GraphGenerationRequest>,
) -> Result<Json<Session>, ApiError> {
    // Size the graph before building it: node and edge limits apply to what
    // the generator will actually produce
    let n = request.node_count;
    let grid_side = (n as f64).sqrt().ceil() as usize;
    let (nodes, max_edges) = match request.graph_type.as_str() {
        "random" => (
            n,
            n.saturating_mul(request.edges_per_node.min(n.saturating_sub(1))),
        ),
        "grid" => (
            grid_side.saturating_mul(grid_side),
            grid_side.saturating_mul(grid_side.saturating_sub(1)).saturating_mul(4),
        ),
        "geometric" => (n, n.saturating_mul(n.saturating_sub(1))),
        _ => {
            return Err(bad_request(
                "invalid_graph_type",
                format!("Unknown graph type: {}", request.graph_type),
            ));
        }
    };
    if nodes > MAX_GENERATED_NODES {
        return Err(bad_request(
            "graph_too_large",
            format!(
                "{} graph would have {} nodes, above the limit of {}",
                request.graph_type, nodes, MAX_GENERATED_NODES
            ),
        ));
    }
    if max_edges > MAX_GENERATED_EDGES {
        return Err(bad_request(
            "graph_too_large",
            format!(
                "{} graph could have {} edges, above the limit of {}",
                request.graph_type, max_edges, MAX_GENERATED_EDGES
            ),
        ));
    }

    let mut rng = match request.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let graph = match request.graph_type.as_str() {
        "random" => generate_random(n, request.edges_per_node, &mut rng, |rng| {
            OrderedFloat(rng.gen_range(1.0..100.0))
        }),
        "grid" => generate_grid(grid_side, grid_side, &mut rng, |rng| {
            OrderedFloat(rng.gen_range(1.0..10.0))
        }),
        _ => generate_geometric(n, request.radius, &mut rng),
    };

    let session = Session::new(convert_graph_to_web(&graph));
    info!(
        "session {} created from {} generator ({} nodes, {} edges)",
        session.id,
        request.graph_type,
        graph.node_count(),
        graph.edge_count()
    );
    state.insert(session.clone());

    Ok(Json(session))
}

/// Get graph data for a session
pub async fn get_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<WebGraph>, ApiError> {
    state.graph(&session_id).map(Json)
}

/// Run a shortest path computation on a session's graph
pub async fn run_paths(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<PathRequest>,
) -> Result<Json<PathResponse>, ApiError> {
    let web_graph = state.graph(&session_id)?;
    let graph = convert_web_graph_to_rust(&web_graph);

    let response = execute(&graph, &request)?;
    info!(
        "session {}: {} from {} reached {} nodes in {:.3} ms",
        session_id, response.algorithm, response.source, response.reachable, response.execution_time_ms
    );

    if let Some(session) = state.lock().get_mut(&session_id) {
        session.last_result = Some(response.clone());
    }

    Ok(Json(response))
}

/// List all sessions
pub async fn list_sessions(State(state): State<AppState>) -> Json<Vec<SessionSummary>> {
    let mut summaries: Vec<SessionSummary> =
        state.lock().values().map(Session::summary).collect();
    summaries.sort_by_key(|s| s.created_at);
    Json(summaries)
}

/// Get a specific session
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Session>, ApiError> {
    let session = state.lock().get(&session_id).cloned();
    session.map(Json).ok_or_else(session_not_found)
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Runs the requested algorithm on an already converted graph
pub fn execute(
    graph: &DirectedGraph<OrderedFloat<f64>>,
    request: &PathRequest,
) -> Result<PathResponse, ApiError> {
    let start_time = Instant::now();
    let outcome = match request.algorithm.as_str() {
        "frontier" => FrontierRelaxation::new()
            .compute_with_stats(graph, request.source)
            .map(|(result, stats)| (result, Some(stats))),
        "dijkstra" => Dijkstra::new()
            .compute_shortest_paths(graph, request.source)
            .map(|result| (result, None)),
        _ => {
            return Err(bad_request(
                "invalid_algorithm",
                format!("Unknown algorithm: {}", request.algorithm),
            ));
        }
    };
    let execution_time = start_time.elapsed();

    match outcome {
        Ok((result, stats)) => Ok(PathResponse {
            execution_id: Uuid::new_v4(),
            algorithm: request.algorithm.clone(),
            source: request.source,
            execution_time_ms: execution_time.as_secs_f64() * 1000.0,
            reachable: result.reachable_count(),
            rounds: stats.map(|s| s.rounds),
            relaxations: stats.map(|s| s.relaxations),
            results: path_entries(&result),
        }),
        Err(err @ Error::InvalidGraph(_)) => Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::new("invalid_graph", err.to_string())),
        )),
        Err(err @ Error::SourceNotFound(_)) => Err(bad_request("source_not_found", err.to_string())),
    }
}

/// Flattens a result set into per-node entries in id order
pub fn path_entries(result: &PathResultSet<OrderedFloat<f64>>) -> Vec<PathEntry> {
    result
        .iter()
        .map(|(node, distance, path)| PathEntry {
            node,
            distance: result.is_reachable(node).then(|| distance.into_inner()),
            path: path.to_vec(),
        })
        .collect()
}

/// Convert a graph to its HTTP form
pub fn convert_graph_to_web(graph: &DirectedGraph<OrderedFloat<f64>>) -> WebGraph {
    WebGraph {
        nodes: graph
            .nodes()
            .iter()
            .map(|node| WebNode {
                id: node.id,
                edges: node
                    .edges
                    .iter()
                    .map(|edge| WebEdge {
                        weight: edge.weight.into_inner(),
                        target: edge.target,
                    })
                    .collect(),
            })
            .collect(),
    }
}

/// Convert an HTTP graph into a graph, node for node.
/// Ids are kept as sent; a misplaced node is reported when a run starts.
pub fn convert_web_graph_to_rust(web_graph: &WebGraph) -> DirectedGraph<OrderedFloat<f64>> {
    DirectedGraph::build(
        web_graph
            .nodes
            .iter()
            .map(|node| {
                Node::with_edges(
                    node.id,
                    node.edges
                        .iter()
                        .map(|edge| (OrderedFloat(edge.weight), edge.target)),
                )
            })
            .collect(),
    )
}

fn check_weights(graph: &WebGraph) -> Result<(), ApiError> {
    for node in &graph.nodes {
        if let Some(edge) = node
            .edges
            .iter()
            .find(|edge| !edge.weight.is_finite() || edge.weight < 0.0)
        {
            return Err(bad_request(
                "invalid_weight",
                format!(
                    "Edge from node {} to {} has weight {}; weights must be finite and non-negative",
                    node.id, edge.target, edge.weight
                ),
            ));
        }
    }
    Ok(())
}

fn bad_request(error: &str, message: String) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(error, message)))
}

fn session_not_found() -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("session_not_found", "Session not found")),
    )
}
