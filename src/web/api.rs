use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use log::info;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::{find_all_pairs, path_weight, RouteStatus, ShortestPathAlgorithm};
use crate::graph::Graph;
use crate::web::models::*;
use crate::web::server::ServerConfig;
use crate::Error;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            config,
        }
    }

    fn read_sessions(&self) -> Result<RwLockReadGuard<'_, HashMap<Uuid, Session>>, ApiError> {
        self.sessions.read().map_err(|_| lock_poisoned())
    }

    fn write_sessions(&self) -> Result<RwLockWriteGuard<'_, HashMap<Uuid, Session>>, ApiError> {
        self.sessions.write().map_err(|_| lock_poisoned())
    }

    /// Graph of a session; the lock is released before returning
    fn graph(&self, session_id: &Uuid) -> Result<Arc<RouteGraph>, ApiError> {
        let sessions = self.read_sessions()?;
        sessions
            .get(session_id)
            .map(|session| Arc::clone(&session.graph))
            .ok_or_else(session_not_found)
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graphs", post(create_graph))
        .route("/api/graphs/:session_id", get(get_graph))
        .route("/api/graphs/:session_id/route", post(find_route))
        .route("/api/graphs/:session_id/routes", get(route_table))
        .route("/api/sessions", get(list_sessions))
        .route("/api/sessions/:session_id", get(get_session).delete(delete_session))
        .route("/api/health", get(health_check))
}

fn api_error(status: StatusCode, error: &str, message: String) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            message,
            details: None,
        }),
    )
}

fn session_not_found() -> ApiError {
    api_error(StatusCode::NOT_FOUND, "session_not_found", "Session not found".to_string())
}

fn lock_poisoned() -> ApiError {
    api_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "state_unavailable",
        "Session store is unavailable".to_string(),
    )
}

fn invalid_graph(err: Error) -> ApiError {
    api_error(StatusCode::BAD_REQUEST, "invalid_graph", err.to_string())
}

/// Create a session around a new graph
pub async fn create_graph(
    State(state): State<AppState>,
    Json(request): Json<GraphRequest>,
) -> Result<(StatusCode, Json<SessionInfo>), ApiError> {
    let graph = request
        .build(state.config.max_nodes)
        .map_err(invalid_graph)?;
    let session = Session::new(graph);

    let info = SessionInfo {
        summary: session.summary(),
        graph: WebGraph::from_graph(&session.graph),
    };

    {
        let mut sessions = state.write_sessions()?;
        if sessions.len() >= state.config.max_sessions {
            return Err(api_error(
                StatusCode::SERVICE_UNAVAILABLE,
                "too_many_sessions",
                format!("Session limit of {} reached", state.config.max_sessions),
            ));
        }
        sessions.insert(session.id, session);
    }

    info!(
        "Created session {} ({} nodes, {} edges)",
        info.summary.id, info.summary.node_count, info.summary.edge_count
    );
    Ok((StatusCode::CREATED, Json(info)))
}

/// Get graph data for a session
pub async fn get_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<WebGraph>, ApiError> {
    let graph = state.graph(&session_id)?;
    Ok(Json(WebGraph::from_graph(&graph)))
}

/// Shortest route between the selected places
pub async fn find_route(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<RouteRequest>,
) -> Result<Json<RouteResponse>, ApiError> {
    let graph = state.graph(&session_id)?;

    let start_time = Instant::now();
    let (start, end) = request.endpoints();
    let path = match (start, end) {
        (Some(start), Some(end)) => Dijkstra::new().find(graph.as_ref(), start, end),
        _ => Vec::new(),
    };
    let execution_time = start_time.elapsed();

    let status = RouteStatus::classify(start, end, &path);
    let total_weight = path_weight(graph.as_ref(), &path).map(|weight| weight.into_inner());
    let links = path
        .windows(2)
        .filter_map(|hop| {
            graph.edge_weight(&hop[0], &hop[1]).map(|weight| WebEdge {
                source: hop[0].clone(),
                target: hop[1].clone(),
                weight: weight.into_inner(),
                is_path: true,
            })
        })
        .collect();

    Ok(Json(RouteResponse {
        status,
        message: status.describe(&path),
        path,
        total_weight,
        links,
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
    }))
}

/// Routes between every ordered pair of distinct places
pub async fn route_table(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<RouteTableResponse>, ApiError> {
    let graph = state.graph(&session_id)?;

    let start_time = Instant::now();
    let search_graph = Arc::clone(&graph);
    let table = tokio::task::spawn_blocking(move || {
        find_all_pairs(&Dijkstra::new(), search_graph.as_ref())
    })
    .await
    .map_err(|err| {
        api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "search_failed",
            format!("Route table computation failed: {}", err),
        )
    })?
    .map_err(|err| api_error(StatusCode::INTERNAL_SERVER_ERROR, "search_failed", err.to_string()))?;
    let execution_time = start_time.elapsed();

    let mut routes = Vec::new();
    for start in &table.nodes {
        for end in table.nodes.iter().filter(|end| *end != start) {
            let path = table.route(start, end);
            let total_weight = table.distance(start, end).map(|weight| weight.into_inner());
            routes.push(RouteEntry {
                start: start.clone(),
                end: end.clone(),
                path,
                total_weight,
            });
        }
    }

    Ok(Json(RouteTableResponse {
        nodes: table.nodes.clone(),
        routes,
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
    }))
}

/// List all sessions
pub async fn list_sessions(
    State(state): State<AppState>,
) -> Result<Json<Vec<SessionSummary>>, ApiError> {
    let sessions = state.read_sessions()?;
    let mut summaries: Vec<_> = sessions.values().map(Session::summary).collect();
    summaries.sort_by_key(|summary| summary.created_at);
    Ok(Json(summaries))
}

/// Get session details
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionSummary>, ApiError> {
    let sessions = state.read_sessions()?;
    sessions
        .get(&session_id)
        .map(|session| Json(session.summary()))
        .ok_or_else(session_not_found)
}

/// Drop a session and its graph
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let mut sessions = state.write_sessions()?;
    match sessions.remove(&session_id) {
        Some(_) => {
            info!("Deleted session {}", session_id);
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(session_not_found()),
    }
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let sessions = state.read_sessions()?.len();
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        sessions,
    }))
}
