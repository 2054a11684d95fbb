use axum::{
    http::{header, Method},
    Router,
};
use log::{info, warn};
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::web::api::{create_router, AppState};

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
    pub max_sessions: usize,
    /// Largest graph a session may hold, in nodes
    pub max_nodes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3005,
            enable_cors: true,
            max_sessions: 1000,
            max_nodes: 1000,
        }
    }
}

impl ServerConfig {
    /// Defaults overridden by `ROUTE_HOST`, `ROUTE_PORT`, `ROUTE_ENABLE_CORS`,
    /// `ROUTE_MAX_SESSIONS` and `ROUTE_MAX_NODES`
    pub fn from_env() -> Self {
        let mut config = Self::default();
        override_from_env("ROUTE_HOST", &mut config.host);
        override_from_env("ROUTE_PORT", &mut config.port);
        override_from_env("ROUTE_ENABLE_CORS", &mut config.enable_cors);
        override_from_env("ROUTE_MAX_SESSIONS", &mut config.max_sessions);
        override_from_env("ROUTE_MAX_NODES", &mut config.max_nodes);
        config
    }

    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn override_from_env<T: FromStr>(name: &str, target: &mut T) {
    if let Ok(raw) = env::var(name) {
        match raw.parse() {
            Ok(value) => *target = value,
            Err(_) => warn!("Ignoring {}={:?}: not a valid value", name, raw),
        }
    }
}

/// Build the application with its routes, state and middleware
pub fn build_app(config: ServerConfig) -> Router {
    let enable_cors = config.enable_cors;
    let app = Router::new()
        .merge(create_router())
        .with_state(AppState::new(config));

    if !enable_cors {
        return app;
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);
    app.layer(ServiceBuilder::new().layer(cors).into_inner())
}

/// Start the web server
pub async fn start_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config.address();
    let app = build_app(config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Route server listening on http://{}", addr);
    info!("Health check at http://{}/api/health", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
