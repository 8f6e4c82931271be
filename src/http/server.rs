//! HTTP server setup and handlers.
//!
//! # Responsibilities
//! - Create Axum Router with shell and route-listing handlers
//! - Wire up middleware (tracing, timeout, request ID)
//! - Resolve request paths against the route table
//! - Serve until Ctrl+C or the shutdown broadcast fires

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use axum::http::HeaderMap;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::history::{History, HistoryMode};
use crate::http::request::request_id;
use crate::routing::{Location, RouteEntry, RouteTable, View};

/// Path of the route listing endpoint.
pub const ROUTES_PATH: &str = "/__routes";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<RouteTable>,
    pub history: HistoryMode,
    pub base: String,
}

impl AppState {
    /// Location a request for `path` starts the application at, if the
    /// path is served at all in this history mode.
    fn initial_location(&self, path: &str) -> Option<Location> {
        let history = self.history.create(&self.base);
        let location = history.location_from_href(path)?;
        match self.history {
            // No URL encoding: only the base itself is a page.
            HistoryMode::Memory if location.path != "/" => None,
            _ => Some(location),
        }
    }
}

/// HTTP server hosting the application shell.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        let state = AppState {
            table: Arc::new(RouteTable::new(
                config.router.routes.clone(),
                config.router.match_options,
            )),
            history: config.router.history,
            base: config.router.base.clone(),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        Router::new()
            .route(ROUTES_PATH, get(routes_handler))
            .route("/", get(shell_handler))
            .route("/{*path}", get(shell_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.server.request_timeout_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// The configured Axum router, for embedding or in-process testing.
    pub fn app(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            history = %self.config.router.history,
            base = %self.config.router.base,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

#[derive(Debug, Serialize)]
struct RoutesResponse<'a> {
    history: HistoryMode,
    base: &'a str,
    strict: bool,
    sensitive: bool,
    routes: Vec<&'a RouteEntry>,
}

async fn routes_handler(State(state): State<AppState>) -> Response {
    let options = state.table.options();
    Json(RoutesResponse {
        history: state.history,
        base: &state.base,
        strict: options.strict,
        sensitive: options.sensitive,
        routes: state.table.entries().collect(),
    })
    .into_response()
}

/// Serves the application shell for any routed path.
async fn shell_handler(State(state): State<AppState>, headers: HeaderMap, uri: Uri) -> Response {
    let request_id = request_id(&headers);
    let path = uri.path();

    let Some(location) = state.initial_location(path) else {
        tracing::warn!(request_id = %request_id, path = %path, "Path outside application base");
        return (StatusCode::NOT_FOUND, "Not Found").into_response();
    };

    match state.table.resolve(&location) {
        Some(entry) => {
            tracing::debug!(request_id = %request_id, path = %path, view = %entry.view, "Serving shell");
            Html(render_shell(entry.view, state.history)).into_response()
        }
        None => {
            tracing::warn!(request_id = %request_id, path = %path, "No route matched");
            (StatusCode::NOT_FOUND, "Not Found").into_response()
        }
    }
}

/// HTML document the client-side router mounts into.
pub fn render_shell(view: View, history: HistoryMode) -> String {
    format!(
        concat!(
            "<!doctype html>\n",
            "<html>\n",
            "<head><meta charset=\"utf-8\"><title>{title}</title></head>\n",
            "<body>\n",
            "<div id=\"app\" data-view=\"{view}\" data-history=\"{history}\">",
            "<div id=\"{mount}\"></div>",
            "</div>\n",
            "</body>\n",
            "</html>\n",
        ),
        title = view.title(),
        view = view.id(),
        history = history,
        mount = view.mount_id(),
    )
}

/// Wait for Ctrl+C or a broadcast shutdown.
async fn shutdown_signal(mut shutdown: broadcast::Receiver<()>) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        _ = ctrl_c => {}
        _ = shutdown.recv() => {}
    }
    tracing::info!("Shutdown signal received");
}
