//! HTTP server implementation for both GINI variants.
//!
//! The questioning parrot answers on `/api/gini`; the consciousness mirror
//! serves the poem and drives the deployment registry. Everything else falls
//! through to the variant's HTML shell.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use gini_core::{DeploymentRecord, Error, GossipProfile, Layer, PackageSpec, Result, Stanza};
use gini_registry::{ContentRegistry, DeploymentRegistry};

use crate::pages;

/// Which payload the server carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// The questioning parrot: questions and gossip.
    Gossip,
    /// The consciousness mirror: the poem and package deployment.
    #[default]
    Poem,
}

impl Variant {
    /// Returns the lowercase name used in configuration.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gossip => "gossip",
            Self::Poem => "poem",
        }
    }

    fn index_page(self) -> &'static str {
        match self {
            Self::Gossip => pages::GOSSIP_INDEX,
            Self::Poem => pages::POEM_INDEX,
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gossip" | "gini" => Ok(Self::Gossip),
            "poem" | "mirror" => Ok(Self::Poem),
            other => Err(Error::invalid_config(format!(
                "unknown variant '{other}' (expected 'gossip' or 'poem')"
            ))),
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address.
    pub addr: SocketAddr,
    /// Enable CORS.
    pub cors: bool,
    /// Payload variant to serve.
    pub variant: Variant,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfigBuilder::default().build()
    }
}

impl ServerConfig {
    /// Creates a new server config builder.
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }
}

/// Builder for ServerConfig.
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    addr: Option<SocketAddr>,
    cors: Option<bool>,
    variant: Option<Variant>,
    static_dir: Option<PathBuf>,
}

impl ServerConfigBuilder {
    /// Sets the listen address.
    pub fn addr(mut self, addr: SocketAddr) -> Self {
        self.addr = Some(addr);
        self
    }

    /// Sets whether CORS is enabled.
    pub fn cors(mut self, enabled: bool) -> Self {
        self.cors = Some(enabled);
        self
    }

    /// Sets the payload variant.
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Sets the directory served under `/static`.
    pub fn static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }

    /// Builds the server config.
    pub fn build(self) -> ServerConfig {
        ServerConfig {
            addr: self
                .addr
                .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 8080))),
            cors: self.cors.unwrap_or(true),
            variant: self.variant.unwrap_or_default(),
            static_dir: self.static_dir.unwrap_or_else(|| PathBuf::from("./static")),
        }
    }
}

/// The literal tables a server is initialized with.
#[derive(Debug, Clone)]
pub struct Content {
    /// Annotated poem.
    pub poem: ContentRegistry<Stanza>,
    /// What the parrot says.
    pub gossip: Arc<GossipProfile>,
    /// Packages deployed by `POST /api/deploy`.
    pub catalog: Arc<[PackageSpec]>,
}

impl Default for Content {
    fn default() -> Self {
        Self {
            poem: ContentRegistry::new(gini_registry::default_stanzas()),
            gossip: Arc::new(gini_registry::default_profile()),
            catalog: gini_registry::default_catalog().into(),
        }
    }
}

/// Shared application state.
pub struct AppState {
    /// Server configuration.
    pub config: ServerConfig,
    /// Immutable content tables.
    pub content: Content,
    /// Deployed packages.
    pub deployments: Arc<DeploymentRegistry>,
    /// Server start time.
    pub start_time: Instant,
}

impl AppState {
    /// Creates new app state with the default tables and an empty registry.
    pub fn new(config: ServerConfig) -> Self {
        Self::with_content(config, Content::default(), Arc::new(DeploymentRegistry::new()))
    }

    /// Creates new app state from explicit tables and registry.
    pub fn with_content(
        config: ServerConfig,
        content: Content,
        deployments: Arc<DeploymentRegistry>,
    ) -> Self {
        Self {
            config,
            content,
            deployments,
            start_time: Instant::now(),
        }
    }
}

/// The HTTP server.
pub struct Server {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl Server {
    /// Creates a new server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let state = Arc::new(AppState::new(config.clone()));
        Self { config, state }
    }

    /// Creates a new server around prepared state.
    pub fn with_state(state: AppState) -> Self {
        Self {
            config: state.config.clone(),
            state: Arc::new(state),
        }
    }

    /// Returns the shared state.
    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    /// Creates the router.
    pub fn router(&self) -> Router {
        let api = match self.config.variant {
            Variant::Gossip => Router::new().route("/api/gini", get(gossip_profile)),
            Variant::Poem => Router::new()
                .route("/api/poem", get(list_stanzas))
                .route("/api/poem/:line", get(get_stanza))
                .route("/api/layers/:layer", get(stanzas_by_layer))
                .route(
                    "/api/deploy",
                    post(deploy_packages).fallback(method_not_allowed),
                )
                .route("/api/status", get(deployment_status)),
        };

        let mut router = Router::new()
            .route("/health", get(health))
            .merge(api)
            .nest_service("/static", ServeDir::new(&self.config.static_dir))
            .fallback(fallback)
            .with_state(self.state.clone());

        // Add middleware
        router = router.layer(TraceLayer::new_for_http());

        if self.config.cors {
            router = router.layer(CorsLayer::permissive());
        }

        router
    }

    /// Runs the server.
    ///
    /// # Errors
    ///
    /// Returns an error if the server cannot start.
    pub async fn run(self) -> Result<()> {
        let router = self.router();

        tracing::info!(
            addr = %self.config.addr,
            variant = %self.config.variant,
            "Starting GINI server"
        );
        match self.config.variant {
            Variant::Gossip => {
                eprintln!("\n🦜 GINI = 'WHAT' in Igbo");
                eprintln!("   GINI asks: 'Gini ka inweta?' (What do you have?)");
            },
            Variant::Poem => {
                eprintln!("\n  OBINexus GINI - The Consciousness Mirror");
                eprintln!("  IaaS Layers: Infrastructure | Platform | Application");
            },
        }
        eprintln!(
            "\n\x1b[32m✓\x1b[0m Server listening on http://{}",
            self.config.addr
        );
        eprintln!("  Press Ctrl+C to stop\n");

        let listener = tokio::net::TcpListener::bind(self.config.addr).await?;

        // Set up graceful shutdown
        let shutdown_signal = async {
            let ctrl_c = async {
                tokio::signal::ctrl_c()
                    .await
                    .expect("Failed to install Ctrl+C handler");
            };

            #[cfg(unix)]
            let terminate = async {
                tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                    .expect("Failed to install signal handler")
                    .recv()
                    .await;
            };

            #[cfg(not(unix))]
            let terminate = std::future::pending::<()>();

            tokio::select! {
                () = ctrl_c => {
                    eprintln!("\n\x1b[33m⚡\x1b[0m Received Ctrl+C, shutting down gracefully...");
                },
                () = terminate => {
                    eprintln!("\n\x1b[33m⚡\x1b[0m Received SIGTERM, shutting down gracefully...");
                },
            }
        };

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await?;

        tracing::info!(
            uptime_seconds = self.state.start_time.elapsed().as_secs(),
            "Server shutdown complete"
        );
        eprintln!("\x1b[32m✓\x1b[0m Server stopped");

        Ok(())
    }
}

// === Error Response ===

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Serialize)]
struct ErrorDetail {
    message: String,
    #[serde(rename = "type")]
    error_type: String,
    code: Option<String>,
}

impl ErrorResponse {
    fn new(message: impl Into<String>, error_type: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                message: message.into(),
                error_type: error_type.into(),
                code: None,
            },
        }
    }

    fn with_code(mut self, code: impl Into<String>) -> Self {
        self.error.code = Some(code.into());
        self
    }
}

fn error_response(status: StatusCode, message: &str, error_type: &str) -> Response {
    let body = Json(ErrorResponse::new(message, error_type));
    (status, body).into_response()
}

impl From<&Error> for ErrorResponse {
    fn from(err: &Error) -> Self {
        match err {
            Error::InvalidLayer { .. } => {
                Self::new(err.to_string(), "invalid_request_error").with_code("invalid_layer")
            },
            Error::StanzaNotFound { .. } => {
                Self::new(err.to_string(), "not_found_error").with_code("stanza_not_found")
            },
            _ => Self::new(err.to_string(), "internal_error"),
        }
    }
}

fn api_error(err: &Error) -> Response {
    let status = match err {
        Error::StanzaNotFound { .. } => StatusCode::NOT_FOUND,
        e if e.is_client_error() => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    tracing::debug!(error = %err, status = %status, "Request failed");
    (status, Json(ErrorResponse::from(err))).into_response()
}

// === Health & Shell ===

async fn health() -> &'static str {
    "OK"
}

async fn fallback(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    if uri.path().starts_with("/api/") {
        return error_response(
            StatusCode::NOT_FOUND,
            &format!("No such endpoint: {}", uri.path()),
            "not_found_error",
        );
    }
    Html(state.config.variant.index_page()).into_response()
}

async fn method_not_allowed() -> Response {
    let body = Json(
        ErrorResponse::new("Method not allowed", "invalid_request_error")
            .with_code("method_not_allowed"),
    );
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "POST")],
        body,
    )
        .into_response()
}

// === Content ===

async fn gossip_profile(State(state): State<Arc<AppState>>) -> Response {
    Json(state.content.gossip.as_ref()).into_response()
}

async fn list_stanzas(State(state): State<Arc<AppState>>) -> Response {
    Json(state.content.poem.list()).into_response()
}

async fn get_stanza(State(state): State<Arc<AppState>>, Path(line): Path<String>) -> Response {
    let Ok(line) = line.parse::<usize>() else {
        return error_response(
            StatusCode::BAD_REQUEST,
            &format!("Invalid line number: {line}"),
            "invalid_request_error",
        );
    };

    match state.content.poem.stanza(line) {
        Ok(stanza) => Json(stanza).into_response(),
        Err(e) => api_error(&e),
    }
}

async fn stanzas_by_layer(
    State(state): State<Arc<AppState>>,
    Path(layer): Path<String>,
) -> Response {
    match layer.parse::<Layer>() {
        Ok(layer) => Json(state.content.poem.by_layer(layer)).into_response(),
        Err(e) => api_error(&e),
    }
}

// === Deployment ===

#[derive(Debug, Serialize)]
struct DeployResponse {
    status: String,
    deployed: Vec<DeploymentRecord>,
}

async fn deploy_packages(State(state): State<Arc<AppState>>) -> Json<DeployResponse> {
    let deployed = state.deployments.deploy_all(&state.content.catalog);
    tracing::info!(count = deployed.len(), "Deployed catalog");

    Json(DeployResponse {
        status: "success".to_string(),
        deployed,
    })
}

async fn deployment_status(State(state): State<Arc<AppState>>) -> Json<Vec<DeploymentRecord>> {
    Json(state.deployments.list())
}
