//! Application setup and server configuration.

use std::time::Duration;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::domains::submission::LatestPostSlot;
use crate::kernel::ServerDeps;
use crate::server::routes::{
    get_latest_post, get_latest_post_comments, health_handler, root_handler, submit_post,
};

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub deps: ServerDeps,
    pub latest_post: LatestPostSlot,
}

impl AxumAppState {
    pub fn new(deps: ServerDeps) -> Self {
        Self {
            deps,
            latest_post: LatestPostSlot::new(),
        }
    }
}

/// HTTP-level settings for the router
#[derive(Debug, Clone)]
pub struct HttpOptions {
    /// Browser origins allowed by CORS; empty allows any origin
    pub allowed_origins: Vec<String>,
    /// Requests running longer than this are cancelled with 408
    pub request_timeout: Duration,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            request_timeout: Duration::from_secs(60),
        }
    }
}

/// Build the Axum application router
pub fn build_app(state: AxumAppState, options: &HttpOptions) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allow_origin(&options.allowed_origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/", get(root_handler))
        .route("/posturl", post(submit_post))
        .route("/latestpost", get(get_latest_post))
        .route("/latestpost/comments", get(get_latest_post_comments))
        .route("/health", get(health_handler))
        // Layers listed top to bottom run outermost first
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(TimeoutLayer::new(options.request_timeout))
                .layer(Extension(state)),
        )
}

fn allow_origin(origins: &[String]) -> AllowOrigin {
    if origins.is_empty() {
        return AllowOrigin::from(tower_http::cors::Any);
    }

    let values: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    AllowOrigin::list(values)
}
