use axum::{extract::Extension, Json};
use serde::Serialize;

use crate::server::app::AxumAppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    sentiment_model: String,
    latest_post_stored: bool,
}

/// Health check endpoint
///
/// The model is verified at startup, so a running process reports healthy.
pub async fn health_handler(Extension(state): Extension<AxumAppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        sentiment_model: state.deps.sentiment_model.model_id().to_string(),
        latest_post_stored: state.latest_post.get().await.is_some(),
    })
}
