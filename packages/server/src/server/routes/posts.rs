use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::domains::submission::Post;
use crate::server::app::AxumAppState;
use crate::server::routes::comments::ErrorResponse;
use crate::server::routes::root::MessageResponse;

pub const NO_POST_MESSAGE: &str = "No post stored yet.";

#[derive(Serialize)]
pub struct StoredPostResponse {
    message: String,
    stored_url: String,
}

#[derive(Serialize)]
pub struct LatestPostResponse {
    latest_post: String,
}

/// POST /posturl - remember a post for later analysis
pub async fn submit_post(
    Extension(state): Extension<AxumAppState>,
    Json(post): Json<Post>,
) -> impl IntoResponse {
    if post.url.trim().is_empty() {
        return ErrorResponse::new("url must not be empty")
            .with_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    let stored_url = post.url.clone();
    let previous = state.latest_post.replace(post).await;
    tracing::info!(
        url = %stored_url,
        replaced = previous.is_some(),
        "Stored latest post"
    );

    (
        StatusCode::OK,
        Json(StoredPostResponse {
            message: "Post stored successfully".to_string(),
            stored_url,
        }),
    )
        .into_response()
}

/// GET /latestpost - the stored post URL, if any
pub async fn get_latest_post(Extension(state): Extension<AxumAppState>) -> impl IntoResponse {
    match state.latest_post.get().await {
        Some(post) => Json(LatestPostResponse {
            latest_post: post.url,
        })
        .into_response(),
        None => Json(MessageResponse::new(NO_POST_MESSAGE)).into_response(),
    }
}
