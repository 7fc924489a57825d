use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Liveness banner
pub async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse::new("Reddit Sentiment Analysis API is running!"))
}
