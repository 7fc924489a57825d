use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domains::analysis::{analyze_post, AnalysisError};
use crate::domains::comments::RetrievalError;
use crate::server::app::AxumAppState;
use crate::server::routes::posts::NO_POST_MESSAGE;
use crate::server::routes::root::MessageResponse;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    pub fn with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// HTTP status for a failed analysis
pub fn analysis_error_status(error: &AnalysisError) -> StatusCode {
    match error {
        AnalysisError::Retrieval(RetrievalError::InvalidLocator { .. })
        | AnalysisError::Retrieval(RetrievalError::NotFound { .. }) => StatusCode::NOT_FOUND,
        AnalysisError::Retrieval(_) => StatusCode::BAD_GATEWAY,
        AnalysisError::Scoring(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        ErrorResponse::new(self.to_string()).with_status(analysis_error_status(&self))
    }
}

/// GET /latestpost/comments - fetch and score the stored post's comments
pub async fn get_latest_post_comments(Extension(state): Extension<AxumAppState>) -> Response {
    let Some(post) = state.latest_post.get().await else {
        return Json(MessageResponse::new(NO_POST_MESSAGE)).into_response();
    };

    match analyze_post(&post.url, &state.deps).await {
        Ok(report) => Json(report).into_response(),
        Err(e) => {
            tracing::warn!(url = %post.url, error = %e, "Comment analysis failed");
            e.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::sentiment::ScoringUnavailable;

    #[test]
    fn maps_errors_to_statuses() {
        let not_found = AnalysisError::from(RetrievalError::NotFound {
            locator: "x".into(),
        });
        let unreachable = AnalysisError::from(RetrievalError::Unreachable("down".into()));
        let scoring = AnalysisError::from(ScoringUnavailable::new("no model"));

        assert_eq!(analysis_error_status(&not_found), StatusCode::NOT_FOUND);
        assert_eq!(analysis_error_status(&unreachable), StatusCode::BAD_GATEWAY);
        assert_eq!(analysis_error_status(&scoring), StatusCode::SERVICE_UNAVAILABLE);
    }
}
