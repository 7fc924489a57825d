//! Pure Hugging Face Inference API client
//!
//! A minimal client for hosted text-classification models with no
//! domain-specific logic.
//!
//! # Example
//!
//! ```rust,ignore
//! use huggingface_client::HuggingFaceClient;
//!
//! let client = HuggingFaceClient::from_env()?;
//! let results = client
//!     .text_classification(
//!         "distilbert/distilbert-base-uncased-finetuned-sst-2-english",
//!         &["I love this".to_string()],
//!     )
//!     .await?;
//! ```

pub mod error;
pub mod types;

pub use error::{HuggingFaceError, Result};
pub use types::*;

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use tracing::debug;

const INFERENCE_URL: &str = "https://router.huggingface.co/hf-inference/models";
const HUB_URL: &str = "https://huggingface.co/api/models";

/// Pure Hugging Face API client.
#[derive(Clone)]
pub struct HuggingFaceClient {
    http_client: Client,
    api_token: String,
    inference_url: String,
    hub_url: String,
}

impl HuggingFaceClient {
    /// Create a new client with the given API token.
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_token: api_token.into(),
            inference_url: INFERENCE_URL.to_string(),
            hub_url: HUB_URL.to_string(),
        }
    }

    /// Create from environment variable `HF_API_TOKEN`.
    pub fn from_env() -> Result<Self> {
        let api_token = std::env::var("HF_API_TOKEN")
            .map_err(|_| HuggingFaceError::Config("HF_API_TOKEN not set".into()))?;
        Ok(Self::new(api_token))
    }

    /// Set a custom inference base URL (dedicated endpoints, proxies, etc.).
    pub fn with_inference_url(mut self, url: impl Into<String>) -> Self {
        self.inference_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set a custom hub metadata URL.
    pub fn with_hub_url(mut self, url: impl Into<String>) -> Self {
        self.hub_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Apply a per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.http_client = Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    /// Get the inference base URL.
    pub fn inference_url(&self) -> &str {
        &self.inference_url
    }

    /// Classify a batch of texts with a hosted text-classification model.
    ///
    /// Returns one candidate list per input, in input order. The request asks
    /// the provider to wait for a cold model instead of failing with 503.
    pub async fn text_classification(
        &self,
        model: &str,
        inputs: &[String],
    ) -> Result<Vec<Vec<ClassificationLabel>>> {
        if inputs.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/{}", self.inference_url, model);
        debug!(model, batch = inputs.len(), "Sending text-classification request");

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_token)
            .header("x-wait-for-model", "true")
            .json(&TextClassificationRequest { inputs })
            .send()
            .await?;

        let response = check_status(response, model).await?;
        let body: TextClassificationResponse = response
            .json()
            .await
            .map_err(|e| HuggingFaceError::Parse(format!("Failed to parse response: {}", e)))?;

        body.into_per_input(inputs.len())
    }

    /// Fetch model metadata from the hub.
    pub async fn model_info(&self, model: &str) -> Result<ModelInfo> {
        let url = format!("{}/{}", self.hub_url, model);

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(&self.api_token)
            .send()
            .await?;

        let response = check_status(response, model).await?;
        response
            .json()
            .await
            .map_err(|e| HuggingFaceError::Parse(format!("Failed to parse model info: {}", e)))
    }
}

async fn check_status(response: Response, model: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let parsed = serde_json::from_str::<ApiErrorBody>(&body).ok();

    Err(match status {
        StatusCode::NOT_FOUND => HuggingFaceError::ModelNotFound {
            model: model.to_string(),
        },
        StatusCode::SERVICE_UNAVAILABLE if parsed.as_ref().is_some_and(|p| p.estimated_time.is_some()) => {
            HuggingFaceError::ModelLoading {
                model: model.to_string(),
                estimated_time: parsed.and_then(|p| p.estimated_time),
            }
        }
        _ => HuggingFaceError::Api {
            status: status.as_u16(),
            message: parsed.map(|p| p.error).unwrap_or(body),
        },
    })
}
