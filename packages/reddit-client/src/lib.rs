//! Pure Reddit REST API client.
//!
//! A minimal client for Reddit's OAuth API using application-only
//! (`client_credentials`) authentication. Supports resolving a submission
//! URL and fetching its top-level comment listing.
//!
//! # Example
//!
//! ```rust,ignore
//! use reddit_client::{RedditClient, RedditCredentials, Thing};
//!
//! let client = RedditClient::new(RedditCredentials {
//!     client_id: "id".into(),
//!     client_secret: "secret".into(),
//!     user_agent: "my-app/0.1".into(),
//! })?;
//!
//! let thread = client
//!     .submission_comments_by_url("https://www.reddit.com/r/rust/comments/abc123/")
//!     .await?;
//! for thing in &thread.comments {
//!     if let Thing::Comment(comment) = thing {
//!         println!("{}", comment.body);
//!     }
//! }
//! ```

pub mod error;
pub mod locator;
pub mod types;

pub use error::{RedditError, Result};
pub use locator::parse_submission_id;
pub use types::{
    AccessTokenResponse, Comment, CommentsQuery, Link, Listing, MoreComments, SubmissionComments,
    Thing,
};

use std::time::{Duration, Instant};

use reqwest::StatusCode;
use tokio::sync::Mutex;

const AUTH_URL: &str = "https://www.reddit.com/api/v1/access_token";
const API_URL: &str = "https://oauth.reddit.com";

/// Tokens are refreshed this long before Reddit would expire them.
const TOKEN_REFRESH_MARGIN: Duration = Duration::from_secs(60);

/// Script-app credentials.
#[derive(Debug, Clone)]
pub struct RedditCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub user_agent: String,
}

#[derive(Debug, Clone)]
struct CachedToken {
    value: String,
    expires_at: Instant,
}

impl CachedToken {
    fn is_fresh(&self) -> bool {
        Instant::now() + TOKEN_REFRESH_MARGIN < self.expires_at
    }
}

pub struct RedditClient {
    client: reqwest::Client,
    credentials: RedditCredentials,
    token: Mutex<Option<CachedToken>>,
    auth_url: String,
    api_url: String,
    query: CommentsQuery,
}

impl RedditClient {
    /// Create a client with a 30 second request timeout.
    pub fn new(credentials: RedditCredentials) -> Result<Self> {
        Self::with_timeout(credentials, Duration::from_secs(30))
    }

    pub fn with_timeout(credentials: RedditCredentials, timeout: Duration) -> Result<Self> {
        if credentials.client_id.is_empty() || credentials.client_secret.is_empty() {
            return Err(RedditError::Config(
                "client id and client secret are required".into(),
            ));
        }
        if credentials.user_agent.is_empty() {
            return Err(RedditError::Config("user agent is required".into()));
        }

        let client = reqwest::Client::builder()
            .user_agent(credentials.user_agent.clone())
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            credentials,
            token: Mutex::new(None),
            auth_url: AUTH_URL.to_string(),
            api_url: API_URL.to_string(),
            query: CommentsQuery::default(),
        })
    }

    /// Point the client at different auth/API hosts (proxies, test servers).
    pub fn with_base_urls(mut self, auth_url: impl Into<String>, api_url: impl Into<String>) -> Self {
        self.auth_url = auth_url.into();
        self.api_url = api_url.into();
        self
    }

    /// Override the default comment listing query.
    pub fn with_comments_query(mut self, query: CommentsQuery) -> Self {
        self.query = query;
        self
    }

    pub fn comments_query(&self) -> &CommentsQuery {
        &self.query
    }

    /// Return a valid bearer token, requesting a new one when the cached token is stale.
    async fn access_token(&self) -> Result<String> {
        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref().filter(|t| t.is_fresh()) {
            return Ok(token.value.clone());
        }

        tracing::debug!("Requesting Reddit application access token");
        let resp = self
            .client
            .post(&self.auth_url)
            .basic_auth(
                &self.credentials.client_id,
                Some(&self.credentials.client_secret),
            )
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RedditError::Auth {
                status: status.as_u16(),
                message: body,
            });
        }

        let token: AccessTokenResponse = resp
            .json()
            .await
            .map_err(|e| RedditError::Parse(format!("invalid token response: {}", e)))?;

        let value = token.access_token.clone();
        *cached = Some(CachedToken {
            value: token.access_token,
            expires_at: Instant::now() + Duration::from_secs(token.expires_in),
        });
        tracing::debug!(expires_in = token.expires_in, "Reddit access token refreshed");

        Ok(value)
    }

    /// Fetch a submission and its top-level comment listing by id.
    pub async fn submission_comments(&self, post_id: &str) -> Result<SubmissionComments> {
        let token = self.access_token().await?;
        let url = format!("{}/comments/{}", self.api_url, post_id);

        let limit = self.query.limit.to_string();
        let depth = self.query.depth.to_string();
        let resp = self
            .client
            .get(&url)
            .bearer_auth(&token)
            .query(&[
                ("limit", limit.as_str()),
                ("depth", depth.as_str()),
                ("sort", self.query.sort.as_str()),
                ("raw_json", "1"),
            ])
            .send()
            .await?;

        let status = resp.status();
        match status {
            s if s.is_success() => {}
            StatusCode::NOT_FOUND => {
                return Err(RedditError::NotFound {
                    post_id: post_id.to_string(),
                })
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                if status == StatusCode::UNAUTHORIZED {
                    self.token.lock().await.take();
                }
                let body = resp.text().await.unwrap_or_default();
                return Err(RedditError::Auth {
                    status: status.as_u16(),
                    message: body,
                });
            }
            _ => {
                let body = resp.text().await.unwrap_or_default();
                return Err(RedditError::Api {
                    status: status.as_u16(),
                    message: body,
                });
            }
        }

        let listings: Vec<Listing> = resp
            .json()
            .await
            .map_err(|e| RedditError::Parse(format!("invalid comment listing: {}", e)))?;

        let thread = SubmissionComments::from_listings(post_id, listings)?;
        tracing::debug!(
            post_id,
            entries = thread.comments.len(),
            "Fetched top-level comment listing"
        );

        Ok(thread)
    }

    /// Resolve a submission URL and fetch its top-level comment listing.
    pub async fn submission_comments_by_url(&self, url: &str) -> Result<SubmissionComments> {
        let post_id = parse_submission_id(url)?;
        tracing::info!(post_id = %post_id, "Fetching Reddit submission comments");
        self.submission_comments(&post_id).await
    }
}
