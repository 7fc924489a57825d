// Main entry point for API server

use std::sync::Arc;

use anyhow::{Context, Result};
use huggingface_client::HuggingFaceClient;
use reddit_client::{CommentsQuery, RedditClient, RedditCredentials};
use server_core::kernel::{BaseSentimentModel, HuggingFaceSentimentModel, RedditAdapter, ServerDeps};
use server_core::server::{build_app, AxumAppState, HttpOptions};
use server_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,server_core=debug,reddit_client=debug,huggingface_client=debug,tower_http=info"
                    .into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting Reddit Sentiment Analysis API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    log_config(&config);

    // Reddit client (content provider)
    let reddit = RedditClient::with_timeout(
        RedditCredentials {
            client_id: config.reddit_client_id.clone(),
            client_secret: config.reddit_client_secret.clone(),
            user_agent: config.reddit_user_agent.clone(),
        },
        config.http_client_timeout,
    )
    .context("Failed to create Reddit client")?
    .with_comments_query(CommentsQuery {
        limit: config.reddit_comment_limit,
        ..CommentsQuery::default()
    });

    // Hugging Face client (sentiment model)
    let huggingface = HuggingFaceClient::new(config.hf_api_token.clone())
        .with_inference_url(config.hf_inference_url.clone())
        .with_timeout(config.http_client_timeout)
        .context("Failed to create Hugging Face client")?;

    let sentiment_model = HuggingFaceSentimentModel::new(
        Arc::new(huggingface),
        config.sentiment_model.clone(),
        config.sentiment_max_input_chars,
    );

    // The model is loaded once; refuse to start without it
    tracing::info!(model = %config.sentiment_model, "Checking sentiment model availability...");
    sentiment_model
        .warm_up()
        .await
        .context("Sentiment model unavailable")?;
    tracing::info!("Sentiment model ready");

    let deps = ServerDeps::new(
        Arc::new(RedditAdapter::new(Arc::new(reddit))),
        Arc::new(sentiment_model),
        config.sentiment_batch_size,
    );

    let app = build_app(
        AxumAppState::new(deps),
        &HttpOptions {
            allowed_origins: config.allowed_origins.clone(),
            request_timeout: config.request_timeout,
        },
    );

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

/// Log configuration with secrets masked
fn log_config(config: &Config) {
    fn mask(value: &str) -> String {
        let show = value.chars().take(4).collect::<String>();
        let hidden = value.chars().count().saturating_sub(4);
        format!("{}{} ({} chars)", show, "*".repeat(hidden), value.chars().count())
    }

    tracing::info!("Configuration loaded:");
    tracing::info!("  REDDIT_CLIENT_ID: {}", mask(&config.reddit_client_id));
    tracing::info!("  REDDIT_CLIENT_SECRET: {}", mask(&config.reddit_client_secret));
    tracing::info!("  REDDIT_USER_AGENT: {}", config.reddit_user_agent);
    tracing::info!("  HF_API_TOKEN: {}", mask(&config.hf_api_token));
    tracing::info!("  SENTIMENT_MODEL: {}", config.sentiment_model);
    tracing::info!(
        batch_size = config.sentiment_batch_size,
        max_input_chars = config.sentiment_max_input_chars,
        comment_limit = config.reddit_comment_limit,
        "  Pipeline settings"
    );
    if config.allowed_origins.is_empty() {
        tracing::warn!("  ALLOWED_ORIGINS: not set, allowing any origin");
    } else {
        tracing::info!("  ALLOWED_ORIGINS: {}", config.allowed_origins.join(", "));
    }
}
