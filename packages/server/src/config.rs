use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str = "reddit-sentiment-analyzer";
pub const DEFAULT_SENTIMENT_MODEL: &str =
    "distilbert/distilbert-base-uncased-finetuned-sst-2-english";
pub const DEFAULT_INFERENCE_URL: &str = "https://router.huggingface.co/hf-inference/models";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub reddit_client_id: String,
    pub reddit_client_secret: String,
    pub reddit_user_agent: String,
    pub reddit_comment_limit: u32,
    pub hf_api_token: String,
    pub hf_inference_url: String,
    pub sentiment_model: String,
    pub sentiment_batch_size: usize,
    pub sentiment_max_input_chars: usize,
    pub allowed_origins: Vec<String>,
    pub request_timeout: Duration,
    pub http_client_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| -> Result<String> {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .with_context(|| format!("{} must be set", name))
        };

        let sentiment_batch_size: usize = parse_or(&lookup, "SENTIMENT_BATCH_SIZE", 32)?;
        if sentiment_batch_size == 0 {
            bail!("SENTIMENT_BATCH_SIZE must be at least 1");
        }
        let sentiment_max_input_chars: usize =
            parse_or(&lookup, "SENTIMENT_MAX_INPUT_CHARS", 510)?;
        if sentiment_max_input_chars == 0 {
            bail!("SENTIMENT_MAX_INPUT_CHARS must be at least 1");
        }

        Ok(Self {
            port: parse_or(&lookup, "PORT", 8000)?,
            reddit_client_id: required("REDDIT_CLIENT_ID")?,
            reddit_client_secret: required("REDDIT_CLIENT_SECRET")?,
            reddit_user_agent: lookup("REDDIT_USER_AGENT")
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            reddit_comment_limit: parse_or(&lookup, "REDDIT_COMMENT_LIMIT", 500)?,
            hf_api_token: required("HF_API_TOKEN")?,
            hf_inference_url: lookup("HF_INFERENCE_URL")
                .unwrap_or_else(|| DEFAULT_INFERENCE_URL.to_string()),
            sentiment_model: lookup("SENTIMENT_MODEL")
                .unwrap_or_else(|| DEFAULT_SENTIMENT_MODEL.to_string()),
            sentiment_batch_size,
            sentiment_max_input_chars,
            allowed_origins: lookup("ALLOWED_ORIGINS")
                .unwrap_or_default()
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            request_timeout: Duration::from_secs(parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 60)?),
            http_client_timeout: Duration::from_secs(parse_or(
                &lookup,
                "HTTP_CLIENT_TIMEOUT_SECS",
                30,
            )?),
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a valid number", name)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    const REQUIRED: &[(&str, &str)] = &[
        ("REDDIT_CLIENT_ID", "id"),
        ("REDDIT_CLIENT_SECRET", "secret"),
        ("HF_API_TOKEN", "hf_token"),
    ];

    #[test]
    fn defaults_apply_when_only_required_vars_are_set() {
        let config = Config::from_lookup(lookup_from(REQUIRED)).unwrap();

        assert_eq!(config.port, 8000);
        assert_eq!(config.reddit_user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.reddit_comment_limit, 500);
        assert_eq!(config.sentiment_model, DEFAULT_SENTIMENT_MODEL);
        assert_eq!(config.sentiment_batch_size, 32);
        assert_eq!(config.sentiment_max_input_chars, 510);
        assert!(config.allowed_origins.is_empty());
        assert_eq!(config.request_timeout, Duration::from_secs(60));
    }

    #[test]
    fn missing_credentials_are_reported_by_name() {
        let err = Config::from_lookup(lookup_from(&[("REDDIT_CLIENT_ID", "id")])).unwrap_err();
        assert!(err.to_string().contains("REDDIT_CLIENT_SECRET"));
    }

    #[test]
    fn origins_are_split_and_trimmed() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("ALLOWED_ORIGINS", "http://localhost:3000, https://app.example.com,,"));
        let config = Config::from_lookup(lookup_from(&vars)).unwrap();

        assert_eq!(
            config.allowed_origins,
            vec!["http://localhost:3000", "https://app.example.com"]
        );
    }

    #[test]
    fn invalid_numbers_are_rejected() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("PORT", "eighty"));
        assert!(Config::from_lookup(lookup_from(&vars)).is_err());

        let mut vars = REQUIRED.to_vec();
        vars.push(("SENTIMENT_BATCH_SIZE", "0"));
        assert!(Config::from_lookup(lookup_from(&vars)).is_err());
    }
}
