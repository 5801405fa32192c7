use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Webhook that relays provider/daycare/event submissions and contact
    /// messages to the editorial inbox. Submissions are rejected with a 503
    /// when unset.
    pub submission_webhook_url: Option<String>,
    /// External checkout URL for the donate flow (payment handled off-site).
    pub donate_url: Option<String>,
    /// Staleness window for cached directory collections, in seconds.
    pub cache_ttl_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            submission_webhook_url: env::var("SUBMISSION_WEBHOOK_URL").ok(),
            donate_url: env::var("DONATE_URL").ok(),
            cache_ttl_secs: env::var("CACHE_TTL_SECS")
                .unwrap_or_else(|_| "300".to_string())
                .parse()
                .context("CACHE_TTL_SECS must be a valid number")?,
        })
    }
}
