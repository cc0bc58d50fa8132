//! Client config: remote agent service endpoint, HTTP timeout, logging. Loaded from env.

use anyhow::Result;
use std::env;

/// Config for the agent client and CLI.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// AGENT_BACKEND_URL
    pub backend_url: String,
    /// AGENT_HTTP_TIMEOUT_SECS
    pub http_timeout_secs: u64,
    /// Log file path
    pub log_file: String,
}

impl ClientConfig {
    /// Load from environment variables. `backend_url` overrides
    /// AGENT_BACKEND_URL if provided.
    pub fn load(backend_url: Option<String>) -> Result<Self> {
        let backend_url = backend_url
            .or_else(|| env::var("AGENT_BACKEND_URL").ok())
            .unwrap_or_else(|| "http://localhost:8000".to_string());
        let http_timeout_secs = env::var("AGENT_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10);
        let log_file =
            env::var("LOG_FILE").unwrap_or_else(|_| "logs/agent-cli.log".to_string());

        Ok(Self {
            backend_url,
            http_timeout_secs,
            log_file,
        })
    }

    /// Validate config (backend_url must be a valid URL).
    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.backend_url).is_err() {
            anyhow::bail!(
                "AGENT_BACKEND_URL is set but not a valid URL: {}",
                self.backend_url
            );
        }
        Ok(())
    }
}
