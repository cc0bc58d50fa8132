//! Remote agent service client.
//!
//! [`RemoteAgent`] abstracts the backend call so the fallback service can be
//! tested with stub implementations; [`HttpRemoteAgent`] is the reqwest-based
//! implementation speaking the `POST /agent/query` wire shape.

use std::time::Duration;

use agent_core::Envelope;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, instrument};

/// JSON body of `POST /agent/query`.
#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    prompt: &'a str,
}

/// Abstraction over the remote agent service.
#[async_trait]
pub trait RemoteAgent: Send + Sync {
    /// Sends one prompt and returns the service's envelope.
    ///
    /// Any transport problem, non-success status, or undecodable body is an
    /// error; callers decide whether to fall back.
    async fn query(&self, prompt: &str) -> Result<Envelope>;
}

/// HTTP implementation of [`RemoteAgent`].
#[derive(Debug, Clone)]
pub struct HttpRemoteAgent {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRemoteAgent {
    /// Creates a client for the service at `base_url` (no trailing slash needed)
    /// with the given request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn query_url(&self) -> String {
        format!("{}/agent/query", self.base_url)
    }
}

#[async_trait]
impl RemoteAgent for HttpRemoteAgent {
    #[instrument(skip(self, prompt))]
    async fn query(&self, prompt: &str) -> Result<Envelope> {
        let url = self.query_url();
        debug!(url = %url, "sending prompt to remote agent");

        let response = self
            .client
            .post(&url)
            .json(&QueryRequest { prompt })
            .send()
            .await
            .context("Remote agent request failed")?
            .error_for_status()
            .context("Remote agent returned non-success status")?;

        let envelope = response
            .json::<Envelope>()
            .await
            .context("Remote agent returned an undecodable body")?;
        Ok(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_url_strips_trailing_slash() {
        let agent =
            HttpRemoteAgent::new("http://localhost:8000/", Duration::from_secs(1)).unwrap();
        assert_eq!(agent.query_url(), "http://localhost:8000/agent/query");
    }
}
