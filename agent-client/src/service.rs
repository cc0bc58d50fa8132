//! Remote-with-fallback service: one attempt at the remote agent, then the
//! local rule-based responder.

use std::sync::Arc;

use agent_core::Envelope;
use fallback_agent::MockAgent;
use tracing::{info, instrument, warn};

use crate::remote::RemoteAgent;

/// Answers prompts via the remote agent service, falling back to the local
/// [`MockAgent`] when the remote fails. With no remote configured the service
/// is local-only.
pub struct AgentService {
    remote: Option<Arc<dyn RemoteAgent>>,
    fallback: MockAgent,
}

impl AgentService {
    /// Creates a service that tries `remote` first and falls back to `fallback`.
    pub fn new(remote: Arc<dyn RemoteAgent>, fallback: MockAgent) -> Self {
        Self {
            remote: Some(remote),
            fallback,
        }
    }

    /// Creates a local-only service; every prompt goes to the fallback pipeline.
    pub fn local_only(fallback: MockAgent) -> Self {
        Self {
            remote: None,
            fallback,
        }
    }

    /// Answers one prompt. The remote is tried at most once per call; any
    /// remote failure switches to the local responder for this prompt only.
    #[instrument(skip(self, prompt))]
    pub async fn respond(&self, prompt: &str) -> Envelope {
        if let Some(remote) = &self.remote {
            match remote.query(prompt).await {
                Ok(envelope) => {
                    info!("step: remote agent answered");
                    return envelope;
                }
                Err(e) => {
                    warn!(error = %e, "step: remote agent unavailable, using local tools");
                }
            }
        }
        self.fallback.respond(prompt).await
    }
}
