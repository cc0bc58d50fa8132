//! Memory read executor: captures `what is my <key>` and looks the key up in
//! the injected store. A missing key is a `null` value, not an error.

use std::sync::Arc;

use agent_core::{ToolError, ToolId, ToolResponse};
use async_trait::async_trait;
use memory_store::MemoryStore;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;

use super::{Tool, ToolOutput};

// Lazy capture up to an optional trailing "?" or end of string.
static READ_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)what is my\s+(.+?)(?:\?|$)").expect("read pattern is valid"));

/// Key reported when the prompt contains "what is my" but the capture fails.
const UNKNOWN_KEY: &str = "unknown";

/// Executor for prompts containing "what is my".
#[derive(Clone)]
pub struct MemoryReadTool {
    store: Arc<dyn MemoryStore>,
}

impl MemoryReadTool {
    /// Creates an executor reading from the given store.
    pub fn new(store: Arc<dyn MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for MemoryReadTool {
    fn id(&self) -> ToolId {
        ToolId::MemoryRead
    }

    async fn run(&self, prompt: &str) -> Result<Option<ToolOutput>, ToolError> {
        let key = READ_PATTERN
            .captures(prompt)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_else(|| UNKNOWN_KEY.to_string());

        let value = self
            .store
            .read(&key)
            .await
            .map_err(|e| ToolError::Store(e.to_string()))?;
        info!(key = %key, found = value.is_some(), "step: memory_read looked up key");

        Ok(Some(ToolOutput {
            tool_input: key.clone(),
            response: ToolResponse::Recall { key, value },
        }))
    }
}
