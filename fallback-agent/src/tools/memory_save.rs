//! Memory save executor: captures `remember <key> is <value>` and writes the
//! pair into the injected store.

use std::sync::Arc;

use agent_core::{ToolError, ToolId, ToolResponse, SAVED_STATUS};
use async_trait::async_trait;
use memory_store::MemoryStore;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;

use super::{Tool, ToolOutput};

// Lazy key capture, greedy value capture to end of string. "remember my cat's
// name is Fluffy" yields key "my cat's name", value "Fluffy".
static SAVE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)remember\s+(.+?)\s+is\s+(.+)").expect("save pattern is valid"));

/// Executor for prompts containing "remember".
#[derive(Clone)]
pub struct MemorySaveTool {
    store: Arc<dyn MemoryStore>,
}

impl MemorySaveTool {
    /// Creates an executor writing to the given store.
    pub fn new(store: Arc<dyn MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for MemorySaveTool {
    fn id(&self) -> ToolId {
        ToolId::MemorySave
    }

    async fn run(&self, prompt: &str) -> Result<Option<ToolOutput>, ToolError> {
        let Some(captures) = SAVE_PATTERN.captures(prompt) else {
            // "remember" was present but not in "<key> is <value>" form.
            return Ok(None);
        };
        let key = captures[1].trim().to_string();
        let value = captures[2].trim().to_string();

        self.store
            .save(&key, &value)
            .await
            .map_err(|e| ToolError::Store(e.to_string()))?;
        info!(key = %key, "step: memory_save stored value");

        Ok(Some(ToolOutput {
            tool_input: key.clone(),
            response: ToolResponse::Saved {
                status: SAVED_STATUS.to_string(),
                key,
                value,
            },
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use memory_store::InMemoryStore;

    fn make_tool() -> (MemorySaveTool, Arc<InMemoryStore>) {
        let store = Arc::new(InMemoryStore::new());
        (MemorySaveTool::new(store.clone()), store)
    }

    #[tokio::test]
    async fn test_run_saves_trimmed_key_and_value() {
        let (tool, store) = make_tool();
        let output = tool
            .run("Remember my cat's name is Fluffy")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(output.tool_input, "my cat's name");
        assert_eq!(
            output.response,
            ToolResponse::Saved {
                status: "saved".to_string(),
                key: "my cat's name".to_string(),
                value: "Fluffy".to_string(),
            }
        );
        assert_eq!(
            store.read("my cat's name").await.unwrap(),
            Some("Fluffy".to_string())
        );
    }

    #[tokio::test]
    async fn test_run_without_is_phrase_yields_nothing() {
        let (tool, store) = make_tool();
        let output = tool.run("Remember this moment").await.unwrap();

        assert!(output.is_none());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_run_is_case_insensitive() {
        let (tool, store) = make_tool();
        let output = tool.run("REMEMBER my color IS blue").await.unwrap().unwrap();

        assert_eq!(output.tool_input, "my color");
        assert_eq!(store.read("my color").await.unwrap(), Some("blue".to_string()));
    }

    #[tokio::test]
    async fn test_run_value_capture_is_greedy() {
        let (tool, store) = make_tool();
        tool.run("remember my motto is all is well").await.unwrap().unwrap();

        // Lazy key stops at the first " is "; the value keeps the rest.
        assert_eq!(
            store.read("my motto").await.unwrap(),
            Some("all is well".to_string())
        );
    }
}
