//! Pipeline orchestrator: classify, dispatch to the matching executor, wrap the
//! outcome in a response envelope. All failures become the failure envelope;
//! nothing escapes [`MockAgent::respond`].

use std::sync::Arc;

use agent_core::{Envelope, ToolError, ToolId};
use memory_store::MemoryStore;
use tracing::{info, instrument, warn};

use crate::classifier::classify;
use crate::tools::{CalculatorTool, MemoryReadTool, MemorySaveTool, Tool};

/// Rule-based responder over a fixed set of tools and an injected store.
///
/// One prompt is processed to completion per call; the agent itself holds no
/// mutable state beyond the shared store.
#[derive(Clone)]
pub struct MockAgent {
    tools: Vec<Arc<dyn Tool>>,
}

impl MockAgent {
    /// Creates the agent with the three built-in tools over `store`.
    pub fn new(store: Arc<dyn MemoryStore>) -> Self {
        Self {
            tools: vec![
                Arc::new(CalculatorTool::new()),
                Arc::new(MemorySaveTool::new(store.clone())),
                Arc::new(MemoryReadTool::new(store)),
            ],
        }
    }

    fn tool_for(&self, id: ToolId) -> Option<&Arc<dyn Tool>> {
        self.tools.iter().find(|tool| tool.id() == id)
    }

    /// Runs the full pipeline for one prompt and returns the envelope.
    #[instrument(skip(self, prompt))]
    pub async fn respond(&self, prompt: &str) -> Envelope {
        match self.try_respond(prompt).await {
            Ok(envelope) => envelope,
            // Unsupported intent and a failed executor pattern are
            // indistinguishable at the envelope level.
            Err(ToolError::UnsupportedIntent) | Err(ToolError::PatternExtraction) => {
                info!("step: no tool answered the prompt");
                Envelope::no_tool()
            }
            Err(e) => {
                warn!(error = %e, "step: tool execution failed");
                Envelope::failure(e.to_string())
            }
        }
    }

    async fn try_respond(&self, prompt: &str) -> Result<Envelope, ToolError> {
        let chosen = classify(prompt).ok_or(ToolError::UnsupportedIntent)?;
        info!(tool = %chosen, "step: classifier chose tool");

        let tool = self
            .tool_for(chosen)
            .ok_or(ToolError::UnsupportedIntent)?;
        let output = tool
            .run(prompt)
            .await?
            .ok_or(ToolError::PatternExtraction)?;

        info!(tool = %chosen, tool_input = %output.tool_input, "step: tool produced result");
        Ok(Envelope::success(
            prompt,
            chosen,
            output.tool_input,
            output.response,
        ))
    }
}
