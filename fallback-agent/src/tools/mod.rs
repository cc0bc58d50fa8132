//! Tool executors for the fallback pipeline.
//!
//! Each executor takes the raw prompt its classifier rule matched, extracts
//! structured arguments, and produces a [`ToolResponse`] payload. Only
//! [`MemorySaveTool`] has a side effect (writing to the injected store).

mod calculator;
mod memory_read;
mod memory_save;

pub use calculator::CalculatorTool;
pub use memory_read::MemoryReadTool;
pub use memory_save::MemorySaveTool;

use agent_core::{ToolError, ToolId, ToolResponse};
use async_trait::async_trait;

/// Result of a successful tool run: the extracted input string and the payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolOutput {
    pub tool_input: String,
    pub response: ToolResponse,
}

/// A single tool executor.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The identifier this executor answers for.
    fn id(&self) -> ToolId;

    /// Extracts arguments from `prompt` and produces the payload.
    ///
    /// Returns `Ok(None)` when the tool's own argument pattern does not match
    /// even though the classifier rule did; the pipeline treats that the same
    /// as an unsupported intent.
    async fn run(&self, prompt: &str) -> Result<Option<ToolOutput>, ToolError>;
}
