//! Core types: tool identifiers, tool payloads, and the response envelope.

use serde::{Deserialize, Serialize};

/// Identifier of a local tool. Closed set; no dynamic registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolId {
    Calculator,
    MemorySave,
    MemoryRead,
}

impl ToolId {
    /// Wire name of the tool, as it appears in the `chosen_tool` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolId::Calculator => "calculator",
            ToolId::MemorySave => "memory_save",
            ToolId::MemoryRead => "memory_read",
        }
    }
}

impl std::fmt::Display for ToolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `status` value reported by a successful memory save.
pub const SAVED_STATUS: &str = "saved";

/// Error text of the failure envelope when no tool matches the prompt.
pub const NO_TOOL_MESSAGE: &str = "I do not have a tool for that.";

/// Tool-specific payload carried in the `response` field of a success envelope.
///
/// Untagged: each variant has a distinct field set on the wire. `Saved` must
/// stay ahead of `Recall` because a saved payload also contains `key` and `value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolResponse {
    /// Calculator result.
    Calculation { result: i64 },
    /// Memory save acknowledgement.
    Saved {
        status: String,
        key: String,
        value: String,
    },
    /// Memory read result. `value` is `null` when the key has never been saved.
    Recall {
        key: String,
        value: Option<String>,
    },
}

/// Response envelope: the output contract of the pipeline.
///
/// Exactly one of the two shapes is produced per invocation; they are never
/// mixed. The same shape is returned by the remote agent service, so a local
/// reply is a drop-in replacement for a remote one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Envelope {
    Success {
        original_prompt: String,
        chosen_tool: ToolId,
        tool_input: String,
        response: ToolResponse,
    },
    Failure {
        error: String,
    },
}

impl Envelope {
    /// Builds a success envelope for a tool run.
    pub fn success(
        original_prompt: impl Into<String>,
        chosen_tool: ToolId,
        tool_input: impl Into<String>,
        response: ToolResponse,
    ) -> Self {
        Envelope::Success {
            original_prompt: original_prompt.into(),
            chosen_tool,
            tool_input: tool_input.into(),
            response,
        }
    }

    /// Builds a failure envelope with the given error text.
    pub fn failure(error: impl Into<String>) -> Self {
        Envelope::Failure {
            error: error.into(),
        }
    }

    /// The failure envelope for prompts no tool can handle.
    pub fn no_tool() -> Self {
        Self::failure(NO_TOOL_MESSAGE)
    }

    /// True if this is the success shape.
    pub fn is_success(&self) -> bool {
        matches!(self, Envelope::Success { .. })
    }
}
