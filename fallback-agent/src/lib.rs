//! # fallback-agent
//!
//! Local rule-based responder used when the remote agent service is
//! unreachable. A prompt goes through the intent classifier (first matching
//! rule wins), then the matching tool executor extracts arguments and produces
//! a payload; the pipeline wraps everything in a response [`Envelope`].
//!
//! [`Envelope`]: agent_core::Envelope

pub mod classifier;
pub mod pipeline;
pub mod tools;

pub use classifier::classify;
pub use pipeline::MockAgent;
pub use tools::{CalculatorTool, MemoryReadTool, MemorySaveTool, Tool, ToolOutput};
