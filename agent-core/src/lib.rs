//! # agent-core
//!
//! Core types and errors for the agent: [`Envelope`], [`ToolId`], tool payloads,
//! error enums, and tracing initialization. Transport-agnostic; used by
//! fallback-agent, agent-client, and agent-cli.

pub mod error;
pub mod logger;
pub mod types;

pub use error::{Result, ToolError};
pub use logger::init_tracing;
pub use types::{Envelope, ToolId, ToolResponse, NO_TOOL_MESSAGE, SAVED_STATUS};
