//! # agent-client
//!
//! Client side of the agent: [`RemoteAgent`] is the seam to the remote agent
//! service, [`HttpRemoteAgent`] implements it over HTTP, and [`AgentService`]
//! composes a remote with the local fallback pipeline: try the remote once,
//! answer locally when it is unreachable.

pub mod config;
pub mod remote;
pub mod service;

pub use config::ClientConfig;
pub use remote::{HttpRemoteAgent, RemoteAgent};
pub use service::AgentService;
