//! # memory-store
//!
//! Key/value memory storage for the agent's save/read tools.
//!
//! The [`MemoryStore`] trait is the storage interface; [`InMemoryStore`] is the
//! process-lifetime implementation. The store is owned by the caller and injected
//! into whatever needs it; there is no global instance.

pub mod inmemory;
pub mod store;

pub use inmemory::InMemoryStore;
pub use store::MemoryStore;
