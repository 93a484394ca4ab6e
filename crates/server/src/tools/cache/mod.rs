//! Cache-related MCP tools.
//!
//! This module provides tools for managing the in-memory transcript cache.

pub mod purge;

pub use purge::{CachePurgeParams, purge_impl};
