//! Graph data model for search
//!
//! Provides the inputs a search runs over:
//! - Adjacency-list graph storage with directed, weighted edges
//! - Graph provider trait for pluggable adjacency sources

pub mod adjacency;
pub mod provider;

pub use adjacency::{Edge, Graph};
pub use provider::GraphProvider;
