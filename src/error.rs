//! Error types for frontier-search
//!
//! An unreachable goal is not an error: searches report it on the result
//! value (`found: false`). Errors cover invalid inputs and the defensive
//! internal-consistency check in path reconstruction.

use thiserror::Error;

/// Errors that can occur during graph construction or search
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("invalid node id {node} (graph has {node_count} nodes)")]
    InvalidNode { node: usize, node_count: usize },

    #[error("adjacency matrix row {row} has {len} entries (expected {expected})")]
    MalformedMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("edge cost {cost} on {from} -> {to} is not a finite number")]
    NonFiniteEdgeCost { from: usize, to: usize, cost: f64 },

    #[error("negative edge cost {cost} on {from} -> {to}: cost-based search requires non-negative costs")]
    NegativeEdgeCost { from: usize, to: usize, cost: f64 },

    /// Defensive check only: the parent map produced by a search walked back
    /// from the goal without reaching the start. Must never occur when the
    /// frontier/explored invariants hold.
    #[error("parent map corrupted while reconstructing path at node {node}")]
    CorruptParentMap { node: usize },
}

impl SearchError {
    /// Create an error for a node id outside the graph
    pub fn invalid_node(node: usize, node_count: usize) -> Self {
        SearchError::InvalidNode { node, node_count }
    }
}

/// Result type alias for frontier-search operations
pub type Result<T> = std::result::Result<T, SearchError>;
