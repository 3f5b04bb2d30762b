//! Search algorithm implementations
//!
//! Contains the two traversal disciplines behind `find_path`:
//! - `bfs`: breadth-first search (FIFO frontier, goal test on generation)
//! - `ucs`: uniform-cost search (minimum-g frontier, goal test on pop,
//!   relaxation of frontier entries)

pub(crate) mod bfs;
pub(crate) mod ucs;

use crate::search::types::PathCost;

/// Raw outcome of a traversal, before path reconstruction
pub(crate) struct SearchRun {
    pub(crate) found: bool,
    /// Predecessor pointers; `parent[start]` is the root sentinel
    pub(crate) parent: Vec<Option<usize>>,
    /// Accumulated cost of the goal when found
    pub(crate) goal_cost: PathCost,
    /// Nodes expanded (popped and had neighbors examined)
    pub(crate) expansions: usize,
    /// True when the expansion budget ran out before termination
    pub(crate) truncated: bool,
}

impl SearchRun {
    pub(crate) fn not_found(parent: Vec<Option<usize>>, expansions: usize, truncated: bool) -> Self {
        SearchRun {
            found: false,
            parent,
            goal_cost: PathCost::ZERO,
            expansions,
            truncated,
        }
    }
}
