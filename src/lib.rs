//! Frontier Search Library
//!
//! Frontier-based graph search over weighted or unweighted directed graphs.
//! Provides breadth-first (shallowest path) and uniform-cost (cheapest path)
//! search behind a single entry point, with a pluggable graph source and an
//! optional per-iteration observer for step tracing.

pub mod error;
pub mod graph;
pub mod logging;
pub mod search;

pub use error::{Result, SearchError};
pub use graph::{Edge, Graph, GraphProvider};
pub use search::{
    find_path, ExpansionEvent, Mode, PathCost, PathResult, SearchObserver, SearchOptions,
};
