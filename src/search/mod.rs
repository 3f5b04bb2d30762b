//! Frontier-based path search
//!
//! Single entry point over two traversal disciplines:
//! - `Mode::Unweighted`: breadth-first, shallowest path, goal test when a
//!   neighbor is generated
//! - `Mode::CostBased`: uniform-cost, cheapest path, goal test when the
//!   goal is popped as the cheapest known node
//!
//! An unreachable goal is reported on the result (`found: false`), not as
//! an error.

pub(crate) mod algos;
pub(crate) mod frontier;
pub mod observer;
pub mod path;
pub mod types;

pub use observer::{RecordingObserver, SearchObserver};
pub use types::{ExpansionEvent, Mode, PathCost, PathResult, SearchOptions};

use crate::error::{Result, SearchError};
use crate::graph::GraphProvider;
use self::algos::{bfs::bfs_search, ucs::ucs_search};

/// Find a path from `start` to `goal`
///
/// Validates the inputs, runs the discipline selected by `opts.mode`, and
/// reconstructs the path from the predecessor pointers. Under
/// `Mode::CostBased` every edge cost must be non-negative; the graph is
/// rejected up front rather than producing a plausible-looking wrong
/// answer. The observer, when given, is invoked once per completed
/// iteration of the main loop.
///
/// Deterministic: for a fixed provider, endpoints, and options, repeated
/// invocations return the same result. Cost-based ties are broken by
/// insertion order (first inserted wins).
#[tracing::instrument(skip(provider, observer, opts), fields(mode = ?opts.mode, max_expansions = ?opts.max_expansions))]
pub fn find_path(
    provider: &dyn GraphProvider,
    start: usize,
    goal: usize,
    opts: &SearchOptions,
    observer: Option<&mut dyn SearchObserver>,
) -> Result<PathResult> {
    let node_count = provider.node_count();
    if start >= node_count {
        return Err(SearchError::invalid_node(start, node_count));
    }
    if goal >= node_count {
        return Err(SearchError::invalid_node(goal, node_count));
    }
    validate_edges(provider, opts.mode)?;

    if start == goal {
        return Ok(PathResult {
            start,
            goal,
            mode: opts.mode,
            found: true,
            path: vec![start],
            total_cost: PathCost::ZERO,
            path_length: 0,
            expansions: 0,
            truncated: false,
        });
    }

    let run = match opts.mode {
        Mode::Unweighted => bfs_search(provider, start, goal, opts, observer),
        Mode::CostBased => ucs_search(provider, start, goal, opts, observer),
    };

    if !run.found {
        tracing::debug!(
            expansions = run.expansions,
            truncated = run.truncated,
            "no path found"
        );
        return Ok(PathResult::not_found(
            start,
            goal,
            opts.mode,
            run.expansions,
            run.truncated,
        ));
    }

    let path = path::reconstruct_path(start, goal, &run.parent)?;
    Ok(PathResult {
        start,
        goal,
        mode: opts.mode,
        found: true,
        path_length: path.len() - 1,
        path,
        total_cost: run.goal_cost,
        expansions: run.expansions,
        truncated: false,
    })
}

/// Check every edge the provider exposes before searching
///
/// Neighbor ids must be in range for both modes. Cost-based search
/// additionally requires finite, non-negative costs; negative costs break
/// the optimality argument, so they are an error, not undefined behavior.
fn validate_edges(provider: &dyn GraphProvider, mode: Mode) -> Result<()> {
    let node_count = provider.node_count();
    for node in 0..node_count {
        for edge in provider.outbound_edges(node) {
            if edge.to >= node_count {
                return Err(SearchError::invalid_node(edge.to, node_count));
            }
            if mode == Mode::CostBased {
                if !edge.cost.is_finite() {
                    return Err(SearchError::NonFiniteEdgeCost {
                        from: edge.from,
                        to: edge.to,
                        cost: edge.cost,
                    });
                }
                if edge.cost < 0.0 {
                    return Err(SearchError::NegativeEdgeCost {
                        from: edge.from,
                        to: edge.to,
                        cost: edge.cost,
                    });
                }
            }
        }
    }
    Ok(())
}
