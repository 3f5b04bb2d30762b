use crate::graph::GraphProvider;
use crate::search::algos::SearchRun;
use crate::search::frontier::CostFrontier;
use crate::search::observer::SearchObserver;
use crate::search::types::{ExpansionEvent, PathCost, SearchOptions};

/// Uniform-cost search: minimum-g frontier, goal test on pop
///
/// The goal only terminates the search when it is popped as the cheapest
/// known frontier entry, which is what makes the returned cost optimal
/// for non-negative edge costs. Discovering the goal as a neighbor does
/// not stop anything. While a node sits in the frontier a cheaper route
/// to it replaces its cost and parent (relaxation); once expanded it is
/// closed and never revisited.
pub(crate) fn ucs_search(
    provider: &dyn GraphProvider,
    start: usize,
    goal: usize,
    opts: &SearchOptions,
    mut observer: Option<&mut dyn SearchObserver>,
) -> SearchRun {
    let node_count = provider.node_count();
    let mut frontier = CostFrontier::new(node_count);
    let mut closed = vec![false; node_count];
    let mut explored_order: Vec<usize> = Vec::new();
    let mut parent: Vec<Option<usize>> = vec![None; node_count];

    parent[start] = Some(start);
    frontier.insert(start, PathCost::ZERO);

    let mut expansions = 0;
    while let Some((node, cost)) = frontier.pop() {
        if node == goal {
            tracing::debug!(expansions, cost = cost.value(), "goal popped");
            return SearchRun {
                found: true,
                parent,
                goal_cost: cost,
                expansions,
                truncated: false,
            };
        }

        if opts.max_expansions.is_some_and(|max| expansions >= max) {
            tracing::debug!(expansions, "expansion budget exhausted");
            return SearchRun::not_found(parent, expansions, true);
        }

        closed[node] = true;
        explored_order.push(node);
        expansions += 1;

        for edge in provider.outbound_edges(node) {
            let neighbor = edge.to;
            // Closed nodes already carry a provably minimal cost
            if closed[neighbor] {
                continue;
            }

            let next_cost = cost + PathCost::new(edge.cost);
            if frontier.contains(neighbor) {
                if frontier.relax(neighbor, next_cost) {
                    parent[neighbor] = Some(node);
                }
            } else {
                parent[neighbor] = Some(node);
                frontier.insert(neighbor, next_cost);
            }
        }

        if let Some(obs) = observer.as_mut() {
            obs.on_expand(&ExpansionEvent {
                iteration: expansions,
                node,
                frontier: frontier.snapshot(),
                explored: explored_order.clone(),
            });
        }
        tracing::trace!(iteration = expansions, node, "expanded node");
    }

    SearchRun::not_found(parent, expansions, false)
}
