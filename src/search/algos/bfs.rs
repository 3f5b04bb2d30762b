use crate::graph::GraphProvider;
use crate::search::algos::SearchRun;
use crate::search::frontier::FifoFrontier;
use crate::search::observer::SearchObserver;
use crate::search::types::{ExpansionEvent, PathCost, SearchOptions};

/// Breadth-first search: FIFO frontier, goal test on generation
///
/// The goal test fires when a neighbor is generated, so the search stops
/// the first time the goal is discovered as a child, before it would ever
/// be expanded. First discovery also fixes a node's parent permanently;
/// there is no relaxation. On an unweighted graph (every edge cost 1.0)
/// the returned path has the fewest edges of any start-goal path.
pub(crate) fn bfs_search(
    provider: &dyn GraphProvider,
    start: usize,
    goal: usize,
    opts: &SearchOptions,
    mut observer: Option<&mut dyn SearchObserver>,
) -> SearchRun {
    let node_count = provider.node_count();
    let mut frontier = FifoFrontier::new(node_count);
    let mut closed = vec![false; node_count];
    let mut explored_order: Vec<usize> = Vec::new();
    let mut parent: Vec<Option<usize>> = vec![None; node_count];

    parent[start] = Some(start);
    frontier.push(start, PathCost::ZERO);

    let mut expansions = 0;
    while let Some((node, cost)) = frontier.pop() {
        if opts.max_expansions.is_some_and(|max| expansions >= max) {
            tracing::debug!(expansions, "expansion budget exhausted");
            return SearchRun::not_found(parent, expansions, true);
        }

        closed[node] = true;
        explored_order.push(node);
        expansions += 1;

        for edge in provider.outbound_edges(node) {
            let neighbor = edge.to;
            if closed[neighbor] || frontier.contains(neighbor) {
                continue;
            }

            parent[neighbor] = Some(node);
            let next_cost = cost + PathCost::new(edge.cost);

            if neighbor == goal {
                tracing::debug!(expansions, "goal generated");
                return SearchRun {
                    found: true,
                    parent,
                    goal_cost: next_cost,
                    expansions,
                    truncated: false,
                };
            }

            frontier.push(neighbor, next_cost);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;
    use crate::graph::Graph;
    use crate::search::observer::RecordingObserver;
    use crate::search::types::Mode;
    use crate::search::find_path;

    /// 6-node cyclic graph from the reference breadth-first example,
    /// all edges cost 1.0
    fn reference_graph() -> Graph {
        let mut graph = Graph::with_nodes(6);
        for (a, b) in [(0, 1), (0, 2), (1, 3), (1, 4), (2, 4), (2, 5), (3, 4), (4, 5)] {
            graph.add_undirected_edge(a, b, 1.0).unwrap();
        }
        graph
    }

    fn unweighted() -> SearchOptions {
        SearchOptions {
            mode: Mode::Unweighted,
            ..Default::default()
        }
    }

    #[test]
    fn test_finds_shallowest_path() {
        let graph = reference_graph();
        let result = find_path(&graph, 0, 5, &unweighted(), None).unwrap();

        assert!(result.found);
        assert_eq!(result.path, vec![0, 2, 5]);
        assert_eq!(result.path_length, 2);
        assert_eq!(result.total_cost, PathCost::new(2.0));
        assert!(!result.truncated);
    }

    #[test]
    fn test_path_edges_all_exist() {
        let graph = reference_graph();
        let result = find_path(&graph, 0, 5, &unweighted(), None).unwrap();

        for pair in result.path.windows(2) {
            assert!(graph.edge_cost(pair[0], pair[1]).is_some());
        }
        assert_eq!(result.path.first(), Some(&0));
        assert_eq!(result.path.last(), Some(&5));
    }

    #[test]
    fn test_goal_test_on_generation_ignores_weights() {
        // Direct edge is expensive, detour is cheap; breadth-first stops
        // at the first discovery of the goal anyway.
        let mut graph = Graph::with_nodes(3);
        graph.add_edge(0, 2, 10.0).unwrap();
        graph.add_edge(0, 1, 1.0).unwrap();
        graph.add_edge(1, 2, 1.0).unwrap();

        let result = find_path(&graph, 0, 2, &unweighted(), None).unwrap();
        assert_eq!(result.path, vec![0, 2]);
        assert_eq!(result.total_cost, PathCost::new(10.0));

        let cheap = find_path(&graph, 0, 2, &SearchOptions::default(), None).unwrap();
        assert_eq!(cheap.path, vec![0, 1, 2]);
        assert_eq!(cheap.total_cost, PathCost::new(2.0));
    }

    #[test]
    fn test_start_equals_goal() {
        let graph = reference_graph();
        let result = find_path(&graph, 3, 3, &unweighted(), None).unwrap();

        assert!(result.found);
        assert_eq!(result.path, vec![3]);
        assert_eq!(result.path_length, 0);
        assert_eq!(result.total_cost, PathCost::ZERO);
    }

    #[test]
    fn test_unreachable_goal() {
        let mut graph = Graph::with_nodes(4);
        graph.add_undirected_edge(0, 1, 1.0).unwrap();
        graph.add_undirected_edge(2, 3, 1.0).unwrap();

        let result = find_path(&graph, 0, 3, &unweighted(), None).unwrap();
        assert!(!result.found);
        assert!(result.path.is_empty());
        assert!(!result.truncated);
    }

    #[test]
    fn test_respects_edge_direction() {
        let mut graph = Graph::with_nodes(2);
        graph.add_edge(0, 1, 1.0).unwrap();

        assert!(find_path(&graph, 0, 1, &unweighted(), None).unwrap().found);
        assert!(!find_path(&graph, 1, 0, &unweighted(), None).unwrap().found);
    }

    #[test]
    fn test_invalid_start_rejected() {
        let graph = reference_graph();
        assert_eq!(
            find_path(&graph, 6, 0, &unweighted(), None).unwrap_err(),
            SearchError::InvalidNode {
                node: 6,
                node_count: 6
            }
        );
        assert!(find_path(&graph, 0, 17, &unweighted(), None).is_err());
    }

    #[test]
    fn test_deterministic_across_runs() {
        let graph = reference_graph();
        let first = find_path(&graph, 0, 5, &unweighted(), None).unwrap();
        let second = find_path(&graph, 0, 5, &unweighted(), None).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_observer_sees_iterations() {
        let graph = reference_graph();
        let mut observer = RecordingObserver::default();
        find_path(&graph, 0, 5, &unweighted(), Some(&mut observer)).unwrap();

        // Expansions: node 0, then node 1; node 2's expansion generates the
        // goal and terminates mid-iteration, so no event is emitted for it.
        assert_eq!(observer.events.len(), 2);
        assert_eq!(observer.events[0].iteration, 1);
        assert_eq!(observer.events[0].node, 0);
        assert_eq!(observer.events[0].explored, vec![0]);
        assert_eq!(
            observer.events[0].frontier,
            vec![(1, PathCost::new(1.0)), (2, PathCost::new(1.0))]
        );
        assert_eq!(observer.events[1].node, 1);
        assert_eq!(observer.events[1].explored, vec![0, 1]);
    }

    #[test]
    fn test_expansion_budget_truncates() {
        let graph = reference_graph();
        let opts = SearchOptions {
            mode: Mode::Unweighted,
            max_expansions: Some(1),
        };

        let result = find_path(&graph, 0, 5, &opts, None).unwrap();
        assert!(!result.found);
        assert!(result.truncated);
        assert_eq!(result.expansions, 1);
    }
}
