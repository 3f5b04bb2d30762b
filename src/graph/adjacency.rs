use crate::error::{Result, SearchError};
use serde::Serialize;

/// A directed, weighted edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub cost: f64,
}

/// Adjacency-list graph with dense integer node ids `0..N`
///
/// Edge absence is distinct from a zero-cost edge: `edge_cost` returns
/// `None` for the former and `Some(0.0)` for the latter. Capacity is
/// derived from the node count given at construction; out-of-range ids
/// are rejected rather than written through.
///
/// Costs may be negative at construction time (breadth-first search does
/// not require non-negativity); cost-based search rejects negative costs
/// at its own entry point.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Create a graph with `node_count` nodes and no edges
    pub fn with_nodes(node_count: usize) -> Self {
        Graph {
            adjacency: vec![Vec::new(); node_count],
        }
    }

    /// Build a graph from an adjacency matrix, `None` marking edge absence
    ///
    /// Row `i` lists the cost from node `i` to each node `j`. Every row
    /// must have one entry per node.
    pub fn from_matrix(matrix: &[Vec<Option<f64>>]) -> Result<Self> {
        let node_count = matrix.len();
        let mut graph = Graph::with_nodes(node_count);

        for (from, row) in matrix.iter().enumerate() {
            if row.len() != node_count {
                return Err(SearchError::MalformedMatrix {
                    row: from,
                    len: row.len(),
                    expected: node_count,
                });
            }
            for (to, cost) in row.iter().enumerate() {
                if let Some(cost) = cost {
                    graph.add_edge(from, to, *cost)?;
                }
            }
        }

        Ok(graph)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn contains_node(&self, node: usize) -> bool {
        node < self.adjacency.len()
    }

    /// Add a directed edge, replacing the cost of an existing one
    ///
    /// Rejects out-of-range endpoints and non-finite costs.
    pub fn add_edge(&mut self, from: usize, to: usize, cost: f64) -> Result<()> {
        let node_count = self.node_count();
        if !self.contains_node(from) {
            return Err(SearchError::invalid_node(from, node_count));
        }
        if !self.contains_node(to) {
            return Err(SearchError::invalid_node(to, node_count));
        }
        if !cost.is_finite() {
            return Err(SearchError::NonFiniteEdgeCost { from, to, cost });
        }

        let edges = &mut self.adjacency[from];
        if let Some(existing) = edges.iter_mut().find(|e| e.to == to) {
            existing.cost = cost;
        } else {
            edges.push(Edge { from, to, cost });
        }

        Ok(())
    }

    /// Add edges in both directions with the same cost
    pub fn add_undirected_edge(&mut self, a: usize, b: usize, cost: f64) -> Result<()> {
        self.add_edge(a, b, cost)?;
        self.add_edge(b, a, cost)
    }

    /// Cost of the directed edge `from -> to`, or `None` if absent
    pub fn edge_cost(&self, from: usize, to: usize) -> Option<f64> {
        self.adjacency
            .get(from)?
            .iter()
            .find(|e| e.to == to)
            .map(|e| e.cost)
    }

    /// Outbound edges of a node, in insertion order
    ///
    /// Out-of-range ids yield no edges; searches validate ids before
    /// reaching here.
    pub fn outbound_edges(&self, node: usize) -> &[Edge] {
        self.adjacency.get(node).map_or(&[], Vec::as_slice)
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_nodes_empty() {
        let graph = Graph::with_nodes(4);
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.contains_node(3));
        assert!(!graph.contains_node(4));
    }

    #[test]
    fn test_add_edge_and_lookup() {
        let mut graph = Graph::with_nodes(3);
        graph.add_edge(0, 1, 2.5).unwrap();
        graph.add_edge(1, 2, 0.0).unwrap();

        assert_eq!(graph.edge_cost(0, 1), Some(2.5));
        // Zero-cost edge is present, not absent
        assert_eq!(graph.edge_cost(1, 2), Some(0.0));
        assert_eq!(graph.edge_cost(0, 2), None);
        assert_eq!(graph.edge_cost(2, 0), None);
    }

    #[test]
    fn test_add_edge_replaces_existing() {
        let mut graph = Graph::with_nodes(2);
        graph.add_edge(0, 1, 1.0).unwrap();
        graph.add_edge(0, 1, 7.0).unwrap();

        assert_eq!(graph.edge_cost(0, 1), Some(7.0));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_add_edge_out_of_range() {
        let mut graph = Graph::with_nodes(2);
        let err = graph.add_edge(0, 2, 1.0).unwrap_err();
        assert_eq!(
            err,
            SearchError::InvalidNode {
                node: 2,
                node_count: 2
            }
        );
    }

    #[test]
    fn test_add_edge_non_finite_cost() {
        let mut graph = Graph::with_nodes(2);
        assert!(matches!(
            graph.add_edge(0, 1, f64::NAN),
            Err(SearchError::NonFiniteEdgeCost { from: 0, to: 1, .. })
        ));
        assert!(matches!(
            graph.add_edge(0, 1, f64::INFINITY),
            Err(SearchError::NonFiniteEdgeCost { .. })
        ));
    }

    #[test]
    fn test_negative_cost_allowed_at_construction() {
        let mut graph = Graph::with_nodes(2);
        graph.add_edge(0, 1, -3.0).unwrap();
        assert_eq!(graph.edge_cost(0, 1), Some(-3.0));
    }

    #[test]
    fn test_add_undirected_edge() {
        let mut graph = Graph::with_nodes(2);
        graph.add_undirected_edge(0, 1, 4.0).unwrap();
        assert_eq!(graph.edge_cost(0, 1), Some(4.0));
        assert_eq!(graph.edge_cost(1, 0), Some(4.0));
    }

    #[test]
    fn test_from_matrix() {
        let graph = Graph::from_matrix(&[
            vec![None, Some(2.0), Some(7.0)],
            vec![Some(2.0), None, None],
            vec![Some(7.0), None, None],
        ])
        .unwrap();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_cost(0, 1), Some(2.0));
        assert_eq!(graph.edge_cost(1, 2), None);
    }

    #[test]
    fn test_from_matrix_malformed_row() {
        let err = Graph::from_matrix(&[vec![None, Some(1.0)], vec![None]]).unwrap_err();
        assert_eq!(
            err,
            SearchError::MalformedMatrix {
                row: 1,
                len: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn test_outbound_edges_order_stable() {
        let mut graph = Graph::with_nodes(4);
        graph.add_edge(0, 3, 1.0).unwrap();
        graph.add_edge(0, 1, 1.0).unwrap();
        graph.add_edge(0, 2, 1.0).unwrap();

        let targets: Vec<usize> = graph.outbound_edges(0).iter().map(|e| e.to).collect();
        assert_eq!(targets, vec![3, 1, 2]);
    }
}
