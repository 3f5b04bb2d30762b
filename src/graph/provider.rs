use crate::graph::adjacency::{Edge, Graph};

/// Trait for providing graph adjacency to the search algorithms
///
/// Node identifiers are dense integers `0..node_count()`. Implementations
/// must return edges in a stable order for a given graph state; search
/// results are only deterministic if the provider is.
pub trait GraphProvider {
    fn node_count(&self) -> usize;
    fn outbound_edges(&self, node: usize) -> Vec<Edge>;
}

impl GraphProvider for Graph {
    fn node_count(&self) -> usize {
        self.node_count()
    }

    fn outbound_edges(&self, node: usize) -> Vec<Edge> {
        self.outbound_edges(node).to_vec()
    }
}
