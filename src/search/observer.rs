use crate::search::types::ExpansionEvent;

/// Caller-supplied hook observing each completed iteration of a search
///
/// Purely observational: implementations cannot influence the search.
/// The event carries the iteration number, the node expanded, and
/// snapshots of the frontier and explored sets, enough to reproduce a
/// step-by-step trace in whatever format the caller wants.
///
/// Any `FnMut(&ExpansionEvent)` closure is an observer:
///
/// ```
/// use frontier_search::{find_path, Graph, SearchOptions};
///
/// let mut graph = Graph::with_nodes(2);
/// graph.add_edge(0, 1, 1.0).unwrap();
///
/// let mut trace = Vec::new();
/// let mut observer = |event: &frontier_search::ExpansionEvent| {
///     trace.push((event.iteration, event.node));
/// };
/// find_path(&graph, 0, 1, &SearchOptions::default(), Some(&mut observer)).unwrap();
/// assert_eq!(trace.first(), Some(&(1, 0)));
/// ```
pub trait SearchObserver {
    fn on_expand(&mut self, event: &ExpansionEvent);
}

impl<F: FnMut(&ExpansionEvent)> SearchObserver for F {
    fn on_expand(&mut self, event: &ExpansionEvent) {
        self(event)
    }
}

/// Observer that records every event, mainly for tests and diagnostics
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub events: Vec<ExpansionEvent>,
}

impl SearchObserver for RecordingObserver {
    fn on_expand(&mut self, event: &ExpansionEvent) {
        self.events.push(event.clone());
    }
}
