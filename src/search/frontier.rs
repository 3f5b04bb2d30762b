//! Frontier implementations for the two traversal disciplines
//!
//! Both frontiers maintain the same invariant: at most one live entry per
//! node id. Membership and cost queries are O(1) through a side table
//! sized by the graph's node count, so the algorithms never scan for
//! membership.

use crate::search::types::PathCost;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

/// First-in-first-out frontier for unweighted search
#[derive(Debug)]
pub(crate) struct FifoFrontier {
    queue: VecDeque<(usize, PathCost)>,
    member: Vec<bool>,
}

impl FifoFrontier {
    pub(crate) fn new(node_count: usize) -> Self {
        FifoFrontier {
            queue: VecDeque::new(),
            member: vec![false; node_count],
        }
    }

    pub(crate) fn push(&mut self, node: usize, cost: PathCost) {
        debug_assert!(!self.member[node], "node {} already in frontier", node);
        self.member[node] = true;
        self.queue.push_back((node, cost));
    }

    pub(crate) fn pop(&mut self) -> Option<(usize, PathCost)> {
        let (node, cost) = self.queue.pop_front()?;
        self.member[node] = false;
        Some((node, cost))
    }

    pub(crate) fn contains(&self, node: usize) -> bool {
        self.member[node]
    }

    /// Live entries in ascending node-id order
    pub(crate) fn snapshot(&self) -> Vec<(usize, PathCost)> {
        let mut entries: Vec<(usize, PathCost)> = self.queue.iter().copied().collect();
        entries.sort_by_key(|(node, _)| *node);
        entries
    }
}

/// Heap entry ordered by accumulated cost, then insertion order
///
/// `seq` is assigned when a node first enters the frontier and survives
/// relaxation, so equal-cost ties always resolve to the first-inserted
/// node regardless of later cost updates.
#[derive(Debug, Clone)]
struct HeapEntry {
    node: usize,
    cost: PathCost,
    seq: u64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Costs are validated finite before any entry is created
        self.cost
            .value()
            .partial_cmp(&other.cost.value())
            .unwrap()
            .then(self.seq.cmp(&other.seq))
            .then(self.node.cmp(&other.node))
    }
}

#[derive(Debug, Clone, Copy)]
struct LiveEntry {
    cost: PathCost,
    seq: u64,
}

/// Minimum-cost frontier for cost-based search
///
/// Relaxation updates the live cost table and pushes a fresh heap entry;
/// superseded entries stay in the heap and are discarded on pop. The live
/// table is the source of truth for membership and current cost.
#[derive(Debug)]
pub(crate) struct CostFrontier {
    heap: BinaryHeap<Reverse<HeapEntry>>,
    live: Vec<Option<LiveEntry>>,
    next_seq: u64,
}

impl CostFrontier {
    pub(crate) fn new(node_count: usize) -> Self {
        CostFrontier {
            heap: BinaryHeap::new(),
            live: vec![None; node_count],
            next_seq: 0,
        }
    }

    pub(crate) fn insert(&mut self, node: usize, cost: PathCost) {
        debug_assert!(self.live[node].is_none(), "node {} already in frontier", node);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.live[node] = Some(LiveEntry { cost, seq });
        self.heap.push(Reverse(HeapEntry { node, cost, seq }));
    }

    /// Lower a live entry's cost; returns false unless strictly cheaper
    pub(crate) fn relax(&mut self, node: usize, cost: PathCost) -> bool {
        match &mut self.live[node] {
            Some(entry) if cost < entry.cost => {
                entry.cost = cost;
                let seq = entry.seq;
                self.heap.push(Reverse(HeapEntry { node, cost, seq }));
                true
            }
            _ => false,
        }
    }

    pub(crate) fn pop(&mut self) -> Option<(usize, PathCost)> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            match self.live[entry.node] {
                Some(live) if live.seq == entry.seq && live.cost == entry.cost => {
                    self.live[entry.node] = None;
                    return Some((entry.node, entry.cost));
                }
                // Superseded by relaxation or already popped
                _ => continue,
            }
        }
        None
    }

    pub(crate) fn contains(&self, node: usize) -> bool {
        self.live[node].is_some()
    }

    /// Live entries in ascending node-id order
    pub(crate) fn snapshot(&self) -> Vec<(usize, PathCost)> {
        self.live
            .iter()
            .enumerate()
            .filter_map(|(node, entry)| entry.map(|e| (node, e.cost)))
            .collect()
    }
}
