use serde::Serialize;

/// Accumulated path cost from the start node
///
/// Wraps the running `g` value a search carries per node. Costs come from
/// edge weights, so any finite non-negative real is representable; for
/// unweighted graphs every edge contributes 1.0 and the cost equals the
/// hop count.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct PathCost(f64);

impl PathCost {
    pub const ZERO: PathCost = PathCost(0.0);

    pub fn new(cost: f64) -> Self {
        PathCost(cost)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for PathCost {
    fn default() -> Self {
        Self::ZERO
    }
}

impl std::ops::Add for PathCost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        PathCost(self.0 + other.0)
    }
}

impl From<u32> for PathCost {
    fn from(hops: u32) -> Self {
        PathCost(f64::from(hops))
    }
}

/// Traversal discipline for a search
///
/// The two modes differ in pop policy and in when the goal test fires:
/// unweighted search tests the goal when a neighbor is generated,
/// cost-based search only when the goal is popped as the cheapest known
/// node. The asymmetry is deliberate; unifying it would change observable
/// results on weighted graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// FIFO frontier, goal test on generation, no relaxation
    Unweighted,
    /// Minimum-g frontier, goal test on pop, relaxation of frontier entries
    #[default]
    CostBased,
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unweighted" => Ok(Mode::Unweighted),
            "cost" | "cost-based" => Ok(Mode::CostBased),
            other => Err(format!(
                "unknown mode '{}' (expected: unweighted, cost-based)",
                other
            )),
        }
    }
}

/// Options for a search invocation
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Traversal discipline
    pub mode: Mode,
    /// Maximum nodes to expand before giving up (None = no limit)
    ///
    /// When the budget runs out the search stops and reports
    /// `found: false, truncated: true`.
    pub max_expansions: Option<usize>,
}

/// Result of a search invocation
///
/// `found: false` with `truncated: false` means the frontier was exhausted:
/// no path exists. With `truncated: true` the expansion budget ran out
/// first and reachability is undetermined.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    pub start: usize,
    pub goal: usize,
    pub mode: Mode,
    pub found: bool,
    /// Node ids from start to goal (empty when not found)
    pub path: Vec<usize>,
    pub total_cost: PathCost,
    /// Number of edges in the path
    pub path_length: usize,
    /// Nodes expanded (popped and had neighbors examined)
    pub expansions: usize,
    pub truncated: bool,
}

impl PathResult {
    pub(crate) fn not_found(
        start: usize,
        goal: usize,
        mode: Mode,
        expansions: usize,
        truncated: bool,
    ) -> Self {
        PathResult {
            start,
            goal,
            mode,
            found: false,
            path: Vec::new(),
            total_cost: PathCost::ZERO,
            path_length: 0,
            expansions,
            truncated,
        }
    }
}

/// One completed iteration of the main search loop, for observers
///
/// Snapshots are taken after the popped node has been expanded: `explored`
/// lists expanded nodes in expansion order (ending with `node`), `frontier`
/// lists live frontier entries in ascending node-id order with their
/// current `g` values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpansionEvent {
    /// 1-based iteration number
    pub iteration: usize,
    /// The node expanded this iteration
    pub node: usize,
    pub frontier: Vec<(usize, PathCost)>,
    pub explored: Vec<usize>,
}
