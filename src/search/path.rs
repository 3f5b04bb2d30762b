//! Path reconstruction from predecessor pointers

use crate::error::{Result, SearchError};

/// Walk predecessor pointers from `goal` back to `start` and return the
/// path in start-to-goal order.
///
/// `parent[start]` is the root sentinel (points at `start` itself). The
/// step counter is a defensive guard: a walk longer than the node count
/// means the parent map contains a cycle, which the search invariants
/// rule out, so it surfaces as an internal-consistency error rather than
/// looping forever.
pub(crate) fn reconstruct_path(
    start: usize,
    goal: usize,
    parent: &[Option<usize>],
) -> Result<Vec<usize>> {
    let mut path = vec![goal];
    let mut current = goal;
    let mut steps = 0;

    while current != start {
        let Some(pred) = parent[current] else {
            return Err(SearchError::CorruptParentMap { node: current });
        };
        current = pred;
        path.push(current);

        steps += 1;
        if steps > parent.len() {
            return Err(SearchError::CorruptParentMap { node: current });
        }
    }

    path.reverse();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconstruct_chain() {
        // 0 -> 2 -> 1 -> 3
        let parent = vec![Some(0), Some(2), Some(0), Some(1)];
        assert_eq!(reconstruct_path(0, 3, &parent).unwrap(), vec![0, 2, 1, 3]);
    }

    #[test]
    fn test_reconstruct_single_node() {
        let parent = vec![Some(0)];
        assert_eq!(reconstruct_path(0, 0, &parent).unwrap(), vec![0]);
    }

    #[test]
    fn test_reconstruct_missing_pointer() {
        let parent = vec![Some(0), None, Some(1)];
        assert_eq!(
            reconstruct_path(0, 2, &parent).unwrap_err(),
            SearchError::CorruptParentMap { node: 1 }
        );
    }

    #[test]
    fn test_reconstruct_detects_cycle() {
        // 1 and 2 point at each other; start is unreachable from 2
        let parent = vec![Some(0), Some(2), Some(1)];
        assert!(matches!(
            reconstruct_path(0, 2, &parent),
            Err(SearchError::CorruptParentMap { .. })
        ));
    }
}
