//! Breadth-first traversal over implicit graphs.

use std::collections::VecDeque;
use std::hash::Hash;

use rustc_hash::FxHashSet;

/// Shortest distance (in edges) from `start` to any state satisfying
/// `is_goal`, or `None` if the frontier empties first.
///
/// `neighbors` yields the states adjacent to a given state; traversability
/// filtering belongs inside it. States are marked visited at discovery time
/// so no state is enqueued twice, and because all states come off the FIFO
/// queue in non-decreasing distance order, the first goal hit is optimal.
/// The start state itself may satisfy the goal (distance 0).
pub fn bfs_distance<S, I, FN, FG>(start: S, mut neighbors: FN, mut is_goal: FG) -> Option<u64>
where
    S: Eq + Hash + Clone,
    FN: FnMut(&S) -> I,
    I: IntoIterator<Item = S>,
    FG: FnMut(&S) -> bool,
{
    if is_goal(&start) {
        return Some(0);
    }

    let mut visited = FxHashSet::default();
    visited.insert(start.clone());
    let mut queue = VecDeque::new();
    queue.push_back((start, 0u64));

    while let Some((state, dist)) = queue.pop_front() {
        for next in neighbors(&state) {
            if is_goal(&next) {
                return Some(dist + 1);
            }
            if visited.insert(next.clone()) {
                queue.push_back((next, dist + 1));
            }
        }
    }

    None
}

/// The set of states reachable from `start`, including `start` itself.
///
/// Same traversal as [`bfs_distance`] without a goal; callers that need to
/// count boundary hits do so inside `neighbors` before filtering them out.
pub fn flood_fill<S, I, FN>(start: S, mut neighbors: FN) -> FxHashSet<S>
where
    S: Eq + Hash + Clone,
    FN: FnMut(&S) -> I,
    I: IntoIterator<Item = S>,
{
    let mut visited = FxHashSet::default();
    visited.insert(start.clone());
    let mut queue = VecDeque::new();
    queue.push_back(start);

    while let Some(state) = queue.pop_front() {
        for next in neighbors(&state) {
            if visited.insert(next.clone()) {
                queue.push_back(next);
            }
        }
    }

    visited
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_graph(n: u32) -> impl Fn(&u32) -> Vec<u32> {
        move |&s| {
            let mut next = Vec::new();
            if s > 0 {
                next.push(s - 1);
            }
            if s + 1 < n {
                next.push(s + 1);
            }
            next
        }
    }

    #[test]
    fn start_satisfying_goal_is_distance_zero() {
        assert_eq!(bfs_distance(7u32, line_graph(10), |&s| s == 7), Some(0));
    }

    #[test]
    fn line_distance() {
        assert_eq!(bfs_distance(0u32, line_graph(10), |&s| s == 9), Some(9));
    }

    #[test]
    fn unreachable_goal_returns_none() {
        assert_eq!(bfs_distance(0u32, line_graph(10), |&s| s == 42), None);
    }

    #[test]
    fn flood_fill_covers_component() {
        // Two components: 0..5 and 10..15.
        let neighbors = |&s: &u32| {
            let mut next = Vec::new();
            for cand in [s.wrapping_sub(1), s + 1] {
                if (cand < 5 && s < 5) || ((10..15).contains(&cand) && (10..15).contains(&s)) {
                    next.push(cand);
                }
            }
            next
        };
        let reached = flood_fill(0u32, neighbors);
        assert_eq!(reached.len(), 5);
        assert!(reached.contains(&4));
        assert!(!reached.contains(&10));
    }
}
