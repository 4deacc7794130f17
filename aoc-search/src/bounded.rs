//! Bounded state-space searches with memoization and branch-and-bound.

use std::collections::hash_map::Entry;
use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::bitset::BitSet;
use crate::distances::DistanceTable;

/// An objective that can be enabled once: sits at `node` in the distance
/// table and yields `rate` per remaining time unit after being enabled.
#[derive(Debug, Clone, Copy)]
pub struct Objective {
    pub node: usize,
    pub rate: u64,
}

/// Maximizes total yield over sequences of travel-and-enable decisions
/// within a fixed time budget.
///
/// Enabling objective `o` from the current node costs `dist + 1` time units
/// (travel plus the enable action) and immediately banks
/// `rate * remaining_time` of yield. The search runs on an explicit work
/// stack over `(node, time left, enabled set)` states; a memo table records
/// the best accrued yield seen per state, so a revisit that cannot improve
/// is cut off, and a running best with an optimistic upper bound (every
/// remaining objective enabled on the very next time unit) prunes hopeless
/// branches. The bound only skips work, never changes the result. Time
/// strictly decreases along every edge, so the search terminates.
#[derive(Debug)]
pub struct MaxYieldSearch<'a> {
    distances: &'a DistanceTable,
    objectives: &'a [Objective],
}

#[derive(Debug, Clone, Copy)]
struct SearchState {
    node: usize,
    time: u32,
    enabled: BitSet,
    accrued: u64,
}

impl<'a> MaxYieldSearch<'a> {
    pub fn new(distances: &'a DistanceTable, objectives: &'a [Objective]) -> Self {
        debug_assert!(objectives.len() <= 32);
        Self { distances, objectives }
    }

    /// The maximum total yield achievable from `start` with `budget` time
    /// units, enabling only objectives whose index is in `allowed`.
    pub fn run(&self, start: usize, budget: u32, allowed: BitSet) -> u64 {
        let mut memo: FxHashMap<(usize, u32, BitSet), u64> = FxHashMap::default();
        let mut stack = vec![SearchState {
            node: start,
            time: budget,
            enabled: BitSet::EMPTY,
            accrued: 0,
        }];
        let mut best = 0u64;

        while let Some(state) = stack.pop() {
            best = best.max(state.accrued);

            // Enabling anything takes at least one travel step plus the
            // enable action, so with <= 1 time unit nothing can be added.
            if state.time <= 1 {
                continue;
            }

            let optimistic: u64 = allowed
                .iter()
                .filter(|&idx| !state.enabled.contains(idx))
                .map(|idx| self.objectives[idx].rate * u64::from(state.time - 1))
                .sum();
            if state.accrued + optimistic <= best {
                continue;
            }

            for idx in allowed.iter() {
                if state.enabled.contains(idx) {
                    continue;
                }
                let objective = self.objectives[idx];
                let Some(dist) = self.distances.get(state.node, objective.node) else {
                    continue;
                };
                if dist + 1 >= state.time {
                    continue;
                }

                let time = state.time - dist - 1;
                let next = SearchState {
                    node: objective.node,
                    time,
                    enabled: state.enabled.with(idx),
                    accrued: state.accrued + objective.rate * u64::from(time),
                };

                match memo.entry((next.node, next.time, next.enabled)) {
                    Entry::Occupied(mut seen) => {
                        if *seen.get() >= next.accrued {
                            continue;
                        }
                        seen.insert(next.accrued);
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(next.accrued);
                    }
                }
                stack.push(next);
            }
        }

        best
    }
}

/// Explicit-stack branch-and-bound over domain-specific states.
///
/// `successors` pushes the children of a state into the supplied buffer;
/// `value` is the total banked by stopping at a state; `bound` is an
/// optimistic total for the whole subtree under a state. A subtree is
/// abandoned when its bound cannot beat the running best. A visited set
/// ensures each state is expanded at most once.
pub fn branch_and_bound<S, FS, FV, FB>(
    init: S,
    mut successors: FS,
    mut value: FV,
    mut bound: FB,
) -> u64
where
    S: Eq + Hash + Clone,
    FS: FnMut(&S, &mut Vec<S>),
    FV: FnMut(&S) -> u64,
    FB: FnMut(&S) -> u64,
{
    let mut visited = FxHashSet::default();
    visited.insert(init.clone());
    let mut stack = vec![init];
    let mut buf = Vec::new();
    let mut best = 0u64;

    while let Some(state) = stack.pop() {
        best = best.max(value(&state));
        if bound(&state) <= best {
            continue;
        }

        buf.clear();
        successors(&state, &mut buf);
        for next in buf.drain(..) {
            if visited.insert(next.clone()) {
                stack.push(next);
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distances::DistanceTable;

    fn line_three() -> DistanceTable {
        // 0 - 1 - 2
        DistanceTable::from_adjacency(&[vec![1], vec![0, 2], vec![1]])
    }

    #[test]
    fn two_objective_fixture() {
        // Objective A at node 1 (enable cost 2 from start, rate 1),
        // objective B at node 2 (enable cost 3 from start, rate 3),
        // budget 10. Best order banks 26 either way:
        //   A first: 8 * 1, then B with 6 left: 18 -> 26
        //   B first: 7 * 3, then A with 5 left: 5  -> 26
        let distances = line_three();
        let objectives = [
            Objective { node: 1, rate: 1 },
            Objective { node: 2, rate: 3 },
        ];
        let search = MaxYieldSearch::new(&distances, &objectives);
        assert_eq!(search.run(0, 10, BitSet::universe(2)), 26);
    }

    #[test]
    fn empty_allowed_set_yields_nothing() {
        let distances = line_three();
        let objectives = [Objective { node: 1, rate: 5 }];
        let search = MaxYieldSearch::new(&distances, &objectives);
        assert_eq!(search.run(0, 10, BitSet::EMPTY), 0);
    }

    #[test]
    fn budget_too_small_to_enable() {
        let distances = line_three();
        let objectives = [Objective { node: 2, rate: 100 }];
        let search = MaxYieldSearch::new(&distances, &objectives);
        // Travel 2 plus enable 1 needs time 4 to yield anything.
        assert_eq!(search.run(0, 3, BitSet::universe(1)), 0);
    }

    #[test]
    fn branch_and_bound_counts_coins() {
        // States are (coins banked, picks left); each pick banks 1 or 2.
        type S = (u64, u32);
        let result = branch_and_bound(
            (0u64, 3u32),
            |&(coins, left): &S, buf: &mut Vec<S>| {
                if left > 0 {
                    buf.push((coins + 1, left - 1));
                    buf.push((coins + 2, left - 1));
                }
            },
            |&(coins, _)| coins,
            |&(coins, left)| coins + 2 * u64::from(left),
        );
        assert_eq!(result, 6);
    }
}
