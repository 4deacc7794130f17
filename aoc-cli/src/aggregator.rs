//! Ordered streaming of parallel solver results
//!
//! Workers finish in arbitrary order but output should read year/day/part
//! ascending. Two min-heaps do the buffering: one of keys still expected,
//! one of results that arrived early.

use crate::executor::SolverResult;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Ordering key for results, ascending by year, then day, then part
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy)]
pub struct ResultKey {
    pub year: u16,
    pub day: u8,
    pub part: u8,
}

impl From<&SolverResult> for ResultKey {
    fn from(r: &SolverResult) -> Self {
        Self {
            year: r.year,
            day: r.day,
            part: r.part,
        }
    }
}

/// Min-heap wrapper ordering results by key
struct OrderedResult(SolverResult);

impl Ord for OrderedResult {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed so the smallest key sits on top of the heap
        ResultKey::from(&other.0).cmp(&ResultKey::from(&self.0))
    }
}

impl PartialOrd for OrderedResult {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for OrderedResult {}

impl PartialEq for OrderedResult {
    fn eq(&self, other: &Self) -> bool {
        ResultKey::from(&self.0) == ResultKey::from(&other.0)
    }
}

/// Buffers out-of-order results and releases them in sorted order
pub struct ResultAggregator {
    expected: BinaryHeap<Reverse<ResultKey>>,
    pending: BinaryHeap<OrderedResult>,
}

impl ResultAggregator {
    pub fn new(expected_keys: Vec<ResultKey>) -> Self {
        Self {
            expected: expected_keys.into_iter().map(Reverse).collect(),
            pending: BinaryHeap::new(),
        }
    }

    /// Add a result; returns every result now ready to print, in order
    pub fn add(&mut self, result: SolverResult) -> Vec<SolverResult> {
        self.pending.push(OrderedResult(result));

        let mut ready = Vec::new();
        while let (Some(Reverse(next_expected)), Some(top_pending)) =
            (self.expected.peek(), self.pending.peek())
        {
            if ResultKey::from(&top_pending.0) != *next_expected {
                break;
            }
            self.expected.pop();
            ready.push(self.pending.pop().unwrap().0);
        }
        ready
    }

    /// Drain whatever is still buffered, in order. Nonempty only if some
    /// expected result never arrived.
    pub fn drain(&mut self) -> Vec<SolverResult> {
        let mut results: Vec<_> = self.pending.drain().map(|o| o.0).collect();
        results.sort_by_key(|r| ResultKey::from(r));
        results
    }

    /// Whether every expected result has been released
    pub fn is_complete(&self) -> bool {
        self.expected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_runner::Answer;
    use chrono::TimeDelta;

    fn key(year: u16, day: u8, part: u8) -> ResultKey {
        ResultKey { year, day, part }
    }

    fn result(year: u16, day: u8, part: u8) -> SolverResult {
        SolverResult {
            year,
            day,
            part,
            answer: Ok(Answer::Int(i64::from(day) * i64::from(part))),
            solve_duration: TimeDelta::milliseconds(10),
            parse_duration: None,
        }
    }

    #[test]
    fn in_order_results_pass_straight_through() {
        let mut agg = ResultAggregator::new(vec![key(2022, 1, 1), key(2022, 1, 2)]);

        let ready = agg.add(result(2022, 1, 1));
        assert_eq!(ready.len(), 1);
        assert_eq!(ready[0].part, 1);

        let ready = agg.add(result(2022, 1, 2));
        assert_eq!(ready.len(), 1);
        assert_eq!(ready[0].part, 2);

        assert!(agg.is_complete());
    }

    #[test]
    fn out_of_order_results_are_held_back() {
        let mut agg =
            ResultAggregator::new(vec![key(2022, 1, 1), key(2022, 1, 2), key(2022, 2, 1)]);

        assert!(agg.add(result(2022, 1, 2)).is_empty());
        assert!(agg.add(result(2022, 2, 1)).is_empty());

        // The missing head releases everything at once, sorted
        let ready = agg.add(result(2022, 1, 1));
        let keys: Vec<_> = ready.iter().map(ResultKey::from).collect();
        assert_eq!(keys, vec![key(2022, 1, 1), key(2022, 1, 2), key(2022, 2, 1)]);
        assert!(agg.is_complete());
    }

    #[test]
    fn drain_returns_orphaned_results() {
        let mut agg = ResultAggregator::new(vec![key(2022, 1, 1), key(2022, 1, 2)]);

        agg.add(result(2022, 1, 2));

        let remaining = agg.drain();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].part, 2);
        assert!(!agg.is_complete());
    }

    #[test]
    fn drain_sorts_whatever_is_left() {
        let mut agg = ResultAggregator::new(vec![
            key(2022, 1, 1),
            key(2022, 2, 1),
            key(2022, 2, 2),
            key(2022, 3, 1),
        ]);

        agg.add(result(2022, 3, 1));
        agg.add(result(2022, 2, 2));
        agg.add(result(2022, 2, 1));

        let keys: Vec<_> = agg.drain().iter().map(ResultKey::from).collect();
        assert_eq!(keys, vec![key(2022, 2, 1), key(2022, 2, 2), key(2022, 3, 1)]);
    }
}
