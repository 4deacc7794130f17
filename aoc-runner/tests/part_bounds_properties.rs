//! Property-based tests for solver part bounds validation.

use aoc_runner::{Answer, InputParser, ParseError, SolveError, Solver, SolverExt};
use proptest::prelude::*;

/// Test solver with configurable PARTS
struct TestSolver<const N: u8>;

impl<const N: u8> InputParser for TestSolver<N> {
    type Data<'a> = ();

    fn parse(_input: &str) -> Result<Self::Data<'_>, ParseError> {
        Ok(())
    }
}

impl<const N: u8> Solver for TestSolver<N> {
    const PARTS: u8 = N;

    fn solve_part(_data: &mut Self::Data<'_>, part: u8) -> Result<Answer, SolveError> {
        Ok(Answer::Int(i64::from(part)))
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// For any solver with PARTS = N, `solve_part_checked_range(part)` with
    /// part = 0 or part > N returns `PartOutOfRange(part)`; otherwise it
    /// delegates to `solve_part`.
    #[test]
    fn part_bounds_are_enforced(max_parts in 1u8..=3, part in 0u8..=255) {
        let result = match max_parts {
            1 => TestSolver::<1>::solve_part_checked_range(&mut (), part),
            2 => TestSolver::<2>::solve_part_checked_range(&mut (), part),
            _ => TestSolver::<3>::solve_part_checked_range(&mut (), part),
        };

        if part == 0 || part > max_parts {
            match result {
                Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "Expected PartOutOfRange, got {:?}", other),
            }
        } else {
            match result {
                Ok(answer) => prop_assert_eq!(answer, Answer::Int(i64::from(part))),
                other => prop_assert!(false, "Expected Ok, got {:?}", other),
            }
        }
    }
}
