//! Core solver traits.

use crate::answer::Answer;
use crate::error::{ParseError, SolveError};

/// Parses raw puzzle input into the data a solver works on.
///
/// The associated `Data` type carries a lifetime so solvers can borrow from
/// the input (`&'a str` slices, for example) or own their data outright,
/// whichever fits the problem.
///
/// # Example
///
/// ```
/// use aoc_runner::{InputParser, ParseError};
///
/// struct Day1;
///
/// impl InputParser for Day1 {
///     type Data<'a> = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::Data<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
/// ```
pub trait InputParser {
    /// Parsed input plus any intermediate results shared between parts.
    type Data<'a>;

    /// Parse the input string into the shared data structure.
    fn parse<'a>(input: &'a str) -> Result<Self::Data<'a>, ParseError>;
}

/// A solver for one puzzle.
///
/// Extends [`InputParser`] with the per-part solving logic. Parts get
/// mutable access to the parsed data so part 2 can reuse work part 1 did.
///
/// # Example
///
/// ```
/// use aoc_runner::{Answer, InputParser, ParseError, SolveError, Solver};
///
/// struct Day1;
///
/// impl InputParser for Day1 {
///     type Data<'a> = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::Data<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
///
/// impl Solver for Day1 {
///     const PARTS: u8 = 2;
///
///     fn solve_part(data: &mut Self::Data<'_>, part: u8) -> Result<Answer, SolveError> {
///         match part {
///             1 => Ok(data.iter().sum::<i64>().into()),
///             _ => Ok(data.iter().product::<i64>().into()),
///         }
///     }
/// }
/// ```
pub trait Solver: InputParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part of the problem.
    ///
    /// Callers go through [`SolverExt::solve_part_checked_range`], so `part`
    /// is already within `1..=PARTS` here.
    fn solve_part(data: &mut Self::Data<'_>, part: u8) -> Result<Answer, SolveError>;
}

pub trait SolverExt: Solver {
    fn solve_part_checked_range(
        data: &mut Self::Data<'_>,
        part: u8,
    ) -> Result<Answer, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(data, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
