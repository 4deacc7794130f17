//! Day 1: Calorie Counting.

use anyhow::Context;
use aoc_runner::{Answer, InputParser, ParseError, SolveError, Solver};

pub struct Day01;

impl InputParser for Day01 {
    /// Total calories carried per elf.
    type Data<'a> = Vec<u64>;

    fn parse(input: &str) -> Result<Self::Data<'_>, ParseError> {
        input
            .split("\n\n")
            .map(|group| {
                group
                    .lines()
                    .filter(|line| !line.is_empty())
                    .map(|line| {
                        line.parse::<u64>()
                            .with_context(|| format!("bad calorie count: {line:?}"))
                    })
                    .sum()
            })
            .collect::<Result<Vec<u64>, anyhow::Error>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl Solver for Day01 {
    const PARTS: u8 = 1;

    fn solve_part(data: &mut Self::Data<'_>, _part: u8) -> Result<Answer, SolveError> {
        Ok(data.iter().copied().max().unwrap_or(0).into())
    }
}
