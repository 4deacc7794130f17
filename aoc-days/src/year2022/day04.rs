//! Day 4: Camp Cleanup.

use anyhow::{Context, anyhow};
use aoc_runner::{Answer, InputParser, ParseError, SolveError, Solver};

#[derive(Debug, Clone, Copy)]
pub struct SectionRange {
    lower: u32,
    upper: u32,
}

impl SectionRange {
    fn size(self) -> u32 {
        self.upper - self.lower
    }

    fn contains(self, other: SectionRange) -> bool {
        self.lower <= other.lower && other.upper <= self.upper
    }

    fn overlaps(self, other: SectionRange) -> bool {
        let (first, second) = if self.lower <= other.lower {
            (self, other)
        } else {
            (other, self)
        };
        first.upper >= second.lower
    }
}

fn parse_range(s: &str) -> anyhow::Result<SectionRange> {
    let (lower, upper) = s
        .split_once('-')
        .ok_or_else(|| anyhow!("bad range: {s:?}"))?;
    Ok(SectionRange {
        lower: lower.parse().with_context(|| format!("bad bound: {lower:?}"))?,
        upper: upper.parse().with_context(|| format!("bad bound: {upper:?}"))?,
    })
}

pub struct Day04;

impl InputParser for Day04 {
    type Data<'a> = Vec<(SectionRange, SectionRange)>;

    fn parse(input: &str) -> Result<Self::Data<'_>, ParseError> {
        input
            .lines()
            .map(|line| {
                let (first, second) = line
                    .split_once(',')
                    .ok_or_else(|| anyhow!("bad pair: {line:?}"))?;
                Ok((parse_range(first)?, parse_range(second)?))
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl Solver for Day04 {
    const PARTS: u8 = 2;

    fn solve_part(data: &mut Self::Data<'_>, part: u8) -> Result<Answer, SolveError> {
        let count = data
            .iter()
            .filter(|&&(a, b)| {
                if part == 1 {
                    // The larger range must contain the smaller one.
                    if a.size() >= b.size() { a.contains(b) } else { b.contains(a) }
                } else {
                    a.overlaps(b)
                }
            })
            .count();
        Ok(count.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const SAMPLE: &str = indoc! {"
        2-4,6-8
        2-3,4-5
        5-7,7-9
        2-8,3-7
        6-6,4-6
        2-6,4-8
    "};

    #[test]
    fn part1_sample() {
        let mut data = Day04::parse(SAMPLE).unwrap();
        assert_eq!(Day04::solve_part(&mut data, 1).unwrap(), Answer::Int(2));
    }

    #[test]
    fn part2_sample() {
        let mut data = Day04::parse(SAMPLE).unwrap();
        assert_eq!(Day04::solve_part(&mut data, 2).unwrap(), Answer::Int(4));
    }
}
