//! Day 20: Grove Positioning System.

use anyhow::Context;
use aoc_runner::{Answer, InputParser, ParseError, SolveError, Solver};

const DECRYPTION_KEY: i64 = 811_589_153;
const GROVE_OFFSETS: [usize; 3] = [1000, 2000, 3000];

/// Move every value, in original file order, by its own amount around the
/// circle. Entries are (original index, value) so duplicates stay distinct.
fn mix(file: &mut Vec<(usize, i64)>, rounds: u32) {
    let len = file.len();
    if len < 2 {
        return;
    }
    for _ in 0..rounds {
        for original in 0..len {
            let pos = file
                .iter()
                .position(|&(idx, _)| idx == original)
                .unwrap();
            let entry = file.remove(pos);
            // The circle has len - 1 slots while the entry is out of it.
            let dest = (pos as i64 + entry.1).rem_euclid(len as i64 - 1) as usize;
            file.insert(dest, entry);
        }
    }
}

fn grove_coordinates(file: &[(usize, i64)]) -> i64 {
    let zero = file
        .iter()
        .position(|&(_, value)| value == 0)
        .unwrap_or(0);
    GROVE_OFFSETS
        .iter()
        .map(|offset| file[(zero + offset) % file.len()].1)
        .sum()
}

pub struct Day20;

impl InputParser for Day20 {
    type Data<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::Data<'_>, ParseError> {
        input
            .lines()
            .filter(|l| !l.is_empty())
            .map(|l| l.trim().parse::<i64>().with_context(|| format!("bad number: {l:?}")))
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl Solver for Day20 {
    const PARTS: u8 = 2;

    fn solve_part(data: &mut Self::Data<'_>, part: u8) -> Result<Answer, SolveError> {
        let (key, rounds) = if part == 1 { (1, 1) } else { (DECRYPTION_KEY, 10) };
        let mut file: Vec<(usize, i64)> = data
            .iter()
            .map(|&v| v * key)
            .enumerate()
            .collect();
        mix(&mut file, rounds);
        Ok(grove_coordinates(&file).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const SAMPLE: &str = indoc! {"
        1
        2
        -3
        3
        -2
        0
        4
    "};

    #[test]
    fn part1_sample() {
        let mut data = Day20::parse(SAMPLE).unwrap();
        assert_eq!(Day20::solve_part(&mut data, 1).unwrap(), Answer::Int(3));
    }

    #[test]
    fn part2_sample() {
        let mut data = Day20::parse(SAMPLE).unwrap();
        assert_eq!(
            Day20::solve_part(&mut data, 2).unwrap(),
            Answer::Int(1623178306)
        );
    }

    #[test]
    fn one_round_order_matches_walkthrough() {
        let mut file: Vec<(usize, i64)> =
            [1, 2, -3, 3, -2, 0, 4].iter().copied().enumerate().collect();
        mix(&mut file, 1);
        let values: Vec<i64> = file.iter().map(|&(_, v)| v).collect();
        // Rotations of the same circle are equivalent; this is the one the
        // index arithmetic produces.
        assert_eq!(values, vec![-2, 1, 2, -3, 4, 0, 3]);
    }
}
