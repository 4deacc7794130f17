//! Day 9: Rope Bridge.

use anyhow::{Context, anyhow};
use aoc_runner::{Answer, InputParser, ParseError, SolveError, Solver};
use aoc_search::Vec2;
use rustc_hash::FxHashSet;

#[derive(Debug, Clone, Copy)]
pub struct Move {
    direction: Vec2,
    steps: u32,
}

fn parse_move(line: &str) -> anyhow::Result<Move> {
    let (dir, steps) = line
        .split_once(' ')
        .ok_or_else(|| anyhow!("bad move: {line:?}"))?;
    let direction = match dir {
        "U" => Vec2::new(0, -1),
        "D" => Vec2::new(0, 1),
        "L" => Vec2::new(-1, 0),
        "R" => Vec2::new(1, 0),
        _ => return Err(anyhow!("bad direction: {dir:?}")),
    };
    Ok(Move {
        direction,
        steps: steps.parse().with_context(|| format!("bad move: {line:?}"))?,
    })
}

/// Move the head one step and let each knot chase the one ahead of it.
fn do_step(rope: &mut [Vec2], direction: Vec2) {
    rope[0] += direction;
    for i in 1..rope.len() {
        let gap = rope[i - 1] - rope[i];
        if gap.chebyshev() <= 1 {
            // This knot stays put, so every following knot does too.
            break;
        }
        rope[i] += Vec2::new(gap.x.clamp(-1, 1), gap.y.clamp(-1, 1));
    }
}

/// Number of positions the tail of a `length`-knot rope visits.
fn simulate(moves: &[Move], length: usize) -> usize {
    let mut rope = vec![Vec2::default(); length];
    let mut tail_positions = FxHashSet::default();
    tail_positions.insert(rope[length - 1]);
    for mv in moves {
        for _ in 0..mv.steps {
            do_step(&mut rope, mv.direction);
            tail_positions.insert(rope[length - 1]);
        }
    }
    tail_positions.len()
}

pub struct Day09;

impl InputParser for Day09 {
    type Data<'a> = Vec<Move>;

    fn parse(input: &str) -> Result<Self::Data<'_>, ParseError> {
        input
            .lines()
            .filter(|l| !l.is_empty())
            .map(parse_move)
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl Solver for Day09 {
    const PARTS: u8 = 2;

    fn solve_part(data: &mut Self::Data<'_>, part: u8) -> Result<Answer, SolveError> {
        let length = if part == 1 { 2 } else { 10 };
        Ok(simulate(data, length).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const SAMPLE: &str = indoc! {"
        R 4
        U 4
        L 3
        D 1
        R 4
        D 1
        L 5
        R 2
    "};

    const LARGER_SAMPLE: &str = indoc! {"
        R 5
        U 8
        L 8
        D 3
        R 17
        D 10
        L 25
        U 20
    "};

    #[test]
    fn part1_sample() {
        let mut data = Day09::parse(SAMPLE).unwrap();
        assert_eq!(Day09::solve_part(&mut data, 1).unwrap(), Answer::Int(13));
    }

    #[test]
    fn part2_samples() {
        let mut data = Day09::parse(SAMPLE).unwrap();
        assert_eq!(Day09::solve_part(&mut data, 2).unwrap(), Answer::Int(1));

        let mut data = Day09::parse(LARGER_SAMPLE).unwrap();
        assert_eq!(Day09::solve_part(&mut data, 2).unwrap(), Answer::Int(36));
    }
}
