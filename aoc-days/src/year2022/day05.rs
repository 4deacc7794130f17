//! Day 5: Supply Stacks.

use anyhow::{Context, anyhow};
use aoc_runner::{Answer, InputParser, ParseError, SolveError, Solver};

#[derive(Debug, Clone, Copy)]
pub struct Move {
    count: usize,
    src: usize,
    dest: usize,
}

/// Crate stacks (bottom first) plus the rearrangement procedure.
#[derive(Debug, Clone)]
pub struct Crates {
    stacks: Vec<Vec<u8>>,
    moves: Vec<Move>,
}

fn parse_drawing(drawing: &str) -> Vec<Vec<u8>> {
    let mut stacks: Vec<Vec<u8>> = Vec::new();
    for line in drawing.lines().rev() {
        let bytes = line.as_bytes();
        let mut i = 0;
        while let Some(open) = bytes[i..].iter().position(|&b| b == b'[') {
            let at = i + open;
            let stack = at / 4;
            while stack >= stacks.len() {
                stacks.push(Vec::new());
            }
            stacks[stack].push(bytes[at + 1]);
            i = at + 2;
        }
    }
    stacks
}

fn parse_move(line: &str) -> anyhow::Result<Move> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 6 {
        return Err(anyhow!("bad move: {line:?}"));
    }
    let field = |i: usize| -> anyhow::Result<usize> {
        tokens[i].parse().with_context(|| format!("bad move: {line:?}"))
    };
    Ok(Move {
        count: field(1)?,
        src: field(3)?,
        dest: field(5)?,
    })
}

pub struct Day05;

impl InputParser for Day05 {
    type Data<'a> = Crates;

    fn parse(input: &str) -> Result<Self::Data<'_>, ParseError> {
        let (drawing, procedure) = input
            .split_once("\n\n")
            .ok_or_else(|| ParseError::MissingData("no blank line before moves".into()))?;
        let moves = procedure
            .lines()
            .filter(|l| !l.is_empty())
            .map(parse_move)
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        Ok(Crates {
            stacks: parse_drawing(drawing),
            moves,
        })
    }
}

impl Solver for Day05 {
    const PARTS: u8 = 2;

    fn solve_part(data: &mut Self::Data<'_>, part: u8) -> Result<Answer, SolveError> {
        // Both parts replay the moves, so work on a fresh copy of the stacks.
        let mut stacks = data.stacks.clone();
        for &Move { count, src, dest } in &data.moves {
            let (src, dest) = (src - 1, dest - 1);
            if src >= stacks.len() || dest >= stacks.len() || stacks[src].len() < count {
                return Err(SolveError::Failed(
                    anyhow!("move {count} from {} to {}: no such crates", src + 1, dest + 1)
                        .into(),
                ));
            }
            let at = stacks[src].len() - count;
            let mut lifted = stacks[src].split_off(at);
            if part == 1 {
                // The crane moves one crate at a time, reversing the order.
                lifted.reverse();
            }
            stacks[dest].extend(lifted);
        }

        let tops: String = stacks
            .iter()
            .filter_map(|stack| stack.last().map(|&b| b as char))
            .collect();
        Ok(tops.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const SAMPLE: &str = indoc! {"
            [D]
        [N] [C]
        [Z] [M] [P]
         1   2   3

        move 1 from 2 to 1
        move 3 from 1 to 3
        move 2 from 2 to 1
        move 1 from 1 to 2
    "};

    #[test]
    fn part1_sample() {
        let mut data = Day05::parse(SAMPLE).unwrap();
        assert_eq!(
            Day05::solve_part(&mut data, 1).unwrap(),
            Answer::Text("CMZ".into())
        );
    }

    #[test]
    fn part2_sample() {
        let mut data = Day05::parse(SAMPLE).unwrap();
        assert_eq!(
            Day05::solve_part(&mut data, 2).unwrap(),
            Answer::Text("MCD".into())
        );
    }

    #[test]
    fn parts_leave_parsed_data_untouched() {
        let mut data = Day05::parse(SAMPLE).unwrap();
        Day05::solve_part(&mut data, 1).unwrap();
        assert_eq!(
            Day05::solve_part(&mut data, 1).unwrap(),
            Answer::Text("CMZ".into())
        );
    }
}
