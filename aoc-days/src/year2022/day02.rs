//! Day 2: Rock Paper Scissors.

use aoc_runner::{Answer, InputParser, ParseError, SolveError, Solver};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Rock,
    Paper,
    Scissors,
}

impl Shape {
    fn from_index(index: u8) -> Shape {
        match index % 3 {
            0 => Shape::Rock,
            1 => Shape::Paper,
            _ => Shape::Scissors,
        }
    }

    fn score(self) -> u64 {
        self as u64 + 1
    }

    fn beats(self, other: Shape) -> bool {
        (self as u8 + 3 - other as u8) % 3 == 1
    }

    /// The shape that produces `outcome` against `opponent`.
    fn for_outcome(opponent: Shape, outcome: Outcome) -> Shape {
        // Loss is one step behind the opponent's shape, win one ahead.
        let shift = match outcome {
            Outcome::Loss => 2,
            Outcome::Draw => 0,
            Outcome::Win => 1,
        };
        Shape::from_index(opponent as u8 + shift)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Loss,
    Draw,
    Win,
}

impl Outcome {
    fn of_round(opponent: Shape, mine: Shape) -> Outcome {
        if mine == opponent {
            Outcome::Draw
        } else if mine.beats(opponent) {
            Outcome::Win
        } else {
            Outcome::Loss
        }
    }

    fn score(self) -> u64 {
        self as u64 * 3
    }
}

pub struct Day02;

impl InputParser for Day02 {
    /// Opponent shape plus the second-column code, meaning depends on part.
    type Data<'a> = Vec<(Shape, u8)>;

    fn parse(input: &str) -> Result<Self::Data<'_>, ParseError> {
        input
            .lines()
            .map(|line| {
                let mut tokens = line.split_whitespace();
                let opponent = match tokens.next() {
                    Some("A") => Shape::Rock,
                    Some("B") => Shape::Paper,
                    Some("C") => Shape::Scissors,
                    _ => return Err(ParseError::InvalidFormat(format!("bad round: {line:?}"))),
                };
                let code = match tokens.next() {
                    Some("X") => 0,
                    Some("Y") => 1,
                    Some("Z") => 2,
                    _ => return Err(ParseError::InvalidFormat(format!("bad round: {line:?}"))),
                };
                Ok((opponent, code))
            })
            .collect()
    }
}

impl Solver for Day02 {
    const PARTS: u8 = 2;

    fn solve_part(data: &mut Self::Data<'_>, part: u8) -> Result<Answer, SolveError> {
        let total: u64 = data
            .iter()
            .map(|&(opponent, code)| {
                let (shape, outcome) = if part == 1 {
                    let shape = Shape::from_index(code);
                    (shape, Outcome::of_round(opponent, shape))
                } else {
                    let outcome = match code {
                        0 => Outcome::Loss,
                        1 => Outcome::Draw,
                        _ => Outcome::Win,
                    };
                    (Shape::for_outcome(opponent, outcome), outcome)
                };
                shape.score() + outcome.score()
            })
            .sum();
        Ok(total.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const SAMPLE: &str = indoc! {"
        A Y
        B X
        C Z
    "};

    #[test]
    fn part1_sample() {
        let mut data = Day02::parse(SAMPLE).unwrap();
        assert_eq!(Day02::solve_part(&mut data, 1).unwrap(), Answer::Int(15));
    }

    #[test]
    fn part2_sample() {
        let mut data = Day02::parse(SAMPLE).unwrap();
        assert_eq!(Day02::solve_part(&mut data, 2).unwrap(), Answer::Int(12));
    }
}
