//! Day 25: Full of Hot Air.

use anyhow::bail;
use aoc_runner::{Answer, InputParser, ParseError, SolveError, Solver};

const BASE: i64 = 5;

fn decode_digit(c: char) -> anyhow::Result<i64> {
    match c {
        '0'..='2' => Ok(c as i64 - '0' as i64),
        '-' => Ok(-1),
        '=' => Ok(-2),
        _ => bail!("bad snafu digit: {c:?}"),
    }
}

fn from_snafu(s: &str) -> anyhow::Result<i64> {
    s.chars()
        .try_fold(0, |acc, c| Ok(acc * BASE + decode_digit(c)?))
}

/// Balanced base five: digits above 2 borrow from the next place.
fn to_snafu(mut value: i64) -> String {
    let mut digits = Vec::new();
    while value > 0 {
        let rem = value % BASE;
        value /= BASE;
        digits.push(match rem {
            3 => {
                value += 1;
                '='
            }
            4 => {
                value += 1;
                '-'
            }
            _ => char::from_digit(rem as u32, 10).unwrap_or('0'),
        });
    }
    if digits.is_empty() {
        digits.push('0');
    }
    digits.iter().rev().collect()
}

pub struct Day25;

impl InputParser for Day25 {
    type Data<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::Data<'_>, ParseError> {
        input
            .lines()
            .filter(|l| !l.is_empty())
            .map(from_snafu)
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl Solver for Day25 {
    const PARTS: u8 = 1;

    fn solve_part(data: &mut Self::Data<'_>, _part: u8) -> Result<Answer, SolveError> {
        Ok(to_snafu(data.iter().sum()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const SAMPLE: &str = indoc! {"
        1=-0-2
        12111
        2=0=
        21
        2=01
        111
        20012
        112
        1=-1=
        1-12
        12
        1=
        122
    "};

    #[test]
    fn part1_sample() {
        let mut data = Day25::parse(SAMPLE).unwrap();
        assert_eq!(
            Day25::solve_part(&mut data, 1).unwrap(),
            Answer::Text("2=-1=0".into())
        );
    }

    #[test]
    fn decodes_known_values() {
        assert_eq!(from_snafu("1=-0-2").unwrap(), 1747);
        assert_eq!(from_snafu("2=0=").unwrap(), 198);
        assert_eq!(from_snafu("1=11-2").unwrap(), 2022);
    }

    #[test]
    fn encodes_known_values() {
        assert_eq!(to_snafu(0), "0");
        assert_eq!(to_snafu(3), "1=");
        assert_eq!(to_snafu(2022), "1=11-2");
        assert_eq!(to_snafu(314159265), "1121-1110-1=0");
    }
}
