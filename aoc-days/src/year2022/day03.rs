//! Day 3: Rucksack Reorganization.

use aoc_runner::{Answer, InputParser, ParseError, SolveError, Solver};
use rustc_hash::FxHashSet;

pub struct Day03;

fn priority(item: u8) -> Result<u64, SolveError> {
    match item {
        b'a'..=b'z' => Ok(u64::from(item - b'a') + 1),
        b'A'..=b'Z' => Ok(u64::from(item - b'A') + 27),
        other => Err(SolveError::Failed(
            anyhow::anyhow!("item {:?} has no priority", other as char).into(),
        )),
    }
}

/// The single item present in every group, or an error if the groups do not
/// share exactly one item.
fn common_item<'a, I>(groups: I) -> Result<u8, SolveError>
where
    I: IntoIterator<Item = &'a [u8]>,
{
    let mut groups = groups.into_iter();
    let mut shared: FxHashSet<u8> = groups
        .next()
        .map(|g| g.iter().copied().collect())
        .unwrap_or_default();
    for group in groups {
        let items: FxHashSet<u8> = group.iter().copied().collect();
        shared.retain(|item| items.contains(item));
    }
    if shared.len() == 1 {
        Ok(*shared.iter().next().unwrap())
    } else {
        Err(SolveError::Failed(
            anyhow::anyhow!("expected exactly one shared item, found {}", shared.len()).into(),
        ))
    }
}

impl InputParser for Day03 {
    type Data<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::Data<'_>, ParseError> {
        let lines: Vec<&str> = input.lines().filter(|l| !l.is_empty()).collect();
        if lines.iter().any(|l| !l.is_ascii()) {
            return Err(ParseError::InvalidFormat("non-ascii rucksack".into()));
        }
        Ok(lines)
    }
}

impl Solver for Day03 {
    const PARTS: u8 = 2;

    fn solve_part(data: &mut Self::Data<'_>, part: u8) -> Result<Answer, SolveError> {
        let total = if part == 1 {
            data.iter()
                .map(|line| {
                    let bytes = line.as_bytes();
                    let half = bytes.len() / 2;
                    common_item([&bytes[..half], &bytes[half..]]).and_then(priority)
                })
                .sum::<Result<u64, _>>()?
        } else {
            data.chunks(3)
                .map(|chunk| {
                    common_item(chunk.iter().map(|line| line.as_bytes())).and_then(priority)
                })
                .sum::<Result<u64, _>>()?
        };
        Ok(total.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const SAMPLE: &str = indoc! {"
        vJrwpWtwJgWrhcsFMMfFFhFp
        jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL
        PmmdzqPrVvPwwTWBwg
        wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn
        ttgJtRGJQctTZtZT
        CrZsJsPPZsGzwwsLwLmpwMDw
    "};

    #[test]
    fn part1_sample() {
        let mut data = Day03::parse(SAMPLE).unwrap();
        assert_eq!(Day03::solve_part(&mut data, 1).unwrap(), Answer::Int(157));
    }

    #[test]
    fn part2_sample() {
        let mut data = Day03::parse(SAMPLE).unwrap();
        assert_eq!(Day03::solve_part(&mut data, 2).unwrap(), Answer::Int(70));
    }
}
