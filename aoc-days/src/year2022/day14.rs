//! Day 14: Regolith Reservoir.

use anyhow::{Context, anyhow};
use aoc_runner::{Answer, InputParser, ParseError, SolveError, Solver};
use aoc_search::Vec2;
use rustc_hash::FxHashSet;

const SOURCE: Vec2 = Vec2::new(500, 0);

fn parse_point(s: &str) -> anyhow::Result<Vec2> {
    let (x, y) = s.split_once(',').ok_or_else(|| anyhow!("bad point: {s:?}"))?;
    Ok(Vec2::new(
        x.parse().with_context(|| format!("bad point: {s:?}"))?,
        y.parse().with_context(|| format!("bad point: {s:?}"))?,
    ))
}

fn mark_path(occupied: &mut FxHashSet<Vec2>, line: &str) -> anyhow::Result<()> {
    let mut points = line.split(" -> ").map(parse_point);
    let mut from = points
        .next()
        .ok_or_else(|| anyhow!("empty path: {line:?}"))??;
    occupied.insert(from);
    for to in points {
        let to = to?;
        if from.x == to.x {
            for y in from.y.min(to.y)..=from.y.max(to.y) {
                occupied.insert(Vec2::new(from.x, y));
            }
        } else if from.y == to.y {
            for x in from.x.min(to.x)..=from.x.max(to.x) {
                occupied.insert(Vec2::new(x, from.y));
            }
        } else {
            return Err(anyhow!("diagonal segment: {line:?}"));
        }
        from = to;
    }
    Ok(())
}

/// Drop sand from the source until it runs off the lowest rock (no floor) or
/// plugs the source (with floor). The backtrack stack resumes each new unit
/// from where the previous one branched, so the whole fill is linear in the
/// number of placed units.
fn simulate(rock: &FxHashSet<Vec2>, has_floor: bool) -> u64 {
    let max_y = rock.iter().map(|p| p.y).max().unwrap_or(0);
    let mut occupied = rock.clone();
    let mut cur = SOURCE;
    let mut num_placed = 0u64;
    let mut backtrack: Vec<Vec2> = Vec::new();

    while has_floor || cur.y < max_y {
        let below = [
            Vec2::new(cur.x, cur.y + 1),
            Vec2::new(cur.x - 1, cur.y + 1),
            Vec2::new(cur.x + 1, cur.y + 1),
        ];
        if has_floor && cur.y + 1 == max_y + 2 {
            num_placed += 1;
            occupied.insert(cur);
            match backtrack.pop() {
                Some(prev) => cur = prev,
                None => break,
            }
        } else if let Some(&next) = below.iter().find(|p| !occupied.contains(p)) {
            backtrack.push(cur);
            cur = next;
        } else {
            num_placed += 1;
            occupied.insert(cur);
            match backtrack.pop() {
                Some(prev) => cur = prev,
                None => break,
            }
        }
    }

    num_placed
}

pub struct Day14;

impl InputParser for Day14 {
    type Data<'a> = FxHashSet<Vec2>;

    fn parse(input: &str) -> Result<Self::Data<'_>, ParseError> {
        let mut occupied = FxHashSet::default();
        for line in input.lines().filter(|l| !l.is_empty()) {
            mark_path(&mut occupied, line)
                .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        }
        if occupied.is_empty() {
            return Err(ParseError::MissingData("no rock paths".into()));
        }
        Ok(occupied)
    }
}

impl Solver for Day14 {
    const PARTS: u8 = 2;

    fn solve_part(data: &mut Self::Data<'_>, part: u8) -> Result<Answer, SolveError> {
        Ok(simulate(data, part == 2).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const SAMPLE: &str = indoc! {"
        498,4 -> 498,6 -> 496,6
        503,4 -> 502,4 -> 502,9 -> 494,9
    "};

    #[test]
    fn part1_sample() {
        let mut data = Day14::parse(SAMPLE).unwrap();
        assert_eq!(Day14::solve_part(&mut data, 1).unwrap(), Answer::Int(24));
    }

    #[test]
    fn part2_sample() {
        let mut data = Day14::parse(SAMPLE).unwrap();
        assert_eq!(Day14::solve_part(&mut data, 2).unwrap(), Answer::Int(93));
    }
}
