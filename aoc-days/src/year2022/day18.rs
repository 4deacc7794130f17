//! Day 18: Boiling Boulders.

use anyhow::{Context, anyhow};
use aoc_runner::{Answer, InputParser, ParseError, SolveError, Solver};
use aoc_search::flood_fill;
use rustc_hash::FxHashSet;

type Point = (i32, i32, i32);

const NEIGHBORS: [Point; 6] = [
    (-1, 0, 0),
    (1, 0, 0),
    (0, -1, 0),
    (0, 1, 0),
    (0, 0, -1),
    (0, 0, 1),
];

fn parse_point(line: &str) -> anyhow::Result<Point> {
    let mut parts = line.split(',').map(|s| {
        s.trim()
            .parse::<i32>()
            .with_context(|| format!("bad cube: {line:?}"))
    });
    let mut next = || parts.next().ok_or_else(|| anyhow!("bad cube: {line:?}"))?;
    let point = (next()?, next()?, next()?);
    if parts.next().is_some() {
        return Err(anyhow!("bad cube: {line:?}"));
    }
    Ok(point)
}

/// Total face count where each shared face cancels: adding a cube flips each
/// of its six faces, so faces touched twice end up internal.
fn surface_area(points: &FxHashSet<Point>) -> usize {
    // A face is identified by its lower-corner cell and axis.
    let mut is_surface: FxHashSet<(Point, u8)> = FxHashSet::default();
    for &(x, y, z) in points {
        for face in [
            ((x, y, z), 0),
            ((x + 1, y, z), 0),
            ((x, y, z), 1),
            ((x, y + 1, z), 1),
            ((x, y, z), 2),
            ((x, y, z + 1), 2),
        ] {
            if !is_surface.insert(face) {
                is_surface.remove(&face);
            }
        }
    }
    is_surface.len()
}

/// Faces reachable from outside: flood the bounding box around the droplet
/// and count every collision with a lava cube along the way.
fn exterior_area(points: &FxHashSet<Point>) -> u64 {
    let min = |f: fn(&Point) -> i32| points.iter().map(f).min().unwrap_or(0);
    let max = |f: fn(&Point) -> i32| points.iter().map(f).max().unwrap_or(0);
    let (x_min, x_max) = (min(|p| p.0), max(|p| p.0));
    let (y_min, y_max) = (min(|p| p.1), max(|p| p.1));
    let (z_min, z_max) = (min(|p| p.2), max(|p| p.2));

    let start = (x_min - 1, y_min - 1, z_min - 1);
    let mut num_faces = 0u64;
    flood_fill(start, |&(x, y, z): &Point| {
        let mut next = Vec::new();
        for (dx, dy, dz) in NEIGHBORS {
            let p = (x + dx, y + dy, z + dz);
            if !(x_min - 1..=x_max + 1).contains(&p.0)
                || !(y_min - 1..=y_max + 1).contains(&p.1)
                || !(z_min - 1..=z_max + 1).contains(&p.2)
            {
                continue;
            }
            if points.contains(&p) {
                num_faces += 1;
            } else {
                next.push(p);
            }
        }
        next
    });
    num_faces
}

pub struct Day18;

impl InputParser for Day18 {
    type Data<'a> = FxHashSet<Point>;

    fn parse(input: &str) -> Result<Self::Data<'_>, ParseError> {
        input
            .lines()
            .filter(|l| !l.is_empty())
            .map(parse_point)
            .collect::<anyhow::Result<FxHashSet<_>>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl Solver for Day18 {
    const PARTS: u8 = 2;

    fn solve_part(data: &mut Self::Data<'_>, part: u8) -> Result<Answer, SolveError> {
        if part == 1 {
            Ok(surface_area(data).into())
        } else {
            Ok(exterior_area(data).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const SAMPLE: &str = indoc! {"
        2,2,2
        1,2,2
        3,2,2
        2,1,2
        2,3,2
        2,2,1
        2,2,3
        2,2,4
        2,2,6
        1,2,5
        3,2,5
        2,1,5
        2,3,5
    "};

    #[test]
    fn two_touching_cubes() {
        let mut data = Day18::parse("1,1,1\n2,1,1").unwrap();
        assert_eq!(Day18::solve_part(&mut data, 1).unwrap(), Answer::Int(10));
    }

    #[test]
    fn part1_sample() {
        let mut data = Day18::parse(SAMPLE).unwrap();
        assert_eq!(Day18::solve_part(&mut data, 1).unwrap(), Answer::Int(64));
    }

    #[test]
    fn part2_sample() {
        let mut data = Day18::parse(SAMPLE).unwrap();
        assert_eq!(Day18::solve_part(&mut data, 2).unwrap(), Answer::Int(58));
    }
}
