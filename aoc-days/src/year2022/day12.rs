//! Day 12: Hill Climbing Algorithm.

use aoc_runner::{Answer, InputParser, ParseError, SolveError, Solver};
use aoc_search::{CARDINAL, Grid, Vec2, bfs_distance};

pub struct Heightmap {
    grid: Grid<u8>,
    start: Vec2,
    end: Vec2,
}

/// Elevations run from a=0 to z=25; S sits at elevation 0, E at 25.
fn elevation(c: u8) -> Option<u8> {
    match c {
        b'S' => Some(0),
        b'E' => Some(25),
        b'a'..=b'z' => Some(c - b'a'),
        _ => None,
    }
}

pub struct Day12;

impl InputParser for Day12 {
    type Data<'a> = Heightmap;

    fn parse(input: &str) -> Result<Self::Data<'_>, ParseError> {
        let mut start = None;
        let mut end = None;
        let mut rows = Vec::new();
        for (y, line) in input.lines().filter(|l| !l.is_empty()).enumerate() {
            let mut row = Vec::with_capacity(line.len());
            for (x, c) in line.bytes().enumerate() {
                let elev = elevation(c)
                    .ok_or_else(|| ParseError::InvalidFormat(format!("bad cell: {:?}", c as char)))?;
                row.push(elev);
                match c {
                    b'S' => start = Some(Vec2::new(x as i64, y as i64)),
                    b'E' => end = Some(Vec2::new(x as i64, y as i64)),
                    _ => {}
                }
            }
            rows.push(row);
        }
        let grid =
            Grid::from_rows(rows).ok_or_else(|| ParseError::InvalidFormat("ragged grid".into()))?;
        Ok(Heightmap {
            grid,
            start: start.ok_or_else(|| ParseError::MissingData("no start cell".into()))?,
            end: end.ok_or_else(|| ParseError::MissingData("no end cell".into()))?,
        })
    }
}

/// Shortest climb distance, with unreachable mapped to -1.
fn climb<FT, FG>(grid: &Grid<u8>, start: Vec2, can_traverse: FT, is_goal: FG) -> i64
where
    FT: Fn(u8, u8) -> bool,
    FG: Fn(Vec2) -> bool,
{
    bfs_distance(
        start,
        |&pos| {
            let cur = grid[pos];
            CARDINAL
                .iter()
                .map(move |&step| pos + step)
                .filter(|&next| matches!(grid.get(next), Some(&e) if can_traverse(cur, e)))
                .collect::<Vec<_>>()
        },
        |&pos| is_goal(pos),
    )
    .map_or(-1, |d| d as i64)
}

impl Solver for Day12 {
    const PARTS: u8 = 2;

    fn solve_part(data: &mut Self::Data<'_>, part: u8) -> Result<Answer, SolveError> {
        let dist = if part == 1 {
            climb(
                &data.grid,
                data.start,
                |cur, next| next <= cur + 1,
                |pos| pos == data.end,
            )
        } else {
            // Search backwards from the summit to the nearest lowest cell.
            climb(
                &data.grid,
                data.end,
                |cur, next| cur <= next + 1,
                |pos| data.grid[pos] == 0,
            )
        };
        Ok(dist.into())
    }
}
