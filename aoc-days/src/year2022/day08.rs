//! Day 8: Treetop Tree House.

use aoc_runner::{Answer, InputParser, ParseError, SolveError, Solver};
use aoc_search::{Grid, Vec2};
use rustc_hash::FxHashSet;

pub struct Day08;

/// Walk `line` in order, yielding every tree strictly taller than all trees
/// before it on the line.
fn scan_for_visible(
    grid: &Grid<i8>,
    line: impl Iterator<Item = Vec2>,
    visible: &mut FxHashSet<Vec2>,
) {
    let mut max_height = -1i8;
    for pos in line {
        let height = grid[pos];
        if height > max_height {
            max_height = height;
            visible.insert(pos);
        }
    }
}

impl InputParser for Day08 {
    type Data<'a> = Grid<i8>;

    fn parse(input: &str) -> Result<Self::Data<'_>, ParseError> {
        let rows = input
            .lines()
            .filter(|l| !l.is_empty())
            .map(|line| {
                line.bytes()
                    .map(|b| match b {
                        b'0'..=b'9' => Ok((b - b'0') as i8),
                        _ => Err(ParseError::InvalidFormat(format!("bad height: {line:?}"))),
                    })
                    .collect()
            })
            .collect::<Result<Vec<Vec<i8>>, _>>()?;
        Grid::from_rows(rows).ok_or_else(|| ParseError::InvalidFormat("ragged grid".into()))
    }
}

impl Solver for Day08 {
    const PARTS: u8 = 1;

    fn solve_part(data: &mut Self::Data<'_>, _part: u8) -> Result<Answer, SolveError> {
        let (width, height) = (data.width() as i64, data.height() as i64);
        let mut visible = FxHashSet::default();

        for y in 0..height {
            scan_for_visible(data, (0..width).map(|x| Vec2::new(x, y)), &mut visible);
            scan_for_visible(data, (0..width).rev().map(|x| Vec2::new(x, y)), &mut visible);
        }
        for x in 0..width {
            scan_for_visible(data, (0..height).map(|y| Vec2::new(x, y)), &mut visible);
            scan_for_visible(data, (0..height).rev().map(|y| Vec2::new(x, y)), &mut visible);
        }

        Ok(visible.len().into())
    }
}
